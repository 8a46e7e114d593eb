//! MRP 主計算器

use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use mrp_core::{
    AvailabilityReport, CatalogProvider, EngineConfig, PurchaseOrderProposal, RequirementMap,
    Result,
};

use crate::explosion::ExplosionCalculator;
use crate::lead_time::LeadTimeCalculator;
use crate::netting::NettingCalculator;
use crate::purchasing::PurchaseProposalCalculator;

/// MRP 計算器
///
/// 持有物料目錄提供者與引擎配置，每次呼叫都從提供者重新讀取資料，
/// 不保留任何計算狀態。
pub struct MrpCalculator<P: CatalogProvider> {
    /// 物料目錄（產品與 BOM）
    provider: P,

    /// 引擎配置
    config: EngineConfig,
}

impl<P: CatalogProvider> MrpCalculator<P> {
    /// 以預設配置創建計算器
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, EngineConfig::default())
    }

    /// 以指定配置創建計算器
    pub fn with_config(provider: P, config: EngineConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 需求展開
    pub fn explode(&self, product_id: &str, quantity: u64) -> Result<RequirementMap> {
        tracing::info!("開始需求展開：{} × {}", product_id, quantity);
        let start_time = std::time::Instant::now();

        let requirements =
            ExplosionCalculator::explode(&self.provider, &self.config, product_id, quantity)?;

        tracing::info!(
            "需求展開完成，物料 {} 項，耗時 {:?}",
            requirements.len(),
            start_time.elapsed()
        );

        Ok(requirements)
    }

    /// 物料本身的提前期（不含子件）
    pub fn own_lead_time(
        &self,
        product_id: &str,
        quantity: u64,
        exclude_stock: bool,
    ) -> Result<Decimal> {
        tracing::info!(
            "開始物料提前期計算：{} × {}（排除庫存: {}）",
            product_id,
            quantity,
            exclude_stock
        );

        let lead_time = LeadTimeCalculator::own_lead_time(
            &self.provider,
            &self.config,
            product_id,
            quantity,
            exclude_stock,
        )?;

        tracing::info!("物料 {} 本身提前期：{} 天", product_id, lead_time);
        Ok(lead_time)
    }

    /// 含子件的關鍵路徑提前期
    pub fn critical_path_lead_time(
        &self,
        product_id: &str,
        quantity: u64,
        exclude_stock: bool,
    ) -> Result<Decimal> {
        tracing::info!(
            "開始關鍵路徑提前期計算：{} × {}（排除庫存: {}）",
            product_id,
            quantity,
            exclude_stock
        );

        let lead_time = LeadTimeCalculator::critical_path_lead_time(
            &self.provider,
            &self.config,
            product_id,
            quantity,
            exclude_stock,
        )?;

        tracing::info!("關鍵路徑提前期：{} 天", lead_time);
        Ok(lead_time)
    }

    /// 物料可用性檢查
    pub fn check_availability(
        &self,
        product_id: &str,
        quantity: u64,
    ) -> Result<AvailabilityReport> {
        tracing::info!("開始物料可用性檢查：{} × {}", product_id, quantity);
        let start_time = std::time::Instant::now();

        let report = NettingCalculator::check_availability(
            &self.provider,
            &self.config,
            product_id,
            quantity,
        )?;

        tracing::info!(
            "可用性檢查完成，物料 {} 項，缺料 {} 項，耗時 {:?}",
            report.len(),
            report.shortages().count(),
            start_time.elapsed()
        );

        Ok(report)
    }

    /// 以目前時間產生採購建議
    pub fn propose_orders(
        &self,
        product_id: &str,
        quantity: u64,
    ) -> Result<Vec<PurchaseOrderProposal>> {
        self.propose_orders_at(product_id, quantity, Local::now())
    }

    /// 以指定時間產生採購建議
    pub fn propose_orders_at(
        &self,
        product_id: &str,
        quantity: u64,
        now: DateTime<Local>,
    ) -> Result<Vec<PurchaseOrderProposal>> {
        tracing::info!("開始產生採購建議：{} × {}", product_id, quantity);
        let start_time = std::time::Instant::now();

        let proposals = PurchaseProposalCalculator::propose(
            &self.provider,
            &self.config,
            product_id,
            quantity,
            now,
        )?;

        tracing::info!(
            "採購建議產生完成，共 {} 筆，耗時 {:?}",
            proposals.len(),
            start_time.elapsed()
        );

        Ok(proposals)
    }
}
