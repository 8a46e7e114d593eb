//! 採購建議產生

use chrono::{DateTime, Days, Local, Utc};

use mrp_core::{CatalogProvider, EngineConfig, MrpError, PurchaseOrderProposal, Result};

use crate::explosion::ExplosionCalculator;
use crate::lead_time::LeadTimeCalculator;
use crate::netting::NettingCalculator;
use crate::traversal::resolve_product;

/// 採購建議計算器
pub struct PurchaseProposalCalculator;

impl PurchaseProposalCalculator {
    /// 依需求展開結果產生採購建議
    ///
    /// 略過不採購物料與庫存足夠的物料；淨需求的提前期一律以全數重新採購計算
    /// （`exclude_stock = true`），截斷為整數天後加到當日。
    /// 建議依需求表的登錄順序排列。
    pub fn propose<P: CatalogProvider + ?Sized>(
        provider: &P,
        config: &EngineConfig,
        product_id: &str,
        quantity: u64,
        now: DateTime<Local>,
    ) -> Result<Vec<PurchaseOrderProposal>> {
        let requirements = ExplosionCalculator::explode(provider, config, product_id, quantity)?;

        let today = now.date_naive();
        let generated_at = now.with_timezone(&Utc);
        let reference = format!(
            "{}-{}-{}",
            config.reference_prefix,
            product_id,
            now.timestamp_millis()
        );

        let mut proposals = Vec::new();
        for (material_id, required_quantity) in requirements.iter() {
            let Some(material) = resolve_product(provider, config, material_id)? else {
                continue;
            };

            if material.non_purchase {
                tracing::debug!("物料 {} 不採購，跳過", material.code);
                continue;
            }

            let net_requirement = NettingCalculator::net_requirement(&material, required_quantity);
            if net_requirement == 0 {
                continue;
            }

            let lead_time = LeadTimeCalculator::critical_path_lead_time(
                provider,
                config,
                material_id,
                net_requirement,
                true,
            )?;
            let lead_time_days = LeadTimeCalculator::whole_days(lead_time)?;
            let expected_delivery_date = today
                .checked_add_days(Days::new(lead_time_days))
                .ok_or_else(|| {
                    MrpError::InvalidDate(format!("{} + {} 天", today, lead_time_days))
                })?;

            tracing::debug!(
                "採購建議: {} 數量 {}，提前期 {} 天，預計到貨 {}",
                material.code,
                net_requirement,
                lead_time,
                expected_delivery_date
            );

            proposals.push(PurchaseOrderProposal::new(
                material_id.to_string(),
                net_requirement,
                today,
                expected_delivery_date,
                lead_time,
                reference.clone(),
                generated_at,
            ));
        }

        Ok(proposals)
    }
}
