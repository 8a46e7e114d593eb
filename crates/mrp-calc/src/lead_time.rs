//! 提前期計算

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use mrp_core::{CatalogProvider, EngineConfig, MrpError, Product, Result};

use crate::explosion::ensure_positive;
use crate::traversal::{resolve_product, sorted_children, BomPath};

/// 提前期計算器
///
/// 提前期單位為天，以 `Decimal` 精確計算。
pub struct LeadTimeCalculator;

impl LeadTimeCalculator {
    /// 單一物料本身的提前期
    ///
    /// 找不到物料時（寬鬆模式）回傳 0。
    pub fn own_lead_time<P: CatalogProvider + ?Sized>(
        provider: &P,
        config: &EngineConfig,
        product_id: &str,
        quantity: u64,
        exclude_stock: bool,
    ) -> Result<Decimal> {
        ensure_positive(product_id, quantity)?;

        match resolve_product(provider, config, product_id)? {
            Some(product) => Self::node_lead_time(&product, quantity, exclude_stock),
            None => Ok(Decimal::ZERO),
        }
    }

    /// 節點提前期
    ///
    /// - `exclude_stock = true`：訂購提前期 + 數量 × 單件提前期（全數重新採購/生產）
    /// - `exclude_stock = false`：庫存足夠時為 0，否則只以缺口計算
    pub fn node_lead_time(
        product: &Product,
        quantity: u64,
        exclude_stock: bool,
    ) -> Result<Decimal> {
        let driving_quantity = if exclude_stock {
            quantity
        } else if product.covers(quantity) {
            return Ok(Decimal::ZERO);
        } else {
            product.shortfall(quantity)
        };

        product
            .item_lead_time
            .checked_mul(Decimal::from(driving_quantity))
            .and_then(|variable| product.order_lead_time.checked_add(variable))
            .ok_or_else(|| {
                MrpError::CalculationError(format!(
                    "物料 {} 提前期溢出（數量 {}）",
                    product.id, driving_quantity
                ))
            })
    }

    /// 關鍵路徑提前期
    ///
    /// 組合件 = 本身提前期 + 所有子件關鍵路徑提前期的最大值（子件可平行備料）。
    pub fn critical_path_lead_time<P: CatalogProvider + ?Sized>(
        provider: &P,
        config: &EngineConfig,
        product_id: &str,
        quantity: u64,
        exclude_stock: bool,
    ) -> Result<Decimal> {
        ensure_positive(product_id, quantity)?;

        let mut path = BomPath::new();
        Self::critical_path_recursive(
            provider,
            config,
            product_id,
            quantity,
            exclude_stock,
            &mut path,
        )
    }

    fn critical_path_recursive<P: CatalogProvider + ?Sized>(
        provider: &P,
        config: &EngineConfig,
        product_id: &str,
        quantity: u64,
        exclude_stock: bool,
        path: &mut BomPath,
    ) -> Result<Decimal> {
        let Some(product) = resolve_product(provider, config, product_id)? else {
            return Ok(Decimal::ZERO);
        };

        path.enter(product_id, config.max_depth)?;

        let mut longest_child = Decimal::ZERO;
        if product.is_assembly {
            for edge in sorted_children(provider, product_id)? {
                let child_quantity = edge.child_quantity(quantity)?;
                let child_lead_time = Self::critical_path_recursive(
                    provider,
                    config,
                    &edge.child_id,
                    child_quantity,
                    exclude_stock,
                    path,
                )?;
                longest_child = longest_child.max(child_lead_time);
            }
        }

        path.leave();

        let own = Self::node_lead_time(&product, quantity, exclude_stock)?;
        let total = own.checked_add(longest_child).ok_or_else(|| {
            MrpError::CalculationError(format!("物料 {} 關鍵路徑提前期溢出", product_id))
        })?;

        tracing::debug!(
            "提前期 {} × {}：本身 {} + 最長子件 {} = {}",
            product_id,
            quantity,
            own,
            longest_child,
            total
        );

        Ok(total)
    }

    /// 提前期轉為整數天（截斷，不四捨五入）
    pub fn whole_days(lead_time: Decimal) -> Result<u64> {
        lead_time.trunc().to_u64().ok_or_else(|| {
            MrpError::CalculationError(format!("提前期 {} 無法轉換為天數", lead_time))
        })
    }
}
