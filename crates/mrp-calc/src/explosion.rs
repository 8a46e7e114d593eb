//! BOM 需求展開

use mrp_core::{CatalogProvider, EngineConfig, MrpError, RequirementMap, Result};

use crate::traversal::{resolve_product, sorted_children, BomPath};

/// 需求展開計算器
pub struct ExplosionCalculator;

impl ExplosionCalculator {
    /// 將根物料需求展開為所有物料的總需求
    ///
    /// 每個經過的物料（包含根物料與中間組合件）都會登錄自己的數量，
    /// 組合件再依 BOM 遞迴展開子件，共用子件跨分支累加。
    pub fn explode<P: CatalogProvider + ?Sized>(
        provider: &P,
        config: &EngineConfig,
        product_id: &str,
        quantity: u64,
    ) -> Result<RequirementMap> {
        ensure_positive(product_id, quantity)?;

        let mut requirements = RequirementMap::new();
        let mut path = BomPath::new();
        Self::explode_recursive(
            provider,
            config,
            product_id,
            quantity,
            &mut path,
            &mut requirements,
        )?;

        tracing::debug!(
            "需求展開 {} × {}：{} 個物料",
            product_id,
            quantity,
            requirements.len()
        );

        Ok(requirements)
    }

    fn explode_recursive<P: CatalogProvider + ?Sized>(
        provider: &P,
        config: &EngineConfig,
        product_id: &str,
        quantity: u64,
        path: &mut BomPath,
        requirements: &mut RequirementMap,
    ) -> Result<()> {
        let Some(product) = resolve_product(provider, config, product_id)? else {
            return Ok(());
        };

        path.enter(product_id, config.max_depth)?;
        requirements.add(product_id, quantity)?;

        if product.is_assembly {
            for edge in sorted_children(provider, product_id)? {
                let child_quantity = edge.child_quantity(quantity)?;

                tracing::debug!(
                    "BOM 展開: {} → {} (數量: {})",
                    product_id,
                    edge.child_id,
                    child_quantity
                );

                Self::explode_recursive(
                    provider,
                    config,
                    &edge.child_id,
                    child_quantity,
                    path,
                    requirements,
                )?;
            }
        }

        path.leave();
        Ok(())
    }
}

/// 公開入口的需求數量必須大於 0
pub(crate) fn ensure_positive(product_id: &str, quantity: u64) -> Result<()> {
    if quantity == 0 {
        return Err(MrpError::InvalidQuantity {
            product_id: product_id.to_string(),
            quantity,
        });
    }
    Ok(())
}
