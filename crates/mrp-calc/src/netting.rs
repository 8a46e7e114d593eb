//! 淨需求與物料可用性檢查

use mrp_core::{
    AvailabilityReport, CatalogProvider, EngineConfig, MaterialAvailability, Product, Result,
};

use crate::explosion::ExplosionCalculator;
use crate::traversal::resolve_product;

/// 淨需求計算器
pub struct NettingCalculator;

impl NettingCalculator {
    /// 淨需求 = 需求 - 現有庫存（不足 0 時為 0）
    pub fn net_requirement(product: &Product, required_quantity: u64) -> u64 {
        product.shortfall(required_quantity)
    }

    /// 檢查生產指定數量所需的物料是否足夠
    ///
    /// 展開一次需求後逐一查詢庫存。展開後才被刪除的物料在寬鬆模式下略過。
    pub fn check_availability<P: CatalogProvider + ?Sized>(
        provider: &P,
        config: &EngineConfig,
        product_id: &str,
        quantity: u64,
    ) -> Result<AvailabilityReport> {
        let requirements = ExplosionCalculator::explode(provider, config, product_id, quantity)?;

        let mut report = AvailabilityReport::new();
        for (material_id, required_quantity) in requirements.iter() {
            let Some(material) = resolve_product(provider, config, material_id)? else {
                continue;
            };

            let availability = MaterialAvailability::new(&material, required_quantity);
            if !availability.sufficient {
                tracing::debug!(
                    "物料 {} 缺料：需求 {}, 可用 {}, 缺 {}",
                    material.code,
                    availability.required_quantity,
                    availability.available_quantity,
                    availability.shortage
                );
            }
            report.insert(availability);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assembly, bike_catalog, component, edge};
    use mrp_core::{BomEdge, InMemoryCatalog, MrpError, Product};
    use std::cell::RefCell;

    fn single_component_catalog(stock: u64) -> InMemoryCatalog {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_product(assembly("ASSY")).unwrap();
        catalog.add_product(component("COMP", stock)).unwrap();
        catalog.add_bom_edge(edge("ASSY", "COMP", "5", 1)).unwrap();
        catalog
    }

    #[test]
    fn test_sufficient_stock() {
        let catalog = single_component_catalog(100);

        let report =
            NettingCalculator::check_availability(&catalog, &EngineConfig::default(), "ASSY", 10)
                .unwrap();

        let comp = report.get("COMP").unwrap();
        assert_eq!(comp.required_quantity, 50);
        assert_eq!(comp.available_quantity, 100);
        assert_eq!(comp.shortage, 0);
        assert!(comp.sufficient);
    }

    #[test]
    fn test_insufficient_stock() {
        let catalog = single_component_catalog(20);

        let report =
            NettingCalculator::check_availability(&catalog, &EngineConfig::default(), "ASSY", 10)
                .unwrap();

        let comp = report.get("COMP").unwrap();
        assert_eq!(comp.required_quantity, 50);
        assert_eq!(comp.available_quantity, 20);
        assert_eq!(comp.shortage, 30);
        assert!(!comp.sufficient);
    }

    #[test]
    fn test_report_includes_assembly_itself() {
        let catalog = bike_catalog();

        let report =
            NettingCalculator::check_availability(&catalog, &EngineConfig::default(), "BIKE", 10)
                .unwrap();

        assert_eq!(report.len(), 4);
        assert_eq!(report.get("BIKE").map(|a| a.shortage), Some(10));
        assert_eq!(report.get("FRAME").map(|a| a.shortage), Some(5));
        assert_eq!(report.get("WHEEL").map(|a| a.shortage), Some(5));
        assert_eq!(report.get("CHAIN").map(|a| a.shortage), Some(2));

        for availability in report.iter() {
            assert_eq!(
                availability.shortage,
                availability
                    .required_quantity
                    .saturating_sub(availability.available_quantity)
            );
            assert_eq!(availability.sufficient, availability.shortage == 0);
        }
    }

    /// 第二次查詢時物料已被刪除的提供者
    struct VanishingCatalog {
        inner: InMemoryCatalog,
        lookups: RefCell<u32>,
    }

    impl CatalogProvider for VanishingCatalog {
        fn product(&self, product_id: &str) -> Result<Option<Product>> {
            if product_id == "COMP" {
                let mut lookups = self.lookups.borrow_mut();
                *lookups += 1;
                if *lookups > 1 {
                    return Ok(None);
                }
            }
            self.inner.product(product_id)
        }

        fn bom_children(&self, parent_id: &str) -> Result<Vec<BomEdge>> {
            self.inner.bom_children(parent_id)
        }
    }

    #[test]
    fn test_product_deleted_between_explosion_and_lookup() {
        let provider = VanishingCatalog {
            inner: single_component_catalog(0),
            lookups: RefCell::new(0),
        };

        let report =
            NettingCalculator::check_availability(&provider, &EngineConfig::default(), "ASSY", 2)
                .unwrap();
        assert_eq!(report.len(), 1);
        assert!(report.get("COMP").is_none());

        provider.lookups.replace(0);
        let config = EngineConfig::new().strict();
        let strict = NettingCalculator::check_availability(&provider, &config, "ASSY", 2);
        assert!(matches!(strict, Err(MrpError::ProductNotFound(_))));
    }

    #[test]
    fn test_net_requirement() {
        let comp = component("COMP", 10);

        assert_eq!(NettingCalculator::net_requirement(&comp, 50), 40);
        assert_eq!(NettingCalculator::net_requirement(&comp, 10), 0);
        assert_eq!(NettingCalculator::net_requirement(&comp, 3), 0);
    }
}
