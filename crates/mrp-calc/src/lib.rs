//! # MRP Calculation Engine
//!
//! 核心 MRP 計算引擎：需求展開、提前期、可用性檢查與採購建議

pub mod calculator;
pub mod explosion;
pub mod lead_time;
pub mod netting;
pub mod purchasing;
mod traversal;

// Re-export 主要類型
pub use calculator::MrpCalculator;
pub use explosion::ExplosionCalculator;
pub use lead_time::LeadTimeCalculator;
pub use netting::NettingCalculator;
pub use purchasing::PurchaseProposalCalculator;

#[cfg(test)]
pub(crate) mod test_support {
    use std::str::FromStr;

    use mrp_core::{BomEdge, InMemoryCatalog, Product};
    use rust_decimal::Decimal;

    pub fn days(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    pub fn component(id: &str, stock: u64) -> Product {
        Product::new(id, id, format!("{} 零件", id)).with_stock_quantity(stock)
    }

    pub fn assembly(id: &str) -> Product {
        Product::new(id, id, format!("{} 組合件", id)).as_assembly()
    }

    pub fn edge(parent: &str, child: &str, quantity: &str, sequence: i32) -> BomEdge {
        BomEdge::new(parent, child, days(quantity)).with_sequence(sequence)
    }

    /// BIKE → FRAME ×1, WHEEL ×2, CHAIN ×1
    pub fn bike_catalog() -> InMemoryCatalog {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_product(assembly("BIKE").as_non_purchase()).unwrap();
        catalog
            .add_product(component("FRAME", 5).with_lead_times(Decimal::from(10), Decimal::ZERO))
            .unwrap();
        catalog
            .add_product(component("WHEEL", 15).with_lead_times(Decimal::from(7), Decimal::ZERO))
            .unwrap();
        catalog
            .add_product(component("CHAIN", 8).with_lead_times(Decimal::from(5), Decimal::ZERO))
            .unwrap();
        catalog.add_bom_edge(edge("BIKE", "FRAME", "1", 1)).unwrap();
        catalog.add_bom_edge(edge("BIKE", "WHEEL", "2", 2)).unwrap();
        catalog.add_bom_edge(edge("BIKE", "CHAIN", "1", 3)).unwrap();
        catalog
    }
}
