//! # MRP
//!
//! 物料需求規劃引擎：BOM 需求展開、提前期計算、物料可用性檢查與採購建議。
//!
//! ```
//! use mrp::{BomEdge, InMemoryCatalog, MrpCalculator, Product};
//! use rust_decimal::Decimal;
//!
//! let mut catalog = InMemoryCatalog::new();
//! catalog.add_product(Product::new("TABLE", "TABLE", "桌子").as_assembly())?;
//! catalog.add_product(Product::new("LEG", "LEG", "桌腳").with_stock_quantity(10))?;
//! catalog.add_bom_edge(BomEdge::new("TABLE", "LEG", Decimal::from(4)))?;
//!
//! let calculator = MrpCalculator::new(catalog);
//! let requirements = calculator.explode("TABLE", 5)?;
//! assert_eq!(requirements.get("LEG"), Some(20));
//!
//! let report = calculator.check_availability("TABLE", 5)?;
//! assert_eq!(report.get("LEG").map(|a| a.shortage), Some(10));
//! # Ok::<(), mrp::MrpError>(())
//! ```

pub mod logging;

pub use mrp_calc::{
    ExplosionCalculator, LeadTimeCalculator, MrpCalculator, NettingCalculator,
    PurchaseProposalCalculator,
};
pub use mrp_core::{
    AvailabilityReport, BomEdge, CatalogProvider, EngineConfig, InMemoryCatalog,
    MaterialAvailability, MissingProductPolicy, MrpError, Product, ProposalStatus,
    PurchaseOrderProposal, RequirementMap, Result,
};
