//! # MRP Core
//!
//! 核心資料模型與類型定義

pub mod availability;
pub mod bom;
pub mod catalog;
pub mod config;
pub mod plan;
pub mod product;
pub mod provider;
pub mod requirement;

// Re-export 主要類型
pub use availability::{AvailabilityReport, MaterialAvailability};
pub use bom::BomEdge;
pub use catalog::InMemoryCatalog;
pub use config::{EngineConfig, MissingProductPolicy};
pub use plan::{ProposalStatus, PurchaseOrderProposal};
pub use product::Product;
pub use provider::CatalogProvider;
pub use requirement::RequirementMap;

/// MRP 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum MrpError {
    #[error("無效的需求數量: 物料 {product_id} 數量 {quantity}（必須大於 0）")]
    InvalidQuantity { product_id: String, quantity: u64 },

    #[error("無效的 BOM 用量: {parent_id} → {child_id} 用量 {quantity}")]
    InvalidBomEdge {
        parent_id: String,
        child_id: String,
        quantity: rust_decimal::Decimal,
    },

    #[error("無效的物料資料: {0}")]
    InvalidProduct(String),

    #[error("找不到物料: {0}")]
    ProductNotFound(String),

    #[error("BOM 存在循環: {}", .path.join(" → "))]
    CycleDetected { path: Vec<String> },

    #[error("BOM 層級超過上限 {max_depth}: 物料 {product_id}")]
    DepthExceeded { product_id: String, max_depth: usize },

    #[error(transparent)]
    Provider(#[from] anyhow::Error),

    #[error("配置解析失敗: {0}")]
    Config(#[from] serde_json::Error),

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, MrpError>;
