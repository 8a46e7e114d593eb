//! 採購建議模型

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 採購建議狀態
///
/// 引擎只產生 `Pending`，後續狀態由持久化端推進。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalStatus {
    /// 待處理
    #[default]
    Pending,
    /// 已下單
    Ordered,
    /// 已收貨
    Received,
    /// 已取消
    Cancelled,
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProposalStatus::Pending => write!(f, "PENDING"),
            ProposalStatus::Ordered => write!(f, "ORDERED"),
            ProposalStatus::Received => write!(f, "RECEIVED"),
            ProposalStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// 採購建議（MRP計算結果）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderProposal {
    /// 建議ID
    pub id: Uuid,

    /// 物料ID
    pub product_id: String,

    /// 建議數量（淨需求）
    pub quantity: u64,

    /// 狀態
    pub status: ProposalStatus,

    /// 下單日期
    pub order_date: NaiveDate,

    /// 預計到貨日期 = 下單日期 + 截斷後的提前期天數
    pub expected_delivery_date: NaiveDate,

    /// 關鍵路徑提前期（天，未截斷）
    pub lead_time: Decimal,

    /// 供應商
    pub supplier: Option<String>,

    /// 來源參考（需求來源與產生時間）
    pub reference: String,

    /// 產生時間
    pub generated_at: DateTime<Utc>,
}

impl PurchaseOrderProposal {
    /// 創建新的採購建議
    pub fn new(
        product_id: String,
        quantity: u64,
        order_date: NaiveDate,
        expected_delivery_date: NaiveDate,
        lead_time: Decimal,
        reference: String,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            quantity,
            status: ProposalStatus::Pending,
            order_date,
            expected_delivery_date,
            lead_time,
            supplier: None,
            reference,
            generated_at,
        }
    }

    /// 建構器模式：設置供應商
    pub fn with_supplier(mut self, supplier: String) -> Self {
        self.supplier = Some(supplier);
        self
    }

    /// 下單到到貨的天數
    pub fn lead_time_days(&self) -> i64 {
        (self.expected_delivery_date - self.order_date).num_days()
    }

    pub fn is_pending(&self) -> bool {
        self.status == ProposalStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_proposal() {
        let proposal = PurchaseOrderProposal::new(
            "COMP".to_string(),
            40,
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 8).unwrap(),
            Decimal::new(75, 1),
            "MRP-ASSY-1761955200000".to_string(),
            Utc::now(),
        );

        assert_eq!(proposal.quantity, 40);
        assert_eq!(proposal.lead_time_days(), 7);
        assert!(proposal.is_pending());
        assert_eq!(proposal.status.to_string(), "PENDING");
        assert!(proposal.supplier.is_none());
    }

    #[test]
    fn test_proposal_with_supplier() {
        let proposal = PurchaseOrderProposal::new(
            "FRAME".to_string(),
            5,
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 11).unwrap(),
            Decimal::from(10),
            "MRP-BIKE-0".to_string(),
            Utc::now(),
        )
        .with_supplier("VENDOR-01".to_string());

        assert_eq!(proposal.supplier, Some("VENDOR-01".to_string()));
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ProposalStatus::Cancelled).unwrap();
        assert_eq!(json, "\"CANCELLED\"");
        assert_eq!(ProposalStatus::default(), ProposalStatus::Pending);
    }
}
