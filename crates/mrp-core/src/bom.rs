//! BOM 用量關係

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MrpError, Result};

/// BOM 邊：一個父件（組合件）對一個子件的用量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomEdge {
    /// 父件ID
    pub parent_id: String,

    /// 子件ID
    pub child_id: String,

    /// 每單位父件的子件用量
    pub quantity_per_parent: Decimal,

    /// 序號（僅影響展開順序，不影響總量）
    pub sequence_number: i32,

    /// 計量單位
    pub unit: Option<String>,
}

impl BomEdge {
    /// 創建新的 BOM 邊
    pub fn new(
        parent_id: impl Into<String>,
        child_id: impl Into<String>,
        quantity_per_parent: Decimal,
    ) -> Self {
        Self {
            parent_id: parent_id.into(),
            child_id: child_id.into(),
            quantity_per_parent,
            sequence_number: 0,
            unit: None,
        }
    }

    /// 建構器模式：設置序號
    pub fn with_sequence(mut self, sequence_number: i32) -> Self {
        self.sequence_number = sequence_number;
        self
    }

    /// 建構器模式：設置計量單位
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// 檢查用量不可為負
    pub fn validate(&self) -> Result<()> {
        if self.quantity_per_parent < Decimal::ZERO {
            return Err(MrpError::InvalidBomEdge {
                parent_id: self.parent_id.clone(),
                child_id: self.child_id.clone(),
                quantity: self.quantity_per_parent,
            });
        }
        Ok(())
    }

    /// 子件需求數量 = 用量 × 父件數量，小數部分捨去（截斷，不四捨五入）
    pub fn child_quantity(&self, parent_quantity: u64) -> Result<u64> {
        self.validate()?;

        self.quantity_per_parent
            .checked_mul(Decimal::from(parent_quantity))
            .and_then(|qty| qty.trunc().to_u64())
            .ok_or_else(|| {
                MrpError::CalculationError(format!(
                    "子件數量溢出：{} × {} ({} → {})",
                    self.quantity_per_parent, parent_quantity, self.parent_id, self.child_id
                ))
            })
    }
}
