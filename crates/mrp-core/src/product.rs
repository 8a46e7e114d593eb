//! 物料主檔模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MrpError, Result};

/// 物料（成品、半成品或原料）
///
/// 引擎只讀取目錄提供的快照，從不修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 物料ID
    pub id: String,

    /// 料號（唯一）
    pub code: String,

    /// 品名
    pub name: String,

    /// 描述
    pub description: Option<String>,

    /// 計量單位（pcs, kg, m ...）
    pub unit: Option<String>,

    /// 單位成本
    pub unit_cost: Decimal,

    /// 現有庫存
    pub stock_quantity: u64,

    /// 再訂購點
    pub reorder_level: u64,

    /// 訂購提前期（天，與數量無關的固定延遲）
    pub order_lead_time: Decimal,

    /// 單件提前期（天，每單位的邊際延遲）
    pub item_lead_time: Decimal,

    /// 是否為組合件（有 BOM 子件）
    pub is_assembly: bool,

    /// 不採購（自製件，不產生採購建議）
    pub non_purchase: bool,
}

impl Product {
    /// 創建新的物料
    pub fn new(id: impl Into<String>, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            description: None,
            unit: None,
            unit_cost: Decimal::ZERO,
            stock_quantity: 0,
            reorder_level: 0,
            order_lead_time: Decimal::ZERO,
            item_lead_time: Decimal::ZERO,
            is_assembly: false,
            non_purchase: false,
        }
    }

    /// 建構器模式：設置描述
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 建構器模式：設置計量單位
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// 建構器模式：設置單位成本
    pub fn with_unit_cost(mut self, unit_cost: Decimal) -> Self {
        self.unit_cost = unit_cost;
        self
    }

    /// 建構器模式：設置現有庫存
    pub fn with_stock_quantity(mut self, stock_quantity: u64) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }

    /// 建構器模式：設置再訂購點
    pub fn with_reorder_level(mut self, reorder_level: u64) -> Self {
        self.reorder_level = reorder_level;
        self
    }

    /// 建構器模式：設置訂購提前期與單件提前期
    pub fn with_lead_times(mut self, order_lead_time: Decimal, item_lead_time: Decimal) -> Self {
        self.order_lead_time = order_lead_time;
        self.item_lead_time = item_lead_time;
        self
    }

    /// 建構器模式：標記為組合件
    pub fn as_assembly(mut self) -> Self {
        self.is_assembly = true;
        self
    }

    /// 建構器模式：標記為不採購
    pub fn as_non_purchase(mut self) -> Self {
        self.non_purchase = true;
        self
    }

    /// 檢查物料資料
    pub fn validate(&self) -> Result<()> {
        if self.order_lead_time < Decimal::ZERO || self.item_lead_time < Decimal::ZERO {
            return Err(MrpError::InvalidProduct(format!(
                "{} 提前期不可為負：訂購 {}, 單件 {}",
                self.code, self.order_lead_time, self.item_lead_time
            )));
        }
        if self.unit_cost < Decimal::ZERO {
            return Err(MrpError::InvalidProduct(format!(
                "{} 單位成本不可為負：{}",
                self.code, self.unit_cost
            )));
        }
        Ok(())
    }

    /// 現有庫存是否足以滿足數量
    pub fn covers(&self, quantity: u64) -> bool {
        self.stock_quantity >= quantity
    }

    /// 扣除現有庫存後的缺口
    pub fn shortfall(&self, quantity: u64) -> u64 {
        quantity.saturating_sub(self.stock_quantity)
    }

    /// 檢查庫存是否低於再訂購點
    pub fn is_below_reorder_level(&self) -> bool {
        self.stock_quantity < self.reorder_level
    }
}
