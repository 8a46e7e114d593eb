//! 物料可用性模型

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Product;

/// 單一物料的可用性
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialAvailability {
    pub product_id: String,
    pub product_code: String,
    pub product_name: String,
    pub unit: Option<String>,

    /// 需求數量
    pub required_quantity: u64,

    /// 可用數量（現有庫存）
    pub available_quantity: u64,

    /// 缺料數量 = max(0, 需求 - 可用)
    pub shortage: u64,

    /// 可用 >= 需求
    pub sufficient: bool,
}

impl MaterialAvailability {
    /// 依物料快照與需求數量計算可用性
    pub fn new(product: &Product, required_quantity: u64) -> Self {
        Self {
            product_id: product.id.clone(),
            product_code: product.code.clone(),
            product_name: product.name.clone(),
            unit: product.unit.clone(),
            required_quantity,
            available_quantity: product.stock_quantity,
            shortage: product.shortfall(required_quantity),
            sufficient: product.covers(required_quantity),
        }
    }
}

/// 可用性報告（依物料ID排序）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    items: BTreeMap<String, MaterialAvailability>,
}

impl AvailabilityReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, availability: MaterialAvailability) {
        self.items
            .insert(availability.product_id.clone(), availability);
    }

    pub fn get(&self, product_id: &str) -> Option<&MaterialAvailability> {
        self.items.get(product_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialAvailability> {
        self.items.values()
    }

    /// 所有缺料的物料
    pub fn shortages(&self) -> impl Iterator<Item = &MaterialAvailability> {
        self.items.values().filter(|a| !a.sufficient)
    }

    /// 是否全部物料足夠
    pub fn all_sufficient(&self) -> bool {
        self.items.values().all(|a| a.sufficient)
    }
}
