//! 需求展開結果

use std::collections::HashMap;

use crate::{MrpError, Result};

/// 物料需求表：物料ID → 總需求數量
///
/// 保留首次登錄的順序（根物料在前，其餘依深度優先、BOM 序號排列）。
/// 同一物料經由不同路徑到達時數量累加。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementMap {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl RequirementMap {
    /// 創建空的需求表
    pub fn new() -> Self {
        Self::default()
    }

    /// 累加物料需求
    pub fn add(&mut self, product_id: &str, quantity: u64) -> Result<()> {
        match self.index.get(product_id) {
            Some(&pos) => {
                let entry = &mut self.entries[pos].1;
                *entry = entry.checked_add(quantity).ok_or_else(|| {
                    MrpError::CalculationError(format!("物料 {} 需求數量溢出", product_id))
                })?;
            }
            None => {
                self.index.insert(product_id.to_string(), self.entries.len());
                self.entries.push((product_id.to_string(), quantity));
            }
        }
        Ok(())
    }

    /// 查詢物料需求數量
    pub fn get(&self, product_id: &str) -> Option<u64> {
        self.index.get(product_id).map(|&pos| self.entries[pos].1)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.index.contains_key(product_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 依登錄順序遍歷
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    /// 依登錄順序的物料ID
    pub fn product_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }
}
