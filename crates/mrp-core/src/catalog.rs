//! 記憶體內物料目錄快照

use std::collections::HashMap;

use crate::{BomEdge, CatalogProvider, Product, Result};

/// 記憶體內的物料目錄與 BOM 快照
///
/// 呼叫端可先從資料庫載入一次，再讓展開與查詢共用同一份快照，
/// 避免兩次讀取之間資料變動。
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<String, Product>,
    bom: HashMap<String, Vec<BomEdge>>,
}

impl InMemoryCatalog {
    /// 創建空的目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增或覆蓋物料
    pub fn add_product(&mut self, product: Product) -> Result<()> {
        product.validate()?;
        self.products.insert(product.id.clone(), product);
        Ok(())
    }

    /// 新增 BOM 邊，子件保持依序號排序
    pub fn add_bom_edge(&mut self, edge: BomEdge) -> Result<()> {
        edge.validate()?;
        let children = self.bom.entry(edge.parent_id.clone()).or_default();
        children.push(edge);
        children.sort_by_key(|e| e.sequence_number);
        Ok(())
    }

    /// 移除物料（不移除相關 BOM 邊）
    pub fn remove_product(&mut self, product_id: &str) -> Option<Product> {
        self.products.remove(product_id)
    }

    /// 依料號查詢
    pub fn find_by_code(&self, code: &str) -> Option<&Product> {
        self.products.values().find(|p| p.code == code)
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn edge_count(&self) -> usize {
        self.bom.values().map(Vec::len).sum()
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn product(&self, product_id: &str) -> Result<Option<Product>> {
        Ok(self.products.get(product_id).cloned())
    }

    fn bom_children(&self, parent_id: &str) -> Result<Vec<BomEdge>> {
        Ok(self.bom.get(parent_id).cloned().unwrap_or_default())
    }
}
