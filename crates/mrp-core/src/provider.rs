//! 物料目錄與 BOM 提供者介面

use crate::{BomEdge, Product, Result};

/// 物料目錄 / BOM 提供者
///
/// 引擎只透過此介面讀取快照。提供者必須保證 BOM 為有向無環圖；
/// 讀取失敗以 `MrpError::Provider` 回傳，引擎不重試。
pub trait CatalogProvider {
    /// 依ID取得物料，不存在時回傳 `Ok(None)`
    fn product(&self, product_id: &str) -> Result<Option<Product>>;

    /// 取得組合件的 BOM 子件（依序號排序）
    fn bom_children(&self, parent_id: &str) -> Result<Vec<BomEdge>>;
}

impl<P: CatalogProvider + ?Sized> CatalogProvider for &P {
    fn product(&self, product_id: &str) -> Result<Option<Product>> {
        (**self).product(product_id)
    }

    fn bom_children(&self, parent_id: &str) -> Result<Vec<BomEdge>> {
        (**self).bom_children(parent_id)
    }
}

impl<P: CatalogProvider + ?Sized> CatalogProvider for Box<P> {
    fn product(&self, product_id: &str) -> Result<Option<Product>> {
        (**self).product(product_id)
    }

    fn bom_children(&self, parent_id: &str) -> Result<Vec<BomEdge>> {
        (**self).bom_children(parent_id)
    }
}
