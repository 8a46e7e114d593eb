//! BOM 遍歷共用邏輯：物料解析、循環與層級檢查

use mrp_core::{BomEdge, CatalogProvider, EngineConfig, MrpError, Product, Result};

/// 依配置解析物料
///
/// 寬鬆模式下找不到物料回傳 `None`；嚴格模式回傳 `ProductNotFound`。
pub(crate) fn resolve_product<P: CatalogProvider + ?Sized>(
    provider: &P,
    config: &EngineConfig,
    product_id: &str,
) -> Result<Option<Product>> {
    match provider.product(product_id)? {
        Some(product) => Ok(Some(product)),
        None if config.is_strict() => Err(MrpError::ProductNotFound(product_id.to_string())),
        None => {
            tracing::warn!("找不到物料 {}，視為無需求", product_id);
            Ok(None)
        }
    }
}

/// 讀取子件並依序號排序
pub(crate) fn sorted_children<P: CatalogProvider + ?Sized>(
    provider: &P,
    parent_id: &str,
) -> Result<Vec<BomEdge>> {
    let mut children = provider.bom_children(parent_id)?;
    children.sort_by_key(|e| e.sequence_number);
    Ok(children)
}

/// 目前遍歷路徑（根到當前節點）
///
/// 同一物料可經由不同分支重複出現，只有出現在自己祖先路徑上才算循環。
#[derive(Debug, Default)]
pub(crate) struct BomPath {
    stack: Vec<String>,
}

impl BomPath {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 進入節點
    pub(crate) fn enter(&mut self, product_id: &str, max_depth: Option<usize>) -> Result<()> {
        if let Some(pos) = self.stack.iter().position(|id| id == product_id) {
            let mut path = self.stack[pos..].to_vec();
            path.push(product_id.to_string());
            return Err(MrpError::CycleDetected { path });
        }

        if let Some(max_depth) = max_depth {
            if self.stack.len() >= max_depth {
                return Err(MrpError::DepthExceeded {
                    product_id: product_id.to_string(),
                    max_depth,
                });
            }
        }

        self.stack.push(product_id.to_string());
        Ok(())
    }

    /// 離開節點
    pub(crate) fn leave(&mut self) {
        self.stack.pop();
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }
}
