//! MRP 引擎配置

use serde::{Deserialize, Serialize};

/// 找不到物料時的處理策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingProductPolicy {
    /// 寬鬆：視為無需求、零提前期，報告中略過（預設）
    #[default]
    Lenient,
    /// 嚴格：回傳 `ProductNotFound`
    Strict,
}

/// MRP 引擎配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 找不到物料時的處理策略
    pub missing_product_policy: MissingProductPolicy,

    /// BOM 最大展開層級（None 表示只靠循環檢測）
    pub max_depth: Option<usize>,

    /// 採購建議參考編號前綴
    pub reference_prefix: String,
}

impl EngineConfig {
    /// 創建預設配置（寬鬆模式、無層級上限）
    pub fn new() -> Self {
        Self {
            missing_product_policy: MissingProductPolicy::Lenient,
            max_depth: None,
            reference_prefix: "MRP".to_string(),
        }
    }

    /// 建構器模式：設置找不到物料時的處理策略
    pub fn with_missing_product_policy(mut self, policy: MissingProductPolicy) -> Self {
        self.missing_product_policy = policy;
        self
    }

    /// 建構器模式：嚴格模式
    pub fn strict(self) -> Self {
        self.with_missing_product_policy(MissingProductPolicy::Strict)
    }

    /// 建構器模式：設置最大展開層級
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// 建構器模式：設置參考編號前綴
    pub fn with_reference_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.reference_prefix = prefix.into();
        self
    }

    /// 從 JSON 載入配置（缺少的欄位使用預設值）
    ///
    /// # 範例
    /// ```
    /// # use mrp_core::{EngineConfig, MissingProductPolicy};
    /// let json = r#"{ "missing_product_policy": "strict" }"#;
    /// let config = EngineConfig::from_json_str(json).unwrap();
    /// assert_eq!(config.missing_product_policy, MissingProductPolicy::Strict);
    /// assert_eq!(config.reference_prefix, "MRP");
    /// ```
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_strict(&self) -> bool {
        self.missing_product_policy == MissingProductPolicy::Strict
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
