//! サイト設定（`GET /get_config` の応答）

use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::types::BaseUrlSet;

/// 設定取得エンドポイントのパス
pub const CONFIG_ENDPOINT: &str = "/get_config";

/// `/get_config` の応答
///
/// 未知のフィールドは無視し、`base_urls` がなければ空として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub base_urls: Vec<String>,
}

impl SiteConfig {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// ラベル解決に使うベースURL集合
    pub fn base_url_set(&self) -> BaseUrlSet {
        BaseUrlSet::new(self.base_urls.iter().cloned())
    }
}
