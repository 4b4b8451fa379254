use crate::error::{LinkedLabelError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定取得URLを上書きする環境変数
pub const CONFIG_URL_ENV: &str = "LINKED_LABEL_CONFIG_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ローカルに保存したベースURL（取得できない場合に使う）
    pub base_urls: Vec<String>,
    /// `/get_config` を提供するサーバのURL
    pub config_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_urls: Vec::new(),
            config_url: None,
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LinkedLabelError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("linked-label").join("config.json"))
    }

    /// 設定取得URL（環境変数を優先）
    pub fn get_config_url(&self) -> Option<String> {
        if let Ok(url) = std::env::var(CONFIG_URL_ENV) {
            if !url.is_empty() {
                return Some(url);
            }
        }

        self.config_url.clone()
    }

    /// ベースURLを追加（重複は追加しない）
    ///
    /// # Returns
    /// 追加した場合true
    pub fn add_base_url(&mut self, url: String) -> Result<bool> {
        if !linked_label_common::is_uri(&url) {
            return Err(LinkedLabelError::Config(format!("ベースURLがURIではありません: {}", url)));
        }
        if self.base_urls.contains(&url) {
            return Ok(false);
        }
        self.base_urls.push(url);
        Ok(true)
    }

    /// ベースURLを削除
    ///
    /// # Returns
    /// 削除した場合true
    pub fn remove_base_url(&mut self, url: &str) -> bool {
        let before = self.base_urls.len();
        self.base_urls.retain(|u| u != url);
        self.base_urls.len() != before
    }

    pub fn set_config_url(&mut self, url: String) -> Result<()> {
        if !linked_label_common::is_uri(&url) {
            return Err(LinkedLabelError::Config(format!("設定取得URLがURIではありません: {}", url)));
        }
        self.config_url = Some(url);
        Ok(())
    }
}
