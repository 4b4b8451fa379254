//! `/get_config` の取得とベースURL集合の決定
//!
//! 取得は1回のリクエスト/レスポンスのみ（リトライしない）。
//! 取得に失敗した場合は空のベースURL集合で続行する（汎用URI判定にフォールバック）。

use crate::config::Config;
use crate::error::{LinkedLabelError, Result};
use linked_label_common::config::CONFIG_ENDPOINT;
use linked_label_common::{BaseUrlSet, SiteConfig};
use std::time::Duration;

/// サーバURLから設定取得エンドポイントのURLを作る
///
/// 既に `/get_config` で終わっていればそのまま使う
pub fn config_endpoint(server_url: &str) -> Result<reqwest::Url> {
    let url = reqwest::Url::parse(server_url)
        .map_err(|e| LinkedLabelError::ConfigFetch(format!("{}: {}", server_url, e)))?;

    if url.path().ends_with(CONFIG_ENDPOINT) {
        return Ok(url);
    }

    url.join(CONFIG_ENDPOINT)
        .map_err(|e| LinkedLabelError::ConfigFetch(format!("{}: {}", server_url, e)))
}

/// `/get_config` を取得する
pub async fn fetch_site_config(server_url: &str, timeout_seconds: u64) -> Result<SiteConfig> {
    let endpoint = config_endpoint(server_url)?;
    tracing::debug!(%endpoint, "fetching site config");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
        .map_err(|e| LinkedLabelError::ConfigFetch(e.to_string()))?;

    let response = client
        .get(endpoint.clone())
        .send()
        .await
        .map_err(|e| LinkedLabelError::ConfigFetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(LinkedLabelError::ConfigFetch(format!(
            "{}: HTTP {}",
            endpoint,
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LinkedLabelError::ConfigFetch(e.to_string()))?;

    Ok(SiteConfig::from_json(&body)?)
}

/// ベースURLの取得元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    /// `--base-url` 指定
    CommandLine,
    /// `/get_config` から取得
    Fetched,
    /// 取得失敗（空集合で続行）
    FetchFailed,
    /// ローカル設定ファイル
    LocalConfig,
}

impl std::fmt::Display for BaseUrlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaseUrlSource::CommandLine => write!(f, "コマンドライン"),
            BaseUrlSource::Fetched => write!(f, "/get_config"),
            BaseUrlSource::FetchFailed => write!(f, "取得失敗（ベースURLなし）"),
            BaseUrlSource::LocalConfig => write!(f, "ローカル設定"),
        }
    }
}

/// ラベル解決に使うベースURL集合を決める
///
/// 優先順位: `--base-url` > `/get_config` > ローカル設定
///
/// # Arguments
/// * `overrides` - コマンドラインで指定されたベースURL
/// * `config_url` - `--config-url` 指定（なければ設定ファイル・環境変数）
/// * `config` - ローカル設定
pub async fn resolve_base_urls(
    overrides: &[String],
    config_url: Option<&str>,
    config: &Config,
) -> (BaseUrlSet, BaseUrlSource) {
    if !overrides.is_empty() {
        return (BaseUrlSet::new(overrides.iter().cloned()), BaseUrlSource::CommandLine);
    }

    let server_url = config_url.map(str::to_string).or_else(|| config.get_config_url());
    if let Some(server_url) = server_url {
        return match fetch_site_config(&server_url, config.timeout_seconds).await {
            Ok(site_config) => {
                let bases = site_config.base_url_set();
                tracing::info!(count = bases.len(), "base urls fetched");
                (bases, BaseUrlSource::Fetched)
            }
            Err(e) => {
                tracing::warn!(error = %e, "config fetch failed, continuing without base urls");
                (BaseUrlSet::default(), BaseUrlSource::FetchFailed)
            }
        };
    }

    (BaseUrlSet::new(config.base_urls.iter().cloned()), BaseUrlSource::LocalConfig)
}
