//! エラー型定義
//!
//! ラベル解決そのものはエラーを返さない。
//! 設定・結果文書の解析と取得でのみ使う。

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fetch error: {0}")]
    Fetch(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
