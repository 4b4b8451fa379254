use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkedLabelError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("入力に候補が含まれていません: {0}")]
    NoCandidates(String),

    #[error("設定の取得に失敗: {0}")]
    ConfigFetch(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] linked_label_common::Error),
}

pub type Result<T> = std::result::Result<T, LinkedLabelError>;
