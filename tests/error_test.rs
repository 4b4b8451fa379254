//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use linked_label::error::LinkedLabelError;
use linked_label::scanner;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない入力をスキャンした場合
#[test]
fn test_scan_nonexistent_input() {
    let result = scanner::scan_inputs(Path::new("/nonexistent/path/12345"), false);
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, LinkedLabelError::FileNotFound(_)));
}

/// 空のフォルダをスキャンした場合
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_inputs(dir.path(), false);

    // 空フォルダはエラーではなく空のVecを返す
    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// 不正なJSONを読み込んだ場合
#[test]
fn test_load_invalid_nodes() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not an array").unwrap();

    let result = scanner::load_nodes(&path);
    assert!(matches!(result, Err(LinkedLabelError::JsonParse(_))));
}

/// LinkedLabelErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        LinkedLabelError::Config("テスト設定エラー".to_string()),
        LinkedLabelError::FileNotFound("nodes.json".to_string()),
        LinkedLabelError::NoCandidates("/path/to/folder".to_string()),
        LinkedLabelError::ConfigFetch("HTTP 500".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = LinkedLabelError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: LinkedLabelError = io_err.into();

    assert!(matches!(err, LinkedLabelError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: LinkedLabelError = json_err.into();

    assert!(matches!(err, LinkedLabelError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = linked_label_common::Error::Fetch("接続拒否".to_string());
    let err: LinkedLabelError = common_err.into();

    assert!(matches!(err, LinkedLabelError::Common(_)));
    let display = format!("{}", err);
    assert!(display.contains("接続拒否"));
}
