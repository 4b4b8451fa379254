//! 候補ノードJSONの読み書き
//!
//! 入力はファイル1つ、またはJSONファイルを含むフォルダ。

use crate::error::{LinkedLabelError, Result};
use linked_label_common::ScannedNode;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const JSON_EXTENSIONS: &[&str] = &["json", "JSON"];

/// 入力パスから処理対象のJSONファイルを列挙する
///
/// # Arguments
/// * `input` - JSONファイル、またはフォルダ
/// * `recursive` - サブフォルダも対象にする
pub fn scan_inputs(input: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        return Err(LinkedLabelError::FileNotFound(input.display().to_string()));
    }

    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_json_file(p))
        .collect();

    // パスでソート
    files.sort();

    Ok(files)
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| JSON_EXTENSIONS.iter().any(|&e| e == ext.to_string_lossy()))
        .unwrap_or(false)
}

/// 候補ノードの配列を読み込む
pub fn load_nodes(path: &Path) -> Result<Vec<ScannedNode>> {
    let content = std::fs::read_to_string(path)?;
    let nodes: Vec<ScannedNode> = serde_json::from_str(&content)?;
    Ok(nodes)
}

/// 候補ノードの配列を書き出す
pub fn save_nodes(path: &Path, nodes: &[ScannedNode]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(nodes)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// 解決結果の保存先を決める
///
/// # Arguments
/// * `input` - コマンドに渡した入力（ファイルまたはフォルダ）
/// * `file` - `scan_inputs` が返したファイル
/// * `output` - `--output` 指定（省略時は上書き）
///
/// # Returns
/// フォルダ入力では `input` からの相対パスを `output` の下に保つ
pub fn output_path(input: &Path, file: &Path, output: Option<&Path>) -> PathBuf {
    let Some(out) = output else {
        return file.to_path_buf();
    };

    if input.is_file() {
        return out.to_path_buf();
    }

    match file.strip_prefix(input) {
        Ok(relative) => out.join(relative),
        Err(_) => out.join(file.file_name().unwrap_or_default()),
    }
}
