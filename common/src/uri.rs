//! URI判定
//!
//! ブラウザの `URL` コンストラクタと同じWHATWG URLパーサで判定する。
//! パース失敗は「URIではない」として扱い、エラーにはしない。
//! ASCII空白を含む文字列はパーサが受理してもURIとみなさない
//! （`Title: The Book` のようなリテラルがスキーム付きURLと解釈されるため）。

use url::Url;

/// 絶対URIとしてパースできれば返す
pub fn parse_uri(s: &str) -> Option<Url> {
    if s.is_empty() || s.chars().any(|c| c.is_ascii_whitespace()) {
        return None;
    }
    Url::parse(s).ok()
}

/// 文字列が絶対URIかどうか判定
///
/// # Examples
/// ```
/// use linked_label_common::is_uri;
///
/// assert!(is_uri("https://example.org/entity/1"));
/// assert!(!is_uri("Not A URI"));
/// assert!(!is_uri(""));
/// ```
pub fn is_uri(s: &str) -> bool {
    parse_uri(s).is_some()
}
