//! 外部識別子の照合
//!
//! ORCID・DOIなどの外部識別子をパターン表で判定する。
//! 表はデータとして定義し、先頭から順に照合して最初の一致を採用する。

use regex::Regex;

/// 外部識別子の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierScheme {
    /// 識別子名（小文字）
    pub name: &'static str,
    /// 照合パターン（文字列全体に一致）
    pub pattern: &'static str,
    /// ラベル化の際に全体を大文字にするか
    pub acronym: bool,
}

/// 識別子パターン表（照合順）
pub const SCHEMES: &[IdentifierScheme] = &[
    IdentifierScheme {
        name: "orcid",
        pattern: r"(?i)^(?:https?://)?(?:www\.)?orcid\.org/\d{4}-\d{4}-\d{4}-\d{3}[\dX]$",
        acronym: true,
    },
    IdentifierScheme {
        name: "doi",
        pattern: r"(?i)^(?:(?:https?://)?(?:dx\.)?doi\.org/|doi:)10\.\d{4,9}/\S+$",
        acronym: true,
    },
];

lazy_static::lazy_static! {
    static ref COMPILED: Vec<(&'static IdentifierScheme, Regex)> = SCHEMES
        .iter()
        .filter_map(|scheme| Regex::new(scheme.pattern).ok().map(|re| (scheme, re)))
        .collect();
}

/// 文字列を識別子パターン表と照合
///
/// URI判定とは独立に照合する。前後の空白は無視する。
///
/// # Examples
/// ```
/// use linked_label_common::match_identifier;
///
/// let scheme = match_identifier("https://orcid.org/0000-0002-1825-0097").unwrap();
/// assert_eq!(scheme.name, "orcid");
/// assert!(match_identifier("https://example.org/entity/1").is_none());
/// ```
pub fn match_identifier(s: &str) -> Option<&'static IdentifierScheme> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    COMPILED
        .iter()
        .find(|(_, re)| re.is_match(s))
        .map(|(scheme, _)| *scheme)
}

/// 略語として大文字表記する識別子名
pub fn acronyms() -> impl Iterator<Item = &'static str> {
    SCHEMES.iter().filter(|s| s.acronym).map(|s| s.name)
}
