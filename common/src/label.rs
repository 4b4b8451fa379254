//! 表示ラベルの決定
//!
//! 候補文字列とベースURL集合から、最終的な表示形式を1つ決める。
//!
//! ## 優先順位
//! 1. 外部識別子（ORCID, DOI）
//! 2. ベースURLの除去（目的語はエンティティリンク化）
//! 3. ベースURL未設定時の目的語URI（そのままエンティティリンク化）
//! 4. その他のURI（末尾セグメントをキャメルケース分割）
//! 5. リテラル（Unicodeエスケープを復元）

use crate::identifier::{acronyms, match_identifier};
use crate::types::{BaseUrlSet, CandidateText, LabelResult, Role};
use crate::unicode::unicode_to_char;
use crate::uri::is_uri;

/// 候補文字列の表示形式を決定する
///
/// # Arguments
/// * `candidate` - ページから取り出した文字列と役割
/// * `bases` - ローカル扱いするベースURL集合（空でもよい）
///
/// # Returns
/// 4種類のうちいずれか1つの `LabelResult`
pub fn format_label(candidate: &CandidateText, bases: &BaseUrlSet) -> LabelResult {
    let raw = candidate.raw.as_str();
    let role = candidate.role;

    // 来歴メタデータは provenance::link_provenance で扱う
    if role == Role::Provenance {
        return LabelResult::LiteralText { text: raw.to_string() };
    }

    if let Some(scheme) = match_identifier(raw) {
        return LabelResult::ExternalIdentifierLink {
            scheme: scheme.name.to_string(),
            target: raw.to_string(),
        };
    }

    if role.permits_stripping() {
        if let Some(base) = bases.first_match(raw) {
            let stripped = raw.replacen(base, "", 1);
            return if role.permits_entity_link() {
                LabelResult::LocalEntityLink {
                    label: stripped,
                    target: raw.to_string(),
                }
            } else {
                LabelResult::GenericLabel {
                    text: stripped,
                    title: raw.to_string(),
                }
            };
        }
    }

    if bases.is_empty() && role.permits_entity_link() && is_uri(raw) {
        return LabelResult::LocalEntityLink {
            label: raw.to_string(),
            target: raw.to_string(),
        };
    }

    // リソース名はキャメルケース分割しない
    if role == Role::ResourceName {
        return LabelResult::LiteralText { text: unicode_to_char(raw) };
    }

    if is_uri(raw) {
        let text = uri_label(raw).unwrap_or_else(|| raw.to_string());
        return LabelResult::GenericLabel {
            text,
            title: raw.to_string(),
        };
    }

    LabelResult::LiteralText { text: unicode_to_char(raw) }
}

/// URIの末尾セグメントから読みやすいラベルを作る
///
/// 末尾が `/` や `#` で終わりセグメントが空の場合は None
fn uri_label(uri: &str) -> Option<String> {
    let segment = last_segment(uri);
    if segment.is_empty() {
        return None;
    }

    let label = camel_case_label(segment);
    if acronyms().any(|acronym| acronym.eq_ignore_ascii_case(&label)) {
        return Some(label.to_uppercase());
    }
    Some(label)
}

/// 最後の `/` 以降、さらに最後の `#` 以降を取り出す
fn last_segment(uri: &str) -> &str {
    let after_slash = uri.rsplit('/').next().unwrap_or(uri);
    after_slash.rsplit('#').next().unwrap_or(after_slash)
}

/// キャメルケースを空白区切りに分割する
///
/// 先頭文字は大文字にし、2文字目以降の大文字の前に空白を入れる。
///
/// # Examples
/// ```
/// use linked_label_common::camel_case_label;
///
/// assert_eq!(camel_case_label("hasAuthor"), "Has Author");
/// assert_eq!(camel_case_label("doi"), "Doi");
/// ```
pub fn camel_case_label(segment: &str) -> String {
    let mut label = String::with_capacity(segment.len() + 4);
    for (i, c) in segment.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_ascii_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(raw: &str) -> CandidateText {
        CandidateText::new(raw, Role::Object)
    }

    fn predicate(raw: &str) -> CandidateText {
        CandidateText::new(raw, Role::Predicate)
    }

    // =============================================
    // キャメルケース分割
    // =============================================

    #[test]
    fn test_camel_case_label() {
        assert_eq!(camel_case_label("hasAuthor"), "Has Author");
        assert_eq!(camel_case_label("HasAuthor"), "Has Author");
        assert_eq!(camel_case_label("title"), "Title");
        assert_eq!(camel_case_label("isDocumentContextFor"), "Is Document Context For");
        assert_eq!(camel_case_label("1stEdition"), "1st Edition");
        assert_eq!(camel_case_label(""), "");
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("https://example.org/hasAuthor"), "hasAuthor");
        assert_eq!(last_segment("https://example.org/ns#hasAuthor"), "hasAuthor");
        assert_eq!(last_segment("https://example.org/a/b#c"), "c");
        assert_eq!(last_segment("https://example.org/"), "");
    }

    // =============================================
    // 優先順位
    // =============================================

    #[test]
    fn test_object_with_base_is_local_link() {
        let bases = BaseUrlSet::new(vec!["https://example.org/"]);
        let result = format_label(&object("https://example.org/entity/1"), &bases);
        assert_eq!(
            result,
            LabelResult::LocalEntityLink {
                label: "entity/1".into(),
                target: "https://example.org/entity/1".into(),
            }
        );
        assert_eq!(result.display_text(), "entity/1");
        assert_eq!(result.title(), Some("https://example.org/entity/1"));
    }

    #[test]
    fn test_first_matching_base_wins() {
        let bases = BaseUrlSet::new(vec!["https://other.org/", "https://example.org/", "https://example.org/entity/"]);
        let result = format_label(&object("https://example.org/entity/1"), &bases);
        assert_eq!(result.display_text(), "entity/1");
    }

    #[test]
    fn test_predicate_without_bases_is_generic_label() {
        let result = format_label(&predicate("https://example.org/hasAuthor"), &BaseUrlSet::default());
        assert_eq!(
            result,
            LabelResult::GenericLabel {
                text: "Has Author".into(),
                title: "https://example.org/hasAuthor".into(),
            }
        );
    }

    #[test]
    fn test_predicate_with_fragment() {
        let result = format_label(&predicate("http://purl.org/spar/pro#isHeldBy"), &BaseUrlSet::default());
        assert_eq!(result.display_text(), "Is Held By");
    }

    #[test]
    fn test_predicate_is_never_stripped() {
        let bases = BaseUrlSet::new(vec!["https://example.org/"]);
        let result = format_label(&predicate("https://example.org/hasAuthor"), &bases);
        assert_eq!(result.kind(), "genericLabel");
        assert_eq!(result.display_text(), "Has Author");
    }

    #[test]
    fn test_orcid_object_is_external_link() {
        let raw = "https://orcid.org/0000-0002-1825-0097";
        let result = format_label(&object(raw), &BaseUrlSet::default());
        assert_eq!(
            result,
            LabelResult::ExternalIdentifierLink {
                scheme: "orcid".into(),
                target: raw.into(),
            }
        );
    }

    #[test]
    fn test_identifier_beats_base_url() {
        let bases = BaseUrlSet::new(vec!["https://orcid.org/"]);
        let result = format_label(&object("https://orcid.org/0000-0002-1825-0097"), &bases);
        assert_eq!(result.kind(), "externalIdentifierLink");
    }

    #[test]
    fn test_acronym_uppercased() {
        let result = format_label(&predicate("http://purl.org/spar/datacite/doi"), &BaseUrlSet::default());
        assert_eq!(result.display_text(), "DOI");

        let result = format_label(&predicate("http://purl.org/spar/datacite/orcid"), &BaseUrlSet::default());
        assert_eq!(result.display_text(), "ORCID");
    }

    #[test]
    fn test_object_without_bases_is_untouched_link() {
        let raw = "https://w3id.org/oc/meta/br/0601";
        let result = format_label(&object(raw), &BaseUrlSet::default());
        assert_eq!(
            result,
            LabelResult::LocalEntityLink {
                label: raw.into(),
                target: raw.into(),
            }
        );
        assert_eq!(result.title(), None);
    }

    #[test]
    fn test_object_with_unmatched_bases_is_generic_label() {
        let bases = BaseUrlSet::new(vec!["https://example.org/"]);
        let result = format_label(&object("http://purl.org/spar/fabio/JournalArticle"), &bases);
        assert_eq!(result.kind(), "genericLabel");
        assert_eq!(result.display_text(), "Journal Article");
    }

    #[test]
    fn test_resource_name_stripped_not_linked() {
        let bases = BaseUrlSet::new(vec!["https://example.org/"]);
        let candidate = CandidateText::new("https://example.org/entity/1", Role::ResourceName);
        let result = format_label(&candidate, &bases);
        assert_eq!(
            result,
            LabelResult::GenericLabel {
                text: "entity/1".into(),
                title: "https://example.org/entity/1".into(),
            }
        );
        assert!(!result.is_entity_link());
    }

    #[test]
    fn test_resource_name_unmatched_is_literal() {
        let candidate = CandidateText::new("https://example.org/entity/1", Role::ResourceName);
        let result = format_label(&candidate, &BaseUrlSet::default());
        assert_eq!(result, LabelResult::LiteralText { text: "https://example.org/entity/1".into() });
    }

    #[test]
    fn test_tabular_cell_uri_is_generic_label() {
        let candidate = CandidateText::new("http://purl.org/spar/fabio/Expression", Role::TabularCell);
        let result = format_label(&candidate, &BaseUrlSet::default());
        assert_eq!(result.display_text(), "Expression");
    }

    #[test]
    fn test_uri_with_empty_segment_keeps_raw() {
        let result = format_label(&predicate("https://example.org/"), &BaseUrlSet::default());
        assert_eq!(result.display_text(), "https://example.org/");
        assert_eq!(result.title(), None);
    }

    #[test]
    fn test_literal_falls_through() {
        let result = format_label(&object("Not A URI"), &BaseUrlSet::default());
        assert_eq!(result, LabelResult::LiteralText { text: "Not A URI".into() });
    }

    #[test]
    fn test_empty_string_is_literal() {
        let result = format_label(&object(""), &BaseUrlSet::new(vec!["https://example.org/"]));
        assert_eq!(result, LabelResult::LiteralText { text: String::new() });
    }

    #[test]
    fn test_provenance_role_untouched() {
        let candidate = CandidateText::new("https://orcid.org/0000-0002-1825-0097", Role::Provenance);
        let result = format_label(&candidate, &BaseUrlSet::default());
        assert_eq!(result.kind(), "literalText");
        assert_eq!(result.display_text(), "https://orcid.org/0000-0002-1825-0097");
    }

    #[test]
    fn test_colon_literal_is_not_uri() {
        let object = CandidateText::new("Title: The Book", Role::Object);
        assert_eq!(
            format_label(&object, &BaseUrlSet::default()),
            LabelResult::LiteralText { text: "Title: The Book".into() }
        );

        let predicate = CandidateText::new(r"Note: caf\u00e9", Role::Predicate);
        assert_eq!(
            format_label(&predicate, &BaseUrlSet::default()),
            LabelResult::LiteralText { text: "Note: café".into() }
        );
    }
}
