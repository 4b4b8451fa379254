//! ラベル解決テスト
//!
//! ページから取り出した候補の解決結果と、走査ファイルの再処理を検証

use linked_label::scanner;
use linked_label_common::{
    is_uri, unicode_to_char, resolve_pending, BaseUrlSet, CandidateText, LabelResolver,
    LabelResult, Resolution, Role, ScannedNode,
};
use tempfile::tempdir;

fn resolver(bases: &[&str]) -> LabelResolver {
    LabelResolver::new(BaseUrlSet::new(bases.iter().copied()))
}

fn label(resolver: &LabelResolver, raw: &str, role: Role) -> LabelResult {
    resolver
        .resolve(&CandidateText::new(raw, role))
        .label()
        .cloned()
        .expect("ラベルが返らない")
}

/// URI判定
#[test]
fn test_is_uri_cases() {
    assert!(is_uri("https://example.org/entity/1"));
    assert!(!is_uri("Not A URI"));
    assert!(!is_uri(""));
}

/// ベースURLに一致する目的語はエンティティリンク
#[test]
fn test_object_with_base_url() {
    let resolver = resolver(&["https://example.org/"]);
    let result = label(&resolver, "https://example.org/entity/1", Role::Object);

    assert!(result.is_entity_link());
    assert_eq!(result.display_text(), "entity/1");
    assert_eq!(result.title(), Some("https://example.org/entity/1"));
}

/// ベースURLなしの述語はキャメルケース分割
#[test]
fn test_predicate_generic_label() {
    let resolver = resolver(&[]);
    let result = label(&resolver, "https://example.org/hasAuthor", Role::Predicate);

    assert_eq!(
        result,
        LabelResult::GenericLabel {
            text: "Has Author".into(),
            title: "https://example.org/hasAuthor".into(),
        }
    );
}

/// ORCIDの目的語は外部識別子リンク
#[test]
fn test_orcid_object() {
    let resolver = resolver(&["https://w3id.org/oc/meta/"]);
    let result = label(&resolver, "https://orcid.org/0000-0002-1825-0097", Role::Object);

    assert_eq!(result.kind(), "externalIdentifierLink");
    assert_eq!(result.link_target(), Some("https://orcid.org/0000-0002-1825-0097"));
}

/// 略語は全体を大文字にする
#[test]
fn test_doi_acronym() {
    let resolver = resolver(&[]);
    let result = label(&resolver, "http://purl.org/spar/datacite/doi", Role::Predicate);

    assert_eq!(result.display_text(), "DOI");
    assert_ne!(result.display_text(), "Doi");
}

/// リテラルのUnicodeエスケープ復元
#[test]
fn test_literal_unicode_decoded() {
    let resolver = resolver(&[]);
    let result = label(&resolver, r"Universit\u00e0 di Bologna", Role::Object);

    assert_eq!(result, LabelResult::LiteralText { text: "Università di Bologna".into() });
}

/// エスケープの復元はエスケープがなければ恒等
#[test]
fn test_unicode_to_char_roundtrip() {
    assert_eq!(unicode_to_char(r"\u00e0"), "à");
    assert_eq!(unicode_to_char("Bologna"), "Bologna");
}

/// 来歴メタデータは新しいタブのリンク
#[test]
fn test_provenance_link() {
    let resolver = resolver(&["https://orcid.org/"]);
    let resolution = resolver.resolve(&CandidateText::new(
        "https://orcid.org/0000-0002-8420-0696",
        Role::Provenance,
    ));

    match resolution {
        Resolution::Provenance(Some(link)) => {
            // ベースURLの除去はしない
            assert_eq!(link.label, "https://orcid.org/0000-0002-8420-0696");
            assert!(link.new_tab);
        }
        other => panic!("来歴リンクにならない: {:?}", other),
    }
}

/// 走査ファイルを2回処理しても結果は変わらない
#[test]
fn test_scan_file_twice_is_noop() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nodes.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "o1", "raw": "https://example.org/entity/1", "role": "object"},
            {"id": "p1", "raw": "https://example.org/hasAuthor", "role": "predicate"},
            {"id": "r1", "raw": "https://example.org/entity/1", "role": "resource-name"}
        ]"#,
    )
    .unwrap();

    let resolver = resolver(&["https://example.org/"]);

    let mut nodes = scanner::load_nodes(&path).unwrap();
    assert_eq!(resolve_pending(&mut nodes, &resolver), 3);
    scanner::save_nodes(&path, &nodes).unwrap();
    let first_pass = std::fs::read_to_string(&path).unwrap();

    let mut nodes: Vec<ScannedNode> = scanner::load_nodes(&path).unwrap();
    assert_eq!(resolve_pending(&mut nodes, &resolver), 0);
    scanner::save_nodes(&path, &nodes).unwrap();
    let second_pass = std::fs::read_to_string(&path).unwrap();

    assert_eq!(first_pass, second_pass);

    let object = nodes[0].resolved.as_ref().and_then(Resolution::label).unwrap();
    assert_eq!(object.display_text(), "entity/1");
    let name = nodes[2].resolved.as_ref().and_then(Resolution::label).unwrap();
    assert!(!name.is_entity_link());
}
