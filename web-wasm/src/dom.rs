//! DOMアダプタ
//!
//! ページから候補要素を集めてラベル解決し、結果を要素に反映する。
//! 解決済みの要素には印の属性を付け、2回目以降の走査では対象にしない。

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};
use linked_label_common::navigation::{ENTITY_LINK_CLASS, RESOLVED_OBJECT_CLASS};
use linked_label_common::provenance::PROVENANCE_LINK_CLASS;
use linked_label_common::{
    resolve_pending, CandidateText, LabelResolver, LabelResult, Resolution, Role, ScannedNode,
};

/// 解決済みの印
pub const RESOLVED_ATTR: &str = "data-label-resolved";

/// 外部識別子リンクのCSSクラス
pub const IDENTIFIER_LINK_CLASS: &str = "identifierLink";

/// CSSセレクタと役割の対応
pub const ROLE_SELECTORS: &[(&str, Role)] = &[
    (".tripleObject", Role::Object),
    (".resName", Role::ResourceName),
    (".triplePredicate", Role::Predicate),
    (".responsibleAgent", Role::Provenance),
    (".primarySource", Role::Provenance),
    (".tabularCell", Role::TabularCell),
];

/// ラベル解決を行うページか（トップページでは行わない）
pub fn should_run_label_pass(pathname: &str) -> bool {
    pathname != "/"
}

/// 未解決の候補要素を集める
fn collect_candidates(document: &Document) -> Result<Vec<(Element, ScannedNode)>, JsValue> {
    let mut found = Vec::new();

    for (selector, role) in ROLE_SELECTORS {
        let list = document.query_selector_all(selector)?;
        for i in 0..list.length() {
            let Some(element) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if element.has_attribute(RESOLVED_ATTR) {
                continue;
            }

            let raw = element.text_content().unwrap_or_default().trim().to_string();
            let mut node = ScannedNode::new(CandidateText::new(raw, *role));
            node.id = Some(element.id()).filter(|id| !id.is_empty());
            found.push((element, node));
        }
    }

    Ok(found)
}

/// ページ内の候補をすべて解決して反映する
///
/// # Returns
/// 今回反映した要素数（反映に失敗した要素は未解決のまま残る）
pub fn resolve_page(document: &Document, resolver: &LabelResolver) -> Result<usize, JsValue> {
    let (elements, mut nodes): (Vec<Element>, Vec<ScannedNode>) =
        collect_candidates(document)?.into_iter().unzip();

    resolve_pending(&mut nodes, resolver);

    let pending: Vec<(&Element, &Resolution)> = elements
        .iter()
        .zip(&nodes)
        .filter_map(|(element, node)| node.resolved.as_ref().map(|r| (element, r)))
        .collect();

    let applied = apply_each(
        &pending,
        |(element, resolution)| apply_resolution(document, element, resolution),
        |e| gloo::console::error!(format!("ラベルの反映に失敗: {:?}", e)),
    );

    Ok(applied)
}

/// 各要素に反映する（失敗した要素は報告して次の要素へ進む）
///
/// # Returns
/// 反映に成功した数
fn apply_each<T, E>(
    items: &[T],
    mut apply: impl FnMut(&T) -> Result<(), E>,
    mut report: impl FnMut(E),
) -> usize {
    let mut applied = 0;
    for item in items {
        match apply(item) {
            Ok(()) => applied += 1,
            Err(e) => report(e),
        }
    }
    applied
}

/// 解決結果を要素に反映する
fn apply_resolution(
    document: &Document,
    element: &Element,
    resolution: &Resolution,
) -> Result<(), JsValue> {
    match resolution {
        Resolution::Label(label) => {
            match label {
                LabelResult::LocalEntityLink { label: text, target } => {
                    element.class_list().add_1(RESOLVED_OBJECT_CLASS)?;
                    let anchor = create_link(document, target, text, ENTITY_LINK_CLASS)?;
                    replace_children(element, &anchor)?;
                }
                LabelResult::ExternalIdentifierLink { scheme, target } => {
                    let class = format!("{} {}", IDENTIFIER_LINK_CLASS, scheme);
                    let anchor = create_link(document, target, target, &class)?;
                    open_in_new_tab(&anchor)?;
                    replace_children(element, &anchor)?;
                }
                LabelResult::GenericLabel { text, .. } | LabelResult::LiteralText { text } => {
                    element.set_text_content(Some(text));
                }
            }
            if let Some(title) = label.title() {
                element.set_attribute("title", title)?;
            }
        }
        Resolution::Provenance(Some(link)) => {
            let anchor = create_link(document, &link.href, &link.label, PROVENANCE_LINK_CLASS)?;
            if link.new_tab {
                open_in_new_tab(&anchor)?;
            }
            replace_children(element, &anchor)?;
        }
        Resolution::Provenance(None) => {}
    }

    element.set_attribute(RESOLVED_ATTR, "true")
}

fn create_link(document: &Document, href: &str, text: &str, class: &str) -> Result<Element, JsValue> {
    let anchor = document.create_element("a")?;
    anchor.set_attribute("href", href)?;
    anchor.set_attribute("class", class)?;
    anchor.set_text_content(Some(text));
    Ok(anchor)
}

fn open_in_new_tab(anchor: &Element) -> Result<(), JsValue> {
    anchor.set_attribute("target", "_blank")?;
    anchor.set_attribute("rel", "noopener")
}

fn replace_children(element: &Element, child: &Element) -> Result<(), JsValue> {
    element.set_text_content(None);
    element.append_child(child)?;
    Ok(())
}

/// 最初の区切り線を取り除く
pub fn remove_first_middle_line(document: &Document) -> Result<(), JsValue> {
    if let Some(line) = document.query_selector(".middle-line")? {
        line.remove();
    }
    Ok(())
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use linked_label_common::BaseUrlSet;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn wasm_resolve_page_is_idempotent() {
        let document = document();
        let body = document.body().unwrap();
        body.set_inner_html(
            r#"<span class="tripleObject">https://example.org/entity/1</span>
               <span class="triplePredicate">https://example.org/hasAuthor</span>"#,
        );

        let resolver = LabelResolver::new(BaseUrlSet::new(vec!["https://example.org/"]));
        assert_eq!(resolve_page(&document, &resolver).unwrap(), 2);
        let first_pass = body.inner_html();

        assert_eq!(resolve_page(&document, &resolver).unwrap(), 0);
        assert_eq!(body.inner_html(), first_pass);

        let link = document.query_selector("a.entity").unwrap().unwrap();
        assert_eq!(link.text_content().unwrap(), "entity/1");
        assert_eq!(link.get_attribute("href").unwrap(), "https://example.org/entity/1");
    }
}
