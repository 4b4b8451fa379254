//! エンティティ詳細ページへの遷移と検索ボックス

use std::cell::Cell;
use std::rc::Rc;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement};
use linked_label_common::entity_path;

/// 検索中に表示するスピナー
pub const SPINNER_MARKUP: &str = r#"<span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>
<span class="ml-1">Loading...</span>"#;

/// 検索欄の入力からエンティティのキーを取り出す（空ならNone）
pub fn search_key(input: &str) -> Option<&str> {
    let key = input.trim();
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// エンティティ詳細ページへ遷移
pub fn navigate_to_entity(key: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))?;
    window.location().set_href(&entity_path(key))
}

/// `a.entity` のクリックをエンティティ詳細ページへの遷移にする
pub fn install_entity_link_handler(document: &Document) {
    EventListener::new_with_options(
        document,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(anchor) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("a.entity").ok().flatten())
            else {
                return;
            };

            event.prevent_default();
            // href属性の値（解決前のURI）をそのままキーにする
            if let Some(key) = anchor.get_attribute("href") {
                if let Err(e) = navigate_to_entity(&key) {
                    gloo::console::error!(format!("遷移に失敗: {:?}", e));
                }
            }
        },
    )
    .forget();
}

/// 検索ボタン（`#exploreSubmit`）のクリックで入力欄のURIへ遷移する
///
/// 遷移中の2回目以降のクリックは無視する
pub fn install_explore_handler(document: &Document) {
    let Some(button) = document.get_element_by_id("exploreSubmit") else {
        return;
    };

    let in_flight = Rc::new(Cell::new(false));
    let document = document.clone();
    let target = button.clone();

    EventListener::new(&target, "click", move |_| {
        if in_flight.get() {
            return;
        }

        let value = document
            .get_element_by_id("searchByURI")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();

        let Some(key) = search_key(&value) else {
            return;
        };

        in_flight.set(true);
        button.set_inner_html(SPINNER_MARKUP);
        if let Err(e) = navigate_to_entity(key) {
            gloo::console::error!(format!("遷移に失敗: {:?}", e));
            in_flight.set(false);
        }
    })
    .forget();
}
