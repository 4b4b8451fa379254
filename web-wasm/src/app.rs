//! ページ起動処理
//!
//! 1. 遷移・検索のハンドラを登録
//! 2. `/get_config` を取得（完了するまで走査しない）
//! 3. ページ内の候補を解決して反映

use leptos::prelude::*;
use linked_label_common::LabelResolver;
use crate::api::config::fetch_site_config;
use crate::components::alert_banner::AlertBanner;
use crate::{dom, navigation};

pub async fn run() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    navigation::install_entity_link_handler(&document);
    navigation::install_explore_handler(&document);

    let pathname = window.location().pathname().unwrap_or_default();
    if !dom::should_run_label_pass(&pathname) {
        return;
    }

    // 取得に失敗した場合はベースURLなし（汎用URI判定）で続行し、警告を表示する
    let resolver = match fetch_site_config().await {
        Ok(config) => LabelResolver::from_config(&config),
        Err(e) => {
            gloo::console::warn!(format!("設定の取得に失敗: {}", e));
            let message = "ベースURLの設定を取得できませんでした。URIは短縮せずに表示しています。".to_string();
            leptos::mount::mount_to_body(move || view! { <AlertBanner message=message /> });
            LabelResolver::default()
        }
    };

    match dom::resolve_page(&document, &resolver) {
        Ok(count) => gloo::console::debug!(format!("{}件のラベルを解決", count)),
        Err(e) => gloo::console::error!(format!("ラベルの反映に失敗: {:?}", e)),
    }

    if let Err(e) = dom::remove_first_middle_line(&document) {
        gloo::console::error!(format!("区切り線の削除に失敗: {:?}", e));
    }
}
