//! サイト設定の取得（`GET /get_config`）
//!
//! ページ読み込み時に1回だけ取得する。リトライはしない。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use linked_label_common::config::CONFIG_ENDPOINT;
use linked_label_common::{Error, Result, SiteConfig};

/// JsValueのエラーを共通エラーに変換
fn fetch_error(value: JsValue) -> Error {
    Error::Fetch(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// `/get_config` を取得する
pub async fn fetch_site_config() -> Result<SiteConfig> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(CONFIG_ENDPOINT, &opts).map_err(fetch_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(fetch_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Fetch("window がありません".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(fetch_error)?;
    let resp: Response = resp_value.dyn_into().map_err(fetch_error)?;

    if !resp.ok() {
        return Err(Error::Fetch(format!("{}: HTTP {}", CONFIG_ENDPOINT, resp.status())));
    }

    let json = JsFuture::from(resp.json().map_err(fetch_error)?)
        .await
        .map_err(fetch_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Fetch(e.to_string()))
}
