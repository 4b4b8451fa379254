//! Linked Label ブラウザアダプタ (Leptos + WASM)

mod app;
mod api;
mod components;
mod dom;
mod navigation;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_bindgen_futures::spawn_local(app::run());
}
