//! 警告バナーコンポーネント

use leptos::prelude::*;

#[component]
pub fn AlertBanner(message: String) -> impl IntoView {
    let (visible, set_visible) = signal(true);

    view! {
        <Show when=move || visible.get()>
            <div class="alert alert-warning alert-dismissible" role="alert">
                <span>{message.clone()}</span>
                <button
                    type="button"
                    class="close"
                    aria-label="Close"
                    on:click=move |_| set_visible.set(false)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
