//! Toast and Back-to-Top Components

use leptos::prelude::*;

use crate::context::PageContext;
use crate::feedback::{current_scroll_offset, scroll_to_top, scroll_top_visible};
use crate::store::{use_page_store, PageStateStoreFields};

/// Success toast shown after the chat hand-off
#[component]
pub fn Toast() -> impl IntoView {
    let store = use_page_store();

    view! {
        <Show when=move || store.toast().with(|t| t.visible)>
            <div class="toast">
                <span class="toast-icon">"✔"</span>
                <div>
                    <div class="toast-title">"Redirecionando para WhatsApp!"</div>
                    <div class="toast-subtitle">"Aguarde um momento..."</div>
                </div>
            </div>
        </Show>
    }
}

/// Appears once the page is scrolled past the configured threshold
#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext should be provided");
    let store = use_page_store();
    let threshold = ctx.config().scroll_top_threshold;

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let visible = scroll_top_visible(current_scroll_offset(), threshold);
        if store.scroll_top_visible().get_untracked() != visible {
            store.scroll_top_visible().set(visible);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || store.scroll_top_visible().get()>
            <button class="scroll-top" aria-label="Voltar ao topo" on:click=move |_| scroll_to_top()>
                "↑"
            </button>
        </Show>
    }
}
