//! Header Component
//!
//! Brand, anchor navigation and the mobile menu.

use leptos::prelude::*;

use crate::context::PageContext;
use crate::feedback::scroll_to_top;
use crate::store::{use_page_store, PageStateStoreFields};

/// Section anchors (href, label)
const NAV_LINKS: &[(&str, &str)] = &[
    ("#agendas", "Agendas"),
    ("#cadernos", "Cadernos"),
    ("#aniversario", "Festas"),
];

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext should be provided");
    let store = use_page_store();

    view! {
        <header class="site-header">
            <div class="header-bar">
                <div class="brand" on:click=move |_| scroll_to_top()>
                    <img src="/logo_new.jpg" alt="Entre Linhas Logo" class="brand-logo" />
                    <span class="font-brand">"Entre Linhas"</span>
                </div>

                <nav class="desktop-nav">
                    {NAV_LINKS.iter().map(|(href, label)| view! {
                        <a href=*href>{*label}</a>
                    }).collect_view()}
                    <button class="btn-primary small" on:click=move |_| ctx.open_wizard(None)>
                        "💬 Personalizar"
                    </button>
                </nav>

                <button
                    class="menu-toggle"
                    on:click=move |_| store.menu_open().update(|open| *open = !*open)
                >
                    {move || if store.menu_open().get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || store.menu_open().get()>
                <div class="mobile-nav">
                    {NAV_LINKS.iter().map(|(href, label)| view! {
                        <a href=*href on:click=move |_| store.menu_open().set(false)>{*label}</a>
                    }).collect_view()}
                    <button class="btn-primary wide" on:click=move |_| ctx.open_wizard(None)>
                        "Personalizar Agora"
                    </button>
                </div>
            </Show>
        </header>
    }
}
