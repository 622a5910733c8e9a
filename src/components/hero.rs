//! Hero Section Component
//!
//! Headline, calls to action and the rotating image pair.

use leptos::prelude::*;
use leptos_carousel::{bind_autoplay, create_carousel};

use crate::catalog::HERO_IMAGES;
use crate::context::PageContext;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext should be provided");

    let hero = create_carousel(HERO_IMAGES.to_vec());
    if let Some(hero) = hero {
        bind_autoplay(hero, ctx.config().hero_interval_ms);
    }

    // Current image and the one after it
    let pair = move || {
        hero.map(|h| h.with(|c| {
            let [_, center, right] = c.visible_slots();
            (center.item, right.item)
        }))
        .unwrap_or_default()
    };

    view! {
        <section class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="hero-badge">"✨ Papelaria que emociona"</div>
                    <h1>
                        "Papelaria Criativa e Personalizados que "
                        <span class="font-brand">"Contam Histórias"</span>
                    </h1>
                    <p>
                        "Agendas, cadernos exclusivos e personalizados únicos para aniversários e momentos especiais. Feito à mão, com o coração."
                    </p>
                    <div class="hero-actions">
                        <a href="#agendas" class="btn-primary">"Ver Agendas →"</a>
                        <button class="btn-outline" on:click=move |_| ctx.open_wizard(None)>
                            "Personalizar Meu Produto"
                        </button>
                    </div>
                </div>
                <div class="hero-images">
                    <img class="hero-image first" src=move || pair().0 alt="Caderno Personalizado" />
                    <img class="hero-image second" src=move || pair().1 alt="Caderno Personalizado 2" />
                </div>
            </div>
        </section>
    }
}
