//! Catalog Section Components
//!
//! Planner, notebook and party-kit sections, each driving its own carousel.

use leptos::prelude::*;

use crate::catalog::{CUSTOM_PARTY_KIT, NOTEBOOKS, PARTY_KITS, PLANNERS};
use crate::components::{CardVariant, ProductCarousel};
use crate::context::PageContext;
use crate::models::Item;

#[component]
pub fn PlannerSection() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext should be provided");

    view! {
        <section id="agendas" class="catalog-section planners">
            <div class="section-heading">
                <h2>"Agendas 2026"</h2>
                <p>"Organize seu ano com estilo."</p>
                <p class="font-brand">"Monte sua agenda do seu jeito"</p>
            </div>
            <ProductCarousel
                items=PLANNERS
                on_select=move |item: Item| ctx.open_wizard(Some(item))
            />
        </section>
    }
}

#[component]
pub fn NotebookSection() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext should be provided");

    view! {
        <section id="cadernos" class="catalog-section notebooks">
            <div class="section-heading">
                <h2>"Volta às Aulas 📚"</h2>
                <p>"Cadernos com capas exclusivas dos seus personagens favoritos."</p>
            </div>
            <ProductCarousel
                items=NOTEBOOKS
                on_select=move |item: Item| ctx.open_wizard(Some(item))
            />
        </section>
    }
}

/// Party kits skip the product step: picking a card goes straight to the event details
#[component]
pub fn PartySection() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext should be provided");

    view! {
        <section id="aniversario" class="catalog-section parties">
            <div class="section-heading">
                <span class="section-kicker">"Momento Especial"</span>
                <h2>"Personalizados para Sua Festa 🎈"</h2>
                <p>"Kits completos, convites e lembrancinhas que encantam."</p>
            </div>
            <ProductCarousel
                items=PARTY_KITS
                variant=CardVariant::Square
                on_select=move |item: Item| ctx.open_wizard_at_details(item)
            />
            <button class="btn-outline-dark" on:click=move |_| ctx.open_wizard(Some(CUSTOM_PARTY_KIT))>
                "Crie o Kit Perfeito para Seu Evento"
            </button>
        </section>
    }
}
