//! Benefits and About Components

use leptos::prelude::*;

use crate::catalog::BENEFITS;
use crate::models::BenefitIcon;

fn icon_glyph(icon: BenefitIcon) -> &'static str {
    match icon {
        BenefitIcon::Palette => "🎨",
        BenefitIcon::Heart => "❤",
        BenefitIcon::Gift => "🎁",
        BenefitIcon::Truck => "🚚",
        BenefitIcon::Chat => "💬",
    }
}

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section class="benefits">
            <div class="benefits-grid">
                {BENEFITS.iter().map(|b| view! {
                    <div class="benefit-card">
                        <div class="benefit-icon">{icon_glyph(b.icon)}</div>
                        <h3>{b.title}</h3>
                        <p>{b.description}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

/// About the maker
#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about">
            <div class="about-photo">
                <img src="/logo_new.jpg" alt="Criadora Entre Linhas" />
            </div>
            <div class="about-copy">
                <h2>"Olá! Sou a criadora da " <span class="font-brand">"Entre Linhas"</span></h2>
                <p>
                    "Sempre fui apaixonada por papelaria e acredito que a organização pode ser leve e inspiradora. "
                    "Cada agenda e caderno que sai do ateliê leva um pedacinho do meu coração."
                </p>
                <p>
                    "Meu objetivo é criar ferramentas que ajudem você a realizar seus sonhos, com designs únicos "
                    "que expressam sua personalidade. Seja bem-vindo(a) ao meu cantinho!"
                </p>
                <div class="about-tags">
                    <span class="about-tag pink">"❤ Feito com Amor"</span>
                    <span class="about-tag cyan">"★ Design Exclusivo"</span>
                </div>
            </div>
        </section>
    }
}
