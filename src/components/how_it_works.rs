//! How It Works Component

use leptos::prelude::*;

use crate::catalog::HOW_IT_WORKS;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="how-it-works">
            <h2>"Como Funciona a Personalização?"</h2>
            <div class="steps-grid">
                {HOW_IT_WORKS.iter().map(|s| view! {
                    <div class="how-step">
                        <div class="how-step-number">{s.number}</div>
                        <h3>{s.title}</h3>
                        <p>{s.description}</p>
                    </div>
                }).collect_view()}
                <div class="steps-line"></div>
            </div>
        </section>
    }
}
