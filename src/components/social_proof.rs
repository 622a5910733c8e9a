//! Testimonials and Video Gallery Components

use leptos::prelude::*;

use crate::catalog::{TESTIMONIALS, VIDEOS};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <h2>"Quem Compra, Ama ❤️"</h2>
            <div class="testimonials-grid">
                {TESTIMONIALS.iter().map(|t| view! {
                    <div class="testimonial-card">
                        <div class="stars">"★★★★★"</div>
                        <p class="testimonial-text">"\"" {t.text} "\""</p>
                        <div class="testimonial-author">{t.author}</div>
                        <div class="testimonial-role">{t.role}</div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

/// Vertical (9:16) demo videos
#[component]
pub fn VideoGallery() -> impl IntoView {
    view! {
        <section class="video-gallery">
            <div class="section-heading">
                <h2>"Veja Nossos Personalizados 🎥"</h2>
                <p>"Confira alguns dos produtos que já criamos para nossos clientes"</p>
            </div>
            <div class="video-grid">
                {VIDEOS.iter().map(|v| view! {
                    <div class="video-card">
                        <div class="video-frame">
                            <video src=v.media poster=v.poster controls=true muted=true preload="metadata">
                                "Seu navegador não suporta o elemento de vídeo."
                            </video>
                        </div>
                        <h3>{v.title}</h3>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
