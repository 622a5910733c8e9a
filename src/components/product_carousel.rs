//! Product Carousel Component
//!
//! Three-card window over a catalog list. Side cards step the carousel,
//! the center card starts a quote for its item.

use leptos::prelude::*;
use leptos_carousel::*;

use crate::models::Item;

/// Card shape
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CardVariant {
    #[default]
    Portrait,
    Square,
}

impl CardVariant {
    fn class(&self) -> &'static str {
        match self {
            CardVariant::Portrait => "portrait",
            CardVariant::Square => "square",
        }
    }
}

#[component]
pub fn ProductCarousel(
    items: &'static [Item],
    #[prop(optional)] variant: CardVariant,
    #[prop(into)] on_select: Callback<Item>,
) -> impl IntoView {
    let Some(carousel) = create_carousel(items.to_vec()) else {
        return ().into_any();
    };

    let cards = move || {
        carousel.with(|c| c.visible_slots()).into_iter().map(|slot| {
            let is_center = slot.position.is_center();
            let item = slot.item;
            let class = format!(
                "carousel-card {} {}{}",
                variant.class(),
                slot.position.as_str(),
                if is_center { "" } else { " dimmed" }
            );
            view! {
                <div class=class on:click=make_on_slot_click(carousel, slot.position, on_select)>
                    <div class="carousel-card-image">
                        <img src=item.image alt=item.name />
                    </div>
                    {is_center.then(|| view! {
                        <div class="carousel-card-caption">
                            <h3>{item.name}</h3>
                            <p class="carousel-card-cta">"💬 Solicitar Orçamento"</p>
                        </div>
                    })}
                </div>
            }
        }).collect_view()
    };

    view! {
        <div class="carousel">
            <button class="carousel-arrow left" on:click=make_on_step(carousel, false)>"‹"</button>
            <button class="carousel-arrow right" on:click=make_on_step(carousel, true)>"›"</button>
            <div class="carousel-track">{cards}</div>
        </div>
    }.into_any()
}
