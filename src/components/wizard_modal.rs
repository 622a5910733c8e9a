//! Wizard Modal Component
//!
//! Personalization wizard: product tiles, category details, review and hand-off.

use leptos::prelude::*;

use crate::catalog::{NOTEBOOK_TILE, PARTY_KIT_TILE, PLANNER_TILE};
use crate::context::PageContext;
use crate::models::{Category, Item};
use crate::store::{store_with_wizard, use_page_store};
use crate::wizard::{DetailField, WizardSession, WizardStep};

#[component]
pub fn WizardModal() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext should be provided");
    let store = use_page_store();

    // Memos so typing in a field does not rebuild the step views
    let step = Memo::new(move |_| store_with_wizard(&store, WizardSession::step));
    let title = Memo::new(move |_| {
        store_with_wizard(&store, WizardSession::title).unwrap_or_default()
    });
    let can_advance = Memo::new(move |_| {
        store_with_wizard(&store, WizardSession::can_advance).unwrap_or(false)
    });

    view! {
        <Show when=move || step.get().is_some()>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h3>{move || title.get()}</h3>
                        <button class="modal-close" on:click=move |_| ctx.close_wizard()>"✕"</button>
                    </div>

                    <div class="modal-body">
                        <StepIndicator step=step />
                        {move || match step.get() {
                            Some(WizardStep::ProductSelect) => view! { <ProductStep /> }.into_any(),
                            Some(WizardStep::Details) => view! { <DetailsStep /> }.into_any(),
                            Some(WizardStep::Review) => view! { <ReviewStep /> }.into_any(),
                            None => ().into_any(),
                        }}
                    </div>

                    <div class="modal-footer">
                        {move || if step.get() > Some(WizardStep::ProductSelect) {
                            view! {
                                <button class="btn-back" on:click=move |_| ctx.retreat()>"Voltar"</button>
                            }.into_any()
                        } else {
                            view! { <div></div> }.into_any()
                        }}
                        {move || if step.get() < Some(WizardStep::Review) {
                            view! {
                                <button
                                    class=move || if can_advance.get() { "btn-next" } else { "btn-next disabled" }
                                    disabled=move || !can_advance.get()
                                    on:click=move |_| ctx.advance()
                                >
                                    "Próximo ›"
                                </button>
                            }.into_any()
                        } else {
                            view! {
                                <button class="btn-finish" on:click=move |_| ctx.finish_wizard()>
                                    "Finalizar no WhatsApp 💬"
                                </button>
                            }.into_any()
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Numbered dots, filled up to the current step
#[component]
fn StepIndicator(step: Memo<Option<WizardStep>>) -> impl IntoView {
    view! {
        <div class="step-indicator">
            {WizardStep::ALL.iter().map(|s| {
                let s = *s;
                let class = move || {
                    if step.get().is_some_and(|current| current >= s) { "step-dot active" } else { "step-dot" }
                };
                view! { <div class=class>{s.number()}</div> }
            }).collect_view()}
        </div>
    }
}

#[component]
fn ProductStep() -> impl IntoView {
    view! {
        <div class="wizard-step">
            <h4>"1. Escolha o Produto"</h4>
            <div class="product-tiles">
                <ProductTile item=PLANNER_TILE label="Agenda" badge="Orçamento" />
                <ProductTile item=NOTEBOOK_TILE label="Cadernos" badge="Orçamento" />
                <ProductTile item=PARTY_KIT_TILE label="Kits Personalizados" badge="Sob Medida" wide=true />
            </div>
        </div>
    }
}

#[component]
fn ProductTile(
    item: Item,
    label: &'static str,
    badge: &'static str,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext should be provided");
    let store = use_page_store();
    let is_selected = move || {
        store_with_wizard(&store, WizardSession::category).flatten() == Some(item.category)
    };

    let class = move || {
        let mut class = String::from("product-tile");
        if wide {
            class.push_str(" wide");
        }
        if is_selected() {
            class.push_str(" selected");
        }
        class
    };

    view! {
        <div class=class on:click=move |_| ctx.select_item(item)>
            <div class="product-tile-image">
                <img src=item.image alt=label />
            </div>
            <div class="product-tile-caption">
                <div class="product-tile-label">{label}</div>
                <div class="product-tile-badge">{badge}</div>
            </div>
        </div>
    }
}

#[component]
fn DetailsStep() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext should be provided");
    let store = use_page_store();
    let category = Memo::new(move |_| {
        store_with_wizard(&store, WizardSession::category).flatten()
    });
    let planner_year = ctx.config().planner_year;

    let heading = move || match category.get() {
        Some(Category::PartyKit) => "2. Detalhes do Evento",
        _ => "2. Detalhes do Pedido",
    };

    let fields = move || match category.get() {
        Some(Category::PartyKit) => view! {
            <DetailInput field=DetailField::Theme label="Tema da Festa" placeholder="Ex: Safari, Princesas, Boteco..." />
            <div class="field-row">
                <DetailInput field=DetailField::Name label="Nome Aniversariante" placeholder="Ex: Miguel" />
                <DetailInput field=DetailField::Age label="Idade a completar" placeholder="Ex: 5 anos" />
            </div>
            <DetailInput field=DetailField::Date label="Data da Festa" input_type="date" />
        }.into_any(),
        Some(Category::Planner) => view! {
            <DetailInput field=DetailField::Theme label="Tema da Agenda" placeholder="Ex: Floral, Minimalista, Logo da Empresa..." />
            <DetailInput field=DetailField::Name label="Nome na Capa" placeholder="Ex: Dra. Ana Silva" />
            <div class="field-fixed">
                <label>"Ano"</label>
                <div>{format!("{} - Edição Completa", planner_year)}</div>
            </div>
        }.into_any(),
        Some(Category::Notebook) => view! {
            <DetailInput field=DetailField::Theme label="Tema do Caderno" placeholder="Ex: Homem-Aranha, Unicórnio, Futebol..." />
            <DetailInput field=DetailField::Name label="Nome do Aluno" placeholder="Ex: João Pedro" />
            <div class="field-row">
                <DetailInput field=DetailField::Grade label="Série / Turma" placeholder="Ex: 5º Ano B" />
                <DetailInput field=DetailField::Subject label="Matéria (Opcional)" placeholder="Ex: Matemática" />
            </div>
        }.into_any(),
        None => ().into_any(),
    };

    view! {
        <div class="wizard-step">
            <h4>{heading}</h4>
            {fields}
        </div>
    }
}

/// Free-text input bound to one detail field
#[component]
fn DetailInput(
    field: DetailField,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext should be provided");
    let store = use_page_store();
    let value = move || {
        store_with_wizard(&store, |s| {
            s.details().and_then(|d| d.field(field)).unwrap_or_default().to_string()
        })
        .unwrap_or_default()
    };

    view! {
        <div class="field">
            <label>{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| ctx.set_field(field, event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn ReviewStep() -> impl IntoView {
    let store = use_page_store();
    let is_party = move || {
        store_with_wizard(&store, WizardSession::category).flatten() == Some(Category::PartyKit)
    };
    let rows = move || store_with_wizard(&store, WizardSession::review_rows).unwrap_or_default();

    view! {
        <div class="wizard-step review">
            <div class="review-check">"✔"</div>
            <h4>"Tudo Pronto!"</h4>
            <p>
                {move || if is_party() {
                    "Seu orçamento prévio está pronto. Vamos finalizar os detalhes no WhatsApp?"
                } else {
                    "Seu pedido está pronto para ser enviado para nossa equipe no WhatsApp."
                }}
            </p>
            <div class="review-rows">
                {move || rows().into_iter().map(|(label, value)| view! {
                    <div class="review-row">
                        <span class="review-label">{label}</span>
                        <span class="review-value">{value}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
