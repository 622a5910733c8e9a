//! Final Call-to-Action and Footer Components

use leptos::prelude::*;

use crate::context::PageContext;
use crate::handoff;

#[component]
pub fn FinalCta() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext should be provided");

    let talk_on_chat = move |_: leptos::ev::MouseEvent| {
        let url = ctx.config().contact_url;
        if let Err(e) = handoff::open_chat(&url) {
            tracing::warn!(error = %e, "contact link failed");
        }
    };

    view! {
        <section class="final-cta">
            <h2>"Transforme suas ideias em " <br/> <span class="font-brand">"papelaria única"</span></h2>
            <p>"Não deixe suas memórias e planos em branco. Comece a criar seu personalizado hoje mesmo."</p>
            <div class="final-cta-actions">
                <button class="btn-primary large" on:click=move |_| ctx.open_wizard(None)>
                    "Quero Personalizar"
                </button>
                <a href="#agendas" class="btn-outline large">"Ver Catálogo"</a>
                <button class="btn-chat" on:click=talk_on_chat>"💬 Falar no WhatsApp"</button>
            </div>
        </section>
    }
}

/// Footer link columns (heading, links)
const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    ("Produtos", &["Agendas", "Planners", "Cadernos", "Kits de Festa"]),
    ("Ajuda", &["Rastrear Pedido", "Política de Troca", "Prazos de Entrega", "Fale Conosco"]),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <img src="/logo_new.jpg" alt="Entre Linhas Logo" />
                        <span class="font-brand">"Entre Linhas"</span>
                    </div>
                    <p>"Papelaria afetiva feita para organizar sua rotina e celebrar seus momentos."</p>
                </div>
                {FOOTER_COLUMNS.iter().map(|(heading, links)| view! {
                    <div>
                        <h4>{*heading}</h4>
                        <ul>
                            {links.iter().map(|l| view! { <li><a href="#">{*l}</a></li> }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
                <div>
                    <h4>"Pagamento Seguro"</h4>
                    <div class="payment-badges">
                        <span>"PIX"</span>
                        <span>"VISA"</span>
                        <span>"MASTER"</span>
                    </div>
                </div>
            </div>
            <div class="footer-copyright">"© 2026 Entre Linhas Papelaria. Todos os direitos reservados."</div>
        </footer>
    }
}
