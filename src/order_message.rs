//! Order Message
//!
//! Builds the text handed off to the chat service and the link that opens it.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;
use crate::wizard::{DetailField, OrderDetails, Selection, WizardSession, PLACEHOLDER};

/// Product name used when the wizard finishes without a selection
const FALLBACK_PRODUCT: &str = "Personalizado";

/// Same set `encodeURIComponent` leaves untouched
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Compose the message for the current session
pub fn compose(session: &WizardSession, planner_year: &str) -> String {
    match session.selection() {
        Some(Selection { item, details }) => compose_details(item.name, details, planner_year),
        None => planner_message(FALLBACK_PRODUCT, PLACEHOLDER, PLACEHOLDER, planner_year),
    }
}

fn compose_details(product: &str, details: &OrderDetails, planner_year: &str) -> String {
    let show = |f: DetailField| details.display(f);
    match details {
        OrderDetails::PartyKit { .. } => format!(
            "Olá! Gostaria de um orçamento para o item: *{}*\n\n\
             *Detalhes do Evento:*\n\
             - Tema: {}\n\
             - Aniversariante: {}\n\
             - Idade: {}\n\
             - Data: {}",
            product,
            show(DetailField::Theme),
            show(DetailField::Name),
            show(DetailField::Age),
            show(DetailField::Date),
        ),
        OrderDetails::Notebook { .. } => format!(
            "Olá! Gostaria de encomendar: *{}*\n\n\
             *Detalhes do Caderno:*\n\
             - Tema Escolhido: {}\n\
             - Nome do Aluno: {}\n\
             - Série/Turma: {}\n\
             - Matéria: {}",
            product,
            show(DetailField::Theme),
            show(DetailField::Name),
            show(DetailField::Grade),
            show(DetailField::Subject),
        ),
        OrderDetails::Planner { .. } => planner_message(
            product,
            show(DetailField::Theme),
            show(DetailField::Name),
            planner_year,
        ),
    }
}

fn planner_message(product: &str, theme: &str, cover_name: &str, year: &str) -> String {
    format!(
        "Olá! Gostaria de encomendar: *{}*\n\n\
         *Detalhes da Agenda:*\n\
         - Tema da Capa: {}\n\
         - Nome na Capa: {}\n\
         - Ano: {}",
        product, theme, cover_name, year
    )
}

/// Percent-encode like `encodeURIComponent`
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Chat link that starts a conversation pre-filled with `message`
pub fn chat_url(config: &SiteConfig, message: &str) -> String {
    format!(
        "{}?phone={}&text={}",
        config.chat_base_url,
        encode_component(&config.chat_phone),
        encode_component(message)
    )
}
