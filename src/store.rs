//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::feedback::ToastState;
use crate::wizard::WizardSession;

/// Page-wide UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Open wizard session (None = closed)
    pub wizard: Option<WizardSession>,
    pub toast: ToastState,
    pub scroll_top_visible: bool,
    /// Mobile navigation menu
    pub menu_open: bool,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply `f` to the open session; no-op when the wizard is closed
pub fn store_update_wizard(store: &PageStore, f: impl FnOnce(&mut WizardSession)) {
    store.wizard().update(|wizard| {
        if let Some(session) = wizard {
            f(session);
        }
    });
}

/// Read from the open session, `None` when the wizard is closed
pub fn store_with_wizard<U>(store: &PageStore, f: impl FnOnce(&WizardSession) -> U) -> Option<U> {
    store.wizard().with(|w| w.as_ref().map(f))
}
