//! Page Context
//!
//! Page operations shared via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::config::SiteConfig;
use crate::handoff;
use crate::models::Item;
use crate::order_message;
use crate::store::{store_update_wizard, PageStateStoreFields, PageStore};
use crate::wizard::{DetailField, WizardSession};

/// Page-wide operations provided via context
#[derive(Clone, Copy)]
pub struct PageContext {
    store: PageStore,
    config: StoredValue<SiteConfig>,
    /// Pending toast expiry; replaced on every show
    toast_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl PageContext {
    pub fn new(store: PageStore, config: SiteConfig) -> Self {
        let toast_timer = StoredValue::new_local(None::<Timeout>);
        on_cleanup(move || {
            // Dropping a pending timeout clears it
            toast_timer.try_update_value(|slot| slot.take());
        });

        Self {
            store,
            config: StoredValue::new(config),
            toast_timer,
        }
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    /// Open the wizard at step 1 with everything cleared
    pub fn open_wizard(&self, item: Option<Item>) {
        tracing::info!(item = item.map(|i| i.id), "wizard opened");
        self.show_wizard(WizardSession::open(item));
    }

    /// Open the wizard on the details step with `item` already selected
    pub fn open_wizard_at_details(&self, item: Item) {
        tracing::info!(item = item.id, "wizard opened at details");
        self.show_wizard(WizardSession::open_at_details(item));
    }

    // The modal covers the page, so the mobile menu always closes with it
    fn show_wizard(&self, session: WizardSession) {
        self.store.menu_open().set(false);
        self.store.wizard().set(Some(session));
    }

    pub fn close_wizard(&self) {
        tracing::debug!("wizard closed");
        self.store.wizard().set(None);
    }

    pub fn select_item(&self, item: Item) {
        store_update_wizard(&self.store, |s| s.select(item));
    }

    pub fn set_field(&self, field: DetailField, value: String) {
        store_update_wizard(&self.store, |s| s.set_field(field, value));
    }

    pub fn advance(&self) {
        store_update_wizard(&self.store, |s| {
            if s.advance() {
                tracing::debug!(step = s.step().number(), "wizard advanced");
            }
        });
    }

    pub fn retreat(&self) {
        store_update_wizard(&self.store, |s| {
            if s.retreat() {
                tracing::debug!(step = s.step().number(), "wizard went back");
            }
        });
    }

    /// Compose the order, hand it to the chat service, close and confirm
    pub fn finish_wizard(&self) {
        let Some(session) = self.store.wizard().get_untracked() else {
            return;
        };
        let config = self.config();
        let message = order_message::compose(&session, &config.planner_year);
        let url = order_message::chat_url(&config, &message);

        match handoff::open_chat(&url) {
            Ok(()) => tracing::info!(
                category = session.category().map(|c| c.as_str()),
                "order handed off to chat"
            ),
            Err(e) => tracing::warn!(error = %e, "chat hand-off failed"),
        }

        self.close_wizard();
        self.show_toast();
    }

    /// Show the toast, restarting the countdown if it is already visible
    pub fn show_toast(&self) {
        let store = self.store;
        let generation = store.toast().write().show();
        let duration = self.config.with_value(|c| c.toast_duration_ms);

        let timeout = Timeout::new(duration, move || {
            if store.toast().try_update(|t| t.expire(generation)) == Some(true) {
                tracing::debug!(generation, "toast hidden");
            }
        });

        // Replacing the slot drops the previous timeout, which clears it
        self.toast_timer.update_value(|slot| {
            slot.replace(timeout);
        });
        tracing::debug!(generation, duration, "toast shown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CUSTOM_PARTY_KIT, PLANNER_TILE};
    use crate::store::PageState;
    use crate::wizard::WizardStep;
    use reactive_stores::Store;

    fn page() -> (PageStore, PageContext) {
        let owner = Owner::new();
        owner.set();
        // Keep the owner alive for the whole test so the store isn't disposed
        std::mem::forget(owner);
        let store = Store::new(PageState::default());
        (store, PageContext::new(store, SiteConfig::default()))
    }

    #[test]
    fn test_open_wizard_at_details_closes_menu() {
        let (store, ctx) = page();
        store.menu_open().set(true);
        ctx.open_wizard_at_details(CUSTOM_PARTY_KIT);

        assert!(!store.menu_open().get_untracked());
        let step = store.wizard().with_untracked(|w| w.as_ref().map(|s| s.step()));
        assert_eq!(step, Some(WizardStep::Details));
    }

    #[test]
    fn test_open_wizard_closes_menu() {
        let (store, ctx) = page();
        store.menu_open().set(true);
        ctx.open_wizard(Some(PLANNER_TILE));

        assert!(!store.menu_open().get_untracked());
        let step = store.wizard().with_untracked(|w| w.as_ref().map(|s| s.step()));
        assert_eq!(step, Some(WizardStep::ProductSelect));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::store::PageState;
    use gloo_timers::future::TimeoutFuture;
    use reactive_stores::Store;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn page() -> (PageStore, PageContext) {
        let owner = Owner::new();
        owner.set();
        // Keep the owner alive for the whole test so the store isn't disposed
        std::mem::forget(owner);
        let store = Store::new(PageState::default());
        (store, PageContext::new(store, SiteConfig::default()))
    }

    #[wasm_bindgen_test]
    async fn toast_hides_after_duration() {
        let (store, ctx) = page();
        ctx.show_toast();
        assert!(store.toast().get_untracked().visible);
        TimeoutFuture::new(3100).await;
        assert!(!store.toast().get_untracked().visible);
    }

    #[wasm_bindgen_test]
    async fn repeated_show_restarts_countdown() {
        let (store, ctx) = page();
        ctx.show_toast();
        TimeoutFuture::new(2000).await;
        ctx.show_toast();
        TimeoutFuture::new(2000).await;
        assert!(store.toast().get_untracked().visible);
        TimeoutFuture::new(1100).await;
        assert!(!store.toast().get_untracked().visible);
    }

    #[wasm_bindgen_test]
    fn finish_closes_wizard_and_shows_toast() {
        let (store, ctx) = page();
        ctx.open_wizard(Some(crate::catalog::PLANNER_TILE));
        ctx.advance();
        ctx.set_field(DetailField::Theme, "Floral".into());
        ctx.set_field(DetailField::Name, "Ana".into());
        ctx.advance();
        ctx.finish_wizard();
        assert!(store.wizard().get_untracked().is_none());
        assert!(store.toast().get_untracked().visible);
    }
}
