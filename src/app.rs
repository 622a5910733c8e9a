//! Landing Page App
//!
//! Owns the page store and composes the sections top to bottom.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    About, Benefits, FinalCta, Footer, Header, Hero, HowItWorks, NotebookSection, PartySection,
    PlannerSection, ScrollTopButton, Testimonials, Toast, VideoGallery, WizardModal,
};
use crate::config::SiteConfig;
use crate::context::PageContext;
use crate::store::PageState;

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load();
    let store = Store::new(PageState::default());

    // Provide state to all children
    provide_context(store);
    provide_context(PageContext::new(store, config));

    view! {
        <div class="landing-page">
            <Header />
            <Hero />
            <Benefits />
            <About />
            <PlannerSection />
            <NotebookSection />
            <PartySection />
            <Testimonials />
            <VideoGallery />
            <HowItWorks />
            <FinalCta />
            <Footer />

            <WizardModal />
            <Toast />
            <ScrollTopButton />
        </div>
    }
}
