//! UI Components
//!
//! Landing page sections and the personalization wizard.

mod header;
mod hero;
mod benefits;
mod product_carousel;
mod catalog_sections;
mod social_proof;
mod how_it_works;
mod footer;
mod wizard_modal;
mod feedback_widgets;

pub use header::Header;
pub use hero::Hero;
pub use benefits::{About, Benefits};
pub use product_carousel::{CardVariant, ProductCarousel};
pub use catalog_sections::{NotebookSection, PartySection, PlannerSection};
pub use social_proof::{Testimonials, VideoGallery};
pub use how_it_works::HowItWorks;
pub use footer::{FinalCta, Footer};
pub use wizard_modal::WizardModal;
pub use feedback_widgets::{ScrollTopButton, Toast};
