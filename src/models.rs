//! Frontend Models
//!
//! Catalog entries and static page content.

/// Product family an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Planner,
    Notebook,
    PartyKit,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Planner => "planner",
            Category::Notebook => "notebook",
            Category::PartyKit => "party-kit",
        }
    }
}

/// Catalog item (immutable for the whole session)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    /// Opaque asset reference
    pub image: &'static str,
}

/// Demo video shown in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoEntry {
    pub title: &'static str,
    pub media: &'static str,
    pub poster: &'static str,
}

/// Icon used by a benefit card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenefitIcon {
    Palette,
    Heart,
    Gift,
    Truck,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub icon: BenefitIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub author: &'static str,
    pub role: &'static str,
    pub text: &'static str,
}

/// Step of the "how it works" walkthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HowItWorksStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}
