//! # Handbook
//!
//! Content model, navigation state and onboarding walkthrough for the
//! BeeSim staff handbook.
//!
//! The handbook is a static tree of sections (guidelines, roles, commands,
//! punishment tables) plus a short slideshow that introduces a new staff
//! member to their rank. This crate owns the data and the view state; a
//! front end turns raw input into calls on it and shows what it renders.
//!
//! ## Architecture
//!
//! ```text
//! ContentModel ──▶ Walkthrough ──▶ [Slide; 5] ──▶ Renderer
//!      │                                             ▲
//!      ├──────────▶ Navigation ──────────────────────┤
//!      └──────────▶ CardDisclosure ──────────────────┘
//! ```
//!
//! - **Content**: immutable sections, built once and shared by reference
//! - **Navigation**: the active section id, with fallback on resolve
//! - **Disclosure**: independent expand/collapse flags per card
//! - **Walkthrough**: rank selection, then a five-slide deck
//! - **Celebration**: cosmetic confetti loop tied to a guard's lifetime
//! - **Render**: text output for terminals

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod celebration;
pub mod config;
pub mod content;
pub mod disclosure;
pub mod error;
pub mod navigation;
pub mod render;
pub mod walkthrough;

// Re-export main types
pub use celebration::{Celebration, Confetti};
pub use config::HandbookConfig;
pub use content::{
    Command, ContentModel, ContentSection, Icon, PunishmentRow, SubSection, SubSectionBody,
};
pub use disclosure::{card_id, CardDisclosure};
pub use error::{HandbookError, Result};
pub use navigation::{Navigation, DEFAULT_SECTION_ID};
pub use render::Renderer;
pub use walkthrough::{
    derive_slides, derive_slides_with_limit, Rank, Slide, SlideContent, Walkthrough,
    WalkthroughInput, WalkthroughState, DECK_LEN, RESPONSIBILITY_LIMIT,
};

/// Handbook version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
