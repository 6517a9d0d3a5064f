//! Onboarding walkthrough
//!
//! A two-phase flow: pick a rank, then step through a five-slide deck
//! personalized to that rank.
//!
//! # State machine
//!
//! ```text
//!              select(rank)              next (last slide)
//! RankSelect ───────────────▶ Presenting ─────────────────▶ Closed
//!     │                        │  ▲  │                        ▲
//!     │                   next │  │  │ back (index > 0)       │
//!     │                        ▼  │  ▼                        │
//!     └──────────────────── close (any state) ────────────────┘
//! ```

mod rank;
mod slides;

pub use rank::Rank;
pub use slides::{
    derive_slides, derive_slides_with_limit, Slide, SlideContent, DECK_LEN, RESPONSIBILITY_LIMIT,
};

use std::str::FromStr;

use crate::config::HandbookConfig;
use crate::content::ContentModel;
use crate::error::HandbookError;

/// Where the walkthrough is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkthroughState {
    /// Waiting for a rank
    RankSelect,

    /// Showing slide `index` of the deck for `rank`
    Presenting {
        /// Selected rank
        rank: Rank,
        /// Current slide
        index: usize,
    },

    /// Finished or dismissed; terminal
    Closed,
}

/// A user intent the walkthrough reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkthroughInput {
    /// `ArrowRight` or the Next/Finish button
    Next,

    /// `ArrowLeft` or the Back button
    Back,

    /// `Escape` or the close button
    Close,
}

impl FromStr for WalkthroughInput {
    type Err = HandbookError;

    /// Parses key names (`ArrowRight`, `ArrowLeft`, `Escape`) and the
    /// matching action words, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arrowright" | "right" | "next" | "n" | "finish" => Ok(WalkthroughInput::Next),
            "arrowleft" | "left" | "back" | "b" | "prev" => Ok(WalkthroughInput::Back),
            "escape" | "esc" | "close" | "q" => Ok(WalkthroughInput::Close),
            _ => Err(HandbookError::UnknownKey(s.trim().to_string())),
        }
    }
}

/// The walkthrough engine.
///
/// Borrows the content model for its whole life; the deck is rebuilt from
/// it on every rank selection.
///
/// # Example
///
/// ```
/// use handbook::{ContentModel, Rank, Walkthrough, WalkthroughState};
///
/// let model = ContentModel::builtin();
/// let mut tour = Walkthrough::new(&model);
/// assert_eq!(tour.state(), WalkthroughState::RankSelect);
///
/// tour.select(Rank::Helper);
/// assert_eq!(tour.current_slide().unwrap().title, "Welcome, Helper!");
/// assert_eq!(tour.progress_percent(), Some(20));
///
/// for _ in 0..5 {
///     tour.next();
/// }
/// assert!(tour.is_closed());
/// ```
#[derive(Debug, Clone)]
pub struct Walkthrough<'m> {
    model: &'m ContentModel,
    state: WalkthroughState,
    slides: Vec<Slide>,
    responsibility_limit: usize,
}

impl<'m> Walkthrough<'m> {
    /// Start at rank selection with the default responsibilities limit.
    pub fn new(model: &'m ContentModel) -> Self {
        Self {
            model,
            state: WalkthroughState::RankSelect,
            slides: Vec::new(),
            responsibility_limit: RESPONSIBILITY_LIMIT,
        }
    }

    /// Start at rank selection using settings from `config`.
    pub fn with_config(model: &'m ContentModel, config: &HandbookConfig) -> Self {
        Self {
            responsibility_limit: config.responsibility_limit,
            ..Self::new(model)
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Transitions
    // ═══════════════════════════════════════════════════════════════════

    /// Choose a rank: rebuild the deck and show its first slide.
    ///
    /// Does nothing once closed.
    pub fn select(&mut self, rank: Rank) {
        if self.is_closed() {
            return;
        }
        self.slides = derive_slides_with_limit(rank, self.model, self.responsibility_limit);
        self.state = WalkthroughState::Presenting { rank, index: 0 };
        tracing::debug!(%rank, slides = self.slides.len(), "walkthrough started");
    }

    /// Advance one slide, or close when already on the last one.
    pub fn next(&mut self) {
        if let WalkthroughState::Presenting { rank, index } = self.state {
            if index + 1 < self.slides.len() {
                self.state = WalkthroughState::Presenting {
                    rank,
                    index: index + 1,
                };
                tracing::debug!(index = index + 1, "next slide");
            } else {
                self.close();
            }
        }
    }

    /// Go back one slide. No-op on the first slide.
    pub fn back(&mut self) {
        if let WalkthroughState::Presenting { rank, index } = self.state {
            if index > 0 {
                self.state = WalkthroughState::Presenting {
                    rank,
                    index: index - 1,
                };
                tracing::debug!(index = index - 1, "previous slide");
            }
        }
    }

    /// Dismiss the walkthrough and drop its deck. Idempotent.
    pub fn close(&mut self) {
        if !self.is_closed() {
            tracing::debug!("walkthrough closed");
        }
        self.state = WalkthroughState::Closed;
        self.slides.clear();
    }

    /// Apply an input. Next and Back only act while presenting.
    pub fn handle(&mut self, input: WalkthroughInput) {
        match input {
            WalkthroughInput::Next => self.next(),
            WalkthroughInput::Back => self.back(),
            WalkthroughInput::Close => self.close(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Current state.
    pub fn state(&self) -> WalkthroughState {
        self.state
    }

    /// Whether the walkthrough has finished or been dismissed.
    pub fn is_closed(&self) -> bool {
        self.state == WalkthroughState::Closed
    }

    /// The selected rank while presenting.
    pub fn rank(&self) -> Option<Rank> {
        match self.state {
            WalkthroughState::Presenting { rank, .. } => Some(rank),
            _ => None,
        }
    }

    /// The current slide index while presenting.
    pub fn index(&self) -> Option<usize> {
        match self.state {
            WalkthroughState::Presenting { index, .. } => Some(index),
            _ => None,
        }
    }

    /// The deck for the selected rank (empty before selection and after close).
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// The slide being shown.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.index()?)
    }

    /// Whether the Back action is available.
    pub fn can_go_back(&self) -> bool {
        matches!(self.index(), Some(i) if i > 0)
    }

    /// Fraction of the deck reached, `(index + 1) / len`.
    pub fn progress(&self) -> Option<f64> {
        let index = self.index()?;
        Some((index + 1) as f64 / self.slides.len() as f64)
    }

    /// [`progress`](Self::progress) as a whole percentage.
    pub fn progress_percent(&self) -> Option<u32> {
        let index = self.index()?;
        Some(((index + 1) * 100 / self.slides.len()) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_back_ignored_before_selection() {
        let model = ContentModel::builtin();
        let mut tour = Walkthrough::new(&model);
        tour.next();
        tour.back();
        assert_eq!(tour.state(), WalkthroughState::RankSelect);
        assert!(tour.slides().is_empty());
        assert_eq!(tour.progress(), None);
    }

    #[test]
    fn test_close_from_rank_select() {
        let model = ContentModel::builtin();
        let mut tour = Walkthrough::new(&model);
        tour.handle(WalkthroughInput::Close);
        assert!(tour.is_closed());
    }

    #[test]
    fn test_select_after_close_is_ignored() {
        let model = ContentModel::builtin();
        let mut tour = Walkthrough::new(&model);
        tour.close();
        tour.select(Rank::Moderator);
        assert!(tour.is_closed());
        assert!(tour.slides().is_empty());
    }

    #[test]
    fn test_reselect_rebuilds_deck_at_zero() {
        let model = ContentModel::builtin();
        let mut tour = Walkthrough::new(&model);
        tour.select(Rank::Helper);
        tour.next();
        tour.next();
        tour.select(Rank::Moderator);
        assert_eq!(
            tour.state(),
            WalkthroughState::Presenting {
                rank: Rank::Moderator,
                index: 0
            }
        );
        assert_eq!(tour.slides()[0].title, "Welcome, Moderator!");
    }

    #[test]
    fn test_config_limit_applies() {
        let model = ContentModel::builtin();
        let config = HandbookConfig::new().with_responsibility_limit(2);
        let mut tour = Walkthrough::with_config(&model, &config);
        tour.select(Rank::Moderator);
        assert_eq!(
            tour.slides()[2].content,
            SlideContent::Items(vec![
                "Investigate and punish serious offenses".to_string(),
                "Handle player reports and tickets".to_string(),
            ])
        );
    }

    #[test]
    fn test_parse_inputs() {
        assert_eq!(
            "ArrowRight".parse::<WalkthroughInput>().unwrap(),
            WalkthroughInput::Next
        );
        assert_eq!(
            "ArrowLeft".parse::<WalkthroughInput>().unwrap(),
            WalkthroughInput::Back
        );
        assert_eq!(
            "Escape".parse::<WalkthroughInput>().unwrap(),
            WalkthroughInput::Close
        );
        assert!(matches!(
            "Tab".parse::<WalkthroughInput>(),
            Err(HandbookError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_can_go_back() {
        let model = ContentModel::builtin();
        let mut tour = Walkthrough::new(&model);
        assert!(!tour.can_go_back());
        tour.select(Rank::Helper);
        assert!(!tour.can_go_back());
        tour.next();
        assert!(tour.can_go_back());
    }
}
