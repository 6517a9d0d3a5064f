//! Slide derivation
//!
//! The deck is a pure function of the rank and the content model:
//!
//! ```text
//! 0 Welcome           templated with the rank name
//! 1 Core Values       fixed statements, `guidelines` icon, same for every rank
//! 2 Responsibilities  `roles` / <rank title>, first N list items
//! 3 Toolkit           `commands` / <rank commands title>, every command
//! 4 Closing           is_last
//! ```
//!
//! Missing sections or subsections produce empty content, never an error.

use serde::Serialize;

use super::Rank;
use crate::content::{Command, ContentModel, Icon};

/// Maximum items on the responsibilities slide unless configured otherwise.
pub const RESPONSIBILITY_LIMIT: usize = 4;

/// Number of slides in every deck.
pub const DECK_LEN: usize = 5;

const GUIDELINES_ID: &str = "guidelines";
const CORE_VALUES: [&str; 3] = [
    "Be professional and patient.",
    "Communicate clearly.",
    "Be fair and unbiased.",
];
const ROLES_ID: &str = "roles";
const COMMANDS_ID: &str = "commands";

/// What a slide shows below its subtitle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum SlideContent {
    /// A paragraph
    Text(String),

    /// Ticked statements
    Checklist(Vec<String>),

    /// Plain cards
    Items(Vec<String>),

    /// Command cards
    Commands(Vec<Command>),
}

impl SlideContent {
    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            SlideContent::Text(text) => text.is_empty(),
            SlideContent::Checklist(items) | SlideContent::Items(items) => items.is_empty(),
            SlideContent::Commands(commands) => commands.is_empty(),
        }
    }
}

/// One onboarding slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    /// Headline
    pub title: String,

    /// Line under the headline
    pub subtitle: String,

    /// Body
    pub content: SlideContent,

    /// Optional icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,

    /// Set on the final slide only
    pub is_last: bool,
}

impl Slide {
    /// Label for the forward action.
    pub fn primary_action(&self) -> &'static str {
        if self.is_last {
            "Finish"
        } else {
            "Next"
        }
    }
}

/// Derive the deck for `rank` with the default responsibilities limit.
///
/// # Example
///
/// ```
/// use handbook::{derive_slides, ContentModel, Rank};
///
/// let model = ContentModel::builtin();
/// let slides = derive_slides(Rank::Helper, &model);
///
/// assert_eq!(slides.len(), 5);
/// assert_eq!(slides[0].title, "Welcome, Helper!");
/// assert!(slides[4].is_last);
/// ```
pub fn derive_slides(rank: Rank, model: &ContentModel) -> Vec<Slide> {
    derive_slides_with_limit(rank, model, RESPONSIBILITY_LIMIT)
}

/// Derive the deck for `rank`, keeping at most `limit` responsibilities.
pub fn derive_slides_with_limit(rank: Rank, model: &ContentModel, limit: usize) -> Vec<Slide> {
    vec![
        welcome_slide(rank),
        core_values_slide(model),
        responsibilities_slide(rank, model, limit),
        toolkit_slide(rank, model),
        closing_slide(),
    ]
}

fn welcome_slide(rank: Rank) -> Slide {
    Slide {
        title: format!("Welcome, {}!", rank),
        subtitle: "Let's get you up to speed with your new responsibilities.".to_string(),
        content: SlideContent::Text(
            "You are now part of the BeeSim Staff Team. This guide will walk you through the \
             essentials of your role."
                .to_string(),
        ),
        icon: Some(Icon::Star),
        is_last: false,
    }
}

/// The fixed value statements, under the guidelines section's icon.
fn core_values_slide(model: &ContentModel) -> Slide {
    let section = model.get(GUIDELINES_ID);
    if section.is_none() {
        tracing::debug!(section = GUIDELINES_ID, "core values icon missing");
    }

    Slide {
        title: "Core Values".to_string(),
        subtitle: "What we expect from you.".to_string(),
        content: SlideContent::Checklist(CORE_VALUES.iter().map(|v| v.to_string()).collect()),
        icon: section.map(|s| s.icon),
        is_last: false,
    }
}

fn responsibilities_slide(rank: Rank, model: &ContentModel, limit: usize) -> Slide {
    let list = model
        .sub_section(ROLES_ID, rank.role_title())
        .and_then(|sub| sub.list());
    if list.is_none() {
        tracing::debug!(%rank, title = rank.role_title(), "no responsibilities list");
    }

    let items = list
        .map(|items| items.iter().take(limit).cloned().collect())
        .unwrap_or_default();

    Slide {
        title: "Your Responsibilities".to_string(),
        subtitle: format!("What does a {} do?", rank),
        content: SlideContent::Items(items),
        icon: Some(Icon::Shield),
        is_last: false,
    }
}

fn toolkit_slide(rank: Rank, model: &ContentModel) -> Slide {
    let commands = model
        .sub_section(COMMANDS_ID, rank.commands_title())
        .and_then(|sub| sub.commands());
    if commands.is_none() {
        tracing::debug!(%rank, title = rank.commands_title(), "no toolkit commands");
    }

    Slide {
        title: "Your Toolkit".to_string(),
        subtitle: "Key commands you will use daily.".to_string(),
        content: SlideContent::Commands(commands.map(<[Command]>::to_vec).unwrap_or_default()),
        icon: Some(Icon::Zap),
        is_last: false,
    }
}

fn closing_slide() -> Slide {
    Slide {
        title: "You're Ready!".to_string(),
        subtitle: "Go make BeeSim an amazing place.".to_string(),
        content: SlideContent::Text(
            "Remember, the staff guide is always available here if you need to double-check \
             anything."
                .to_string(),
        ),
        icon: Some(Icon::Star),
        is_last: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentSection, SubSection};

    #[test]
    fn test_core_values_use_guidelines_icon() {
        let model = ContentModel::builtin();
        let slide = core_values_slide(&model);
        assert_eq!(slide.icon, Some(Icon::BookOpen));
        assert_eq!(
            slide.content,
            SlideContent::Checklist(vec![
                "Be professional and patient.".to_string(),
                "Communicate clearly.".to_string(),
                "Be fair and unbiased.".to_string(),
            ])
        );
    }

    #[test]
    fn test_core_values_follow_guidelines_icon_in_custom_content() {
        let model = ContentModel::new(vec![ContentSection::new(
            "guidelines",
            "Guidelines",
            Icon::Users,
        )
        .with_sub_section(SubSection::new("Kindness").with_content("Be kind."))])
        .unwrap();
        let slide = core_values_slide(&model);
        assert_eq!(slide.icon, Some(Icon::Users));
        assert_eq!(slide.content, core_values_slide(&ContentModel::builtin()).content);
    }

    #[test]
    fn test_limit_zero_empties_responsibilities() {
        let model = ContentModel::builtin();
        let slides = derive_slides_with_limit(Rank::Moderator, &model, 0);
        assert!(slides[2].content.is_empty());
    }

    #[test]
    fn test_primary_action_label() {
        let model = ContentModel::builtin();
        let slides = derive_slides(Rank::Helper, &model);
        assert_eq!(slides[0].primary_action(), "Next");
        assert_eq!(slides[4].primary_action(), "Finish");
    }
}
