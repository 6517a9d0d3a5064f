//! Symbolic icon identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque icon tag attached to content and slides.
///
/// The core never interprets these; a view maps them to whatever it can
/// draw (see [`crate::render::glyph`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Welcome section
    HeartHandshake,
    /// Guidelines section
    BookOpen,
    /// Roles section
    Users,
    /// Commands section
    Terminal,
    /// Punishments section
    Gavel,
    /// Discord section
    MessageSquare,
    /// Moderator rank, responsibilities slide
    Shield,
    /// Golden Rule card
    ShieldAlert,
    /// Helper rank, welcome and closing slides
    Star,
    /// Junior Moderator rank, toolkit slide
    Zap,
    /// Header badge
    Sparkles,
    /// Checklist marker
    Check,
}

impl Icon {
    /// Kebab-case identifier, as used in content files.
    pub fn name(self) -> &'static str {
        match self {
            Icon::HeartHandshake => "heart-handshake",
            Icon::BookOpen => "book-open",
            Icon::Users => "users",
            Icon::Terminal => "terminal",
            Icon::Gavel => "gavel",
            Icon::MessageSquare => "message-square",
            Icon::Shield => "shield",
            Icon::ShieldAlert => "shield-alert",
            Icon::Star => "star",
            Icon::Zap => "zap",
            Icon::Sparkles => "sparkles",
            Icon::Check => "check",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_serde() {
        for icon in [Icon::HeartHandshake, Icon::MessageSquare, Icon::ShieldAlert] {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.name()));
        }
    }
}
