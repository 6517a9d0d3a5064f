//! Staff ranks offered by the walkthrough

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::content::Icon;
use crate::error::HandbookError;

/// A staff rank the walkthrough can be personalized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Entry rank: chat moderation and player support
    Helper,

    /// Intermediate rank with moderation tools
    #[serde(rename = "Junior Moderator")]
    JuniorModerator,

    /// Full moderator
    Moderator,
}

impl Rank {
    /// All ranks, in the order the picker shows them.
    pub const ALL: [Rank; 3] = [Rank::Helper, Rank::JuniorModerator, Rank::Moderator];

    /// Human-facing name, also used in slide text.
    pub fn display_name(self) -> &'static str {
        match self {
            Rank::Helper => "Helper",
            Rank::JuniorModerator => "Junior Moderator",
            Rank::Moderator => "Moderator",
        }
    }

    /// Title of this rank's subsection under the `roles` section.
    pub fn role_title(self) -> &'static str {
        self.display_name()
    }

    /// Title of this rank's subsection under the `commands` section.
    pub fn commands_title(self) -> &'static str {
        match self {
            Rank::Helper => "Helper Commands",
            Rank::JuniorModerator => "Jr. Mod Commands",
            Rank::Moderator => "Moderator Commands",
        }
    }

    /// Blurb shown on the rank picker.
    pub fn description(self) -> &'static str {
        match self {
            Rank::Helper => "The first line of defense. Helping players and keeping chat clean.",
            Rank::JuniorModerator => {
                "Taking on more responsibility with advanced moderation tools."
            }
            Rank::Moderator => "Leading the team and handling complex server situations.",
        }
    }

    /// Icon shown on the rank picker.
    pub fn icon(self) -> Icon {
        match self {
            Rank::Helper => Icon::Star,
            Rank::JuniorModerator => Icon::Zap,
            Rank::Moderator => Icon::Shield,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Rank {
    type Err = HandbookError;

    /// Accepts display names, common shorthands and picker positions (1-3),
    /// ignoring case, spaces and punctuation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "helper" | "h" | "1" => Ok(Rank::Helper),
            "juniormoderator" | "juniormod" | "junior" | "jrmod" | "jrmoderator" | "jr" | "2" => {
                Ok(Rank::JuniorModerator)
            }
            "moderator" | "mod" | "m" | "3" => Ok(Rank::Moderator),
            _ => Err(HandbookError::UnknownRank(s.trim().to_string())),
        }
    }
}
