//! Static content model for the staff handbook
//!
//! The content tree is built once at startup and then shared by reference
//! with every consumer. Nothing in the crate mutates it after construction.
//!
//! # Structure
//!
//! ```text
//! ContentModel
//!   └─ ContentSection (id, title, icon, description?, content?)
//!        └─ SubSection (title, content?)
//!             └─ SubSectionBody: List | Commands | Table | PlainText
//! ```

mod builtin;
mod icon;

pub use icon::Icon;

use serde::{Deserialize, Serialize, Serializer};
use std::path::Path;

use crate::error::{HandbookError, Result};

// ═══════════════════════════════════════════════════════════════════════
// Leaf entities
// ═══════════════════════════════════════════════════════════════════════

/// A staff command with its reference text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Full invocation, including argument placeholders
    pub name: String,

    /// What the command does
    pub description: String,

    /// When staff should reach for it
    pub usage: String,
}

impl Command {
    /// Create a new command entry.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usage: usage.into(),
        }
    }

    /// The command without its arguments (`/libertybans mute <Player>` → `/libertybans`).
    pub fn base_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or("")
    }
}

/// One row of a punishment table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunishmentRow {
    /// Offense name
    pub offense: String,

    /// Short description of the offense
    pub description: String,

    /// Typical examples
    pub examples: String,

    /// Escalation ladder, e.g. `Warn → 15m → 30m`
    pub punishment: String,
}

impl PunishmentRow {
    /// Create a new punishment row.
    pub fn new(
        offense: impl Into<String>,
        description: impl Into<String>,
        examples: impl Into<String>,
        punishment: impl Into<String>,
    ) -> Self {
        Self {
            offense: offense.into(),
            description: description.into(),
            examples: examples.into(),
            punishment: punishment.into(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Subsections
// ═══════════════════════════════════════════════════════════════════════

/// The structured payload of a subsection.
///
/// Exactly one shape per subsection. Intro text lives on [`SubSection::content`]
/// and may accompany any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum SubSectionBody {
    /// Bullet list
    List(Vec<String>),

    /// Command reference cards
    Commands(Vec<Command>),

    /// Punishment table
    Table(Vec<PunishmentRow>),

    /// Intro text only
    #[default]
    PlainText,
}

/// A titled block inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSection {
    /// Subsection heading
    pub title: String,

    /// Optional intro paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Structured payload
    #[serde(default)]
    pub body: SubSectionBody,
}

impl SubSection {
    /// Create a plain-text subsection with no body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: None,
            body: SubSectionBody::PlainText,
        }
    }

    /// Attach an intro paragraph.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Use a bullet list as the body.
    pub fn with_list<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = SubSectionBody::List(items.into_iter().map(Into::into).collect());
        self
    }

    /// Use command cards as the body.
    pub fn with_commands(mut self, commands: Vec<Command>) -> Self {
        self.body = SubSectionBody::Commands(commands);
        self
    }

    /// Use a punishment table as the body.
    pub fn with_table(mut self, rows: Vec<PunishmentRow>) -> Self {
        self.body = SubSectionBody::Table(rows);
        self
    }

    /// The bullet list, if this subsection has one.
    pub fn list(&self) -> Option<&[String]> {
        match &self.body {
            SubSectionBody::List(items) => Some(items),
            _ => None,
        }
    }

    /// The command cards, if this subsection has them.
    pub fn commands(&self) -> Option<&[Command]> {
        match &self.body {
            SubSectionBody::Commands(commands) => Some(commands),
            _ => None,
        }
    }

    /// The punishment table, if this subsection has one.
    pub fn table(&self) -> Option<&[PunishmentRow]> {
        match &self.body {
            SubSectionBody::Table(rows) => Some(rows),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Sections
// ═══════════════════════════════════════════════════════════════════════

/// A top-level navigable section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection {
    /// Unique key used by navigation
    pub id: String,

    /// Display title
    pub title: String,

    /// Symbolic icon
    pub icon: Icon,

    /// One-line summary under the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Lead paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Ordered subsections
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_sections: Vec<SubSection>,
}

impl ContentSection {
    /// Create an empty section.
    pub fn new(id: impl Into<String>, title: impl Into<String>, icon: Icon) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon,
            description: None,
            content: None,
            sub_sections: Vec::new(),
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a lead paragraph.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Append a subsection.
    pub fn with_sub_section(mut self, sub: SubSection) -> Self {
        self.sub_sections.push(sub);
        self
    }

    /// Find the first subsection with exactly this title.
    pub fn sub_section(&self, title: &str) -> Option<&SubSection> {
        self.sub_sections.iter().find(|s| s.title == title)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// The model
// ═══════════════════════════════════════════════════════════════════════

/// The complete, read-only handbook content.
///
/// Always holds at least one section, and section ids are unique.
///
/// # Example
///
/// ```
/// use handbook::ContentModel;
///
/// let model = ContentModel::builtin();
/// assert_eq!(model.first().id, "welcome");
///
/// // Unknown ids fall back to the first section
/// assert_eq!(model.resolve("nonexistent").id, "welcome");
/// assert_eq!(model.resolve("roles").title, "Roles");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<ContentSection>")]
pub struct ContentModel {
    sections: Vec<ContentSection>,
}

impl ContentModel {
    /// Build a model from sections, checking that it is non-empty and
    /// that ids are unique.
    pub fn new(sections: Vec<ContentSection>) -> Result<Self> {
        if sections.is_empty() {
            return Err(HandbookError::EmptyContent);
        }
        for (i, section) in sections.iter().enumerate() {
            if sections[..i].iter().any(|s| s.id == section.id) {
                return Err(HandbookError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(Self { sections })
    }

    /// The BeeSim staff handbook shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            sections: builtin::sections(),
        }
    }

    /// Parse a model from JSON (an array of sections).
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a model from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| HandbookError::ContentIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serialize the model as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All sections in display order.
    pub fn sections(&self) -> &[ContentSection] {
        &self.sections
    }

    /// The first section in display order.
    pub fn first(&self) -> &ContentSection {
        &self.sections[0]
    }

    /// Look up a section by id.
    pub fn get(&self, id: &str) -> Option<&ContentSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Look up a section by id, falling back to the first section.
    pub fn resolve(&self, id: &str) -> &ContentSection {
        match self.get(id) {
            Some(section) => section,
            None => {
                tracing::debug!(id, fallback = %self.first().id, "section not found");
                self.first()
            }
        }
    }

    /// Position of a section in display order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Look up a subsection by section id and exact title.
    pub fn sub_section(&self, section_id: &str, title: &str) -> Option<&SubSection> {
        self.get(section_id)?.sub_section(title)
    }

    /// Section ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for ContentModel {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<Vec<ContentSection>> for ContentModel {
    type Error = HandbookError;

    fn try_from(sections: Vec<ContentSection>) -> Result<Self> {
        Self::new(sections)
    }
}

impl Serialize for ContentModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.sections.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Vec<ContentSection> {
        vec![
            ContentSection::new("a", "Alpha", Icon::Star),
            ContentSection::new("b", "Beta", Icon::Zap),
        ]
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            ContentModel::new(Vec::new()),
            Err(HandbookError::EmptyContent)
        ));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let mut sections = tiny();
        sections.push(ContentSection::new("a", "Again", Icon::Users));
        match ContentModel::new(sections) {
            Err(HandbookError::DuplicateSection(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_falls_back_to_first() {
        let model = ContentModel::new(tiny()).unwrap();
        assert_eq!(model.resolve("b").id, "b");
        assert_eq!(model.resolve("zzz").id, "a");
        assert_eq!(model.resolve("").id, "a");
    }

    #[test]
    fn test_command_base_name() {
        let cmd = Command::new("/libertybans mute <Player> <Time>", "Mutes", "Chat");
        assert_eq!(cmd.base_name(), "/libertybans");
        assert_eq!(Command::new("/cc", "", "").base_name(), "/cc");
        assert_eq!(Command::new("", "", "").base_name(), "");
    }

    #[test]
    fn test_sub_section_accessors_match_body() {
        let sub = SubSection::new("Rules").with_list(["one", "two"]);
        assert_eq!(sub.list().map(|l| l.len()), Some(2));
        assert!(sub.commands().is_none());
        assert!(sub.table().is_none());

        let plain = SubSection::new("Intro").with_content("text");
        assert_eq!(plain.body, SubSectionBody::PlainText);
        assert!(plain.list().is_none());
    }

    #[test]
    fn test_sub_section_body_defaults_when_absent_in_json() {
        let sub: SubSection = serde_json::from_str(r#"{"title":"Only text"}"#).unwrap();
        assert_eq!(sub.body, SubSectionBody::PlainText);
        assert_eq!(sub.content, None);
    }
}
