//! Active section tracking

use crate::content::{ContentModel, ContentSection};

/// Section shown when a view first mounts.
pub const DEFAULT_SECTION_ID: &str = "welcome";

/// Holds the id of the active top-level section.
///
/// The holder does not validate ids. Resolving an unknown id against a
/// [`ContentModel`] yields the model's first section.
///
/// # Example
///
/// ```
/// use handbook::{ContentModel, Navigation};
///
/// let model = ContentModel::builtin();
/// let mut nav = Navigation::new();
/// assert_eq!(nav.current(), "welcome");
///
/// nav.select("punishments");
/// assert_eq!(nav.resolve(&model).title, "Punishments");
///
/// nav.select("nonexistent");
/// assert_eq!(nav.current(), "nonexistent");
/// assert_eq!(nav.resolve(&model).id, "welcome");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    active: String,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    /// Start at [`DEFAULT_SECTION_ID`].
    pub fn new() -> Self {
        Self::starting_at(DEFAULT_SECTION_ID)
    }

    /// Start at a specific section id.
    pub fn starting_at(id: impl Into<String>) -> Self {
        Self { active: id.into() }
    }

    /// Make `id` the active section.
    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(from = %self.active, to = %id, "select section");
        self.active = id;
    }

    /// The active section id, exactly as last selected.
    pub fn current(&self) -> &str {
        &self.active
    }

    /// The section to display for the active id.
    pub fn resolve<'m>(&self, model: &'m ContentModel) -> &'m ContentSection {
        model.resolve(&self.active)
    }

    /// Whether `id` is the active one.
    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    /// Select the section after the resolved one, wrapping around.
    pub fn select_next(&mut self, model: &ContentModel) {
        let pos = model.position(self.resolve(model).id.as_str()).unwrap_or(0);
        let next = &model.sections()[(pos + 1) % model.len()];
        self.select(next.id.clone());
    }

    /// Select the section before the resolved one, wrapping around.
    pub fn select_previous(&mut self, model: &ContentModel) {
        let pos = model.position(self.resolve(model).id.as_str()).unwrap_or(0);
        let prev = &model.sections()[(pos + model.len() - 1) % model.len()];
        self.select(prev.id.clone());
    }
}
