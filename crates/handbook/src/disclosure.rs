//! Accordion card expansion state

use indexmap::IndexMap;

/// Per-card expanded/collapsed flags.
///
/// Cards are independent: toggling one never touches another. Unknown ids
/// read as collapsed.
///
/// # Example
///
/// ```
/// use handbook::CardDisclosure;
///
/// let mut cards = CardDisclosure::new();
/// assert!(!cards.is_expanded("roles/0"));
///
/// cards.toggle("roles/0");
/// cards.toggle("roles/1");
/// assert!(cards.is_expanded("roles/0"));
/// assert!(cards.is_expanded("roles/1"));
///
/// cards.toggle("roles/0");
/// assert!(!cards.is_expanded("roles/0"));
/// assert!(cards.is_expanded("roles/1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDisclosure {
    /// Insertion order is first-touch order
    flags: IndexMap<String, bool>,
}

/// Card id for the subsection at `index` within a section.
pub fn card_id(section_id: &str, index: usize) -> String {
    format!("{}/{}", section_id, index)
}

impl CardDisclosure {
    /// Everything collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one card and return its new state.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let flag = self.flags.entry(id.into()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Force a card open.
    pub fn expand(&mut self, id: impl Into<String>) {
        self.flags.insert(id.into(), true);
    }

    /// Close every card.
    pub fn collapse_all(&mut self) {
        self.flags.values_mut().for_each(|f| *f = false);
    }

    /// Whether a card is open.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    /// Ids of open cards, in first-touch order.
    pub fn expanded(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, open)| **open)
            .map(|(id, _)| id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_returns_new_state() {
        let mut cards = CardDisclosure::new();
        assert!(cards.toggle("a"));
        assert!(!cards.toggle("a"));
    }

    #[test]
    fn test_collapse_all_keeps_others_collapsed() {
        let mut cards = CardDisclosure::new();
        cards.expand("a");
        cards.expand("b");
        cards.collapse_all();
        assert_eq!(cards.expanded().count(), 0);
    }

    #[test]
    fn test_expanded_in_first_touch_order() {
        let mut cards = CardDisclosure::new();
        cards.toggle("z");
        cards.toggle("a");
        cards.toggle("m");
        cards.toggle("a");
        assert_eq!(cards.expanded().collect::<Vec<_>>(), ["z", "m"]);
    }

    #[test]
    fn test_card_id_format() {
        assert_eq!(card_id("roles", 2), "roles/2");
    }
}
