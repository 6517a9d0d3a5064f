//! Handbook configuration

use std::time::Duration;

use crate::navigation::DEFAULT_SECTION_ID;
use crate::walkthrough::RESPONSIBILITY_LIMIT;

/// Configuration shared by the walkthrough, renderer and celebration.
///
/// Build with `Default` and adjust with the `with_*` methods.
#[derive(Debug, Clone, PartialEq)]
pub struct HandbookConfig {
    /// Section shown when navigation starts
    pub default_section: String,

    /// Maximum items on the responsibilities slide
    pub responsibility_limit: usize,

    /// Render width in terminal columns
    pub width: usize,

    /// Whether rendered output carries ANSI styling
    pub color: bool,

    /// Whether the closing slide runs the confetti animation
    pub celebration: bool,

    /// Number of confetti particles
    pub particle_count: usize,

    /// Delay between animation frames
    pub frame_interval: Duration,
}

impl Default for HandbookConfig {
    fn default() -> Self {
        Self {
            default_section: DEFAULT_SECTION_ID.to_string(),
            responsibility_limit: RESPONSIBILITY_LIMIT,
            width: 80,
            color: true,
            celebration: true,
            particle_count: 200,
            frame_interval: Duration::from_millis(16),
        }
    }
}

impl HandbookConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start navigation at a different section.
    pub fn with_default_section(mut self, id: impl Into<String>) -> Self {
        self.default_section = id.into();
        self
    }

    /// Render at a different width. Widths below 40 are raised to 40.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(40);
        self
    }

    /// Enable or disable ANSI styling.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable the closing-slide animation.
    pub fn with_celebration(mut self, enabled: bool) -> Self {
        self.celebration = enabled;
        self
    }

    /// Change the responsibilities slide limit.
    pub fn with_responsibility_limit(mut self, limit: usize) -> Self {
        self.responsibility_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HandbookConfig::default();
        assert_eq!(config.default_section, "welcome");
        assert_eq!(config.responsibility_limit, 4);
        assert_eq!(config.particle_count, 200);
        assert!(config.color);
    }

    #[test]
    fn test_width_floor() {
        assert_eq!(HandbookConfig::new().with_width(10).width, 40);
        assert_eq!(HandbookConfig::new().with_width(120).width, 120);
    }
}
