//! Terminal rendering
//!
//! Turns content and view state into plain text (optionally ANSI-styled).
//! Icons are resolved to glyphs here and nowhere else.

use colored::{ColoredString, Colorize};
use tabled::settings::{Style, Width};
use tabled::{Table, Tabled};

use crate::config::HandbookConfig;
use crate::content::{
    Command, ContentModel, ContentSection, Icon, PunishmentRow, SubSection, SubSectionBody,
};
use crate::disclosure::{card_id, CardDisclosure};
use crate::navigation::Navigation;
use crate::walkthrough::{Rank, Slide, SlideContent, Walkthrough};

const INDENT: &str = "  ";
const GOLDEN_RULE: &str = "\"As a staff member, you don't just enforce rules; you cultivate the \
                           community atmosphere. Your actions echo louder than your commands.\"";

/// Glyph for an icon.
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::HeartHandshake => "♥",
        Icon::BookOpen => "¶",
        Icon::Users => "☺",
        Icon::Terminal => "❯",
        Icon::Gavel => "⚖",
        Icon::MessageSquare => "✉",
        Icon::Shield => "◆",
        Icon::ShieldAlert => "‼",
        Icon::Star => "★",
        Icon::Zap => "ϟ",
        Icon::Sparkles => "✦",
        Icon::Check => "✓",
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[derive(Tabled)]
struct PunishmentLine {
    #[tabled(rename = "Offense")]
    offense: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Examples")]
    examples: String,
    #[tabled(rename = "Punishment")]
    punishment: String,
}

impl From<&PunishmentRow> for PunishmentLine {
    fn from(row: &PunishmentRow) -> Self {
        Self {
            offense: row.offense.clone(),
            description: row.description.clone(),
            examples: row.examples.clone(),
            punishment: row.punishment.clone(),
        }
    }
}

/// Renders handbook views as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    width: usize,
    color: bool,
}

impl Renderer {
    /// Width and styling taken from `config`.
    pub fn new(config: &HandbookConfig) -> Self {
        Self {
            width: config.width,
            color: config.color,
        }
    }

    /// Unstyled output at `width` columns.
    pub fn plain(width: usize) -> Self {
        Self {
            width,
            color: false,
        }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn body_width(&self, indent: usize) -> usize {
        self.width.saturating_sub(indent).max(20)
    }

    fn push_wrapped(&self, out: &mut Vec<String>, text: &str, indent: &str) {
        for line in wrap(text, self.body_width(indent.chars().count())) {
            out.push(format!("{}{}", indent, line));
        }
    }

    fn rule(&self) -> String {
        format!("{}{}", INDENT, "─".repeat(self.width.saturating_sub(4)))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Chrome
    // ═══════════════════════════════════════════════════════════════════

    /// The "Official Staff Handbook" badge.
    pub fn header_badge(&self) -> String {
        let badge = format!("{} OFFICIAL STAFF HANDBOOK", glyph(Icon::Sparkles));
        format!("{}{}", INDENT, self.paint(&badge, |s| s.dimmed()))
    }

    /// One line listing every section; the active one shows its title.
    pub fn nav_bar(&self, model: &ContentModel, nav: &Navigation) -> String {
        let active = nav.resolve(model);
        let items: Vec<String> = model
            .sections()
            .iter()
            .enumerate()
            .map(|(i, section)| {
                if section.id == active.id {
                    let label = format!(" {} {} ", glyph(section.icon), section.title);
                    self.paint(&label, |s| s.black().on_white())
                } else {
                    format!("{}{}", i + 1, glyph(section.icon))
                }
            })
            .collect();
        format!("{}{}", INDENT, items.join("  "))
    }

    /// Section titles, ids and descriptions, one per line. Doubles as the
    /// legend for the glyph-only entries of [`nav_bar`](Self::nav_bar).
    pub fn section_list(&self, model: &ContentModel, nav: &Navigation) -> String {
        let active = nav.resolve(model);
        model
            .sections()
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let marker = if s.id == active.id { "▸" } else { " " };
                format!(
                    "{}{} {}. {} {:<12} {:<14} {}",
                    INDENT,
                    marker,
                    i + 1,
                    glyph(s.icon),
                    s.title,
                    format!("({})", s.id),
                    self.paint(s.description.as_deref().unwrap_or(""), |d| d.dimmed())
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ═══════════════════════════════════════════════════════════════════
    // Sections
    // ═══════════════════════════════════════════════════════════════════

    /// Render a section.
    ///
    /// With `cards`, each subsection is an accordion card that only shows
    /// its body when expanded. Without, every subsection is shown in full.
    pub fn section(&self, section: &ContentSection, cards: Option<&CardDisclosure>) -> String {
        let mut out = Vec::new();

        let heading = format!("{} {}", glyph(section.icon), section.title);
        out.push(format!("{}{}", INDENT, self.paint(&heading, |s| s.bold())));
        if let Some(description) = &section.description {
            out.push(format!("{}{}", INDENT, self.paint(description, |s| s.dimmed())));
        }
        out.push(self.rule());

        if let Some(content) = &section.content {
            out.push(String::new());
            self.push_wrapped(&mut out, content, INDENT);
        }

        for (i, sub) in section.sub_sections.iter().enumerate() {
            out.push(String::new());
            match cards {
                Some(cards) => {
                    let open = cards.is_expanded(&card_id(&section.id, i));
                    let arrow = if open { "▾" } else { "▸" };
                    let title = format!("{} [{}] {}", arrow, i + 1, sub.title);
                    out.push(format!("{}{}", INDENT, self.paint(&title, |s| s.bold())));
                    if open {
                        self.sub_section_body(&mut out, sub);
                    }
                }
                None => {
                    let title = format!("▌ {}", sub.title);
                    out.push(format!("{}{}", INDENT, self.paint(&title, |s| s.bold())));
                    self.sub_section_body(&mut out, sub);
                }
            }
        }

        if section.id == "welcome" {
            out.push(String::new());
            out.push(self.golden_rule());
        }

        out.join("\n")
    }

    fn sub_section_body(&self, out: &mut Vec<String>, sub: &SubSection) {
        let inner = "    ";
        if let Some(content) = &sub.content {
            for line in wrap(content, self.body_width(6)) {
                out.push(format!("{}│ {}", inner, line));
            }
        }
        match &sub.body {
            SubSectionBody::List(items) => {
                for item in items {
                    self.push_wrapped(out, &format!("• {}", item), inner);
                }
            }
            SubSectionBody::Commands(commands) => {
                for command in commands {
                    self.command_card(out, command, inner);
                }
            }
            SubSectionBody::Table(rows) => {
                let table = self.punishment_table(rows);
                for line in table.lines() {
                    out.push(format!("{}{}", inner, line));
                }
            }
            SubSectionBody::PlainText => {}
        }
    }

    fn command_card(&self, out: &mut Vec<String>, command: &Command, indent: &str) {
        out.push(format!("{}{}", indent, self.paint(&command.name, |s| s.cyan().bold())));
        self.push_wrapped(out, &command.description, &format!("{}  ", indent));
        let usage = format!("· {}", command.usage);
        for line in wrap(&usage, self.body_width(indent.len() + 2)) {
            out.push(format!("{}  {}", indent, self.paint(&line, |s| s.italic().dimmed())));
        }
    }

    /// Punishment rows as a bordered table.
    pub fn punishment_table(&self, rows: &[PunishmentRow]) -> String {
        let lines: Vec<PunishmentLine> = rows.iter().map(PunishmentLine::from).collect();
        Table::new(lines)
            .with(Style::rounded())
            .with(Width::wrap(self.body_width(4)).keep_words())
            .to_string()
    }

    /// The welcome section's Golden Rule card.
    pub fn golden_rule(&self) -> String {
        let mut out = Vec::new();
        let heading = format!("{} The Golden Rule", glyph(Icon::ShieldAlert));
        out.push(format!("{}{}", INDENT, self.paint(&heading, |s| s.bold())));
        for line in wrap(GOLDEN_RULE, self.body_width(4)) {
            out.push(format!("{}  {}", INDENT, self.paint(&line, |s| s.italic())));
        }
        out.join("\n")
    }

    // ═══════════════════════════════════════════════════════════════════
    // Walkthrough
    // ═══════════════════════════════════════════════════════════════════

    /// The rank picker.
    pub fn rank_picker(&self) -> String {
        let mut out = vec![
            format!("{}{}", INDENT, self.paint("Welcome to the Team.", |s| s.bold())),
            format!(
                "{}{}",
                INDENT,
                self.paint(
                    "Select your rank to begin your personalized onboarding.",
                    |s| s.dimmed()
                )
            ),
            String::new(),
        ];
        for (i, rank) in Rank::ALL.iter().enumerate() {
            let title = format!("[{}] {} {}", i + 1, glyph(rank.icon()), rank);
            out.push(format!("{}{}", INDENT, self.paint(&title, |s| s.bold())));
            self.push_wrapped(&mut out, rank.description(), "      ");
        }
        out.join("\n")
    }

    /// A progress bar filled to `fraction` (clamped to 0..=1).
    pub fn progress_bar(&self, fraction: f64) -> String {
        let cells = self.width.saturating_sub(16).max(10);
        let filled = ((fraction.clamp(0.0, 1.0) * cells as f64).round()) as usize;
        format!("{}{}", "█".repeat(filled), "░".repeat(cells - filled))
    }

    /// The current walkthrough screen: rank picker, slide, or nothing once closed.
    pub fn walkthrough(&self, tour: &Walkthrough<'_>) -> String {
        match (tour.current_slide(), tour.index()) {
            (Some(slide), Some(index)) => {
                let fraction = tour.progress().unwrap_or(0.0);
                let mut out = vec![format!(
                    "{}{} {}/{}",
                    INDENT,
                    self.progress_bar(fraction),
                    index + 1,
                    tour.slides().len()
                )];
                out.push(String::new());
                out.push(self.slide(slide));
                out.push(String::new());
                out.push(self.slide_footer(slide, tour.can_go_back()));
                out.join("\n")
            }
            _ if tour.is_closed() => String::new(),
            _ => self.rank_picker(),
        }
    }

    /// One slide without chrome.
    pub fn slide(&self, slide: &Slide) -> String {
        let mut out = Vec::new();
        if let Some(icon) = slide.icon {
            out.push(format!("{}{}", INDENT, glyph(icon)));
        }
        out.push(format!("{}{}", INDENT, self.paint(&slide.title, |s| s.bold())));
        out.push(format!("{}{}", INDENT, self.paint(&slide.subtitle, |s| s.dimmed())));
        out.push(String::new());

        match &slide.content {
            SlideContent::Text(text) => self.push_wrapped(&mut out, text, INDENT),
            SlideContent::Checklist(items) => {
                for item in items {
                    let line = format!("{} {}", glyph(Icon::Check), item);
                    self.push_wrapped(&mut out, &line, INDENT);
                }
            }
            SlideContent::Items(items) => {
                for item in items {
                    self.push_wrapped(&mut out, &format!("▪ {}", item), INDENT);
                }
            }
            SlideContent::Commands(commands) => {
                for command in commands {
                    out.push(format!(
                        "{}{}",
                        INDENT,
                        self.paint(command.base_name(), |s| s.cyan().bold())
                    ));
                    self.push_wrapped(&mut out, &command.description, "    ");
                }
            }
        }
        out.join("\n")
    }

    fn slide_footer(&self, slide: &Slide, can_go_back: bool) -> String {
        let back = if can_go_back { "‹ Back" } else { "" };
        let forward = if slide.is_last {
            slide.primary_action().to_string()
        } else {
            format!("{} ›", slide.primary_action())
        };
        let gap = self
            .width
            .saturating_sub(4 + back.chars().count() + forward.chars().count())
            .max(1);
        format!(
            "{}{}{}{}",
            INDENT,
            self.paint(back, |s| s.dimmed()),
            " ".repeat(gap),
            self.paint(&forward, |s| s.bold())
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&HandbookConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_wrap_long_word_alone() {
        let lines = wrap("a supercalifragilistic b", 5);
        assert_eq!(lines, ["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_progress_bar_bounds() {
        let r = Renderer::plain(40);
        let empty = r.progress_bar(0.0);
        let full = r.progress_bar(1.5);
        assert!(!empty.contains('█'));
        assert!(!full.contains('░'));
        assert_eq!(empty.chars().count(), full.chars().count());
    }

    #[test]
    fn test_collapsed_cards_hide_bodies() {
        let model = ContentModel::builtin();
        let roles = model.resolve("roles");
        let r = Renderer::plain(80);

        let mut cards = CardDisclosure::new();
        let collapsed = r.section(roles, Some(&cards));
        assert!(collapsed.contains("▸ [1] Helper"));
        assert!(!collapsed.contains("Moderate chat and enforce rules"));

        cards.toggle(card_id("roles", 0));
        let expanded = r.section(roles, Some(&cards));
        assert!(expanded.contains("▾ [1] Helper"));
        assert!(expanded.contains("Moderate chat and enforce rules"));
        assert!(!expanded.contains("Investigate and punish serious offenses"));
    }

    #[test]
    fn test_golden_rule_only_on_welcome() {
        let model = ContentModel::builtin();
        let r = Renderer::plain(80);
        assert!(r.section(model.resolve("welcome"), None).contains("The Golden Rule"));
        assert!(!r.section(model.resolve("roles"), None).contains("The Golden Rule"));
    }
}
