//! Interactive handbook shell
//!
//! A line-oriented stand-in for the browser view: one screen at a time,
//! with the walkthrough as an overlay on top of the section view.

use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use handbook::{
    card_id, CardDisclosure, Celebration, ContentModel, HandbookConfig, HandbookError,
    Navigation, Rank, Renderer, Walkthrough, WalkthroughInput, WalkthroughState,
};

const CONFETTI_ROWS: usize = 3;

const HELP: &str = "\
Sections
  sections            list sections
  go <id|number>      open a section (a bare number works too)
  next | prev         step through sections in order
  toggle <n>          expand or collapse card n
  expand | collapse   open or close every card in this section
  walkthrough         start the staff walkthrough
  help                show this help
  quit                leave

Walkthrough
  1 | 2 | 3 | <rank>  pick a rank
  next | ArrowRight   next slide (finishes on the last one)
  back | ArrowLeft    previous slide
  close | Escape      leave the walkthrough";

/// A parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Blank line; redraw
    Redraw,
    /// Open a section by id or 1-based position
    Go(String),
    /// Open the section after the current one
    NextSection,
    /// Open the section before the current one
    PreviousSection,
    /// Flip card `n` (1-based) of the current section
    Toggle(usize),
    /// Open every card of the current section
    ExpandAll,
    /// Close every card
    CollapseAll,
    /// List sections
    Sections,
    /// Mount the walkthrough overlay
    Walkthrough,
    /// Choose a walkthrough rank
    Rank(Rank),
    /// Drive the walkthrough
    Input(WalkthroughInput),
    /// Show help
    Help,
    /// Leave the shell
    Quit,
}

impl ShellCommand {
    /// Parse a line. `overlay` is the walkthrough state when it is open.
    pub fn parse(line: &str, overlay: Option<WalkthroughState>) -> Result<Self, HandbookError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match (word.to_ascii_lowercase().as_str(), rest) {
            ("", _) => return Ok(ShellCommand::Redraw),
            ("help" | "?", _) => return Ok(ShellCommand::Help),
            ("quit" | "exit", _) => return Ok(ShellCommand::Quit),
            _ => {}
        }

        match overlay {
            Some(WalkthroughState::RankSelect) => {
                if let Ok(input @ WalkthroughInput::Close) = line.parse::<WalkthroughInput>() {
                    return Ok(ShellCommand::Input(input));
                }
                line.parse().map(ShellCommand::Rank)
            }
            Some(_) => line.parse().map(ShellCommand::Input),
            None => Self::parse_section_command(word, rest, line),
        }
    }

    fn parse_section_command(word: &str, rest: &str, line: &str) -> Result<Self, HandbookError> {
        let unknown = || HandbookError::UnknownCommand(line.to_string());
        match word.to_ascii_lowercase().as_str() {
            "sections" | "ls" => Ok(ShellCommand::Sections),
            "go" | "show" | "open" if !rest.is_empty() => Ok(ShellCommand::Go(rest.to_string())),
            "toggle" | "t" => rest
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(ShellCommand::Toggle)
                .ok_or_else(unknown),
            "next" | "n" => Ok(ShellCommand::NextSection),
            "prev" | "previous" | "p" => Ok(ShellCommand::PreviousSection),
            "expand" => Ok(ShellCommand::ExpandAll),
            "collapse" => Ok(ShellCommand::CollapseAll),
            "walkthrough" | "tour" | "onboard" => Ok(ShellCommand::Walkthrough),
            _ if rest.is_empty() && word.chars().all(|c| c.is_ascii_digit()) => {
                Ok(ShellCommand::Go(word.to_string()))
            }
            _ => Err(unknown()),
        }
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the current screen
    Redraw,
    /// Print a message without redrawing
    Message(String),
    /// Leave
    Quit,
}

/// All view state for one shell run.
pub struct Session<'m> {
    model: &'m ContentModel,
    config: HandbookConfig,
    renderer: Renderer,
    nav: Navigation,
    cards: CardDisclosure,
    tour: Option<Walkthrough<'m>>,
    celebration: Option<Celebration>,
}

impl<'m> Session<'m> {
    /// Mount the handbook view.
    pub fn new(model: &'m ContentModel, config: HandbookConfig) -> Self {
        Self {
            model,
            renderer: Renderer::new(&config),
            nav: Navigation::starting_at(config.default_section.clone()),
            cards: CardDisclosure::new(),
            tour: None,
            celebration: None,
            config,
        }
    }

    /// Walkthrough state while the overlay is mounted.
    pub fn overlay(&self) -> Option<WalkthroughState> {
        self.tour.as_ref().map(Walkthrough::state)
    }

    /// Active section id.
    pub fn current_section(&self) -> &str {
        self.nav.current()
    }

    /// Card expansion state.
    pub fn cards(&self) -> &CardDisclosure {
        &self.cards
    }

    /// Whether the confetti loop is mounted.
    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_some()
    }

    /// Prompt reflecting where the user is.
    pub fn prompt(&self) -> String {
        match self.overlay() {
            Some(WalkthroughState::RankSelect) => "rank> ".to_string(),
            Some(WalkthroughState::Presenting { index, .. }) => {
                format!("walkthrough[{}/{}]> ", index + 1, self.slide_count())
            }
            _ => format!("handbook[{}]> ", self.nav.resolve(self.model).id),
        }
    }

    fn slide_count(&self) -> usize {
        self.tour.as_ref().map_or(0, |t| t.slides().len())
    }

    /// Parse and apply one line.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, HandbookError> {
        let command = ShellCommand::parse(line, self.overlay())?;
        Ok(self.apply(command))
    }

    /// Apply a parsed command.
    pub fn apply(&mut self, command: ShellCommand) -> Outcome {
        tracing::debug!(?command, "shell command");
        let outcome = match command {
            ShellCommand::Redraw => Outcome::Redraw,
            ShellCommand::Help => Outcome::Message(HELP.to_string()),
            ShellCommand::Quit => Outcome::Quit,
            ShellCommand::Sections => {
                Outcome::Message(self.renderer.section_list(self.model, &self.nav))
            }
            ShellCommand::Go(target) => {
                self.nav.select(crate::section_id(self.model, &target));
                Outcome::Redraw
            }
            ShellCommand::NextSection => {
                self.nav.select_next(self.model);
                Outcome::Redraw
            }
            ShellCommand::PreviousSection => {
                self.nav.select_previous(self.model);
                Outcome::Redraw
            }
            ShellCommand::Toggle(n) => {
                let section = self.nav.resolve(self.model);
                match n.checked_sub(1).filter(|i| *i < section.sub_sections.len()) {
                    Some(index) => {
                        self.cards.toggle(card_id(&section.id, index));
                        Outcome::Redraw
                    }
                    None => Outcome::Message(format!(
                        "{} has {} cards",
                        section.title,
                        section.sub_sections.len()
                    )),
                }
            }
            ShellCommand::ExpandAll => {
                let section = self.nav.resolve(self.model);
                for i in 0..section.sub_sections.len() {
                    self.cards.expand(card_id(&section.id, i));
                }
                Outcome::Redraw
            }
            ShellCommand::CollapseAll => {
                self.cards.collapse_all();
                Outcome::Redraw
            }
            ShellCommand::Walkthrough => {
                self.tour = Some(Walkthrough::with_config(self.model, &self.config));
                Outcome::Redraw
            }
            ShellCommand::Rank(rank) => {
                if let Some(tour) = self.tour.as_mut() {
                    tour.select(rank);
                }
                Outcome::Redraw
            }
            ShellCommand::Input(input) => {
                if let Some(tour) = self.tour.as_mut() {
                    tour.handle(input);
                }
                Outcome::Redraw
            }
        };
        self.sync_overlay();
        outcome
    }

    /// Unmount a finished walkthrough and keep the confetti loop mounted
    /// exactly while the closing slide is on screen.
    fn sync_overlay(&mut self) {
        if self.tour.as_ref().is_some_and(Walkthrough::is_closed) {
            self.tour = None;
        }

        let on_last = self
            .tour
            .as_ref()
            .and_then(Walkthrough::current_slide)
            .is_some_and(|s| s.is_last);

        match (on_last && self.config.celebration, self.celebration.is_some()) {
            (true, false) => {
                let cols = self.config.width.saturating_sub(4);
                self.celebration = Some(Celebration::start(&self.config, cols, CONFETTI_ROWS));
            }
            (false, true) => self.celebration = None,
            _ => {}
        }
    }

    /// The current screen: walkthrough overlay if mounted, else the section view.
    pub fn screen(&self) -> String {
        let mut out = Vec::new();
        match &self.tour {
            Some(tour) => {
                if let Some(party) = &self.celebration {
                    out.extend(party.snapshot().into_iter().map(|row| format!("  {}", row)));
                }
                out.push(self.renderer.walkthrough(tour));
            }
            None => {
                out.push(self.renderer.header_badge());
                out.push(String::new());
                out.push(self.renderer.section(self.nav.resolve(self.model), Some(&self.cards)));
                out.push(String::new());
                out.push(self.renderer.nav_bar(self.model, &self.nav));
            }
        }
        out.join("\n")
    }
}

/// Run the interactive loop until the user quits.
pub fn run(model: &ContentModel, config: HandbookConfig) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new().context("failed to start line editor")?;
    let mut session = Session::new(model, config);

    println!("{}", session.screen());
    println!("\nType `help` for commands.");

    loop {
        match editor.readline(&session.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = editor.add_history_entry(line.trim()) {
                        tracing::debug!(%err, "history entry not recorded");
                    }
                }
                match session.execute(&line) {
                    Ok(Outcome::Redraw) => println!("{}", session.screen()),
                    Ok(Outcome::Message(message)) => println!("{}", message),
                    Ok(Outcome::Quit) => break,
                    Err(err) => eprintln!("{}", err),
                }
            }
            Err(ReadlineError::Interrupted) if session.overlay().is_some() => {
                session.apply(ShellCommand::Input(WalkthroughInput::Close));
                println!("{}", session.screen());
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        }
    }

    Ok(())
}
