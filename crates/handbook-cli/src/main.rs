//! BeeSim staff handbook in the terminal
//!
//! Without a subcommand this opens the interactive shell. The one-shot
//! subcommands print a section, the section list, or a rank's walkthrough
//! deck and exit.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use handbook::{derive_slides_with_limit, ContentModel, HandbookConfig, Navigation, Rank, Renderer};

mod output;
mod shell;

use output::OutputFormat;

/// Handbook CLI
#[derive(Parser)]
#[command(name = "handbook")]
#[command(about = "BeeSim Official Staff Handbook", long_about = None)]
#[command(version)]
struct Cli {
    /// Load handbook content from a JSON file instead of the built-in copy
    #[arg(short, long, env = "HANDBOOK_CONTENT")]
    content: Option<PathBuf>,

    /// Section the shell opens on (id or 1-based position)
    #[arg(short, long, env = "HANDBOOK_SECTION", default_value = handbook::DEFAULT_SECTION_ID)]
    section: String,

    /// Render width in columns
    #[arg(short, long, env = "HANDBOOK_WIDTH", default_value_t = 80)]
    width: usize,

    /// Disable ANSI colors
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    no_color: bool,

    /// Skip the confetti on the closing slide
    #[arg(long)]
    no_celebration: bool,

    /// Output format for one-shot commands
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive handbook (default)
    Shell,

    /// List sections
    #[command(alias = "ls")]
    Sections,

    /// Print one section with every card expanded
    Show {
        /// Section id or 1-based position
        section: String,
    },

    /// Print the walkthrough deck for a rank
    Slides {
        /// helper, junior-moderator or moderator (1, 2, 3 also work)
        #[arg(short, long)]
        rank: Rank,
    },

    /// Write the loaded content as JSON
    Export,
}

#[derive(Serialize)]
struct SectionSummary<'a> {
    position: usize,
    id: &'a str,
    title: &'a str,
    description: Option<&'a str>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "handbook=debug,handbook_cli=debug"
    } else {
        "handbook=warn,handbook_cli=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let model = match &cli.content {
        Some(path) => ContentModel::from_path(path)
            .with_context(|| format!("failed to load content from {}", path.display()))?,
        None => ContentModel::builtin(),
    };
    tracing::debug!(sections = model.len(), "content loaded");

    let config = HandbookConfig::new()
        .with_default_section(section_id(&model, &cli.section))
        .with_width(cli.width)
        .with_color(!cli.no_color)
        .with_celebration(!cli.no_celebration);
    let renderer = Renderer::new(&config);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell::run(&model, config),
        Commands::Sections => {
            let nav = Navigation::starting_at(config.default_section.clone());
            let rows: Vec<SectionSummary<'_>> = model
                .sections()
                .iter()
                .enumerate()
                .map(|(i, s)| SectionSummary {
                    position: i + 1,
                    id: &s.id,
                    title: &s.title,
                    description: s.description.as_deref(),
                })
                .collect();
            output::print(cli.output, || renderer.section_list(&model, &nav), &rows)
        }
        Commands::Show { section } => {
            let id = section_id(&model, &section);
            let section = model.resolve(&id);
            if section.id != id {
                tracing::warn!(requested = %id, shown = %section.id, "unknown section");
            }
            let mut cards = handbook::CardDisclosure::new();
            for i in 0..section.sub_sections.len() {
                cards.expand(handbook::card_id(&section.id, i));
            }
            output::print(cli.output, || renderer.section(section, Some(&cards)), section)
        }
        Commands::Slides { rank } => {
            let slides = derive_slides_with_limit(rank, &model, config.responsibility_limit);
            output::print(
                cli.output,
                || {
                    slides
                        .iter()
                        .enumerate()
                        .map(|(i, slide)| {
                            let fraction = (i + 1) as f64 / slides.len() as f64;
                            let bar = renderer.progress_bar(fraction);
                            format!("{}\n{}", bar, renderer.slide(slide))
                        })
                        .collect::<Vec<_>>()
                        .join("\n\n")
                },
                &slides,
            )
        }
        Commands::Export => {
            println!("{}", model.to_json().context("failed to encode content")?);
            Ok(())
        }
    }
}

/// Map a 1-based position to its section id; anything else is taken as an id.
pub(crate) fn section_id(model: &ContentModel, target: &str) -> String {
    match target.parse::<usize>() {
        Ok(n) if n >= 1 && n <= model.len() => model.sections()[n - 1].id.clone(),
        _ => target.to_string(),
    }
}
