//! Output formatting for one-shot commands

use anyhow::Context;
use serde::Serialize;

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rendered for a terminal
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print `text` or the JSON form of `data`, depending on `format`.
pub fn print<T: Serialize>(
    format: OutputFormat,
    text: impl FnOnce() -> String,
    data: &T,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", text()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).context("failed to encode JSON")?;
            println!("{}", json);
        }
    }
    Ok(())
}
