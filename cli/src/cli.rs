//! CLI argument definitions for the Parlance front end.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the entrypoint so parsing can be tested without running commands.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "parlance.toml";

/// Render localized messages from a Parlance bundle.
#[derive(Parser, Debug)]
#[command(name = "parlance")]
#[command(version, about)]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Greet Bob in the best language for Turkey:\n",
    "    $ parlance render HelloPerson --country TR --lang tr-TR,en --data Name=Bob\n\n",
    "  Pick the plural form for three cats:\n",
    "    $ parlance render PersonCats --count 3 --data Name=Bob --data Count=3\n\n",
    "  List the languages each country serves:\n",
    "    $ parlance tags\n",
))]
pub struct Cli {
    /// Bundle configuration file. Message files resolve relative to its
    /// directory.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_CONFIG,
        global = true
    )]
    pub config: Utf8PathBuf,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render one message and print it.
    Render(RenderArgs),

    /// List the language tags registered for each country.
    Tags(TagsArgs),
}

/// Arguments for the render command.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Message identifier.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Country whose messages are searched [default: the configured country].
    #[arg(short = 'C', long, value_name = "CODE")]
    pub country: Option<String>,

    /// Preferred languages as Accept-Language values, best first.
    #[arg(short, long = "lang", value_name = "TAGS")]
    pub langs: Vec<String>,

    /// Plural count selecting the message form.
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<String>,

    /// Template data entries.
    #[arg(short, long, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub data: Vec<(String, String)>,

    /// Text rendered when the bundle has no message for ID.
    #[arg(long = "default", value_name = "TEXT")]
    pub default_text: Option<String>,
}

/// Arguments for the tags command.
#[derive(Args, Debug, Clone)]
pub struct TagsArgs {
    /// Only list tags for this country.
    #[arg(short = 'C', long, value_name = "CODE")]
    pub country: Option<String>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
