use clap::{ArgAction, Args, Parser, Subcommand};
use folio_render::{ANY, Theme};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Browse a book catalog and render it as an HTML page.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Config file (replaces the default config file lookup)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Catalog JSON file (defaults to the embedded sample catalog)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
    /// Books revealed per page
    #[arg(long, global = true, value_name = "N")]
    pub page_size: Option<NonZeroUsize>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the catalog and render the resulting list
    Browse(BrowseArgs),
    /// Render the page with one book's details open
    Show {
        /// Book id
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List author ids and names
    Authors,
    /// List genre ids and names
    Genres,
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Case-insensitive title substring
    #[arg(long, default_value = "")]
    pub title: String,
    /// Author id, or "any"
    #[arg(long, default_value = ANY)]
    pub author: String,
    /// Genre id, or "any"
    #[arg(long, default_value = ANY)]
    pub genre: String,
    /// Press "show more" this many times
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub more: usize,
    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Debug, Args)]
pub struct PageArgs {
    /// Override the configured theme (day or night)
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<Theme>,
    /// Resolve the "system" theme as dark
    #[arg(long)]
    pub dark: bool,
    /// Write the page here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    s.parse().map_err(|_| format!("unknown theme '{s}' (expected day or night)"))
}
