//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use draftboard_core::draft::pick::Position;

fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_str_pos(s).ok_or_else(|| format!("unknown position '{s}'"))
}

/// Where to find the ADP table.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Season year (e.g. 2025). Defaults to the current year.
    #[clap(long, short)]
    pub season: Option<i32>,

    /// ADP CSV to load instead of `<adp_dir>/<season>.csv`.
    #[clap(long)]
    pub adp: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[clap(name = "draftboard", about = "Fantasy football draft recommendations and grading")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank available players for the next pick.
    Recommend {
        /// Request JSON file, or `-` for stdin.
        #[clap(long, short)]
        request: String,

        #[clap(flatten)]
        source: SourceArgs,

        /// Keep at most this many recommendations.
        #[clap(long, short = 'n', conflicts_with = "all")]
        limit: Option<usize>,

        /// Return every available player.
        #[clap(long)]
        all: bool,

        #[clap(long)]
        pretty: bool,
    },

    /// Grade the caller's picks against ADP.
    Grade {
        /// Request JSON file, or `-` for stdin.
        #[clap(long, short)]
        request: String,

        #[clap(flatten)]
        source: SourceArgs,

        #[clap(long)]
        pretty: bool,
    },

    /// Print the loaded ADP table grouped by tier.
    Tiers {
        #[clap(flatten)]
        source: SourceArgs,

        /// Only show one position.
        #[clap(short = 'p', long = "position", value_parser = parse_position)]
        position: Option<Position>,
    },
}
