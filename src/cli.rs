//! Command-line interface for border_trek.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Border Trek - walk the world one border at a time
#[derive(Parser, Debug)]
#[command(name = "border_trek")]
#[command(about = "Country-border pathfinding game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Local country dataset (JSON). Fetched from restcountries when omitted.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Local boundary GeoJSON for the visualization feed
        #[arg(long)]
        boundaries: Option<PathBuf>,

        /// Append one JSON feed event per transition to this file
        #[arg(long)]
        feed: Option<PathBuf>,

        /// Seed the route selection (reproducible games)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Download the datasets for offline play
    Fetch {
        /// Where to write the country dataset
        #[arg(long, default_value = "countries.json")]
        data: PathBuf,

        /// Where to write the boundary GeoJSON
        #[arg(long, default_value = "boundaries.geojson")]
        boundaries: PathBuf,
    },
}
