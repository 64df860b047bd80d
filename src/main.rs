//! Border Trek - terminal frontend.
//!
//! Fetches (or loads) the datasets once, builds the registry, then runs a
//! synchronous line loop: free-text guesses, `new` to start over, `quit`
//! to exit.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use border_trek::cli::{Cli, Command};
use border_trek::{
    BoundaryAtlas, CountryRegistry, FeedEvent, GameSession, GameStatus, GuessOutcome, Snapshot,
};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            data,
            boundaries,
            feed,
            seed,
        } => run_play(data, boundaries, feed, seed).await,
        Command::Fetch { data, boundaries } => run_fetch(data, boundaries).await,
    }
}

/// Downloads both datasets for offline play.
async fn run_fetch(data: PathBuf, boundaries: PathBuf) -> Result<()> {
    let records = border_trek::fetch_countries()
        .await
        .context("fetching country records")?;
    std::fs::write(&data, serde_json::to_string(&records)?)?;
    info!(path = %data.display(), records = records.len(), "Wrote country dataset");

    let geo = border_trek::fetch_boundaries()
        .await
        .context("fetching boundary geometry")?;
    std::fs::write(&boundaries, serde_json::to_string(&geo)?)?;
    info!(path = %boundaries.display(), "Wrote boundary dataset");
    Ok(())
}

/// Acquires data, builds the registry, and runs the play loop.
async fn run_play(
    data: Option<PathBuf>,
    boundaries: Option<PathBuf>,
    feed: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    // Everything asynchronous happens here, before the first session.
    // A failure at this point is fatal: without data no game can start.
    let records = match &data {
        Some(path) => border_trek::load_countries(path)
            .with_context(|| format!("loading country dataset from {}", path.display()))?,
        None => border_trek::fetch_countries()
            .await
            .context("fetching country records")?,
    };
    let registry = CountryRegistry::from_records(records).context("building country registry")?;

    let atlas = match &boundaries {
        Some(path) => {
            let geo = border_trek::load_boundaries(path)
                .with_context(|| format!("loading boundary dataset from {}", path.display()))?;
            Some(BoundaryAtlas::from_feature_collection(geo)?)
        }
        None => None,
    };
    if let Some(atlas) = &atlas {
        info!(features = atlas.len(), "Boundary geometry available");
    }

    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    play_loop(&registry, feed.as_deref(), &mut rng)
}

/// The synchronous game loop over stdin/stdout.
fn play_loop(registry: &CountryRegistry, feed: Option<&Path>, rng: &mut impl Rng) -> Result<()> {
    let mut session = GameSession::new(registry, rng).context("starting first game")?;
    announce(&session.snapshot(registry));

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "new" => {
                // Discarding a live session is unconditional; it holds no
                // external resources.
                session = GameSession::new(registry, rng).context("starting new game")?;
                announce(&session.snapshot(registry));
                continue;
            }
            _ => {}
        }

        let outcome = session.submit_guess(registry, input);
        let snapshot = session.snapshot(registry);
        println!("{outcome}");
        render(&snapshot);
        if let Some(path) = feed {
            if let Err(err) = append_feed(path, &FeedEvent::new(&outcome, snapshot)) {
                warn!(error = %err, "Could not write feed event");
            }
        }
        if matches!(outcome, GuessOutcome::Victory { .. } | GuessOutcome::Defeat { .. }) {
            println!("Type `new` for another game, or `quit` to leave.");
        }
    }

    Ok(())
}

/// Prints the route banner for a fresh session.
fn announce(snapshot: &Snapshot) {
    println!(
        "Find a path from {} to {}! You have {} lives.",
        snapshot.start.name, snapshot.end.name, snapshot.lives
    );
}

/// Prints the state a frontend would render after a transition.
fn render(snapshot: &Snapshot) {
    let walk: Vec<&str> = snapshot.path.iter().map(|p| p.name.as_str()).collect();
    println!(
        "[{}] at {} | lives {} | path: {}",
        match snapshot.status {
            GameStatus::InProgress => "in progress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        },
        snapshot.current.name,
        snapshot.lives,
        walk.join(" -> ")
    );
}

/// Appends one serialized feed event to the feed file.
fn append_feed(path: &Path, event: &FeedEvent) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    writeln!(file, "{}", serde_json::to_string(event)?)?;
    Ok(())
}
