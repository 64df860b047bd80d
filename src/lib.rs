//! Border Trek - country-border pathfinding game core.
//!
//! The player walks from a random start country to a random end country by
//! naming countries that share a land border with the current one, under a
//! budget of five lives.
//!
//! # Architecture
//!
//! - **Fetch**: one-shot acquisition of the country records and boundary
//!   geometry, before any session exists
//! - **Registry**: the filtered, normalized name → country mapping
//! - **Game**: the session state machine (guess evaluation, win/loss,
//!   lives, path)
//! - **Feed**: immutable render snapshots for a downstream visualization
//!
//! # Example
//!
//! ```no_run
//! use border_trek::{CountryRegistry, GameSession};
//!
//! # fn example() -> anyhow::Result<()> {
//! let records = border_trek::load_countries("countries.json".as_ref())?;
//! let registry = CountryRegistry::from_records(records)?;
//!
//! let mut session = GameSession::new(&registry, &mut rand::rng())?;
//! let outcome = session.submit_guess(&registry, "France");
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod feed;
mod fetch;
mod game;
mod geo;
mod registry;

/// Command-line interface (used by the binary).
pub mod cli;

// Crate-level exports - dataset acquisition
pub use fetch::{
    BOUNDARIES_URL, COUNTRIES_URL, FetchError, RawCountry, RawName, fetch_boundaries,
    fetch_countries, load_boundaries, load_countries,
};

// Crate-level exports - registry
pub use registry::{CountryRegistry, RegistryError, normalize_name};

// Crate-level exports - game core
pub use game::{
    Coordinate, Country, CountryCode, GameSession, GameStatus, GuessOutcome, PathEntry,
    STARTING_LIVES, SetupError,
};

// Crate-level exports - presentation feed
pub use feed::{ArcSegment, FeedEvent, PathPoint, Snapshot};

// Crate-level exports - boundary geometry
pub use geo::{BoundaryAtlas, GeoError};
