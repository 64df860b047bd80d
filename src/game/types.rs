//! Core domain types for the border-walk game.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Three-letter ISO 3166-1 alpha-3 code. Codes are the canonical identity
/// for all country comparisons; display names are for humans only.
pub type CountryCode = String;

/// Number of wrong guesses a session tolerates before it is lost.
pub const STARTING_LIVES: u8 = 5;

/// Geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude, -90..=90.
    pub lat: f64,
    /// Longitude, -180..=180.
    pub lng: f64,
}

/// A country as the game sees it, immutable once loaded.
///
/// The registry guarantees that `borders` never contains `code` itself,
/// so a plain membership test is a correct adjacency check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Canonical display name ("Germany", not "DEU").
    pub name: String,
    /// ISO alpha-3 code.
    pub code: CountryCode,
    /// Codes of countries sharing a land border; empty for islands.
    pub borders: BTreeSet<CountryCode>,
    /// Representative coordinate for the path feed.
    pub coord: Coordinate,
}

impl Country {
    /// Checks whether `code` is a land neighbor of this country.
    pub fn borders_code(&self, code: &str) -> bool {
        self.borders.contains(code)
    }

    /// A country can anchor a session (start or end) only if it has at
    /// least one land border to walk across.
    pub fn is_playable(&self) -> bool {
        !self.borders.is_empty()
    }
}

/// One step of a session's path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEntry {
    /// Code of the visited country.
    pub code: CountryCode,
    /// Its coordinate, for drawing the walk.
    pub coord: Coordinate,
}

impl PathEntry {
    /// Builds a path entry from a country record.
    pub fn from_country(country: &Country) -> Self {
        Self {
            code: country.code.clone(),
            coord: country.coord,
        }
    }
}

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Session is ongoing, guesses are accepted.
    InProgress,
    /// Player reached the end country.
    Won,
    /// Player ran out of lives.
    Lost,
}

impl GameStatus {
    /// True once the session has ended, one way or the other.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Typed result of one guess. Every outcome is a value; guess evaluation
/// never fails the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Valid border step; play continues from the named country.
    Progress {
        /// The new current country.
        current: Country,
    },
    /// Name not found in the registry. One life lost.
    Unrecognized {
        /// The raw guess as the player typed it.
        guess: String,
        /// Lives remaining after the deduction.
        lives: u8,
    },
    /// Known country that does not border the current one. One life lost.
    NotAdjacent {
        /// The guessed country's display name.
        guess: String,
        /// The current country's display name.
        current: String,
        /// Lives remaining after the deduction.
        lives: u8,
    },
    /// The guess reaches (or borders) the end country. Session won.
    Victory {
        /// The end country's display name.
        destination: String,
    },
    /// The last life was lost. Session lost.
    Defeat {
        /// The end country's display name, for the game-over message.
        destination: String,
    },
    /// Session already ended; nothing changed.
    AlreadyOver,
}

impl GuessOutcome {
    /// Stable tag for the presentation feed.
    pub fn tag(&self) -> &'static str {
        match self {
            GuessOutcome::Progress { .. } => "progress",
            GuessOutcome::Unrecognized { .. } => "unrecognized",
            GuessOutcome::NotAdjacent { .. } => "not-adjacent",
            GuessOutcome::Victory { .. } => "victory",
            GuessOutcome::Defeat { .. } => "defeat",
            GuessOutcome::AlreadyOver => "already-over",
        }
    }
}

impl std::fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessOutcome::Progress { current } => {
                write!(f, "{} it is. Keep going!", current.name)
            }
            GuessOutcome::Unrecognized { guess, lives } => write!(
                f,
                "\"{guess}\" is not a recognized country. {lives} lives left."
            ),
            GuessOutcome::NotAdjacent {
                guess,
                current,
                lives,
            } => write!(f, "{guess} does not border {current}. {lives} lives left."),
            GuessOutcome::Victory { destination } => {
                write!(f, "Victory! You reached {destination}.")
            }
            GuessOutcome::Defeat { destination } => write!(
                f,
                "Game over! You ran out of lives on the way to {destination}."
            ),
            GuessOutcome::AlreadyOver => {
                write!(f, "The game is already over. Start a new one.")
            }
        }
    }
}
