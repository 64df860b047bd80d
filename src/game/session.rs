//! The game session state machine.
//!
//! A session owns one playthrough: fixed start and end countries, the
//! player's current position, the remaining lives, and the path walked so
//! far. All mutation goes through [`GameSession::submit_guess`]; every
//! transition is reported as a [`GuessOutcome`] value.

use super::types::{Country, CountryCode, GameStatus, GuessOutcome, PathEntry, STARTING_LIVES};
use crate::feed::Snapshot;
use crate::registry::CountryRegistry;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Errors that can occur when creating a session.
///
/// These are the only fatal conditions in the game core; once a session
/// exists, every guess outcome is a plain value.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SetupError {
    /// Fewer than two playable countries exist, so no route can be drawn.
    #[display("cannot start a game: only {_0} playable countries in the registry")]
    #[error(ignore)]
    NotEnoughCountries(usize),

    /// A requested route endpoint is unknown or has no land borders.
    #[display("{_0} is not a playable country")]
    #[error(ignore)]
    UnplayableEndpoint(String),

    /// A requested route starts and ends in the same country.
    #[display("start and end must be distinct countries")]
    SameStartAndEnd,
}

/// One playthrough from a fixed start country to a fixed end country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    start_code: CountryCode,
    end_code: CountryCode,
    current_code: CountryCode,
    lives: u8,
    path: Vec<PathEntry>,
    status: GameStatus,
}

impl GameSession {
    /// Starts a session on a random route: two distinct countries sampled
    /// uniformly from the registry's playable pool.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::NotEnoughCountries`] when the pool holds fewer
    /// than two countries. The draw itself is bounded; there is no retry
    /// loop to get stuck in.
    #[instrument(skip_all)]
    pub fn new(registry: &CountryRegistry, rng: &mut impl Rng) -> Result<Self, SetupError> {
        let pool = registry.playable();
        if pool.len() < 2 {
            warn!(playable = pool.len(), "Not enough playable countries");
            return Err(SetupError::NotEnoughCountries(pool.len()));
        }

        // Draw two distinct indices without resampling: pick the first
        // freely, then pick from the remaining n-1 slots.
        let start_idx = rng.random_range(0..pool.len());
        let mut end_idx = rng.random_range(0..pool.len() - 1);
        if end_idx >= start_idx {
            end_idx += 1;
        }

        Self::with_route(registry, &pool[start_idx], &pool[end_idx])
    }

    /// Starts a session on a fixed route. Both endpoints must be playable
    /// registry entries and must differ.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::UnplayableEndpoint`] or
    /// [`SetupError::SameStartAndEnd`] when the route is invalid.
    #[instrument(skip(registry))]
    pub fn with_route(
        registry: &CountryRegistry,
        start: &str,
        end: &str,
    ) -> Result<Self, SetupError> {
        let start = Self::playable_endpoint(registry, start)?;
        let end = Self::playable_endpoint(registry, end)?;
        if start.code == end.code {
            return Err(SetupError::SameStartAndEnd);
        }

        info!(start = %start.code, end = %end.code, "Starting new session");
        Ok(Self {
            start_code: start.code.clone(),
            end_code: end.code.clone(),
            current_code: start.code.clone(),
            lives: STARTING_LIVES,
            path: vec![PathEntry::from_country(start)],
            status: GameStatus::InProgress,
        })
    }

    fn playable_endpoint<'r>(
        registry: &'r CountryRegistry,
        code: &str,
    ) -> Result<&'r Country, SetupError> {
        registry
            .country_by_code(code)
            .filter(|c| c.is_playable())
            .ok_or_else(|| SetupError::UnplayableEndpoint(code.to_string()))
    }

    /// Evaluates one free-text guess against the registry and advances the
    /// state machine.
    ///
    /// Terminal sessions are left untouched and report
    /// [`GuessOutcome::AlreadyOver`]. A wrong guess (unknown name, or a
    /// known country that does not border the current one) costs a life;
    /// losing the last life ends the session. A correct guess extends the
    /// path, and wins the session when the guessed country borders the end
    /// country or is the end country itself.
    #[instrument(skip(self, registry), fields(current = %self.current_code, lives = self.lives))]
    pub fn submit_guess(&mut self, registry: &CountryRegistry, raw: &str) -> GuessOutcome {
        if self.status.is_terminal() {
            debug!(status = ?self.status, "Guess after game end ignored");
            return GuessOutcome::AlreadyOver;
        }

        let Some(guessed) = registry.lookup(raw) else {
            warn!(guess = raw, "Unrecognized guess");
            return self.lose_life(registry, |lives| GuessOutcome::Unrecognized {
                guess: raw.trim().to_string(),
                lives,
            });
        };

        // The current code always originates from a registry entry.
        let current = registry
            .country_by_code(&self.current_code)
            .expect("current country must be a registry entry");

        // A country never lists itself as a border, so this also rejects
        // guessing the current country.
        if !current.borders_code(&guessed.code) {
            warn!(guess = %guessed.code, current = %current.code, "Non-adjacent guess");
            let (guess_name, current_name) = (guessed.name.clone(), current.name.clone());
            return self.lose_life(registry, |lives| GuessOutcome::NotAdjacent {
                guess: guess_name,
                current: current_name,
                lives,
            });
        }

        self.path.push(PathEntry::from_country(guessed));

        let reached_end = guessed.code == self.end_code;
        if reached_end || guessed.borders_code(&self.end_code) {
            let end = registry
                .country_by_code(&self.end_code)
                .expect("end country must be a registry entry");
            if !reached_end {
                self.path.push(PathEntry::from_country(end));
            }
            self.status = GameStatus::Won;
            info!(steps = self.path.len(), "Session won");
            return GuessOutcome::Victory {
                destination: end.name.clone(),
            };
        }

        self.current_code = guessed.code.clone();
        info!(current = %self.current_code, "Valid step");
        GuessOutcome::Progress {
            current: guessed.clone(),
        }
    }

    /// Deducts one life and builds the outcome: the rejection from `make`
    /// while lives remain, or defeat when the budget hits zero.
    fn lose_life(
        &mut self,
        registry: &CountryRegistry,
        make: impl FnOnce(u8) -> GuessOutcome,
    ) -> GuessOutcome {
        self.lives -= 1;
        if self.lives == 0 {
            self.status = GameStatus::Lost;
            let destination = registry
                .country_by_code(&self.end_code)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| self.end_code.clone());
            info!(%destination, "Session lost");
            return GuessOutcome::Defeat { destination };
        }
        make(self.lives)
    }

    /// Builds an immutable render snapshot of the session.
    pub fn snapshot(&self, registry: &CountryRegistry) -> Snapshot {
        Snapshot::of(self, registry)
    }

    /// Code of the fixed start country.
    pub fn start_code(&self) -> &str {
        &self.start_code
    }

    /// Code of the fixed end country.
    pub fn end_code(&self) -> &str {
        &self.end_code
    }

    /// Code of the country the player currently stands in.
    pub fn current_code(&self) -> &str {
        &self.current_code
    }

    /// Remaining attempt budget.
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// The walk so far, starting with the start country.
    pub fn path(&self) -> &[PathEntry] {
        &self.path
    }

    /// Current session status.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}
