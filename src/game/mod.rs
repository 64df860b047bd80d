//! Game core: domain types and the session state machine.

mod session;
mod types;

pub use session::{GameSession, SetupError};
pub use types::{
    Coordinate, Country, CountryCode, GameStatus, GuessOutcome, PathEntry, STARTING_LIVES,
};
