//! Presentation feed: immutable snapshots the core emits after every
//! transition, and the arc pairing a globe renderer draws the walk with.
//!
//! The core never renders. A frontend consumes [`Snapshot`] values (or
//! serialized [`FeedEvent`] lines) and owns all side effects.

use crate::game::{Coordinate, CountryCode, GameSession, GameStatus, GuessOutcome};
use crate::registry::CountryRegistry;
use serde::{Deserialize, Serialize};

/// One resolved point on the rendered path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    /// ISO code, for highlighting the matching boundary polygon.
    pub code: CountryCode,
    /// Display name.
    pub name: String,
    /// Coordinate the path segment anchors to.
    pub coord: Coordinate,
}

/// A great-circle arc between two consecutive path points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    /// Arc origin latitude.
    pub start_lat: f64,
    /// Arc origin longitude.
    pub start_lng: f64,
    /// Arc destination latitude.
    pub end_lat: f64,
    /// Arc destination longitude.
    pub end_lng: f64,
}

/// Everything a frontend needs to render the session after a transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Session status.
    pub status: GameStatus,
    /// Remaining attempt budget.
    pub lives: u8,
    /// Fixed start of the route.
    pub start: PathPoint,
    /// Fixed destination of the route.
    pub end: PathPoint,
    /// Where the player currently stands.
    pub current: PathPoint,
    /// The walk so far, start first.
    pub path: Vec<PathPoint>,
}

impl Snapshot {
    /// Resolves a session's state against the registry.
    pub(crate) fn of(session: &GameSession, registry: &CountryRegistry) -> Self {
        let resolve = |code: &str| PathPoint {
            code: code.to_string(),
            name: registry
                .country_by_code(code)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| code.to_string()),
            coord: registry
                .country_by_code(code)
                .map(|c| c.coord)
                .unwrap_or(Coordinate { lat: 0.0, lng: 0.0 }),
        };

        Self {
            status: session.status(),
            lives: session.lives(),
            start: resolve(session.start_code()),
            end: resolve(session.end_code()),
            current: resolve(session.current_code()),
            path: session.path().iter().map(|e| resolve(&e.code)).collect(),
        }
    }

    /// Pairs consecutive path points into drawable arcs; empty until the
    /// path has at least two entries.
    pub fn arcs(&self) -> Vec<ArcSegment> {
        self.path
            .windows(2)
            .map(|pair| ArcSegment {
                start_lat: pair[0].coord.lat,
                start_lng: pair[0].coord.lng,
                end_lat: pair[1].coord.lat,
                end_lng: pair[1].coord.lng,
            })
            .collect()
    }
}

/// One line of the presentation feed: the transition's result and the
/// snapshot that follows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEvent {
    /// Stable result tag: `progress`, `unrecognized`, `not-adjacent`,
    /// `victory`, `defeat` or `already-over`.
    pub tag: String,
    /// Human-readable message for the transition.
    pub message: String,
    /// State after the transition.
    pub snapshot: Snapshot,
}

impl FeedEvent {
    /// Builds a feed event from a guess outcome and the resulting snapshot.
    pub fn new(outcome: &GuessOutcome, snapshot: Snapshot) -> Self {
        Self {
            tag: outcome.tag().to_string(),
            message: outcome.to_string(),
            snapshot,
        }
    }
}
