//! Country registry: the normalized name → country mapping the game plays
//! against, built once at startup from raw API records.
//!
//! Filtering rules follow the upstream dataset's quirks: a record without a
//! `borders` field or without a two-element `latlng` cannot be placed on the
//! path and is dropped entirely, while a record with an *empty* border list
//! (an island) stays recognizable as a guess but can never anchor a route.

use crate::fetch::RawCountry;
use crate::game::{Coordinate, Country, CountryCode};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info, instrument, warn};

/// Errors that can occur when building the registry.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RegistryError {
    /// No usable records survived filtering; no game can ever start.
    #[display("no usable countries in the dataset")]
    Empty,
}

/// Lookup structure over all loaded countries.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    /// Keyed by normalized (trimmed, upper-cased) display name.
    by_name: HashMap<String, Country>,
    /// Normalized name of each country, keyed by ISO code.
    name_by_code: HashMap<CountryCode, String>,
    /// Codes eligible as start/end: non-empty borders, valid coordinate.
    playable: Vec<CountryCode>,
}

/// Normalizes a display name or guess for lookup: exact match after
/// trimming and upper-casing, no fuzzy matching.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_uppercase()
}

impl CountryRegistry {
    /// Builds the registry from raw API records.
    ///
    /// Strips any self-reference from a record's border list; the state
    /// machine's adjacency check relies on borders never containing the
    /// country's own code.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Empty`] when no record survives filtering.
    #[instrument(skip(records), fields(records = records.len()))]
    pub fn from_records(records: Vec<RawCountry>) -> Result<Self, RegistryError> {
        let mut by_name = HashMap::new();
        let mut name_by_code = HashMap::new();
        let mut playable = Vec::new();

        for record in records {
            let Some(country) = Self::adapt(record) else {
                continue;
            };
            let key = normalize_name(&country.name);
            if country.is_playable() {
                playable.push(country.code.clone());
            }
            name_by_code.insert(country.code.clone(), key.clone());
            by_name.insert(key, country);
        }

        if by_name.is_empty() {
            warn!("Dataset produced an empty registry");
            return Err(RegistryError::Empty);
        }

        playable.sort();
        playable.dedup();
        info!(
            countries = by_name.len(),
            playable = playable.len(),
            "Registry built"
        );
        Ok(Self {
            by_name,
            name_by_code,
            playable,
        })
    }

    /// Converts one raw record, or drops it when it cannot sit on a path.
    fn adapt(record: RawCountry) -> Option<Country> {
        let RawCountry {
            name,
            cca3,
            borders,
            latlng,
        } = record;

        let borders = borders?;
        let latlng = latlng?;
        let [lat, lng] = latlng.as_slice() else {
            debug!(code = %cca3, "Dropping record with malformed latlng");
            return None;
        };
        if name.common.trim().is_empty() || cca3.trim().is_empty() {
            return None;
        }

        let code = cca3.trim().to_uppercase();
        let borders: BTreeSet<CountryCode> = borders
            .into_iter()
            .map(|b| b.trim().to_uppercase())
            .filter(|b| {
                // Registry contract: a country never borders itself.
                if *b == code {
                    warn!(%code, "Stripping self-reference from border list");
                    return false;
                }
                true
            })
            .collect();

        Some(Country {
            name: name.common.trim().to_string(),
            code,
            borders,
            coord: Coordinate {
                lat: *lat,
                lng: *lng,
            },
        })
    }

    /// Looks up a free-text guess; exact case-insensitive name match.
    pub fn lookup(&self, raw: &str) -> Option<&Country> {
        self.by_name.get(&normalize_name(raw))
    }

    /// Looks up a country by its ISO code.
    pub fn country_by_code(&self, code: &str) -> Option<&Country> {
        self.by_name.get(self.name_by_code.get(code)?)
    }

    /// Codes eligible as route endpoints, in sorted order.
    pub fn playable(&self) -> &[CountryCode] {
        &self.playable
    }

    /// Number of countries in the registry.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// True when the registry holds no countries at all.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
