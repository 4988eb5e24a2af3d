//! Built-in travel knowledge
//!
//! Static city, route, rail and attraction tables shared read-only by every
//! pipeline stage. `KnowledgeBase` indexes them and answers name resolution
//! and distance questions.

mod attractions;
mod cities;
pub mod rail;
mod routes;

use std::collections::HashMap;

use strsim::jaro_winkler;
use tracing::debug;

pub use attractions::{Attraction, RESTAURANT_TYPES};
pub use cities::{AirAccess, City, RailAccess, Region};

/// Minimum Jaro-Winkler similarity for a fuzzy city match
pub const FUZZY_THRESHOLD: f64 = 0.92;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Rail lines rarely run straight
const RAIL_DETOUR: f64 = 1.25;
const ROAD_DETOUR: f64 = 1.3;

/// Beyond this road distance a drive is not offered
pub const MAX_ROAD_KM: u32 = 3500;

/// Great-circle distance classification used by flight pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceBucket {
    Short,
    Medium,
    Long,
    Intercontinental,
}

impl DistanceBucket {
    pub fn from_km(km: f64) -> Self {
        if km < 700.0 {
            Self::Short
        } else if km < 1500.0 {
            Self::Medium
        } else if km < 4000.0 {
            Self::Long
        } else {
            Self::Intercontinental
        }
    }
}

impl std::fmt::Display for DistanceBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Short => write!(f, "short"),
            Self::Medium => write!(f, "medium"),
            Self::Long => write!(f, "long"),
            Self::Intercontinental => write!(f, "intercontinental"),
        }
    }
}

/// Keep the higher score, breaking ties toward the smaller key
fn best_scored(best: Option<(&'static str, f64)>, next: (&'static str, f64)) -> Option<(&'static str, f64)> {
    match best {
        Some(b) if b.1.total_cmp(&next.1).then_with(|| next.0.cmp(b.0)).is_ge() => Some(b),
        _ => Some(next),
    }
}

/// Indexed view over the built-in tables
#[derive(Debug)]
pub struct KnowledgeBase {
    cities: HashMap<&'static str, &'static City>,
    aliases: HashMap<&'static str, &'static str>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnowledgeBase {
    /// Index the compiled-in city tables
    pub fn builtin() -> Self {
        let cities: HashMap<_, _> = cities::CITIES.iter().map(|c| (c.key, c)).collect();
        let aliases = cities::ALIASES
            .iter()
            .filter(|(_, key)| cities.contains_key(key))
            .map(|(alias, key)| (*alias, *key))
            .collect();
        debug!(cities = cities.len(), "KnowledgeBase::builtin: indexed");
        Self { cities, aliases }
    }

    /// Resolve a free-form city name: alias, exact key, then fuzzy match
    pub fn resolve(&self, name: &str) -> Option<&'static City> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        if let Some(key) = self.aliases.get(needle.as_str()) {
            return self.cities.get(key).copied();
        }
        if let Some(city) = self.cities.get(needle.as_str()) {
            return Some(*city);
        }
        let (best, score) = self.fuzzy_best(&needle)?;
        debug!(%name, key = best.key, score, "KnowledgeBase::resolve: fuzzy match");
        Some(best)
    }

    /// Best fuzzy match at or above `FUZZY_THRESHOLD`, with its score
    pub fn fuzzy_best(&self, needle: &str) -> Option<(&'static City, f64)> {
        self.names()
            .map(|(label, key)| (key, jaro_winkler(needle, label)))
            .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
            .fold(None, best_scored)
            .and_then(|(key, score)| self.cities.get(key).map(|c| (*c, score)))
    }

    /// Every lookup label (keys and aliases) with the key it resolves to
    pub fn names(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.cities
            .keys()
            .map(|k| (*k, *k))
            .chain(self.aliases.iter().map(|(a, k)| (*a, *k)))
    }

    pub fn city(&self, key: &str) -> Option<&'static City> {
        self.cities.get(key).copied()
    }

    /// Rail distance from the route table, else great-circle with a detour factor
    pub fn rail_distance(&self, a: &City, b: &City) -> u32 {
        routes::lookup(routes::RAIL_DISTANCES, a.key, b.key)
            .unwrap_or_else(|| (great_circle_km(a, b) * RAIL_DETOUR).round() as u32)
    }

    /// Road distance from the route table, else great-circle with a detour factor
    pub fn road_distance(&self, a: &City, b: &City) -> u32 {
        routes::lookup(routes::ROAD_DISTANCES, a.key, b.key)
            .unwrap_or_else(|| (great_circle_km(a, b) * ROAD_DETOUR).round() as u32)
    }

    /// Whether a drive between two known cities is possible at all
    pub fn road_feasible(&self, a: &City, b: &City) -> bool {
        a.region == b.region && self.road_distance(a, b) <= MAX_ROAD_KM
    }

    /// Attractions for a destination, falling back to the generic list
    pub fn attractions(&self, destination: Option<&City>) -> &'static [Attraction] {
        destination
            .and_then(|c| attractions::attractions_for(c.key))
            .unwrap_or_else(attractions::generic_attractions)
    }

    /// Named dining venues for a destination, if the table has any
    pub fn dining(&self, destination: Option<&City>) -> Option<&'static [&'static str]> {
        destination.and_then(|c| attractions::dining_for(c.key))
    }
}

/// Haversine distance between two cities
pub fn great_circle_km(a: &City, b: &City) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.lon - a.lon).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
