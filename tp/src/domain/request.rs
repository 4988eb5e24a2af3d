//! Trip request types
//!
//! `RawRequest` is the loosely typed field map a caller hands us; `TripRequest`
//! is the canonical form produced by the validator and consumed by every stage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Discrete pricing category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    #[default]
    Moderate,
    Luxury,
}

impl BudgetTier {
    /// Generic price multiplier relative to the moderate tier
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Budget => 0.7,
            Self::Moderate => 1.0,
            Self::Luxury => 2.2,
        }
    }

    /// Title-cased label for summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::Moderate => "Moderate",
            Self::Luxury => "Luxury",
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Budget => write!(f, "budget"),
            Self::Moderate => write!(f, "moderate"),
            Self::Luxury => write!(f, "luxury"),
        }
    }
}

impl std::str::FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "moderate" => Ok(Self::Moderate),
            "luxury" => Ok(Self::Luxury),
            _ => Err(format!("Unknown budget tier: {}", s)),
        }
    }
}

/// Canonical, validated trip request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripRequest {
    /// Departure city as entered (trimmed)
    pub origin: String,

    /// Arrival city as entered (trimmed)
    pub destination: String,

    pub departure_date: NaiveDate,

    pub return_date: NaiveDate,

    pub budget_tier: BudgetTier,

    /// Always at least 1
    pub traveler_count: u32,

    /// Lower-cased interest tags, de-duplicated, in the order given
    pub interests: Vec<String>,

    #[serde(default)]
    pub special_requests: String,
}

impl TripRequest {
    /// Number of itinerary days (and hotel nights) for this trip
    pub fn trip_days(&self) -> u32 {
        (self.return_date - self.departure_date).num_days().max(0) as u32
    }

    pub fn nights(&self) -> u32 {
        self.trip_days()
    }

    /// Hotel rooms needed, two travelers per room
    pub fn rooms(&self) -> u32 {
        self.traveler_count.div_ceil(2).max(1)
    }

    /// Convert back into a raw field map so it can re-enter the pipeline
    pub fn to_raw(&self) -> RawRequest {
        RawRequest::new()
            .with("origin", self.origin.clone())
            .with("destination", self.destination.clone())
            .with("departure_date", self.departure_date.format("%Y-%m-%d").to_string())
            .with("return_date", self.return_date.format("%Y-%m-%d").to_string())
            .with("budget", self.budget_tier.to_string())
            .with("travelers", self.traveler_count)
            .with(
                "interests",
                Value::Array(self.interests.iter().cloned().map(Value::String).collect()),
            )
            .with("special_requests", self.special_requests.clone())
    }
}

/// Raw request field map as received from a caller
///
/// Field types are not trusted: `travelers` may arrive as a string and
/// `interests` as either a comma-separated string or an array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRequest(Map<String, Value>);

impl RawRequest {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style field insertion
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Build from an arbitrary JSON value; non-objects yield an empty map
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

impl From<Map<String, Value>> for RawRequest {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
