//! Option records produced by the domain generators
//!
//! Each domain returns a `DomainOptions<T>`: either a (possibly empty) list of
//! options, or a single sentinel explaining why the domain does not apply to
//! the route. An empty list and a sentinel mean different things.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Price;

/// The four generator domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Flight,
    Hotel,
    Rail,
    Road,
}

impl Domain {
    pub const ALL: [Domain; 4] = [Domain::Flight, Domain::Hotel, Domain::Rail, Domain::Road];
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flight => write!(f, "flight"),
            Self::Hotel => write!(f, "hotel"),
            Self::Rail => write!(f, "rail"),
            Self::Road => write!(f, "road"),
        }
    }
}

/// Reserved sentinel names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentinelMarker {
    #[serde(rename = "No Airport")]
    NoAirport,
    #[serde(rename = "No Direct Trains")]
    NoDirectTrains,
    #[serde(rename = "No Road Route")]
    NoRoadRoute,
}

impl SentinelMarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoAirport => "No Airport",
            Self::NoDirectTrains => "No Direct Trains",
            Self::NoRoadRoute => "No Road Route",
        }
    }
}

impl std::fmt::Display for SentinelMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Placeholder record for a structurally inapplicable domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentinel {
    pub name: SentinelMarker,

    /// Human-readable guidance for the traveler
    pub note: String,

    /// Nearest usable alternative (airport, station), when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearest: Option<String>,
}

impl Sentinel {
    pub fn new(name: SentinelMarker, note: impl Into<String>) -> Self {
        Self {
            name,
            note: note.into(),
            nearest: None,
        }
    }

    pub fn with_nearest(mut self, nearest: impl Into<String>) -> Self {
        self.nearest = Some(nearest.into());
        self
    }
}

/// A domain's result: options, or a sentinel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DomainOptions<T> {
    Options { items: Vec<T> },
    NotApplicable { sentinel: Sentinel },
}

impl<T> DomainOptions<T> {
    pub fn options(items: Vec<T>) -> Self {
        Self::Options { items }
    }

    pub fn empty() -> Self {
        Self::Options { items: Vec::new() }
    }

    pub fn not_applicable(sentinel: Sentinel) -> Self {
        Self::NotApplicable { sentinel }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::NotApplicable { .. })
    }

    pub fn sentinel(&self) -> Option<&Sentinel> {
        match self {
            Self::NotApplicable { sentinel } => Some(sentinel),
            Self::Options { .. } => None,
        }
    }

    /// Real options; empty for a sentinel
    pub fn items(&self) -> &[T] {
        match self {
            Self::Options { items } => items,
            Self::NotApplicable { .. } => &[],
        }
    }

    /// Number of records as a caller would see them (a sentinel counts as one)
    pub fn record_count(&self) -> usize {
        match self {
            Self::Options { items } => items.len(),
            Self::NotApplicable { .. } => 1,
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.items().first()
    }
}

/// Cabin class by budget tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CabinClass {
    Economy,
    #[serde(rename = "Premium Economy")]
    PremiumEconomy,
    Business,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOption {
    pub airline: String,
    pub airline_code: String,
    pub airline_rating: f32,
    pub flight_number: String,
    pub origin_code: String,
    pub destination_code: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_minutes: u32,
    pub duration: String,
    pub stops: u8,
    pub stop_type: String,
    pub cabin: CabinClass,
    /// Fare per traveler
    pub price: Price,
    /// Fare for the whole party
    pub total_price: Price,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancellationPolicy {
    #[serde(rename = "Free cancellation")]
    Free,
    #[serde(rename = "Non-refundable")]
    NonRefundable,
    Flexible,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelOption {
    pub name: String,
    pub property_type: String,
    pub stars: u8,
    pub location: String,
    pub price_per_night: Price,
    /// Nightly price x nights x rooms
    pub total_price: Price,
    pub nights: u32,
    pub rooms: u32,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub rating: f32,
    pub reviews_count: u32,
    pub amenities: Vec<String>,
    pub cancellation: CancellationPolicy,
    pub breakfast_included: bool,
    pub distance_to_center_km: f32,
}

/// Rail seat status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    #[serde(rename = "RAC")]
    Rac,
    Waitlist,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Rac => write!(f, "RAC"),
            Self::Waitlist => write!(f, "Waitlist"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainOption {
    pub train_name: String,
    pub train_number: String,
    pub train_type: String,
    pub origin_station: String,
    pub origin_code: String,
    pub destination_station: String,
    pub destination_code: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub distance_km: u32,
    pub class_name: String,
    pub class_code: String,
    /// Fare per traveler
    pub fare: Price,
    pub total_fare: Price,
    pub availability: Availability,
    pub pantry: bool,
    pub runs_on: String,
    pub date: NaiveDate,
    pub zone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadMode {
    Bus,
    Cab,
    #[serde(rename = "Self-Drive")]
    SelfDrive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorKind {
    Government,
    Private,
    Cab,
    #[serde(rename = "Self-Drive")]
    SelfDrive,
}

/// Road seat status, derived from the remaining seat count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatStatus {
    Available,
    #[serde(rename = "Filling Fast")]
    FillingFast,
    #[serde(rename = "Last Seats")]
    LastSeats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadOption {
    pub mode: RoadMode,
    pub operator: String,
    pub operator_kind: OperatorKind,
    pub vehicle_type: String,
    pub origin: String,
    pub origin_state: String,
    pub destination: String,
    pub destination_state: String,
    pub departure_time: String,
    pub duration: String,
    pub distance_km: u32,
    /// Per seat for buses, per vehicle for cabs and self-drive
    pub fare: Price,
    /// Fare x units
    pub total_fare: Price,
    /// Seats booked (bus) or vehicles hired (cab, self-drive)
    pub units: u32,
    pub seats_available: u8,
    pub availability: SeatStatus,
    pub amenities: Vec<String>,
    pub rating: f32,
    pub boarding_point: String,
    pub dropping_point: String,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_serializes_reserved_name() {
        let opts: DomainOptions<FlightOption> =
            DomainOptions::not_applicable(Sentinel::new(SentinelMarker::NoAirport, "no airport here"));
        let json = serde_json::to_value(&opts).unwrap();

        assert_eq!(json["status"], "not_applicable");
        assert_eq!(json["sentinel"]["name"], "No Airport");
        assert!(json["sentinel"].get("nearest").is_none());
    }

    #[test]
    fn test_empty_is_not_sentinel() {
        let opts: DomainOptions<TrainOption> = DomainOptions::empty();
        assert!(!opts.is_sentinel());
        assert_eq!(opts.record_count(), 0);

        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(json["status"], "options");
        assert_eq!(json["items"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_sentinel_counts_as_one_record() {
        let opts: DomainOptions<RoadOption> =
            DomainOptions::not_applicable(Sentinel::new(SentinelMarker::NoRoadRoute, "ocean in the way"));
        assert_eq!(opts.record_count(), 1);
        assert!(opts.items().is_empty());
        assert!(opts.first().is_none());
        assert_eq!(opts.sentinel().unwrap().name, SentinelMarker::NoRoadRoute);
    }

    #[test]
    fn test_availability_display() {
        assert_eq!(Availability::Rac.to_string(), "RAC");
        assert_eq!(serde_json::to_string(&Availability::Rac).unwrap(), "\"RAC\"");
    }
}
