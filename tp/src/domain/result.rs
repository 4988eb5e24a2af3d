//! Compiled pipeline output and the Plan/Chat response envelopes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::itinerary::ItineraryDay;
use super::options::{DomainOptions, FlightOption, HotelOption, RoadOption, TrainOption};
use super::request::TripRequest;

/// A completed unit of pipeline work, in the order it finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Validate,
    SearchFlights,
    SearchHotels,
    SearchTrains,
    SearchRoad,
    BuildItinerary,
    CompileResults,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Validate => "validate",
            Self::SearchFlights => "search_flights",
            Self::SearchHotels => "search_hotels",
            Self::SearchTrains => "search_trains",
            Self::SearchRoad => "search_road",
            Self::BuildItinerary => "build_itinerary",
            Self::CompileResults => "compile_results",
        };
        write!(f, "{}", name)
    }
}

/// Final merged answer for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledResult {
    /// UUIDv7, unique per run
    pub plan_id: String,
    pub request: TripRequest,
    pub flights: DomainOptions<FlightOption>,
    pub hotels: DomainOptions<HotelOption>,
    pub trains: DomainOptions<TrainOption>,
    pub road_options: DomainOptions<RoadOption>,
    pub itinerary: Vec<ItineraryDay>,
    pub summary: String,
    pub steps_completed: Vec<Step>,
    pub generated_at: DateTime<Utc>,
}

/// Plan operation output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CompiledResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlanResponse {
    pub fn ok(data: CompiledResult) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Chat operation output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub has_results: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CompiledResult>,
    /// The extracted (or defaulted) request, echoed for re-display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<TripRequest>,
    /// Fields that were filled from defaults
    #[serde(default)]
    pub assumptions: Vec<String>,
}
