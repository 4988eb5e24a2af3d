//! Pipeline stage machine and per-run state

use serde::{Deserialize, Serialize};

use super::error::PlannerError;
use crate::domain::{DomainOptions, FlightOption, HotelOption, ItineraryDay, RoadOption, Step, TrainOption, TripRequest};

/// Orchestrator stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipelineStage {
    Init,
    Validated,
    Generating,
    Aggregated,
    ItineraryBuilt,
    Compiled,
    Failed,
}

impl PipelineStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Compiled | Self::Failed)
    }

    /// Forward-only transitions, plus FAILED from any non-terminal stage
    pub fn can_transition_to(&self, next: PipelineStage) -> bool {
        use PipelineStage::*;
        match (self, next) {
            (from, Failed) => !from.is_terminal(),
            (Init, Validated)
            | (Validated, Generating)
            | (Generating, Aggregated)
            | (Aggregated, ItineraryBuilt)
            | (ItineraryBuilt, Compiled) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init => write!(f, "INIT"),
            Self::Validated => write!(f, "VALIDATED"),
            Self::Generating => write!(f, "GENERATING"),
            Self::Aggregated => write!(f, "AGGREGATED"),
            Self::ItineraryBuilt => write!(f, "ITINERARY_BUILT"),
            Self::Compiled => write!(f, "COMPILED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

/// Accumulator for one pipeline run
///
/// Every slot is written at most once.
#[derive(Debug, Clone)]
pub struct PlannerState {
    request: TripRequest,
    flights: Option<DomainOptions<FlightOption>>,
    hotels: Option<DomainOptions<HotelOption>>,
    trains: Option<DomainOptions<TrainOption>>,
    road_options: Option<DomainOptions<RoadOption>>,
    itinerary: Option<Vec<ItineraryDay>>,
    steps_completed: Vec<Step>,
}

fn fill<T>(slot: &mut Option<T>, name: &'static str, value: T) -> Result<(), PlannerError> {
    if slot.is_some() {
        return Err(PlannerError::SlotAlreadyFilled(name));
    }
    *slot = Some(value);
    Ok(())
}

impl PlannerState {
    pub fn new(request: TripRequest) -> Self {
        Self {
            request,
            flights: None,
            hotels: None,
            trains: None,
            road_options: None,
            itinerary: None,
            steps_completed: vec![Step::Validate],
        }
    }

    pub fn request(&self) -> &TripRequest {
        &self.request
    }

    pub fn set_flights(&mut self, value: DomainOptions<FlightOption>) -> Result<(), PlannerError> {
        fill(&mut self.flights, "flights", value)
    }

    pub fn set_hotels(&mut self, value: DomainOptions<HotelOption>) -> Result<(), PlannerError> {
        fill(&mut self.hotels, "hotels", value)
    }

    pub fn set_trains(&mut self, value: DomainOptions<TrainOption>) -> Result<(), PlannerError> {
        fill(&mut self.trains, "trains", value)
    }

    pub fn set_road_options(&mut self, value: DomainOptions<RoadOption>) -> Result<(), PlannerError> {
        fill(&mut self.road_options, "road_options", value)
    }

    pub fn set_itinerary(&mut self, value: Vec<ItineraryDay>) -> Result<(), PlannerError> {
        fill(&mut self.itinerary, "itinerary", value)?;
        self.record(Step::BuildItinerary);
        Ok(())
    }

    /// Append a completed step
    pub fn record(&mut self, step: Step) {
        self.steps_completed.push(step);
    }

    pub fn steps_completed(&self) -> &[Step] {
        &self.steps_completed
    }

    pub fn flights(&self) -> Option<&DomainOptions<FlightOption>> {
        self.flights.as_ref()
    }

    pub fn hotels(&self) -> Option<&DomainOptions<HotelOption>> {
        self.hotels.as_ref()
    }

    pub fn trains(&self) -> Option<&DomainOptions<TrainOption>> {
        self.trains.as_ref()
    }

    pub fn road_options(&self) -> Option<&DomainOptions<RoadOption>> {
        self.road_options.as_ref()
    }

    pub fn itinerary(&self) -> Option<&[ItineraryDay]> {
        self.itinerary.as_deref()
    }

    /// Consume into parts; unfilled slots become empty
    pub(crate) fn into_parts(self) -> StateParts {
        StateParts {
            request: self.request,
            flights: self.flights.unwrap_or_else(DomainOptions::empty),
            hotels: self.hotels.unwrap_or_else(DomainOptions::empty),
            trains: self.trains.unwrap_or_else(DomainOptions::empty),
            road_options: self.road_options.unwrap_or_else(DomainOptions::empty),
            itinerary: self.itinerary.unwrap_or_default(),
            steps_completed: self.steps_completed,
        }
    }
}

pub(crate) struct StateParts {
    pub request: TripRequest,
    pub flights: DomainOptions<FlightOption>,
    pub hotels: DomainOptions<HotelOption>,
    pub trains: DomainOptions<TrainOption>,
    pub road_options: DomainOptions<RoadOption>,
    pub itinerary: Vec<ItineraryDay>,
    pub steps_completed: Vec<Step>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::testutil::request;

    #[test]
    fn test_forward_transitions() {
        use PipelineStage::*;
        let path = [Init, Validated, Generating, Aggregated, ItineraryBuilt, Compiled];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
        assert!(!Init.can_transition_to(Generating));
        assert!(!Aggregated.can_transition_to(Validated));
        assert!(!Compiled.can_transition_to(Init));
    }

    #[test]
    fn test_failed_reachable_from_non_terminal_only() {
        use PipelineStage::*;
        for stage in [Init, Validated, Generating, Aggregated, ItineraryBuilt] {
            assert!(stage.can_transition_to(Failed));
        }
        assert!(!Compiled.can_transition_to(Failed));
        assert!(!Failed.can_transition_to(Failed));
    }

    #[test]
    fn test_slot_written_once() {
        let mut state = PlannerState::new(request("Delhi", "Agra", "2025-06-15", "2025-06-16"));
        assert!(state.flights().is_none());
        state.set_flights(DomainOptions::empty()).unwrap();
        let err = state.set_flights(DomainOptions::empty()).unwrap_err();
        assert!(matches!(err, PlannerError::SlotAlreadyFilled("flights")));

        state.set_itinerary(Vec::new()).unwrap();
        assert!(state.set_itinerary(Vec::new()).is_err());
        assert_eq!(state.steps_completed(), &[Step::Validate, Step::BuildItinerary]);
    }

    #[test]
    fn test_into_parts_defaults_missing_slots() {
        let state = PlannerState::new(request("Delhi", "Agra", "2025-06-15", "2025-06-16"));
        let parts = state.into_parts();
        assert!(parts.trains.items().is_empty());
        assert!(!parts.trains.is_sentinel());
        assert!(parts.itinerary.is_empty());
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(PipelineStage::ItineraryBuilt.to_string(), "ITINERARY_BUILT");
    }
}
