//! Merges stage outputs into the final `CompiledResult`

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::state::PlannerState;
use crate::domain::{
    CompiledResult, DomainOptions, FlightOption, HotelOption, RoadOption, Step, TrainOption, TripRequest,
};

/// "1 night", "3 nights"
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 { format!("1 {}", noun) } else { format!("{} {}s", count, noun) }
}

/// Count phrase for a domain, or its sentinel marker
fn domain_count<T>(options: &DomainOptions<T>, noun: &str) -> String {
    match options.sentinel() {
        Some(sentinel) => sentinel.name.to_string(),
        None => plural(options.items().len(), noun),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResultCompiler;

impl ResultCompiler {
    pub fn new() -> Self {
        Self
    }

    pub fn compile(&self, state: PlannerState) -> CompiledResult {
        debug!("ResultCompiler::compile: called");
        let mut parts = state.into_parts();
        parts.steps_completed.push(Step::CompileResults);

        let summary = Self::summary(
            &parts.request,
            &parts.flights,
            &parts.hotels,
            &parts.trains,
            &parts.road_options,
            parts.itinerary.len(),
        );

        CompiledResult {
            plan_id: Uuid::now_v7().to_string(),
            request: parts.request,
            flights: parts.flights,
            hotels: parts.hotels,
            trains: parts.trains,
            road_options: parts.road_options,
            itinerary: parts.itinerary,
            summary,
            steps_completed: parts.steps_completed,
            generated_at: Utc::now(),
        }
    }

    /// One-line human-readable overview, sections separated by " | "
    pub fn summary(
        request: &TripRequest,
        flights: &DomainOptions<FlightOption>,
        hotels: &DomainOptions<HotelOption>,
        trains: &DomainOptions<TrainOption>,
        road: &DomainOptions<RoadOption>,
        itinerary_days: usize,
    ) -> String {
        let mut sections = vec![
            format!("Travel Plan: {} → {}", request.origin, request.destination),
            format!(
                "Dates: {} to {} ({})",
                request.departure_date,
                request.return_date,
                plural(request.nights() as usize, "night")
            ),
            format!("Budget: {}", request.budget_tier.label()),
            format!("Travelers: {}", plural(request.traveler_count as usize, "traveler")),
            format!(
                "Found {}, {}, {}, {}",
                domain_count(flights, "flight"),
                domain_count(hotels, "hotel"),
                domain_count(trains, "train"),
                domain_count(road, "road option"),
            ),
            format!("Generated {}-day itinerary", itinerary_days),
        ];

        if let Some(f) = flights.first() {
            sections.push(format!(
                "Best flight: {} {} at {} ({})",
                f.airline, f.flight_number, f.price, f.stop_type
            ));
        }
        if let Some(h) = hotels
            .items()
            .iter()
            .max_by(|a, b| a.rating.total_cmp(&b.rating))
        {
            sections.push(format!(
                "Top hotel: {} ({}★, rated {:.1}) at {}/night",
                h.name, h.stars, h.rating, h.price_per_night
            ));
        }
        if let Some(t) = trains.first() {
            sections.push(format!("Best train: {} ({}) at {}", t.train_name, t.train_number, t.fare));
        }
        if let Some(r) = road.first() {
            sections.push(format!("Best road: {} {} at {}", r.operator, r.vehicle_type, r.total_fare));
        }

        sections.join(" | ")
    }
}
