//! Road option generator: intercity buses, outstation cabs and self-drive

use std::sync::Arc;

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::debug;

use super::pricing::{Pricing, format_duration, jitter};
use super::{DomainGenerator, title_case};
use crate::domain::{
    BudgetTier, Domain, DomainOptions, OperatorKind, RoadMode, RoadOption, SeatStatus, Sentinel, SentinelMarker,
    TripRequest,
};
use crate::knowledge::{City, KnowledgeBase};

const GOVERNMENT_OPERATORS: &[&str] = &["TNSTC", "SETC", "KSRTC", "KSRTC-KA", "APSRTC", "TSRTC"];

const PRIVATE_OPERATORS: &[&str] = &[
    "KPN Travels",
    "SRS Travels",
    "Parveen Travels",
    "SRM Travels",
    "Kallada Travels",
    "Orange Tours",
    "VRL Travels",
    "IntrCity SmartBus",
    "Jabbar Travels",
    "Rajesh Transports",
];

const GOVERNMENT_SHARE: f64 = 0.35;

struct Provider {
    name: &'static str,
    mode: RoadMode,
}

const CAB_PROVIDERS: &[Provider] = &[
    Provider { name: "Ola Outstation", mode: RoadMode::Cab },
    Provider { name: "Uber Intercity", mode: RoadMode::Cab },
    Provider { name: "Savaari Car Rental", mode: RoadMode::Cab },
    Provider { name: "IntrCity Ryde", mode: RoadMode::Cab },
    Provider { name: "Zoomcar", mode: RoadMode::SelfDrive },
];

/// Vehicle name and passenger capacity
const CAB_VEHICLES: &[(&str, u32)] = &[
    ("Sedan (Swift Dzire)", 4),
    ("SUV (Toyota Innova)", 6),
    ("Hatchback (WagonR)", 4),
    ("Premium (Toyota Innova Crysta)", 6),
    ("Sedan (Honda Amaze)", 4),
    ("SUV (Mahindra XUV700)", 6),
];

const SELF_DRIVE_VEHICLES: &[(&str, u32)] =
    &[("Swift Dzire", 5), ("Hyundai i20", 5), ("Tata Nexon", 5), ("Maruti Baleno", 5)];

const DEPARTURE_HOURS: &[u32] = &[6, 7, 8, 9, 10, 14, 15, 20, 21, 22, 23];
const DEPARTURE_MINUTES: &[u32] = &[0, 15, 30, 45];
const BUS_SPEEDS: &[u32] = &[40, 45, 50, 55, 60];
const CAR_SPEEDS: &[u32] = &[50, 60, 70, 80];

const BUS_FARE_PER_KM: f64 = 0.80;
const BUS_FARE_FLOOR_INR: i64 = 80;
const CAB_FARE_PER_KM: f64 = 10.0;
const SELF_DRIVE_PER_KM: f64 = 5.0;

/// Remaining-seat bands, biased toward plenty of seats
const SEAT_BANDS: [((u8, u8), SeatStatus, u32); 3] = [
    ((15, 40), SeatStatus::Available, 60),
    ((5, 14), SeatStatus::FillingFast, 25),
    ((1, 4), SeatStatus::LastSeats, 15),
];

fn bus_types(tier: BudgetTier) -> &'static [(&'static str, f64)] {
    match tier {
        BudgetTier::Budget => &[("Non-AC Seater", 1.0), ("AC Seater", 1.6), ("Non-AC Sleeper", 1.3)],
        BudgetTier::Moderate => &[("AC Seater", 1.6), ("AC Sleeper", 2.2), ("Multi-Axle AC Semi-Sleeper", 2.5)],
        BudgetTier::Luxury => &[
            ("Volvo AC Multi-Axle", 3.0),
            ("Mercedes AC Sleeper", 3.5),
            ("Scania AC Multi-Axle", 3.8),
        ],
    }
}

fn bus_amenities(vehicle: &str, kind: OperatorKind) -> Vec<String> {
    let mut amenities = vec!["Charging Point"];
    if !vehicle.starts_with("Non-AC") {
        amenities.push("Air Conditioning");
    }
    if vehicle.contains("Sleeper") {
        amenities.extend(["Blanket", "Pillow"]);
    }
    if ["Volvo", "Mercedes", "Scania"].iter().any(|brand| vehicle.contains(brand)) {
        amenities.extend(["WiFi", "Water Bottle", "Entertainment"]);
    }
    if kind == OperatorKind::Private {
        amenities.push("Live Tracking");
    }
    amenities.into_iter().map(String::from).collect()
}

fn car_amenities(mode: RoadMode) -> Vec<String> {
    let amenities: &[&str] = match mode {
        RoadMode::SelfDrive => &["AC", "GPS Navigation", "Fuel Included", "Insurance"],
        _ => &["AC", "Door-to-Door", "Luggage Space", "Driver", "Live Tracking"],
    };
    amenities.iter().map(|a| a.to_string()).collect()
}

/// Display name and state for one end of the route
fn place(city: Option<&City>, raw: &str) -> (String, String) {
    match city {
        Some(c) => (c.name.to_string(), c.state.to_string()),
        None => (title_case(raw), "India".to_string()),
    }
}

pub struct RoadGenerator {
    kb: Arc<KnowledgeBase>,
    pricing: Pricing,
}

impl RoadGenerator {
    pub fn new(kb: Arc<KnowledgeBase>, pricing: Pricing) -> Self {
        Self { kb, pricing }
    }

    fn no_route(&self, a: &City, b: &City) -> DomainOptions<RoadOption> {
        let note = if a.region != b.region {
            format!("No drivable road connects {} and {}. Consider flying.", a.name, b.name)
        } else {
            format!(
                "{} and {} are about {} km apart by road, too far for a practical drive.",
                a.name,
                b.name,
                self.kb.road_distance(a, b)
            )
        };
        DomainOptions::not_applicable(Sentinel::new(SentinelMarker::NoRoadRoute, note))
    }
}

impl DomainGenerator for RoadGenerator {
    type Item = RoadOption;

    fn domain(&self) -> Domain {
        Domain::Road
    }

    fn generate(&self, request: &TripRequest, rng: &mut StdRng) -> DomainOptions<RoadOption> {
        debug!(origin = %request.origin, destination = %request.destination, "RoadGenerator::generate: called");
        let origin = self.kb.resolve(&request.origin);
        let destination = self.kb.resolve(&request.destination);

        let distance_km = match (origin, destination) {
            (Some(a), Some(b)) if !self.kb.road_feasible(a, b) => {
                debug!("RoadGenerator::generate: no road route");
                return self.no_route(a, b);
            }
            (Some(a), Some(b)) => self.kb.road_distance(a, b),
            _ => rng.random_range(150..=600),
        };
        let km = f64::from(distance_km);
        let (origin_name, origin_state) = place(origin, &request.origin);
        let (destination_name, destination_state) = place(destination, &request.destination);
        let travelers = request.traveler_count;

        let mut options = Vec::new();

        for _ in 0..rng.random_range(3..=5) {
            let (operator, operator_kind) = if rng.random_bool(GOVERNMENT_SHARE) {
                (GOVERNMENT_OPERATORS.choose(rng), OperatorKind::Government)
            } else {
                (PRIVATE_OPERATORS.choose(rng), OperatorKind::Private)
            };
            let (Some(operator), Some((vehicle, multiplier))) = (operator, bus_types(request.budget_tier).choose(rng))
            else {
                break;
            };

            let fare = (jitter(rng, km * BUS_FARE_PER_KM * multiplier, 0.1).round() as i64).max(BUS_FARE_FLOOR_INR);
            let fare = self.pricing.price(fare);
            let speed = BUS_SPEEDS.choose(rng).copied().unwrap_or(50);
            let hour = DEPARTURE_HOURS.choose(rng).copied().unwrap_or(8);
            let minute = DEPARTURE_MINUTES.choose(rng).copied().unwrap_or(0);
            let ((low, high), availability, _) = SEAT_BANDS
                .choose_weighted(rng, |band| band.2)
                .copied()
                .unwrap_or(SEAT_BANDS[0]);

            options.push(RoadOption {
                mode: RoadMode::Bus,
                operator: operator.to_string(),
                operator_kind,
                vehicle_type: vehicle.to_string(),
                origin: origin_name.clone(),
                origin_state: origin_state.clone(),
                destination: destination_name.clone(),
                destination_state: destination_state.clone(),
                departure_time: format!("{:02}:{:02}", hour, minute),
                duration: format_duration((km / f64::from(speed) * 60.0).round() as u32),
                distance_km,
                total_fare: self.pricing.total(&fare, u64::from(travelers)),
                fare,
                units: travelers,
                seats_available: rng.random_range(low..=high),
                availability,
                amenities: bus_amenities(vehicle, operator_kind),
                rating: (rng.random_range(35..=48) as f32) / 10.0,
                boarding_point: format!("{} Bus Stand", origin_name),
                dropping_point: format!("{} Bus Stand", destination_name),
                date: request.departure_date,
            });
        }

        for _ in 0..rng.random_range(2..=3) {
            let Some(provider) = CAB_PROVIDERS.choose(rng) else {
                break;
            };
            let (vehicles, per_km, extra) = match provider.mode {
                RoadMode::SelfDrive => (SELF_DRIVE_VEHICLES, SELF_DRIVE_PER_KM, 500.0..=1500.0),
                _ => (CAB_VEHICLES, CAB_FARE_PER_KM, 200.0..=800.0),
            };
            let Some((vehicle, capacity)) = vehicles.choose(rng).copied() else {
                break;
            };
            let units = travelers.div_ceil(capacity).max(1);
            let fare = self.pricing.price((km * per_km + rng.random_range(extra)).round() as i64);
            let speed = CAR_SPEEDS.choose(rng).copied().unwrap_or(60);
            let operator_kind = match provider.mode {
                RoadMode::SelfDrive => OperatorKind::SelfDrive,
                _ => OperatorKind::Cab,
            };

            options.push(RoadOption {
                mode: provider.mode,
                operator: provider.name.to_string(),
                operator_kind,
                vehicle_type: vehicle.to_string(),
                origin: origin_name.clone(),
                origin_state: origin_state.clone(),
                destination: destination_name.clone(),
                destination_state: destination_state.clone(),
                departure_time: "Flexible".to_string(),
                duration: format!("{} (approx)", format_duration((km / f64::from(speed) * 60.0).round() as u32)),
                distance_km,
                total_fare: self.pricing.total(&fare, u64::from(units)),
                fare,
                units,
                seats_available: u8::try_from(capacity).unwrap_or(u8::MAX),
                availability: SeatStatus::Available,
                amenities: car_amenities(provider.mode),
                rating: (rng.random_range(40..=49) as f32) / 10.0,
                boarding_point: "Door pickup".to_string(),
                dropping_point: "Door drop-off".to_string(),
                date: request.departure_date,
            });
        }

        options.sort_by_key(|o| o.total_fare.amount);
        debug!(count = options.len(), distance_km, "RoadGenerator::generate: done");
        DomainOptions::options(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::testutil::request;
    use rand::SeedableRng;

    fn generate(req: &TripRequest, seed: u64) -> DomainOptions<RoadOption> {
        RoadGenerator::new(Arc::new(KnowledgeBase::builtin()), Pricing::native())
            .generate(req, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_coimbatore_ooty_road() {
        let req = request("Coimbatore", "Ooty", "2025-06-15", "2025-06-17");
        let out = generate(&req, 1);
        let options = out.items();
        assert!((5..=8).contains(&options.len()));
        assert!(options.iter().all(|o| o.distance_km == 86));
        assert!(options.iter().any(|o| o.mode == RoadMode::Bus));
        assert!(options.iter().any(|o| o.mode != RoadMode::Bus));
        assert!(options.windows(2).all(|w| w[0].total_fare.amount <= w[1].total_fare.amount));
    }

    #[test]
    fn test_bus_fare_floor_and_units() {
        let mut req = request("Coimbatore", "Mettupalayam", "2025-06-15", "2025-06-16");
        req.budget_tier = BudgetTier::Budget;
        req.traveler_count = 5;
        for o in generate(&req, 2).items() {
            match o.mode {
                RoadMode::Bus => {
                    assert!(o.fare.amount.major() >= 80.0);
                    assert_eq!(o.units, 5);
                    assert!(o.seats_available >= 1);
                }
                _ => assert!(o.units >= 1 && o.units <= 2),
            }
            assert_eq!(o.total_fare.amount, o.fare.amount.times(u64::from(o.units)));
        }
    }

    #[test]
    fn test_cross_region_sentinel() {
        let req = request("New York", "Paris", "2025-06-15", "2025-06-20");
        let out = generate(&req, 3);
        assert_eq!(out.sentinel().map(|s| s.name), Some(SentinelMarker::NoRoadRoute));
    }

    #[test]
    fn test_bus_amenities() {
        let amenities = bus_amenities("Volvo AC Multi-Axle", OperatorKind::Private);
        assert!(amenities.contains(&"Air Conditioning".to_string()));
        assert!(amenities.contains(&"WiFi".to_string()));
        assert!(amenities.contains(&"Live Tracking".to_string()));

        let plain = bus_amenities("Non-AC Seater", OperatorKind::Government);
        assert_eq!(plain, vec!["Charging Point".to_string()]);
    }

    #[test]
    fn test_unknown_city_fallback_distance() {
        let req = request("Springfield", "Chennai", "2025-06-15", "2025-06-16");
        let out = generate(&req, 4);
        assert!(out.items().iter().all(|o| (150..=600).contains(&o.distance_km)));
        assert_eq!(out.items()[0].origin_state, "India");
    }
}
