//! Rail option generator (Indian Railways model)

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::debug;

use super::pricing::{Pricing, clock, format_duration, jitter};
use super::{DomainGenerator, fallback_code, title_case};
use crate::domain::{Availability, Domain, DomainOptions, Sentinel, SentinelMarker, TrainOption, TripRequest};
use crate::knowledge::rail::{self, nilgiri};
use crate::knowledge::{City, KnowledgeBase, RailAccess};

const AVAILABILITY_WEIGHTS: [(Availability, u32); 3] =
    [(Availability::Available, 60), (Availability::Rac, 25), (Availability::Waitlist, 15)];

const MINUTE_MARKS: &[u32] = &[0, 10, 15, 25, 30, 40, 45, 55];

/// Station details for one end of a route
struct Stop {
    code: String,
    name: String,
    zone: String,
}

impl Stop {
    fn for_city(city: Option<&City>, raw: &str) -> Self {
        match city.map(|c| c.rail) {
            Some(RailAccess::Station { code, name, zone }) => Self {
                code: code.to_string(),
                name: name.to_string(),
                zone: zone.to_string(),
            },
            _ => Self {
                code: fallback_code(raw),
                name: title_case(raw),
                zone: "Indian Railways".to_string(),
            },
        }
    }
}

/// Why a route has no regular trains
enum Gap {
    NoMainline(&'static City, &'static str, &'static str),
    Outside(&'static City),
}

pub struct RailGenerator {
    kb: Arc<KnowledgeBase>,
    pricing: Pricing,
}

impl RailGenerator {
    pub fn new(kb: Arc<KnowledgeBase>, pricing: Pricing) -> Self {
        Self { kb, pricing }
    }

    fn gap(city: Option<&'static City>) -> Option<Gap> {
        let city = city?;
        match city.rail {
            RailAccess::Station { .. } => None,
            RailAccess::NoMainline { nearest, note } => Some(Gap::NoMainline(city, nearest, note)),
            RailAccess::Outside => Some(Gap::Outside(city)),
        }
    }

    fn sentinel(&self, gap: Gap) -> DomainOptions<TrainOption> {
        let sentinel = match gap {
            Gap::NoMainline(_, nearest, note) => {
                let nearest = self.kb.city(nearest).map(|c| c.name).unwrap_or(nearest);
                Sentinel::new(SentinelMarker::NoDirectTrains, note).with_nearest(nearest)
            }
            Gap::Outside(city) => Sentinel::new(
                SentinelMarker::NoDirectTrains,
                format!("{} is not served by the Indian Railways network.", city.name),
            ),
        };
        DomainOptions::not_applicable(sentinel)
    }

    /// The single heritage train between Ooty and the plains
    fn nilgiri(&self, request: &TripRequest, plains: &'static City, to_hills: bool) -> TrainOption {
        let plains_stop = match self.kb.city("mettupalayam") {
            Some(mtp) => Stop::for_city(Some(mtp), mtp.name),
            None => Stop::for_city(Some(plains), plains.name),
        };
        let (ooty_code, ooty_name) = nilgiri::OOTY_STATION;
        let ooty_stop = Stop {
            code: ooty_code.to_string(),
            name: ooty_name.to_string(),
            zone: nilgiri::ZONE.to_string(),
        };
        let (from, to) = if to_hills { (plains_stop, ooty_stop) } else { (ooty_stop, plains_stop) };

        let mut note = nilgiri::NOTE.to_string();
        if plains.key == "coimbatore" {
            note = format!("{} {}", note, nilgiri::COIMBATORE_NOTE);
        }

        let fare = self.pricing.price(nilgiri::FARE_INR);
        TrainOption {
            train_name: nilgiri::TRAIN_NAME.to_string(),
            train_number: nilgiri::TRAIN_NUMBER.to_string(),
            train_type: nilgiri::TRAIN_TYPE.to_string(),
            origin_station: from.name,
            origin_code: from.code,
            destination_station: to.name,
            destination_code: to.code,
            departure_time: nilgiri::DEPARTURE.to_string(),
            arrival_time: nilgiri::ARRIVAL.to_string(),
            duration: nilgiri::DURATION.to_string(),
            distance_km: nilgiri::DISTANCE_KM,
            class_name: nilgiri::CLASS_NAME.to_string(),
            class_code: nilgiri::CLASS_CODE.to_string(),
            total_fare: self.pricing.total(&fare, u64::from(request.traveler_count)),
            fare,
            availability: Availability::Available,
            pantry: false,
            runs_on: "Daily".to_string(),
            date: request.departure_date,
            zone: nilgiri::ZONE.to_string(),
            note: Some(note),
        }
    }

    /// Nilgiri special case: Ooty paired with one of its feeder cities
    fn nilgiri_pair(
        origin: Option<&'static City>,
        destination: Option<&'static City>,
    ) -> Option<(&'static City, bool)> {
        let (o, d) = (origin?, destination?);
        if d.key == nilgiri::HILL_STATION && nilgiri::FEEDERS.contains(&o.key) {
            Some((o, true))
        } else if o.key == nilgiri::HILL_STATION && nilgiri::FEEDERS.contains(&d.key) {
            Some((d, false))
        } else {
            None
        }
    }
}

impl DomainGenerator for RailGenerator {
    type Item = TrainOption;

    fn domain(&self) -> Domain {
        Domain::Rail
    }

    fn generate(&self, request: &TripRequest, rng: &mut StdRng) -> DomainOptions<TrainOption> {
        debug!(origin = %request.origin, destination = %request.destination, "RailGenerator::generate: called");
        let origin = self.kb.resolve(&request.origin);
        let destination = self.kb.resolve(&request.destination);

        if let Some((plains, to_hills)) = Self::nilgiri_pair(origin, destination) {
            debug!("RailGenerator::generate: nilgiri mountain railway");
            return DomainOptions::options(vec![self.nilgiri(request, plains, to_hills)]);
        }
        if let Some(gap) = Self::gap(origin).or_else(|| Self::gap(destination)) {
            debug!("RailGenerator::generate: no direct trains");
            return self.sentinel(gap);
        }

        let distance_km = match (origin, destination) {
            (Some(a), Some(b)) => self.kb.rail_distance(a, b),
            _ => rng.random_range(400..=1200),
        };
        let from = Stop::for_city(origin, &request.origin);
        let to = Stop::for_city(destination, &request.destination);
        let (okey, dkey) = (origin.map(|c| c.key).unwrap_or(""), destination.map(|c| c.key).unwrap_or(""));

        let mut families = rail::families_for(okey, dkey);
        families.shuffle(rng);
        let count = rng.random_range(3..=5).min(families.len());
        let classes = rail::classes_for(request.budget_tier);

        let mut used_numbers = HashSet::new();
        let mut trains = Vec::with_capacity(count);
        for family in families.into_iter().take(count) {
            let Some(class) = classes.choose(rng) else {
                break;
            };
            let mut fare = f64::from(distance_km) * rail::FARE_PER_KM * class.multiplier;
            if family.speed.is_premium() {
                fare *= rail::PREMIUM_SURCHARGE;
            }
            let fare = (jitter(rng, fare, 0.1).round() as i64).max(rail::FARE_FLOOR_INR);
            let fare = self.pricing.price(fare);

            let speed = family.speed.speeds().choose(rng).copied().unwrap_or(60);
            let duration = (f64::from(distance_km) / f64::from(speed) * 60.0).round() as u32;
            let departure = rng.random_range(4..=23) * 60 + MINUTE_MARKS.choose(rng).copied().unwrap_or(0);

            let mut number = rng.random_range(12001..=22999u32);
            while !used_numbers.insert(number) {
                number = rng.random_range(12001..=22999u32);
            }

            let availability = AVAILABILITY_WEIGHTS
                .choose_weighted(rng, |w| w.1)
                .map(|w| w.0)
                .unwrap_or(Availability::Available);

            trains.push(TrainOption {
                train_name: family.name.to_string(),
                train_number: number.to_string(),
                train_type: family.train_type.to_string(),
                origin_station: from.name.clone(),
                origin_code: from.code.clone(),
                destination_station: to.name.clone(),
                destination_code: to.code.clone(),
                departure_time: clock(departure),
                arrival_time: clock(departure + duration),
                duration: format_duration(duration),
                distance_km,
                class_name: class.name.to_string(),
                class_code: class.code.to_string(),
                total_fare: self.pricing.total(&fare, u64::from(request.traveler_count)),
                fare,
                availability,
                pantry: family.pantry,
                runs_on: rail::RUNS_ON.choose(rng).copied().unwrap_or("Daily").to_string(),
                date: request.departure_date,
                zone: from.zone.clone(),
                note: None,
            });
        }

        trains.sort_by_key(|t| t.fare.amount);
        debug!(count = trains.len(), distance_km, "RailGenerator::generate: done");
        DomainOptions::options(trains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BudgetTier;
    use crate::generators::testutil::request;
    use rand::SeedableRng;

    fn generate(req: &TripRequest, seed: u64) -> DomainOptions<TrainOption> {
        RailGenerator::new(Arc::new(KnowledgeBase::builtin()), Pricing::native())
            .generate(req, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_coimbatore_ooty_is_nilgiri() {
        let req = request("Coimbatore", "Ooty", "2025-06-15", "2025-06-17");
        let out = generate(&req, 1);
        let trains = out.items();
        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].train_name, "Nilgiri Mountain Railway");
        assert_eq!(trains[0].destination_code, "UAM");
        assert_eq!(trains[0].origin_code, "MTP");
        assert!(trains[0].note.as_deref().unwrap().contains("Coimbatore to Mettupalayam"));
    }

    #[test]
    fn test_ooty_return_reverses_direction() {
        let req = request("Ooty", "Mettupalayam", "2025-06-15", "2025-06-17");
        let trains = generate(&req, 1).items().to_vec();
        assert_eq!(trains[0].origin_code, "UAM");
        assert_eq!(trains[0].destination_code, "MTP");
    }

    #[test]
    fn test_no_mainline_sentinel() {
        let req = request("Chennai", "Ooty", "2025-06-15", "2025-06-17");
        let out = generate(&req, 2);
        let sentinel = out.sentinel().expect("sentinel");
        assert_eq!(sentinel.name, SentinelMarker::NoDirectTrains);
        assert_eq!(sentinel.nearest.as_deref(), Some("Mettupalayam"));
    }

    #[test]
    fn test_foreign_city_sentinel() {
        let req = request("New York", "Paris", "2025-06-15", "2025-06-20");
        assert!(generate(&req, 3).is_sentinel());
    }

    #[test]
    fn test_mainline_trains() {
        let mut req = request("Delhi", "Agra", "2025-06-15", "2025-06-17");
        req.budget_tier = BudgetTier::Luxury;
        let out = generate(&req, 4);
        let trains = out.items();
        assert!((3..=5).contains(&trains.len()));
        let names: HashSet<_> = trains.iter().map(|t| t.train_name.as_str()).collect();
        assert_eq!(names.len(), trains.len());
        for t in trains {
            assert_eq!(t.origin_code, "NDLS");
            assert_eq!(t.distance_km, 230);
            assert!(["2A", "1A", "EC"].contains(&t.class_code.as_str()));
            assert!(t.fare.amount.major() >= 150.0);
            assert_eq!(t.total_fare.amount, t.fare.amount.times(2));
        }
        assert!(trains.windows(2).all(|w| w[0].fare.amount <= w[1].fare.amount));
    }

    #[test]
    fn test_fare_floor() {
        let mut req = request("Coimbatore", "Mettupalayam", "2025-06-15", "2025-06-16");
        req.budget_tier = BudgetTier::Budget;
        for t in generate(&req, 5).items() {
            assert!(t.fare.amount.major() >= 150.0);
        }
    }

    #[test]
    fn test_unknown_city_uses_fallback_distance() {
        let req = request("Springfield", "Delhi", "2025-06-15", "2025-06-16");
        let out = generate(&req, 6);
        for t in out.items() {
            assert!((400..=1200).contains(&t.distance_km));
            assert_eq!(t.origin_code, "SPR");
        }
    }
}
