//! Hotel option generator

use std::sync::Arc;

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::debug;

use super::DomainGenerator;
use super::pricing::Pricing;
use crate::domain::{BudgetTier, CancellationPolicy, Domain, DomainOptions, HotelOption, TripRequest};
use crate::generators::title_case;
use crate::knowledge::KnowledgeBase;

struct Chain {
    name: &'static str,
    property_type: &'static str,
    stars: u8,
}

const CHAINS: &[Chain] = &[
    Chain { name: "Taj", property_type: "Luxury Hotel", stars: 5 },
    Chain { name: "ITC Hotels", property_type: "Luxury Hotel", stars: 5 },
    Chain { name: "The Leela", property_type: "Luxury Hotel", stars: 5 },
    Chain { name: "Lemon Tree", property_type: "Business Hotel", stars: 4 },
    Chain { name: "FabHotel", property_type: "Budget Hotel", stars: 3 },
    Chain { name: "Treebo", property_type: "Budget Hotel", stars: 3 },
    Chain { name: "OYO Rooms", property_type: "Budget Hotel", stars: 2 },
    Chain { name: "Radisson", property_type: "Premium Hotel", stars: 4 },
    Chain { name: "Novotel", property_type: "Business Hotel", stars: 4 },
    Chain { name: "The Residency", property_type: "Business Hotel", stars: 3 },
    Chain { name: "Fortune Hotel", property_type: "Business Hotel", stars: 4 },
    Chain { name: "Zostel", property_type: "Hostel", stars: 2 },
];

const AMENITIES: &[&str] = &[
    "Free WiFi",
    "Swimming Pool",
    "Spa & Wellness",
    "Fitness Center",
    "Restaurant",
    "Room Service",
    "Airport Shuttle",
    "Parking",
    "Business Center",
    "Concierge",
    "Rooftop Bar",
    "Laundry Service",
    "Pet Friendly",
    "EV Charging",
    "Kids Club",
    "Beach Access",
];

const LOCATIONS: &[&str] = &["Downtown", "City Center", "Old Town", "Business District", "Near Railway Station"];

const CANCELLATION: &[CancellationPolicy] =
    &[CancellationPolicy::Free, CancellationPolicy::NonRefundable, CancellationPolicy::Flexible];

/// Nightly INR price range and star ratings for a tier
fn tier_band(tier: BudgetTier) -> (f64, f64, &'static [u8]) {
    match tier {
        BudgetTier::Budget => (3_000.0, 10_000.0, &[2, 3]),
        BudgetTier::Moderate => (8_000.0, 25_000.0, &[3, 4]),
        BudgetTier::Luxury => (20_000.0, 65_000.0, &[4, 5]),
    }
}

pub struct HotelGenerator {
    kb: Arc<KnowledgeBase>,
    pricing: Pricing,
}

impl HotelGenerator {
    pub fn new(kb: Arc<KnowledgeBase>, pricing: Pricing) -> Self {
        Self { kb, pricing }
    }
}

impl DomainGenerator for HotelGenerator {
    type Item = HotelOption;

    fn domain(&self) -> Domain {
        Domain::Hotel
    }

    fn generate(&self, request: &TripRequest, rng: &mut StdRng) -> DomainOptions<HotelOption> {
        debug!(destination = %request.destination, "HotelGenerator::generate: called");
        let city = self.kb.resolve(&request.destination);
        let place = city.map(|c| c.name.to_string()).unwrap_or_else(|| title_case(&request.destination));
        let cost_index = city.map(|c| c.region.cost_index()).unwrap_or(1.0);

        let (low, high, stars) = tier_band(request.budget_tier);
        let chains: Vec<&Chain> = CHAINS.iter().filter(|c| stars.contains(&c.stars)).collect();
        let nights = request.nights();
        let rooms = request.rooms();

        let count = rng.random_range(4..=7);
        let mut hotels = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(chain) = chains.choose(rng) else {
                break;
            };
            let nightly = rng.random_range(low..=high) * cost_index;
            let price_per_night = self.pricing.price(nightly.round() as i64);
            let total_price = self.pricing.total(&price_per_night, u64::from(nights) * u64::from(rooms));

            let amenity_count = rng.random_range(4..=10);
            let amenities = AMENITIES
                .choose_multiple(rng, amenity_count)
                .map(|a| a.to_string())
                .collect();

            hotels.push(HotelOption {
                name: format!("{} {}", chain.name, place),
                property_type: chain.property_type.to_string(),
                stars: chain.stars,
                location: format!("{}, {}", LOCATIONS.choose(rng).copied().unwrap_or("Downtown"), place),
                price_per_night,
                total_price,
                nights,
                rooms,
                checkin: request.departure_date,
                checkout: request.return_date,
                rating: (rng.random_range(35..=50) as f32) / 10.0,
                reviews_count: rng.random_range(120..=5000),
                amenities,
                cancellation: CANCELLATION.choose(rng).copied().unwrap_or(CancellationPolicy::Flexible),
                breakfast_included: rng.random_bool(0.5),
                distance_to_center_km: (rng.random_range(2..=50) as f32) / 10.0,
            });
        }

        hotels.sort_by_key(|h| h.price_per_night.amount);
        debug!(count = hotels.len(), "HotelGenerator::generate: done");
        DomainOptions::options(hotels)
    }
}
