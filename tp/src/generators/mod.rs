//! Per-domain option generators
//!
//! Each generator is a pure function of a validated `TripRequest` and a
//! seeded RNG. They never fail: a route a domain cannot serve yields a
//! sentinel, an unknown city yields fallback distances.

mod flight;
mod hotel;
mod pricing;
mod rail;
mod road;

use std::hash::{DefaultHasher, Hash, Hasher};

use rand::rngs::StdRng;

use crate::domain::{Domain, DomainOptions, TripRequest};

pub use flight::FlightGenerator;
pub use hotel::HotelGenerator;
pub use pricing::{Pricing, clock, format_duration, jitter};
pub use rail::RailGenerator;
pub use road::RoadGenerator;

/// Generator contract shared by the four domains
pub trait DomainGenerator: Send + Sync {
    type Item: Send + 'static;

    fn domain(&self) -> Domain;

    fn generate(&self, request: &TripRequest, rng: &mut StdRng) -> DomainOptions<Self::Item>;
}

/// Stable seed for one stage of one request
pub fn stage_seed(request: &TripRequest, stage: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    request.hash(&mut hasher);
    stage.hash(&mut hasher);
    hasher.finish()
}

/// Three-letter code for a city missing from the knowledge base
pub(crate) fn fallback_code(name: &str) -> String {
    let code: String = name
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(3)
        .collect::<String>()
        .to_uppercase();
    if code.is_empty() { "XXX".to_string() } else { code }
}

/// Title-case a raw city name for display
pub(crate) fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}


#[cfg(test)]
mod tests {
    use super::*;
    use testutil::request;

    #[test]
    fn test_stage_seed_is_stable_and_salted() {
        let req = request("Delhi", "Agra", "2025-06-15", "2025-06-17");
        assert_eq!(stage_seed(&req, "flight"), stage_seed(&req.clone(), "flight"));
        assert_ne!(stage_seed(&req, "flight"), stage_seed(&req, "hotel"));

        let other = request("Delhi", "Jaipur", "2025-06-15", "2025-06-17");
        assert_ne!(stage_seed(&req, "flight"), stage_seed(&other, "flight"));
    }

    #[test]
    fn test_fallback_code() {
        assert_eq!(fallback_code("Springfield"), "SPR");
        assert_eq!(fallback_code("  x1"), "X");
        assert_eq!(fallback_code("123"), "XXX");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("new YORK"), "New York");
        assert_eq!(title_case("ooty"), "Ooty");
    }
}
