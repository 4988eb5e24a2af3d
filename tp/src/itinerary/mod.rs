//! Day-by-day itinerary assembly
//!
//! Greedy fill: each day's morning, afternoon and evening slot takes the
//! first unused attraction whose time of day fits, preferring categories the
//! traveler asked for. Attractions are never repeated within one trip; when
//! the list runs dry a slot becomes free time.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Days;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::debug;

use crate::domain::{Category, Dining, ItineraryDay, TimeOfDay, TimeSlot, TripRequest};
use crate::knowledge::{Attraction, KnowledgeBase, RESTAURANT_TYPES};

const GENERIC_THEMES: &[&str] = &["Discovery", "Adventure", "Culture", "Exploration", "Leisure"];

const FALLBACK_RESTAURANT: &str = "Local restaurant";

fn free_time(slot: TimeOfDay) -> &'static str {
    match slot {
        TimeOfDay::Morning => "Free morning",
        TimeOfDay::Afternoon => "Explore the neighborhood",
        TimeOfDay::Evening | TimeOfDay::Any => "Sunset walk",
    }
}

#[derive(Clone)]
pub struct ItineraryBuilder {
    kb: Arc<KnowledgeBase>,
}

impl ItineraryBuilder {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    /// Build one entry per trip day
    pub fn build(&self, request: &TripRequest, rng: &mut StdRng) -> Vec<ItineraryDay> {
        let days = request.trip_days();
        debug!(destination = %request.destination, days, "ItineraryBuilder::build: called");

        let city = self.kb.resolve(&request.destination);
        let mut pool: Vec<Attraction> = self.kb.attractions(city).to_vec();
        pool.shuffle(rng);
        let mut used = vec![false; pool.len()];

        let restaurants: &[&str] = self.kb.dining(city).unwrap_or(RESTAURANT_TYPES);

        let mut itinerary = Vec::with_capacity(days as usize);
        for day in 1..=days {
            let slots = TimeOfDay::SLOTS.map(|slot| self.fill(slot, &pool, &mut used, &request.interests));
            let [morning, afternoon, evening] = slots;
            let theme = Self::theme(day, [&morning, &afternoon, &evening]);

            let mut picks = restaurants.choose_multiple(rng, 2).copied();
            let lunch = picks.next().unwrap_or(FALLBACK_RESTAURANT).to_string();
            let dinner = picks.next().unwrap_or(FALLBACK_RESTAURANT).to_string();

            itinerary.push(ItineraryDay {
                day,
                date: request.departure_date + Days::new(u64::from(day - 1)),
                theme,
                morning,
                afternoon,
                evening,
                dining: Dining { lunch, dinner },
            });
        }

        debug!(days = itinerary.len(), used = used.iter().filter(|u| **u).count(), "ItineraryBuilder::build: done");
        itinerary
    }

    fn fill(&self, slot: TimeOfDay, pool: &[Attraction], used: &mut [bool], interests: &[String]) -> TimeSlot {
        let fits = |i: &usize| !used[*i] && pool[*i].time.fits(slot);
        let preferred = (0..pool.len())
            .filter(fits)
            .find(|i| pool[*i].category.matches_any(interests));
        let choice = preferred.or_else(|| (0..pool.len()).find(fits));

        match choice {
            Some(i) => {
                used[i] = true;
                let attraction = &pool[i];
                TimeSlot {
                    activity: attraction.name.to_string(),
                    time: slot.window().to_string(),
                    tip: Some(attraction.tip.to_string()),
                    category: Some(attraction.category),
                }
            }
            None => TimeSlot {
                activity: free_time(slot).to_string(),
                time: slot.window().to_string(),
                tip: None,
                category: None,
            },
        }
    }

    /// Dominant category of the day, earliest slot winning ties
    fn theme(day: u32, slots: [&TimeSlot; 3]) -> String {
        let mut counts: HashMap<Category, (usize, usize)> = HashMap::new();
        for (position, category) in slots.iter().enumerate().filter_map(|(i, s)| s.category.map(|c| (i, c))) {
            let entry = counts.entry(category).or_insert((0, position));
            entry.0 += 1;
        }
        counts
            .into_iter()
            .max_by(|a, b| a.1.0.cmp(&b.1.0).then(b.1.1.cmp(&a.1.1)))
            .map(|(category, _)| category.theme().to_string())
            .unwrap_or_else(|| GENERIC_THEMES[(day as usize - 1) % GENERIC_THEMES.len()].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::testutil::request;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn build(req: &TripRequest, seed: u64) -> Vec<ItineraryDay> {
        ItineraryBuilder::new(Arc::new(KnowledgeBase::builtin())).build(req, &mut StdRng::seed_from_u64(seed))
    }

    fn attractions_used(days: &[ItineraryDay]) -> Vec<String> {
        days.iter()
            .flat_map(|d| d.slots())
            .filter(|s| s.category.is_some())
            .map(|s| s.activity.clone())
            .collect()
    }

    #[test]
    fn test_day_count_and_dates() {
        let req = request("New York", "Paris", "2025-06-15", "2025-06-20");
        let days = build(&req, 1);
        assert_eq!(days.len(), 5);
        assert_eq!(days[0].day, 1);
        assert_eq!(days[0].date, req.departure_date);
        assert_eq!(days[4].date.to_string(), "2025-06-19");
        assert_eq!(days[0].morning.time, "09:00 - 12:00");
        assert_eq!(days[0].evening.time, "18:00 - 21:00");
    }

    #[test]
    fn test_no_attraction_reuse() {
        let req = request("Delhi", "Paris", "2025-06-01", "2025-06-15");
        let days = build(&req, 2);
        assert_eq!(days.len(), 14);
        let used = attractions_used(&days);
        let unique: HashSet<_> = used.iter().collect();
        assert_eq!(unique.len(), used.len());
        // 14 days cannot be filled from one city list
        assert!(days.iter().flat_map(|d| d.slots()).any(|s| s.category.is_none()));
    }

    #[test]
    fn test_interests_are_preferred() {
        let mut req = request("Delhi", "Paris", "2025-06-15", "2025-06-16");
        req.interests = vec!["art".to_string()];
        let days = build(&req, 3);
        assert_eq!(days[0].morning.category, Some(Category::Art));
    }

    #[test]
    fn test_attraction_respects_time_of_day() {
        let req = request("Delhi", "Tokyo", "2025-06-15", "2025-06-18");
        let kb = KnowledgeBase::builtin();
        let list = kb.attractions(kb.city("tokyo"));
        for day in build(&req, 4) {
            for (slot, ts) in TimeOfDay::SLOTS.iter().zip(day.slots()) {
                if let Some(a) = list.iter().find(|a| a.name == ts.activity) {
                    assert!(a.time.fits(*slot), "{} placed in {:?}", a.name, slot);
                }
            }
        }
    }

    #[test]
    fn test_unknown_destination_uses_generic() {
        let req = request("Delhi", "Nowhere Town", "2025-06-15", "2025-06-17");
        let days = build(&req, 5);
        assert_eq!(days.len(), 2);
        assert!(RESTAURANT_TYPES.contains(&days[0].dining.lunch.as_str()));
        assert_ne!(days[0].dining.lunch, days[0].dining.dinner);
        assert!(days[0].slots().iter().any(|s| s.category.is_some()));
    }

    #[test]
    fn test_free_day_gets_generic_theme() {
        let free = TimeSlot {
            activity: "Free morning".to_string(),
            time: TimeOfDay::Morning.window().to_string(),
            tip: None,
            category: None,
        };
        assert_eq!(ItineraryBuilder::theme(1, [&free, &free, &free]), "Discovery");
        assert_eq!(ItineraryBuilder::theme(7, [&free, &free, &free]), "Adventure");
    }
}
