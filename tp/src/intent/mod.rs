//! Free-text trip intent extraction
//!
//! Turns a chat message into a complete `TripRequest`. Every field the
//! message leaves out is filled from the chat defaults and reported as an
//! assumption, so extraction never fails.

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use regex::Regex;
use tracing::debug;

use crate::config::ChatConfig;
use crate::domain::{BudgetTier, Category, TripRequest};
use crate::knowledge::{City, KnowledgeBase};
use crate::validation::parse_date;

/// Shortest word considered for fuzzy city matching
const MIN_FUZZY_LEN: usize = 4;

const NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("a", 1),
    ("an", 1),
];

const MONTH_PATTERN: &str = concat!(
    r"(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?",
    r"|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?",
);

const MONTHS: &[&str] = &["jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec"];

const BUDGET_WORDS: &[&str] = &[
    "budget",
    "cheap",
    "affordable",
    "backpack",
    "low cost",
    "low-cost",
    "economical",
    "shoestring",
];
const LUXURY_WORDS: &[&str] = &[
    "luxury",
    "luxurious",
    "premium",
    "5-star",
    "five star",
    "five-star",
    "lavish",
    "splurge",
];
const MODERATE_WORDS: &[&str] = &["moderate", "mid-range", "midrange", "comfortable", "standard"];

const SPECIAL_WORDS: &[&str] = &[
    "vegetarian",
    "vegan",
    "wheelchair",
    "accessible",
    "kids",
    "pet",
    "halal",
    "jain food",
];

/// Words that are never city names even when capitalized
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "me", "my", "us", "go", "see", "visit", "and", "for", "with", "on", "in", "next", "this",
    "tomorrow", "today",
];

/// Result of one extraction
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub request: TripRequest,
    /// Human-readable notes for every defaulted field
    pub assumptions: Vec<String>,
}

struct Patterns {
    city: Regex,
    role: Regex,
    numeric_date: Regex,
    month_day: Regex,
    day_month: Regex,
    in_days: Regex,
    length: Regex,
    weeks: Regex,
    travelers: Regex,
    family: Regex,
}

impl Patterns {
    fn compile(kb: &KnowledgeBase) -> Result<Self, regex::Error> {
        let mut names: Vec<&str> = kb.names().map(|(label, _)| label).collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        names.dedup();
        let alternation = names.iter().map(|n| regex::escape(n)).collect::<Vec<_>>().join("|");
        let months = MONTH_PATTERN;

        Ok(Self {
            city: Regex::new(&format!(r"\b({})\b", alternation))?,
            role: Regex::new(r"\b((?i:from|to|visit|visiting|towards|in))\s+([A-Za-z][A-Za-z.]*)")?,
            numeric_date: Regex::new(r"\b(\d{4}[-/]\d{1,2}[-/]\d{1,2}|\d{1,2}-\d{1,2}-\d{4})\b")?,
            month_day: Regex::new(&format!(r"\b{}\s+(\d{{1,2}})(?:st|nd|rd|th)?\b", months))?,
            day_month: Regex::new(&format!(r"\b(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?{}\b", months))?,
            in_days: Regex::new(r"\bin\s+(\d+|[a-z]+)\s+(day|days|week|weeks)\b")?,
            length: Regex::new(r"\b(\d+|[a-z]+)[\s-]+(day|days|night|nights)\b")?,
            weeks: Regex::new(r"\b(\d+|a|one|two|three)\s+weeks?\b")?,
            travelers: Regex::new(
                r"\b(\d+|[a-z]+)\s+(?:people|persons|person|travell?ers|adults|friends|pax|guests|of us)\b",
            )?,
            family: Regex::new(r"\bfamily\s+of\s+(\d+|[a-z]+)\b")?,
        })
    }
}

fn number(word: &str) -> Option<u32> {
    word.parse().ok().or_else(|| NUMBER_WORDS.iter().find(|(w, _)| *w == word).map(|(_, n)| *n))
}

/// Position of `word` in `text` where it stands as a whole word or phrase
fn find_word(text: &str, word: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let is_word = |i: usize| bytes.get(i).is_some_and(|b| b.is_ascii_alphanumeric());
    text.match_indices(word).map(|(i, _)| i).find(|&i| {
        let before = i > 0 && is_word(i - 1);
        !before && !is_word(i + word.len())
    })
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| find_word(text, w).is_some())
}

/// True when the word right before `start` is "in"
fn preceded_by_in(text: &str, start: usize) -> bool {
    text[..start].split_whitespace().next_back() == Some("in")
}

/// Next occurrence of `weekday` on or after `from`
fn upcoming(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = (7 + weekday.num_days_from_monday() - from.weekday().num_days_from_monday()) % 7;
    from + Days::new(u64::from(ahead))
}

/// A city mention with its position in the message
struct Mention {
    city: &'static City,
    start: usize,
    role: Option<Role>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Origin,
    Destination,
}

fn role_for(word: &str) -> Role {
    if word == "from" { Role::Origin } else { Role::Destination }
}

pub struct IntentExtractor {
    kb: Arc<KnowledgeBase>,
    defaults: ChatConfig,
    patterns: Patterns,
}

impl IntentExtractor {
    pub fn new(kb: Arc<KnowledgeBase>, defaults: ChatConfig) -> Result<Self, regex::Error> {
        let patterns = Patterns::compile(&kb)?;
        Ok(Self { kb, defaults, patterns })
    }

    pub fn extract(&self, message: &str, today: NaiveDate) -> Extraction {
        debug!(%message, %today, "IntentExtractor::extract: called");
        let text = message.to_lowercase();
        let mut assumptions = Vec::new();

        let (origin, destination) = self.cities(message, &text, &mut assumptions);
        let (departure_date, return_date) = self.dates(&text, today, &mut assumptions);
        let budget_tier = Self::budget(&text, &mut assumptions);
        let traveler_count = self.travelers(&text, &mut assumptions);

        let interests = Category::ALL
            .iter()
            .filter_map(|c| {
                c.keywords()
                    .iter()
                    .filter_map(|k| find_word(&text, k))
                    .min()
                    .map(|pos| (pos, c.tag().to_string()))
            })
            .collect::<std::collections::BTreeMap<_, _>>()
            .into_values()
            .collect();

        let special_requests = SPECIAL_WORDS
            .iter()
            .filter(|w| find_word(&text, w).is_some())
            .copied()
            .collect::<Vec<_>>()
            .join(", ");

        let request = TripRequest {
            origin,
            destination,
            departure_date,
            return_date,
            budget_tier,
            traveler_count,
            interests,
            special_requests,
        };
        debug!(?request, assumptions = assumptions.len(), "IntentExtractor::extract: done");
        Extraction { request, assumptions }
    }

    fn mentions(&self, text: &str) -> Vec<Mention> {
        let mut mentions: Vec<Mention> = self
            .patterns
            .city
            .find_iter(text)
            .filter_map(|m| self.kb.resolve(m.as_str()).map(|city| (m.start(), city)))
            .map(|(start, city)| Mention { city, start, role: None })
            .collect();

        // Role words, plus fuzzy or unknown names right after them, matched on the same text as the cities
        for caps in self.patterns.role.captures_iter(text) {
            let (Some(word), Some(phrase)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let role = role_for(word.as_str());
            if let Some(m) = mentions.iter_mut().find(|m| m.start == phrase.start()) {
                m.role = Some(role);
                continue;
            }
            let lowered = phrase.as_str().trim_end_matches('.');
            if lowered.len() < MIN_FUZZY_LEN || STOPWORDS.contains(&lowered) {
                continue;
            }
            if let Some((city, _)) = self.kb.fuzzy_best(lowered) {
                mentions.push(Mention {
                    city,
                    start: phrase.start(),
                    role: Some(role),
                });
            }
        }

        mentions.sort_by_key(|m| m.start);
        mentions
    }

    /// Unknown capitalized name after "from"/"to", kept verbatim
    fn raw_name(&self, message: &str, wanted: Role) -> Option<String> {
        self.patterns.role.captures_iter(message).find_map(|caps| {
            let word = caps.get(1)?.as_str().to_lowercase();
            let first = caps.get(2)?.as_str();
            let lowered = first.to_lowercase();
            let capitalized = first.chars().next().is_some_and(char::is_uppercase);
            let is_month = MONTHS.iter().any(|m| lowered.starts_with(m));
            let usable = (word == "from" || word == "to")
                && role_for(&word) == wanted
                && capitalized
                && !is_month
                && !STOPWORDS.contains(&lowered.as_str());
            usable.then(|| first.trim_end_matches('.').to_string())
        })
    }

    fn cities(&self, message: &str, text: &str, assumptions: &mut Vec<String>) -> (String, String) {
        let mentions = self.mentions(text);
        let find = |role: Role| mentions.iter().find(|m| m.role == Some(role)).map(|m| m.city);

        let mut origin = find(Role::Origin).map(|c| c.name.to_string());
        let mut destination = find(Role::Destination).map(|c| c.name.to_string());

        // Remaining unlabeled mentions fill the gaps in order of appearance
        let mut unlabeled: Vec<String> = mentions
            .iter()
            .filter(|m| m.role.is_none())
            .map(|m| m.city.name.to_string())
            .filter(|name| Some(name) != origin.as_ref() && Some(name) != destination.as_ref())
            .collect();
        unlabeled.dedup();
        let mut unlabeled = unlabeled.into_iter();
        match (origin.is_some(), destination.is_some()) {
            (false, false) => match (unlabeled.next(), unlabeled.next()) {
                (Some(a), Some(b)) => {
                    origin = Some(a);
                    destination = Some(b);
                }
                (Some(a), None) => destination = Some(a),
                _ => {}
            },
            (false, true) => origin = unlabeled.next(),
            (true, false) => destination = unlabeled.next(),
            (true, true) => {}
        }

        let origin = origin.or_else(|| self.raw_name(message, Role::Origin));
        let destination = destination.or_else(|| self.raw_name(message, Role::Destination));

        let origin = origin.unwrap_or_else(|| {
            assumptions.push(format!("Origin not mentioned; assumed {}", self.defaults.default_origin));
            self.defaults.default_origin.clone()
        });
        let mut destination = destination.unwrap_or_else(|| {
            assumptions.push(format!(
                "Destination not mentioned; assumed {}",
                self.defaults.default_destination
            ));
            self.defaults.default_destination.clone()
        });

        if destination.eq_ignore_ascii_case(&origin) {
            let alternative = if origin.eq_ignore_ascii_case(&self.defaults.default_destination) {
                self.defaults.default_origin.clone()
            } else {
                self.defaults.default_destination.clone()
            };
            assumptions.push(format!(
                "Origin and destination were both {}; planning {} instead",
                origin, alternative
            ));
            destination = alternative;
        }
        (origin, destination)
    }

    fn explicit_dates(&self, text: &str, today: NaiveDate) -> Vec<(usize, NaiveDate)> {
        let mut dates: Vec<(usize, NaiveDate)> = self
            .patterns
            .numeric_date
            .find_iter(text)
            .filter_map(|m| parse_date(m.as_str()).map(|d| (m.start(), d)))
            .collect();

        let named = |month: &str, day: &str| -> Option<NaiveDate> {
            let month = MONTHS.iter().position(|m| month.starts_with(m))? as u32 + 1;
            let day: u32 = day.parse().ok()?;
            let this_year = NaiveDate::from_ymd_opt(today.year(), month, day)?;
            if this_year < today {
                NaiveDate::from_ymd_opt(today.year() + 1, month, day)
            } else {
                Some(this_year)
            }
        };
        for caps in self.patterns.month_day.captures_iter(text) {
            if let (Some(all), Some(m), Some(d)) = (caps.get(0), caps.get(1), caps.get(2)) {
                if let Some(date) = named(m.as_str(), d.as_str()) {
                    dates.push((all.start(), date));
                }
            }
        }
        for caps in self.patterns.day_month.captures_iter(text) {
            if let (Some(all), Some(d), Some(m)) = (caps.get(0), caps.get(1), caps.get(2)) {
                if let Some(date) = named(m.as_str(), d.as_str()) {
                    dates.push((all.start(), date));
                }
            }
        }

        dates.sort();
        dates.dedup_by_key(|(_, d)| *d);
        dates
    }

    fn relative_departure(&self, text: &str, today: NaiveDate) -> Option<(NaiveDate, Option<u32>)> {
        if text.contains("day after tomorrow") {
            return Some((today + Days::new(2), None));
        }
        if text.contains("tomorrow") {
            return Some((today + Days::new(1), None));
        }
        if text.contains("next weekend") {
            return Some((upcoming(today, Weekday::Sat) + Days::new(7), Some(2)));
        }
        if text.contains("this weekend") {
            return Some((upcoming(today, Weekday::Sat), Some(2)));
        }
        if text.contains("next week") {
            return Some((upcoming(today + Days::new(1), Weekday::Mon), None));
        }
        if text.contains("next month") {
            let first = today.with_day(1)?.checked_add_months(chrono::Months::new(1))?;
            return Some((first, None));
        }
        if let Some(caps) = self.patterns.in_days.captures(text) {
            let n = number(caps.get(1)?.as_str())?;
            let unit = caps.get(2)?.as_str();
            let days = if unit.starts_with("week") { n.saturating_mul(7) } else { n };
            return Some((today.checked_add_days(Days::new(u64::from(days)))?, None));
        }
        None
    }

    fn trip_length(&self, text: &str) -> Option<u32> {
        // "in 5 days" names the departure, not the length
        let counted = |re: &Regex, scale: u32| {
            re.captures_iter(text)
                .filter(|caps| caps.get(0).is_some_and(|m| !preceded_by_in(text, m.start())))
                .find_map(|caps| caps.get(1).and_then(|m| number(m.as_str())))
                .map(|n| n.saturating_mul(scale))
                .filter(|n| *n > 0)
        };
        if let Some(days) = counted(&self.patterns.length, 1) {
            return Some(days);
        }
        if find_word(text, "fortnight").is_some() {
            return Some(14);
        }
        if let Some(days) = counted(&self.patterns.weeks, 7) {
            return Some(days);
        }
        if find_word(text, "weekend").is_some() {
            return Some(2);
        }
        None
    }

    fn dates(&self, text: &str, today: NaiveDate, assumptions: &mut Vec<String>) -> (NaiveDate, NaiveDate) {
        let explicit = self.explicit_dates(text, today);
        let relative = self.relative_departure(text, today);
        let length = self.trip_length(text);

        let (departure, implied_length) = match (explicit.first(), relative) {
            (Some((_, d)), _) => (*d, None),
            (None, Some((d, implied))) => (d, implied),
            (None, None) => {
                let lead = self.defaults.lead_days.max(1);
                let d = today + Days::new(u64::from(lead));
                assumptions.push(format!(
                    "No travel date given; departing {} ({} days from today)",
                    d, lead
                ));
                (d, None)
            }
        };

        if let Some((_, ret)) = explicit.get(1).filter(|(_, ret)| *ret > departure) {
            return (departure, *ret);
        }

        let days = match length.or(implied_length) {
            Some(n) => n,
            None => {
                let n = self.defaults.default_trip_days.max(1);
                assumptions.push(format!("No trip length given; assumed {} days", n));
                n
            }
        };
        let fallback = || departure + Days::new(u64::from(self.defaults.default_trip_days.max(1)));
        let ret = departure.checked_add_days(Days::new(u64::from(days.max(1)))).unwrap_or_else(fallback);
        (departure, ret)
    }

    fn budget(text: &str, assumptions: &mut Vec<String>) -> BudgetTier {
        if contains_any(text, LUXURY_WORDS) {
            BudgetTier::Luxury
        } else if contains_any(text, BUDGET_WORDS) {
            BudgetTier::Budget
        } else if contains_any(text, MODERATE_WORDS) {
            BudgetTier::Moderate
        } else {
            assumptions.push("Budget not mentioned; assumed moderate".to_string());
            BudgetTier::Moderate
        }
    }

    fn travelers(&self, text: &str, assumptions: &mut Vec<String>) -> u32 {
        let counted = self
            .patterns
            .family
            .captures(text)
            .or_else(|| self.patterns.travelers.captures(text))
            .and_then(|caps| caps.get(1))
            .and_then(|m| number(m.as_str()))
            .filter(|n| *n > 0);
        if let Some(n) = counted {
            return n;
        }
        let pair_words = ["couple", "honeymoon", "my wife", "my husband", "my partner", "girlfriend", "boyfriend"];
        if contains_any(text, &pair_words) {
            return 2;
        }
        if contains_any(text, &["solo", "alone", "by myself", "just me"]) {
            return 1;
        }
        if find_word(text, "family").is_some() {
            assumptions.push("Family size not given; assumed 4 travelers".to_string());
            return 4;
        }
        assumptions.push("Traveler count not mentioned; assumed 1".to_string());
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> IntentExtractor {
        IntentExtractor::new(Arc::new(KnowledgeBase::builtin()), ChatConfig::default()).unwrap()
    }

    fn today() -> NaiveDate {
        // A Wednesday
        NaiveDate::from_ymd_opt(2025, 6, 11).unwrap()
    }

    fn extract(message: &str) -> Extraction {
        extractor().extract(message, today())
    }

    #[test]
    fn test_full_message() {
        let out =
            extract("Plan a luxury trip from Chennai to Ooty on 2025-06-20 for 3 days, 2 people, love nature and food");
        let req = &out.request;
        assert_eq!(req.origin, "Chennai");
        assert_eq!(req.destination, "Ooty (Udhagamandalam)");
        assert_eq!(req.departure_date.to_string(), "2025-06-20");
        assert_eq!(req.return_date.to_string(), "2025-06-23");
        assert_eq!(req.budget_tier, BudgetTier::Luxury);
        assert_eq!(req.traveler_count, 2);
        assert_eq!(req.interests, vec!["nature", "food"]);
        assert!(out.assumptions.is_empty(), "{:?}", out.assumptions);
    }

    #[test]
    fn test_defaults_recorded_as_assumptions() {
        let out = extract("I need a holiday");
        assert_eq!(out.request.origin, "Delhi");
        assert_eq!(out.request.destination, "Goa");
        assert_eq!(out.request.departure_date.to_string(), "2025-06-18");
        assert_eq!(out.request.trip_days(), 3);
        assert_eq!(out.request.traveler_count, 1);
        assert_eq!(out.assumptions.len(), 6);
    }

    #[test]
    fn test_order_of_appearance() {
        let out = extract("Mumbai - Goa road trip");
        assert_eq!(out.request.origin, "Mumbai");
        assert_eq!(out.request.destination, "Goa");
    }

    #[test]
    fn test_single_city_is_destination() {
        let out = extract("weekend in Jaipur");
        assert_eq!(out.request.destination, "Jaipur");
        assert_eq!(out.request.origin, "Delhi");
        assert_eq!(out.request.trip_days(), 2);
    }

    #[test]
    fn test_explicit_roles_beat_order() {
        let out = extract("to Kochi from Bangalore");
        assert_eq!(out.request.origin, "Bengaluru");
        assert_eq!(out.request.destination, "Kochi");
    }

    #[test]
    fn test_roles_survive_lowercase_length_change() {
        // "İ" grows by one byte when lowercased
        let out = extract("İstanbul can wait, take me to Leh from Goa");
        assert_eq!(out.request.origin, "Goa");
        assert_eq!(out.request.destination, "Leh");
    }

    #[test]
    fn test_fuzzy_city() {
        let out = extract("from Coimbatur to Madurai");
        assert_eq!(out.request.origin, "Coimbatore");
        assert_eq!(out.request.destination, "Madurai");
    }

    #[test]
    fn test_unknown_capitalized_city_kept() {
        let out = extract("from Springfield to Paris next week");
        assert_eq!(out.request.origin, "Springfield");
        assert_eq!(out.request.destination, "Paris");
        assert_eq!(out.request.departure_date.to_string(), "2025-06-16");
    }

    #[test]
    fn test_relative_dates() {
        let e = extractor();
        let tomorrow = e.extract("Delhi to Agra tomorrow for 2 nights", today()).request;
        assert_eq!(tomorrow.departure_date.to_string(), "2025-06-12");
        assert_eq!(tomorrow.trip_days(), 2);

        let weekend = e.extract("Goa this weekend", today()).request;
        assert_eq!(weekend.departure_date.weekday(), Weekday::Sat);
        assert_eq!(weekend.departure_date.to_string(), "2025-06-14");
        assert_eq!(weekend.trip_days(), 2);

        let later = e.extract("Goa in 10 days for a week", today()).request;
        assert_eq!(later.departure_date.to_string(), "2025-06-21");
        assert_eq!(later.trip_days(), 7);
    }

    #[test]
    fn test_month_names() {
        let e = extractor();
        let req = e.extract("Paris from March 3rd to March 8th", today()).request;
        assert_eq!(req.departure_date.to_string(), "2026-03-03");
        assert_eq!(req.return_date.to_string(), "2026-03-08");

        let req = e.extract("Tokyo on 20 july for five days", today()).request;
        assert_eq!(req.departure_date.to_string(), "2025-07-20");
        assert_eq!(req.trip_days(), 5);
    }

    #[test]
    fn test_travelers() {
        let e = extractor();
        assert_eq!(e.extract("honeymoon in Goa", today()).request.traveler_count, 2);
        assert_eq!(e.extract("family of five to Kochi", today()).request.traveler_count, 5);
        assert_eq!(e.extract("three friends to Manali", today()).request.traveler_count, 3);
        assert_eq!(e.extract("solo trip to Leh", today()).request.traveler_count, 1);
    }

    #[test]
    fn test_budget_keywords() {
        let e = extractor();
        assert_eq!(e.extract("cheap trip to Goa", today()).request.budget_tier, BudgetTier::Budget);
        assert_eq!(e.extract("5-star stay in Udaipur", today()).request.budget_tier, BudgetTier::Luxury);
    }

    #[test]
    fn test_same_city_is_replaced() {
        let out = extract("from Goa");
        assert_eq!(out.request.origin, "Goa");
        assert_eq!(out.request.destination, "Delhi");
    }
}
