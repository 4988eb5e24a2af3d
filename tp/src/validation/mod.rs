//! Raw request validation and normalization

mod error;

use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use crate::domain::{BudgetTier, RawRequest, TripRequest};

pub use error::ValidationError;

/// Accepted date layouts, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];

/// Turns a loosely typed `RawRequest` into a canonical `TripRequest`
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator;

impl RequestValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, raw: &RawRequest) -> Result<TripRequest, ValidationError> {
        debug!("RequestValidator::validate: called");
        let origin = required_string(raw, "origin")?;
        let destination = required_string(raw, "destination")?;
        let departure_date = required_date(raw, "departure_date")?;
        let return_date = required_date(raw, "return_date")?;

        if departure_date >= return_date {
            return Err(ValidationError::new(
                "return_date",
                format!("must be after departure_date ({} is not after {})", return_date, departure_date),
            ));
        }

        let request = TripRequest {
            origin,
            destination,
            departure_date,
            return_date,
            budget_tier: budget_tier(raw.get("budget")),
            traveler_count: traveler_count(raw.get("travelers")),
            interests: interests(raw.get("interests")),
            special_requests: raw
                .get("special_requests")
                .and_then(Value::as_str)
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
        };
        debug!(
            origin = %request.origin,
            destination = %request.destination,
            days = request.trip_days(),
            "RequestValidator::validate: ok"
        );
        Ok(request)
    }
}

fn required_string(raw: &RawRequest, field: &str) -> Result<String, ValidationError> {
    match raw.get(field) {
        None | Some(Value::Null) => Err(ValidationError::new(field, "is required")),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ValidationError::new(field, "must not be empty")),
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(_) => Err(ValidationError::new(field, "must be a string")),
    }
}

fn required_date(raw: &RawRequest, field: &str) -> Result<NaiveDate, ValidationError> {
    let text = required_string(raw, field)?;
    parse_date(&text).ok_or_else(|| {
        ValidationError::new(field, format!("unrecognized date '{}' (expected YYYY-MM-DD)", text))
    })
}

/// Parse a date in any accepted layout
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text.trim(), format).ok())
}

fn budget_tier(value: Option<&Value>) -> BudgetTier {
    value
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

fn traveler_count(value: Option<&Value>) -> u32 {
    let count = match value {
        Some(Value::Number(n)) => n.as_u64().or_else(|| n.as_f64().filter(|f| *f >= 1.0).map(|f| f as u64)),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    count
        .map(|c| u32::try_from(c).unwrap_or(u32::MAX))
        .unwrap_or(1)
        .max(1)
}

fn interests(value: Option<&Value>) -> Vec<String> {
    let tags: Vec<String> = match value {
        Some(Value::String(s)) => s.split(',').map(str::to_string).collect(),
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).map(str::to_string).collect(),
        _ => Vec::new(),
    };

    let mut seen = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> RawRequest {
        RawRequest::new()
            .with("origin", "  Coimbatore ")
            .with("destination", "Ooty")
            .with("departure_date", "2025-06-15")
            .with("return_date", "2025-06-17")
    }

    fn validate(raw: &RawRequest) -> Result<TripRequest, ValidationError> {
        RequestValidator::new().validate(raw)
    }

    #[test]
    fn test_minimal_request_defaults() {
        let req = validate(&base()).unwrap();
        assert_eq!(req.origin, "Coimbatore");
        assert_eq!(req.budget_tier, BudgetTier::Moderate);
        assert_eq!(req.traveler_count, 1);
        assert!(req.interests.is_empty());
        assert_eq!(req.special_requests, "");
        assert_eq!(req.trip_days(), 2);
    }

    #[test]
    fn test_missing_and_empty_fields() {
        let raw = RawRequest::new().with("destination", "Ooty");
        assert_eq!(validate(&raw).unwrap_err().field, "origin");

        let raw = base().with("destination", "   ");
        let err = validate(&raw).unwrap_err();
        assert_eq!(err.field, "destination");
        assert_eq!(err.reason, "must not be empty");

        let raw = base().with("origin", 42);
        assert_eq!(validate(&raw).unwrap_err().reason, "must be a string");
    }

    #[test]
    fn test_date_errors() {
        let raw = base().with("departure_date", "June fifteenth");
        assert_eq!(validate(&raw).unwrap_err().field, "departure_date");

        let raw = base().with("departure_date", "2025-06-20");
        let err = validate(&raw).unwrap_err();
        assert_eq!(err.field, "return_date");

        let raw = base().with("return_date", "2025-06-15");
        assert!(validate(&raw).is_err());

        let raw = base().with("return_date", "2025-02-30");
        assert_eq!(validate(&raw).unwrap_err().field, "return_date");
    }

    #[test]
    fn test_alternate_date_formats() {
        assert_eq!(parse_date("2025/06/15"), parse_date("2025-06-15"));
        assert_eq!(parse_date("15-06-2025"), parse_date("2025-06-15"));
        assert!(parse_date("06/15/2025").is_none());
    }

    #[test]
    fn test_traveler_count_clamping() {
        let count = |v: Value| validate(&base().with("travelers", v)).unwrap().traveler_count;
        assert_eq!(count(json!(4)), 4);
        assert_eq!(count(json!("3")), 3);
        assert_eq!(count(json!(0)), 1);
        assert_eq!(count(json!(-2)), 1);
        assert_eq!(count(json!("lots")), 1);
        assert_eq!(count(json!(2.7)), 2);
    }

    #[test]
    fn test_budget_parsing() {
        let tier = |v: Value| validate(&base().with("budget", v)).unwrap().budget_tier;
        assert_eq!(tier(json!("LUXURY")), BudgetTier::Luxury);
        assert_eq!(tier(json!("budget")), BudgetTier::Budget);
        assert_eq!(tier(json!("platinum")), BudgetTier::Moderate);
        assert_eq!(tier(json!(3)), BudgetTier::Moderate);
    }

    #[test]
    fn test_interests_string_and_array() {
        let raw = base().with("interests", "Food, history,food , ");
        assert_eq!(validate(&raw).unwrap().interests, vec!["food", "history"]);

        let raw = base().with("interests", json!(["Nature", " nature", "Tea", 5]));
        assert_eq!(validate(&raw).unwrap().interests, vec!["nature", "tea"]);
    }

    #[test]
    fn test_round_trip_through_raw() {
        let raw = base()
            .with("budget", "luxury")
            .with("travelers", 3)
            .with("interests", "nature")
            .with("special_requests", " vegetarian ");
        let req = validate(&raw).unwrap();
        assert_eq!(req.special_requests, "vegetarian");
        assert_eq!(validate(&req.to_raw()).unwrap(), req);
    }
}
