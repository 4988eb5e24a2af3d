//! Integration tests for the planning pipeline
//!
//! These tests drive the public Plan and Chat operations end to end.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use tripplan::config::Config;
use tripplan::domain::{PlanResponse, RawRequest, SentinelMarker, Step};
use tripplan::knowledge::KnowledgeBase;
use tripplan::pipeline::{PipelineOrchestrator, PipelineStage, PlannerError};
use tripplan::service::Planner;

fn raw(origin: &str, destination: &str, depart: &str, ret: &str, travelers: u32) -> RawRequest {
    RawRequest::new()
        .with("origin", origin)
        .with("destination", destination)
        .with("departure_date", depart)
        .with("return_date", ret)
        .with("budget", "moderate")
        .with("travelers", travelers)
        .with("interests", "nature,food")
}

async fn plan(request: &RawRequest) -> PlanResponse {
    Planner::new(Config::default())
        .expect("Failed to build planner")
        .plan(request)
        .await
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[tokio::test]
async fn test_coimbatore_to_ooty() {
    let response = plan(&raw("Coimbatore", "Ooty", "2025-06-15", "2025-06-17", 2)).await;
    assert!(response.success, "plan failed: {:?}", response.error);
    let data = response.data.expect("data");

    assert_eq!(data.itinerary.len(), 2);
    assert_eq!(data.flights.sentinel().map(|s| s.name), Some(SentinelMarker::NoAirport));
    assert!(!data.road_options.is_sentinel());
    assert!(!data.road_options.items().is_empty());

    let trains = data.trains.items();
    assert!(!trains.is_empty());
    assert!(trains.iter().all(|t| t.train_name == "Nilgiri Mountain Railway"));

    assert!(data.summary.starts_with("Travel Plan: Coimbatore → Ooty"));
    assert!(data.summary.contains("No Airport"));
    assert_eq!(data.steps_completed.first(), Some(&Step::Validate));
    assert_eq!(data.steps_completed.last(), Some(&Step::CompileResults));
}

#[tokio::test]
async fn test_new_york_to_paris() {
    let response = plan(&raw("New York", "Paris", "2025-06-15", "2025-06-20", 1)).await;
    assert!(response.success);
    let data = response.data.expect("data");

    assert!(!data.flights.items().is_empty());
    assert!(!data.hotels.items().is_empty());
    assert_eq!(data.itinerary.len(), 5);
    assert_eq!(data.trains.sentinel().map(|s| s.name), Some(SentinelMarker::NoDirectTrains));
    assert_eq!(data.road_options.sentinel().map(|s| s.name), Some(SentinelMarker::NoRoadRoute));
    assert!(data.summary.contains("Travelers: 1 traveler |"));
    assert!(data.summary.contains("(5 nights)"));
}

#[tokio::test]
async fn test_departure_after_return_rejected() {
    let response = plan(&raw("Delhi", "Agra", "2025-06-20", "2025-06-15", 1)).await;
    assert!(!response.success);
    assert!(response.data.is_none());
    assert!(response.error.expect("error").contains("return_date"));
}

#[tokio::test]
async fn test_orchestrator_rejects_bad_dates() {
    let mut orchestrator = PipelineOrchestrator::new(Arc::new(KnowledgeBase::builtin()), &Config::default());
    let err = orchestrator
        .run(&raw("Delhi", "Agra", "2025-06-20", "not-a-date", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, PlannerError::Validation(_)));
    assert_eq!(orchestrator.stage(), PipelineStage::Failed);
}

#[tokio::test]
async fn test_plural_travelers() {
    let response = plan(&raw("Mumbai", "Goa", "2025-06-15", "2025-06-18", 3)).await;
    let data = response.data.expect("data");
    assert!(data.summary.contains("Travelers: 3 travelers"));
    assert!(data.summary.contains("(3 nights)"));
}

#[tokio::test]
async fn test_repeated_runs_agree() {
    let request = raw("Coimbatore", "Ooty", "2025-06-15", "2025-06-17", 2);
    let first = plan(&request).await.data.expect("data");
    let second = plan(&request).await.data.expect("data");

    assert_ne!(first.plan_id, second.plan_id);
    assert_eq!(first.itinerary.len(), second.itinerary.len());
    assert_eq!(first.flights.is_sentinel(), second.flights.is_sentinel());
    assert_eq!(first.trains.is_sentinel(), second.trains.is_sentinel());
    assert_eq!(first.road_options.is_sentinel(), second.road_options.is_sentinel());
    let route = |s: &str| s.split(" | ").take(2).collect::<Vec<_>>().join(" | ");
    assert_eq!(route(&first.summary), route(&second.summary));
}

#[tokio::test]
async fn test_json_shape() {
    let response = plan(&raw("Coimbatore", "Ooty", "2025-06-15", "2025-06-17", 2)).await;
    let json = serde_json::to_value(&response).expect("serialize");

    assert_eq!(json["success"], true);
    assert!(json.get("error").is_none());
    assert_eq!(json["data"]["flights"]["status"], "not_applicable");
    assert_eq!(json["data"]["flights"]["sentinel"]["name"], "No Airport");
    assert_eq!(json["data"]["road_options"]["status"], "options");
}

// =============================================================================
// Chat Tests
// =============================================================================

#[tokio::test]
async fn test_chat_plans_extracted_request() {
    let planner = Planner::new(Config::default()).expect("Failed to build planner");
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).expect("date");
    let response = planner
        .chat_on("Coimbatore to Ooty on 2025-06-15 for 2 days, 2 people, nature", today)
        .await;

    assert!(response.has_results);
    let params = response.params.expect("params");
    assert_eq!(params.origin, "Coimbatore");
    assert_eq!(params.traveler_count, 2);
    let data = response.data.expect("data");
    assert_eq!(data.request, params);
    assert_eq!(data.itinerary.len(), 2);
}

// =============================================================================
// Property Tests
// =============================================================================

const CITIES: &[&str] = &["Delhi", "Jaipur", "Goa", "Ooty", "Paris", "Tokyo", "Springfield"];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_itinerary_matches_trip_length(
        origin in 0..CITIES.len(),
        destination in 0..CITIES.len(),
        offset in 0u64..365,
        days in 1u64..21,
        travelers in 1u32..8,
    ) {
        let base = NaiveDate::from_ymd_opt(2025, 1, 1).expect("date");
        let depart = base + Days::new(offset);
        let ret = depart + Days::new(days);
        let request = raw(
            CITIES[origin],
            CITIES[destination],
            &depart.to_string(),
            &ret.to_string(),
            travelers,
        );

        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let response = runtime.block_on(plan(&request));
        prop_assert!(response.success);
        let data = response.data.expect("data");

        prop_assert_eq!(data.itinerary.len() as u64, days);
        for (i, day) in data.itinerary.iter().enumerate() {
            prop_assert_eq!(day.day as usize, i + 1);
            prop_assert_eq!(day.date, depart + Days::new(i as u64));
        }
        prop_assert!(data.flights.is_sentinel() || data.flights.items().iter().all(|f| f.date == depart));
        prop_assert_eq!(data.hotels.items().iter().all(|h| h.nights == days as u32), true);
    }
}
