//! Plan and Chat operations
//!
//! `Planner` owns the shared knowledge base and configuration and builds a
//! fresh single-use orchestrator for every call.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::{ChatResponse, PlanResponse, RawRequest};
use crate::intent::IntentExtractor;
use crate::knowledge::KnowledgeBase;
use crate::pipeline::{PipelineOrchestrator, PlannerError};

pub struct Planner {
    kb: Arc<KnowledgeBase>,
    config: Config,
    extractor: IntentExtractor,
}

impl Planner {
    pub fn new(config: Config) -> Result<Self, regex::Error> {
        Self::with_knowledge(Arc::new(KnowledgeBase::builtin()), config)
    }

    pub fn with_knowledge(kb: Arc<KnowledgeBase>, config: Config) -> Result<Self, regex::Error> {
        let extractor = IntentExtractor::new(kb.clone(), config.chat.clone())?;
        Ok(Self { kb, config, extractor })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn orchestrator(&self) -> PipelineOrchestrator {
        PipelineOrchestrator::new(self.kb.clone(), &self.config)
    }

    /// Run the pipeline on a raw field map
    pub async fn plan(&self, raw: &RawRequest) -> PlanResponse {
        debug!("Planner::plan: called");
        match self.orchestrator().run(raw).await {
            Ok(result) => {
                info!(plan_id = %result.plan_id, "Planner::plan: compiled");
                PlanResponse::ok(result)
            }
            Err(e) => {
                warn!(error = %e, "Planner::plan: failed");
                PlanResponse::failed(failure_message(&e))
            }
        }
    }

    /// Extract a request from free text and plan it, relative to today
    pub async fn chat(&self, message: &str) -> ChatResponse {
        self.chat_on(message, Local::now().date_naive()).await
    }

    pub async fn chat_on(&self, message: &str, today: NaiveDate) -> ChatResponse {
        debug!(%message, %today, "Planner::chat_on: called");
        let extraction = self.extractor.extract(message, today);
        let raw = extraction.request.to_raw();

        match self.orchestrator().run(&raw).await {
            Ok(result) => {
                let mut reply = result.summary.clone();
                if !extraction.assumptions.is_empty() {
                    reply.push_str("\n\nAssumptions:");
                    for assumption in &extraction.assumptions {
                        reply.push_str("\n- ");
                        reply.push_str(assumption);
                    }
                }
                ChatResponse {
                    reply,
                    has_results: true,
                    data: Some(result),
                    params: Some(extraction.request),
                    assumptions: extraction.assumptions,
                }
            }
            Err(e) => {
                warn!(error = %e, "Planner::chat_on: failed");
                ChatResponse {
                    reply: format!("Sorry, I couldn't plan that trip. {}", failure_message(&e)),
                    has_results: false,
                    data: None,
                    params: Some(extraction.request),
                    assumptions: extraction.assumptions,
                }
            }
        }
    }
}

/// Caller-facing text for a failed run; only validation errors carry detail
fn failure_message(error: &PlannerError) -> String {
    if error.is_user_error() {
        error.to_string()
    } else {
        "Planning failed, please try again".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planner() -> Planner {
        Planner::new(Config::default()).unwrap()
    }

    fn raw(depart: &str, ret: &str) -> RawRequest {
        RawRequest::new()
            .with("origin", "Delhi")
            .with("destination", "Jaipur")
            .with("departure_date", depart)
            .with("return_date", ret)
            .with("travelers", 2)
    }

    #[tokio::test]
    async fn test_plan_success() {
        let response = planner().plan(&raw("2025-06-15", "2025-06-18")).await;
        assert!(response.success);
        assert!(response.error.is_none());
        let data = response.data.unwrap();
        assert_eq!(data.itinerary.len(), 3);
        assert!(data.summary.contains("Delhi → Jaipur"));
    }

    #[tokio::test]
    async fn test_plan_validation_failure() {
        let response = planner().plan(&raw("2025-06-18", "2025-06-15")).await;
        assert!(!response.success);
        assert!(response.data.is_none());
        assert!(response.error.unwrap().starts_with("Invalid return_date"));
    }

    #[tokio::test]
    async fn test_chat_reports_assumptions() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        let response = planner().chat_on("cheap weekend in Jaipur", today).await;
        assert!(response.has_results);
        let params = response.params.unwrap();
        assert_eq!(params.destination, "Jaipur");
        assert_eq!(params.origin, "Delhi");
        assert!(response.reply.starts_with("Travel Plan: Delhi → Jaipur"));
        assert!(response.reply.contains("Assumptions:"));
        assert!(response.assumptions.iter().any(|a| a.starts_with("Origin not mentioned")));
        assert_eq!(response.data.unwrap().itinerary.len(), 2);
    }

    #[tokio::test]
    async fn test_chat_without_assumptions() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        let response = planner()
            .chat_on("2 people, budget trip from Chennai to Madurai on 2025-07-01 for 2 days", today)
            .await;
        assert!(response.has_results);
        assert!(response.assumptions.is_empty());
        assert!(!response.reply.contains("Assumptions:"));
    }
}
