//! Tripplan - Multi-modal Trip Planning Pipeline
//!
//! Tripplan turns a trip request into a compiled plan: flight, hotel, rail and
//! road options generated concurrently, a day-by-day itinerary, and a text
//! summary. Requests arrive either as a raw field map or as free-form chat.
//!
//! # Core Concepts
//!
//! - **Single-use orchestrator**: One state machine run per request
//! - **Degrade, don't fail**: Infeasible domains become sentinels, not errors
//! - **Synthetic data**: Options come from seeded generators over a built-in knowledge base
//!
//! # Modules
//!
//! - [`pipeline`] - Orchestrator state machine, planner state and result compiler
//! - [`generators`] - Per-domain option generators
//! - [`itinerary`] - Day-by-day itinerary builder
//! - [`intent`] - Free-text request extraction
//! - [`knowledge`] - Cities, routes, rail families and attractions
//! - [`service`] - Plan and Chat operations
//! - [`render`] / [`repl`] - Terminal output and the interactive chat prompt
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod generators;
pub mod intent;
pub mod itinerary;
pub mod knowledge;
pub mod pipeline;
pub mod render;
pub mod repl;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use config::{ChatConfig, Config, CurrencyConfig, PipelineConfig};
pub use domain::{
    BudgetTier, ChatResponse, CompiledResult, Domain, DomainOptions, ItineraryDay, PlanResponse, RawRequest, Sentinel,
    SentinelMarker, Step, TripRequest,
};
pub use generators::{DomainGenerator, Pricing};
pub use intent::{Extraction, IntentExtractor};
pub use itinerary::ItineraryBuilder;
pub use knowledge::KnowledgeBase;
pub use pipeline::{GeneratorSet, PipelineOrchestrator, PipelineStage, PlannerError, PlannerState, ResultCompiler};
pub use service::Planner;
pub use validation::{RequestValidator, ValidationError};
