//! Pipeline error types

use std::time::Duration;
use thiserror::Error;

use super::state::PipelineStage;
use crate::validation::ValidationError;

/// Errors that end a pipeline run
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Pipeline timed out after {0:?}")]
    Timeout(Duration),

    #[error("Orchestrator has already run")]
    AlreadyRun,

    #[error("Invalid stage transition: {from} -> {to}")]
    InvalidTransition { from: PipelineStage, to: PipelineStage },

    #[error("Result slot already filled: {0}")]
    SlotAlreadyFilled(&'static str),

    #[error("Pipeline task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl PlannerError {
    /// Errors caused by the caller's input rather than the pipeline itself
    pub fn is_user_error(&self) -> bool {
        matches!(self, PlannerError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PlannerError::from(ValidationError::new("origin", "is required"));
        assert_eq!(err.to_string(), "Invalid origin: is required");
        assert!(err.is_user_error());

        let err = PlannerError::InvalidTransition {
            from: PipelineStage::Init,
            to: PipelineStage::Compiled,
        };
        assert_eq!(err.to_string(), "Invalid stage transition: INIT -> COMPILED");
        assert!(!err.is_user_error());
    }
}
