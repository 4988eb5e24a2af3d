//! Trip-planning pipeline: stage machine, orchestrator and result compiler

mod compiler;
mod error;
mod orchestrator;
mod state;

pub use compiler::{ResultCompiler, plural};
pub use error::PlannerError;
pub use orchestrator::{GeneratorSet, PipelineOrchestrator};
pub use state::{PipelineStage, PlannerState};
