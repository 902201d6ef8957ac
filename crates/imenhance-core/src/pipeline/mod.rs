pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::EnhancementPipeline;
pub use types::{PipelineStage, ProgressReporter};
