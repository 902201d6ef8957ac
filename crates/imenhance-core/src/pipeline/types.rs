/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Grayscale,
    Classifying,
    Enhancing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grayscale => write!(f, "Converting to grayscale"),
            Self::Classifying => write!(f, "Classifying intensity"),
            Self::Enhancing => write!(f, "Enhancing"),
        }
    }
}

/// Thread-safe progress reporting for the pipeline.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    fn begin_stage(&self, _stage: PipelineStage) {}

    fn finish_stage(&self, _stage: PipelineStage) {}
}

pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
