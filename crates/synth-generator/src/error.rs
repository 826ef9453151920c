//! Error types for telemetry generation.

use thiserror::Error;

/// Errors that can occur while validating a request or generating records.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Generation window runs backwards.
    #[error("end time {end} before start time {start}")]
    BackwardsWindow { start: i64, end: i64 },

    /// Request has no units to generate readings for.
    #[error("no units provided")]
    NoUnits,

    /// Unit sampling period is zero or negative.
    #[error("unit '{unit}': interval must be positive, got {interval}")]
    InvalidInterval { unit: String, interval: i64 },

    /// Category weight list is empty.
    #[error("category weights must not be empty")]
    EmptyWeights,

    /// A category weight is negative.
    #[error("negative category weight: {0}")]
    NegativeWeight(f64),

    /// All category weights are zero, so no category can be drawn.
    #[error("category weights sum to zero")]
    ZeroWeightSum,

    /// A category range has its bounds swapped.
    #[error("unit '{unit}': category {index} range is inverted ({lower} > {upper})")]
    InvertedRange {
        unit: String,
        index: usize,
        lower: f64,
        upper: f64,
    },

    /// A drawn category index has no range entry.
    #[error("unit '{unit}': no range for category index {index}")]
    CategoryNotFound { unit: String, index: usize },

    /// A record timestamp precedes the generation window.
    #[error("record time {time} before start time {start}")]
    TimeBeforeStart { time: i64, start: i64 },

    /// A unit's generation run failed; no partial output is returned.
    #[error("failed to generate record set for unit '{unit}': {source}")]
    UnitGeneration {
        unit: String,
        source: Box<GeneratorError>,
    },

    /// Schema error.
    #[error(transparent)]
    Schema(#[from] synth_core::SchemaError),
}
