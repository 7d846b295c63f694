use thiserror::Error;

/// Rejected configuration. Raised at construction time only; once a
/// component is built, anomalies degrade to no-ops instead of erroring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("duration must be positive, got {0} ms")]
    NonPositiveDuration(u64),

    #[error("threshold must be positive, got {0}")]
    NonPositiveThreshold(f32),

    #[error("dimension must be positive and finite, got {0}")]
    NonPositiveDimension(f32),

    #[error("step count must be positive")]
    ZeroSteps,

    #[error("interpolation domain needs at least two points")]
    InterpolationDomainTooSmall,

    #[error("interpolation domain and range lengths differ: {domain} vs {range}")]
    InterpolationLengthMismatch { domain: usize, range: usize },

    #[error("interpolation domain must be sorted ascending")]
    InterpolationDomainUnsorted,
}
