//! Error types for diagram construction and distance computation.

use thiserror::Error;

/// Which argument of a two-diagram operation a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Failure while building a single [`DeathTimes`](crate::DeathTimes) diagram.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagramError {
    #[error("persistence diagram has no death times")]
    Empty,

    #[error("death time at index {index} must be finite and nonnegative, got {value}")]
    InvalidValue { index: usize, value: f64 },

    #[error("interval at index {index} is born at {birth}, expected 0")]
    NonZeroBirth { index: usize, birth: f64 },
}

/// Failure at the boundary of [`bottleneck0`](crate::bottleneck0).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BottleneckError {
    #[error("{side} diagram is empty")]
    EmptyInput { side: Side },

    #[error("{side} diagram: death time at index {index} must be finite and nonnegative, got {value}")]
    InvalidValue { side: Side, index: usize, value: f64 },

    #[error("{side} diagram: {source}")]
    Diagram {
        side: Side,
        #[source]
        source: DiagramError,
    },
}

impl BottleneckError {
    /// Attach the offending argument to a diagram construction failure.
    pub fn from_diagram(side: Side, err: DiagramError) -> Self {
        match err {
            DiagramError::Empty => BottleneckError::EmptyInput { side },
            DiagramError::InvalidValue { index, value } => {
                BottleneckError::InvalidValue { side, index, value }
            }
            source => BottleneckError::Diagram { side, source },
        }
    }

    /// The argument the failure refers to.
    pub fn side(&self) -> Side {
        match self {
            BottleneckError::EmptyInput { side }
            | BottleneckError::InvalidValue { side, .. }
            | BottleneckError::Diagram { side, .. } => *side,
        }
    }
}

/// Failure while sampling random diagrams from a [`SamplingConfig`](crate::SamplingConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    #[error("invalid sampling range [{low}, {high})")]
    InvalidRange { low: f64, high: f64 },

    #[error(transparent)]
    Diagram(#[from] DiagramError),
}
