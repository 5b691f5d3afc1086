//! # TDA-Bottleneck
//!
//! Bottleneck distance between dimension-zero persistence diagrams in
//! which every feature is born at the start of the filtration.
//!
//! ## Setting
//!
//! A point (0, d) of such a diagram is fully described by its death time d,
//! so a diagram is a non-empty multiset of nonnegative reals. Two diagrams
//! X and Y are compared by
//!
//!   d_B(X, Y) = min_γ max_p ‖p − γ(p)‖_∞
//!
//! where γ matches death times across the diagrams (cost |a − b|) or sends
//! a death time a to its diagonal projection (cost a/2).
//!
//! ## Usage
//!
//! ```
//! use tda_bottleneck::bottleneck0;
//!
//! let d = bottleneck0(&[5.0], &[5.0, 1.0]).unwrap();
//! assert!((d - 0.5).abs() < 1e-12);
//! ```
//!
//! The result is symmetric in its arguments and independent of the order
//! of the death times. Inputs are never modified.
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Cohen-Steiner, Edelsbrunner & Harer, "Stability of Persistence
//!   Diagrams", DCG 37 (2007)

pub mod topology;
pub mod sampling;
pub mod error;

pub use topology::{
    DeathTimes,
    BottleneckDistance,
    BottleneckResult,
    Resolution,
    bottleneck0,
    bottleneck0_array,
};

pub use sampling::{SamplingConfig, uniform_death_times};

pub use error::{BottleneckError, DiagramError, SamplingError, Side};
