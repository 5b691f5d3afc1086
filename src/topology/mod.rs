//! Topology Module: Dimension-Zero Persistence Diagrams
//!
//! Implements the structures for comparing H₀ persistence diagrams:
//! - Degenerate diagrams (every feature born at ε = 0)
//! - Bottleneck distance between two such diagrams
//!
//! ## Mathematical Background
//!
//! In a Vietoris-Rips filtration every point of the cloud is its own
//! connected component at ε = 0, and components die as edges merge them.
//! The H₀ diagram therefore lies on the vertical axis and is determined by
//! its multiset of death times. Comparing two such diagrams under the
//! bottleneck metric reduces to a matching problem on the real line.

mod diagram;
mod bottleneck;

pub use diagram::DeathTimes;
pub use bottleneck::{
    BottleneckDistance,
    BottleneckResult,
    Resolution,
    bottleneck0,
    bottleneck0_array,
};
