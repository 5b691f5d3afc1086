//! Bottleneck Distance in Dimension Zero
//!
//! For diagrams D₁, D₂ whose points all lie on the vertical axis (birth 0),
//! the bottleneck distance is
//!
//!   d_B(D₁, D₂) = min_γ max_p ‖p − γ(p)‖_∞
//!
//! where γ pairs each death time either with a death time of the other
//! diagram (cost |a − b|) or with its own diagonal projection (cost a/2).
//!
//! ## Algorithm
//!
//! 1. Orient so the first diagram is the shorter one and sort both in
//!    descending order. Pairing the i-th largest values gives a trial
//!    bijection with mismatches Z[i] = |X[i] − Y[i]|.
//! 2. If the largest unpaired death time of the longer diagram costs more
//!    on the diagonal than the worst mismatch, that cost is the answer.
//! 3. Otherwise refine: take the worst mismatch at index l and the cost
//!    k = max(X[l], Y[l]) / 2 of sending its pair to the diagonal. Either
//!    k settles the distance, or every mismatch at or above k sits before
//!    l, in which case the arrays are cut to their first l entries and the
//!    step repeats. Each cut strictly shrinks the problem.
//!
//! Runs in O(N log N) for the sort plus O(N²) for the refinement.

use ndarray::ArrayView1;
use tracing::{debug, debug_span, trace};

use super::DeathTimes;
use crate::error::{BottleneckError, Side};

/// Branch of the search that produced the distance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Largest unpaired death time of the longer diagram goes to the diagonal
    ExcessPoint,
    /// Worst pair goes to the diagonal and dominates every other mismatch
    DiagonalThreshold,
    /// Every mismatch at or above the diagonal cost lies at or after the worst pair
    ConfinedThreshold,
    /// Arrays were cut down to a single pair
    TruncatedSingleton,
    /// Keeping the worst pair matched is cheaper than the diagonal
    WorstPair,
    /// Shorter diagram has a single death time
    Singleton,
}

/// Bottleneck distance together with how it was reached
#[derive(Debug, Clone, Copy)]
pub struct BottleneckResult {
    /// The distance d_B ≥ 0
    pub distance: f64,
    /// Branch that produced it
    pub resolution: Resolution,
    /// Refinement iterations performed
    pub iterations: usize,
    /// Length of the working arrays when the search stopped
    pub working_len: usize,
}

/// Bottleneck distance between degenerate (birth = 0) persistence diagrams.
#[derive(Debug, Clone, Copy, Default)]
pub struct BottleneckDistance;

impl BottleneckDistance {
    /// Bottleneck distance between two validated diagrams.
    ///
    /// Symmetric in its arguments and independent of the order of the
    /// death times within each diagram.
    pub fn compute(first: &DeathTimes, second: &DeathTimes) -> f64 {
        Self::compute_detailed(first, second).distance
    }

    /// Same as [`compute`](Self::compute), also reporting the branch taken.
    pub fn compute_detailed(first: &DeathTimes, second: &DeathTimes) -> BottleneckResult {
        let (x, y) = normalize(first, second);
        search(x, y)
    }
}

/// Bottleneck distance between two sequences of death times.
///
/// Both sequences must be non-empty with finite, nonnegative entries.
/// Neither input is modified.
pub fn bottleneck0(first: &[f64], second: &[f64]) -> Result<f64, BottleneckError> {
    let first = DeathTimes::from_slice(first)
        .map_err(|e| BottleneckError::from_diagram(Side::First, e))?;
    let second = DeathTimes::from_slice(second)
        .map_err(|e| BottleneckError::from_diagram(Side::Second, e))?;
    Ok(BottleneckDistance::compute(&first, &second))
}

/// [`bottleneck0`] for one-dimensional arrays
pub fn bottleneck0_array(
    first: ArrayView1<f64>,
    second: ArrayView1<f64>,
) -> Result<f64, BottleneckError> {
    let first = DeathTimes::from_array(first)
        .map_err(|e| BottleneckError::from_diagram(Side::First, e))?;
    let second = DeathTimes::from_array(second)
        .map_err(|e| BottleneckError::from_diagram(Side::Second, e))?;
    Ok(BottleneckDistance::compute(&first, &second))
}

/// Shorter diagram first, both sorted descending.
fn normalize(first: &DeathTimes, second: &DeathTimes) -> (Vec<f64>, Vec<f64>) {
    let (shorter, longer) = if second.len() < first.len() {
        (second, first)
    } else {
        (first, second)
    };
    (shorter.sorted_descending(), longer.sorted_descending())
}

/// Index and value of the maximum; lowest index wins ties.
fn argmax(z: &[f64]) -> (usize, f64) {
    let mut best = 0;
    for i in 1..z.len() {
        if z[i] > z[best] {
            best = i;
        }
    }
    (best, z[best])
}

/// Maximum of `z` with index `skip` left out. Needs `z.len() > 1`.
fn max_excluding(z: &[f64], skip: usize) -> f64 {
    z.iter()
        .enumerate()
        .filter(|&(i, _)| i != skip)
        .map(|(_, &v)| v)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// True when no mismatch ≥ k lies strictly before `l`.
fn conflicts_confined(z: &[f64], l: usize, k: f64) -> bool {
    z.iter()
        .enumerate()
        .filter(|&(_, &v)| v >= k)
        .all(|(i, _)| i >= l)
}

fn search(mut x: Vec<f64>, mut y: Vec<f64>) -> BottleneckResult {
    let _span = debug_span!("bottleneck_search", n = x.len(), m = y.len()).entered();

    let n = x.len();
    debug_assert!(n >= 1 && n <= y.len());

    let mut z: Vec<f64> = x.iter().zip(&y).map(|(a, b)| (a - b).abs()).collect();
    let (mut l, mut dtemp) = argmax(&z);

    // Only the original size disparity is considered here; later cuts
    // never revisit it.
    if let Some(&excess) = y.get(n) {
        if dtemp < 0.5 * excess {
            return finish(0.5 * excess, Resolution::ExcessPoint, 0, z.len());
        }
    }

    if z.len() == 1 {
        let d = dtemp.min(0.5 * x[0].max(y[0]));
        return finish(d, Resolution::Singleton, 0, 1);
    }

    let mut iterations = 0;
    loop {
        iterations += 1;
        let k = 0.5 * x[l].max(y[l]);
        let max_rest = max_excluding(&z, l);
        trace!(len = z.len(), l, dtemp, k, max_rest, "refinement step");

        if max_rest < k && k < dtemp {
            return finish(k, Resolution::DiagonalThreshold, iterations, z.len());
        }

        if max_rest < k {
            return finish(dtemp, Resolution::WorstPair, iterations, z.len());
        }

        if conflicts_confined(&z, l, k) {
            return finish(k, Resolution::ConfinedThreshold, iterations, z.len());
        }

        // l > 0 here, otherwise every index would satisfy i >= l
        z.truncate(l);
        x.truncate(l);
        y.truncate(l);
        (l, dtemp) = argmax(&z);

        if z.len() == 1 {
            let d = dtemp.min(0.5 * x[l].max(y[l]));
            return finish(d, Resolution::TruncatedSingleton, iterations, 1);
        }
    }
}

fn finish(
    distance: f64,
    resolution: Resolution,
    iterations: usize,
    working_len: usize,
) -> BottleneckResult {
    debug!(distance, ?resolution, iterations, working_len, "bottleneck resolved");
    BottleneckResult {
        distance,
        resolution,
        iterations,
        working_len,
    }
}
