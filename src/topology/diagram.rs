//! Degenerate Persistence Diagrams
//!
//! In dimension zero of a Vietoris-Rips filtration every connected
//! component is born at ε = 0, so each point (0, d) of the diagram is
//! fully described by its death time d. A diagram is then a finite
//! multiset of nonnegative reals.
//!
//! ## Interpretation
//!
//! - Large d: components that stay separated up to a large scale
//! - Small d: near-duplicate points merging almost immediately
//! - The diagonal projection of (0, d) is (d/2, d/2), at L∞ distance d/2

use ndarray::ArrayView1;

use crate::error::DiagramError;

/// Death times of a persistence diagram whose features are all born at 0.
///
/// Values are validated on construction: the diagram is non-empty and
/// every death time is finite and nonnegative. Input order is kept but
/// carries no meaning; see [`DeathTimes::same_multiset`].
#[derive(Debug, Clone)]
pub struct DeathTimes {
    values: Vec<f64>,
}

impl DeathTimes {
    pub fn new(values: Vec<f64>) -> Result<Self, DiagramError> {
        if values.is_empty() {
            return Err(DiagramError::Empty);
        }

        let mut values = values;
        for (index, value) in values.iter_mut().enumerate() {
            if !value.is_finite() || *value < 0.0 {
                return Err(DiagramError::InvalidValue { index, value: *value });
            }
            // -0.0 -> 0.0
            *value = value.abs();
        }

        Ok(Self { values })
    }

    pub fn from_slice(values: &[f64]) -> Result<Self, DiagramError> {
        Self::new(values.to_vec())
    }

    pub fn from_array(values: ArrayView1<f64>) -> Result<Self, DiagramError> {
        Self::new(values.iter().copied().collect())
    }

    /// Build from (birth, death) intervals of dimension zero.
    ///
    /// Essential intervals (death = +∞) are skipped. Any other death time
    /// must be finite and nonnegative, and its interval must be born at 0.
    /// Errors report the position in `intervals`.
    pub fn from_intervals<I>(intervals: I) -> Result<Self, DiagramError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut deaths = Vec::new();
        for (index, (birth, death)) in intervals.into_iter().enumerate() {
            if death == f64::INFINITY {
                continue;
            }
            if !death.is_finite() || death < 0.0 {
                return Err(DiagramError::InvalidValue { index, value: death });
            }
            if birth != 0.0 {
                return Err(DiagramError::NonZeroBirth { index, birth });
            }
            deaths.push(death);
        }
        Self::new(deaths)
    }

    /// Number of points (with multiplicity)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the diagram has no points
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Largest death time
    pub fn max_death(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Private working copy sorted in descending order.
    pub fn sorted_descending(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_unstable_by(|a, b| b.total_cmp(a));
        sorted
    }

    /// Multiset equality, ignoring input order.
    pub fn same_multiset(&self, other: &DeathTimes) -> bool {
        self.len() == other.len() && self.sorted_descending() == other.sorted_descending()
    }
}

impl TryFrom<Vec<f64>> for DeathTimes {
    type Error = DiagramError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for DeathTimes {
    type Error = DiagramError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rejects_empty() {
        assert_eq!(DeathTimes::new(vec![]).unwrap_err(), DiagramError::Empty);
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        let err = DeathTimes::from_slice(&[1.0, -0.5]).unwrap_err();
        assert_eq!(err, DiagramError::InvalidValue { index: 1, value: -0.5 });

        assert!(DeathTimes::from_slice(&[f64::NAN]).is_err());
        assert!(DeathTimes::from_slice(&[2.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_negative_zero_is_canonicalized() {
        let dt = DeathTimes::from_slice(&[-0.0, 1.0]).unwrap();
        assert!(dt.values()[0].is_sign_positive());
    }

    #[test]
    fn test_from_array_and_sorting() {
        let dt = DeathTimes::from_array(array![3.0, 7.5, 0.0, 3.0].view()).unwrap();
        assert_eq!(dt.len(), 4);
        assert_eq!(dt.sorted_descending(), vec![7.5, 3.0, 3.0, 0.0]);
        assert_eq!(dt.max_death(), 7.5);
        // Stored order untouched
        assert_eq!(dt.values(), &[3.0, 7.5, 0.0, 3.0]);
    }

    #[test]
    fn test_from_intervals_skips_essential() {
        let intervals = vec![(0.0, 1.5), (0.0, f64::INFINITY), (0.0, 0.25)];
        let dt = DeathTimes::from_intervals(intervals).unwrap();
        assert_eq!(dt.values(), &[1.5, 0.25]);
    }

    #[test]
    fn test_from_intervals_rejects_late_birth() {
        let err = DeathTimes::from_intervals(vec![(0.0, 1.0), (0.3, 2.0)]).unwrap_err();
        assert_eq!(err, DiagramError::NonZeroBirth { index: 1, birth: 0.3 });
    }

    #[test]
    fn test_from_intervals_reports_original_index() {
        let intervals = vec![(0.0, f64::INFINITY), (0.0, -1.0)];
        let err = DeathTimes::from_intervals(intervals).unwrap_err();
        assert_eq!(err, DiagramError::InvalidValue { index: 1, value: -1.0 });
    }

    #[test]
    fn test_from_intervals_rejects_negative_infinity() {
        let intervals = vec![(0.0, 1.0), (0.0, f64::NEG_INFINITY)];
        let err = DeathTimes::from_intervals(intervals).unwrap_err();
        assert_eq!(
            err,
            DiagramError::InvalidValue { index: 1, value: f64::NEG_INFINITY }
        );

        let err = DeathTimes::from_intervals(vec![(0.0, f64::NAN)]).unwrap_err();
        assert!(matches!(err, DiagramError::InvalidValue { index: 0, .. }));
    }

    #[test]
    fn test_only_essential_intervals_is_empty() {
        let err = DeathTimes::from_intervals(vec![(0.0, f64::INFINITY)]).unwrap_err();
        assert_eq!(err, DiagramError::Empty);
    }

    #[test]
    fn test_same_multiset() {
        let a = DeathTimes::from_slice(&[1.0, 2.0, 2.0]).unwrap();
        let b = DeathTimes::from_slice(&[2.0, 1.0, 2.0]).unwrap();
        let c = DeathTimes::from_slice(&[1.0, 1.0, 2.0]).unwrap();
        assert!(a.same_multiset(&b));
        assert!(!a.same_multiset(&c));
    }
}
