//! Random Diagram Generation
//!
//! Draws death times uniformly from [low, high). Every generator is owned
//! by the caller; nothing here touches a process-wide RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

use crate::error::SamplingError;
use crate::topology::DeathTimes;

/// Configuration for sampling a pair of random diagrams
#[derive(Debug, Clone)]
pub struct SamplingConfig {
    /// Death times in the first diagram
    pub n_points_first: usize,
    /// Death times in the second diagram
    pub n_points_second: usize,
    /// Lower bound of the uniform range (inclusive)
    pub low: f64,
    /// Upper bound of the uniform range (exclusive)
    pub high: f64,
    /// Seed for reproducible runs; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            n_points_first: 100,
            n_points_second: 200,
            low: 0.0,
            high: 1000.0,
            seed: None,
        }
    }
}

impl SamplingConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Fresh generator for this configuration
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Sample both diagrams from `rng`
    pub fn sample_pair<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(DeathTimes, DeathTimes), SamplingError> {
        let first = uniform_death_times(self.n_points_first, self.low, self.high, rng)?;
        let second = uniform_death_times(self.n_points_second, self.low, self.high, rng)?;
        Ok((first, second))
    }
}

/// `n` death times drawn uniformly from [low, high).
pub fn uniform_death_times<R: Rng + ?Sized>(
    n: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<DeathTimes, SamplingError> {
    if !(low >= 0.0 && low < high && high.is_finite()) {
        return Err(SamplingError::InvalidRange { low, high });
    }
    let uniform =
        Uniform::new(low, high).map_err(|_| SamplingError::InvalidRange { low, high })?;
    Ok(DeathTimes::new((0..n).map(|_| uniform.sample(rng)).collect())?)
}
