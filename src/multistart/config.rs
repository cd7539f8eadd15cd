//! Multi-start configuration.

use serde::{Deserialize, Serialize};

use crate::error::{SavingsError, SavingsResult};

/// Configuration for the biased-randomized multi-start driver.
///
/// The run stops at whichever limit is reached first: the wall-clock
/// budget or the number of randomized passes.
///
/// # Examples
///
/// ```
/// use u_savings::multistart::MultiStartConfig;
///
/// let config = MultiStartConfig::default()
///     .with_betas(0.1, 0.3)
///     .with_time_limit_ms(500)
///     .with_max_iterations(1000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
///
/// assert!(MultiStartConfig::default().with_betas(0.4, 0.2).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiStartConfig {
    /// Lower bound of the geometric selection parameter, in (0, 1).
    pub beta1: f64,

    /// Upper bound of the geometric selection parameter, in (0, 1).
    pub beta2: f64,

    /// Wall-clock budget for randomized passes in milliseconds.
    ///
    /// Checked before each pass; a pass that has started always completes.
    /// `None` disables time-based termination.
    pub time_limit_ms: Option<u64>,

    /// Maximum number of randomized passes. 0 = no limit.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. Sequential runs with a fixed seed and no
    /// time limit are fully deterministic.
    pub seed: Option<u64>,

    /// Whether to run randomized passes on rayon worker threads.
    ///
    /// Only effective with the `parallel` feature.
    pub parallel: bool,
}

impl Default for MultiStartConfig {
    fn default() -> Self {
        Self {
            beta1: 0.05,
            beta2: 0.25,
            time_limit_ms: Some(1000),
            max_iterations: 0,
            seed: None,
            parallel: false,
        }
    }
}

impl MultiStartConfig {
    /// Sets both bounds of the geometric parameter.
    pub fn with_betas(mut self, beta1: f64, beta2: f64) -> Self {
        self.beta1 = beta1;
        self.beta2 = beta2;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Removes the wall-clock budget.
    pub fn without_time_limit(mut self) -> Self {
        self.time_limit_ms = None;
        self
    }

    /// Sets the maximum number of randomized passes.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel passes.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SavingsResult<()> {
        for (name, beta) in [("beta1", self.beta1), ("beta2", self.beta2)] {
            if !(beta > 0.0 && beta < 1.0) {
                return Err(SavingsError::InvalidConfig(format!(
                    "{name} must be in (0, 1), got {beta}"
                )));
            }
        }
        if self.beta1 > self.beta2 {
            return Err(SavingsError::InvalidConfig(format!(
                "beta1 ({}) must not exceed beta2 ({})",
                self.beta1, self.beta2
            )));
        }
        if self.time_limit_ms.is_none() && self.max_iterations == 0 {
            return Err(SavingsError::InvalidConfig(
                "either a time limit or an iteration limit is required".into(),
            ));
        }
        Ok(())
    }
}
