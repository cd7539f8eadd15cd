//! Edge selection: greedy or biased-randomized.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Strategy for picking the next edge from the savings list.
///
/// # Examples
///
/// ```
/// use u_savings::constructive::EdgeSelector;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// assert_eq!(EdgeSelector::Greedy.select(10, &mut rng), 0);
///
/// let biased = EdgeSelector::biased(0.1, 0.3);
/// assert!(biased.select(10, &mut rng) < 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EdgeSelector {
    /// Always the highest-savings candidate.
    Greedy,
    /// Geometric distribution over candidate ranks with parameter drawn
    /// uniformly from `[beta1, beta2]`.
    Biased {
        /// Lower bound of the geometric parameter, in (0, 1).
        beta1: f64,
        /// Upper bound of the geometric parameter, in (0, 1).
        beta2: f64,
    },
}

impl EdgeSelector {
    /// Shorthand for [`EdgeSelector::Biased`].
    pub fn biased(beta1: f64, beta2: f64) -> Self {
        EdgeSelector::Biased { beta1, beta2 }
    }

    /// Picks an index in `0..len`. Returns 0 for an empty list.
    pub fn select<R: Rng>(&self, len: usize, rng: &mut R) -> usize {
        match *self {
            EdgeSelector::Greedy => 0,
            EdgeSelector::Biased { beta1, beta2 } => {
                let beta = beta1 + rng.random::<f64>() * (beta2 - beta1);
                // (0, 1]: keeps ln(u) finite
                let u = 1.0 - rng.random::<f64>();
                geometric_index(beta, u, len)
            }
        }
    }
}

/// `floor(ln(u) / ln(1 - beta)) mod len`.
///
/// Favors small indices without excluding any. Returns 0 when `len == 0`.
///
/// # Examples
///
/// ```
/// use u_savings::constructive::geometric_index;
///
/// // ln(0.2) / ln(0.5) = 2.32
/// assert_eq!(geometric_index(0.5, 0.2, 10), 2);
/// assert_eq!(geometric_index(0.5, 0.2, 2), 0);
/// assert_eq!(geometric_index(0.5, 1.0, 10), 0);
/// ```
pub fn geometric_index(beta: f64, u: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let raw = (u.ln() / (1.0 - beta).ln()).floor();
    // float-to-int casts saturate, so huge draws still land in range
    (raw as usize) % len
}
