//! Cox-Ross-Rubinstein recombining tree.
//!
//! The tree is implicit: only the per-step quantities are stored, node spots
//! are derived on demand in log space so deep levels neither accumulate
//! rounding error nor depend on an underflowed floor node.
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | `dt` | T / N |
//! | `u` | exp(σ·√dt) |
//! | `d` | 1 / u |
//! | `p` | (exp(r·dt) − d) / (u − d) |
//! | `disc` | exp(−r·dt) |

use pricer_core::types::PricingError;
use pricer_models::instruments::PricingParameters;

/// Per-step parameters of a CRR binomial tree.
///
/// # Examples
/// ```
/// use pricer_models::instruments::PricingParameters;
/// use pricer_pricing::lattice::CrrTree;
///
/// let params = PricingParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 100).unwrap();
/// let tree = CrrTree::new(&params).unwrap();
///
/// assert!((tree.up() * tree.down() - 1.0).abs() < 1e-15);
/// assert!(tree.probability() > 0.0 && tree.probability() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrrTree {
    steps: usize,
    dt: f64,
    log_up: f64,
    up: f64,
    down: f64,
    probability: f64,
    discount: f64,
}

impl CrrTree {
    /// Derives the tree from validated pricing parameters.
    ///
    /// # Errors
    /// `PricingError::ArbitrageViolation` when the risk-neutral probability
    /// falls outside `[0, 1]` or is not finite. Zero volatility always ends
    /// here because `u = d` and `p` is undefined.
    pub fn new(params: &PricingParameters) -> Result<Self, PricingError> {
        let steps = params.steps();
        let dt = params.maturity() / steps as f64;
        let log_up = params.volatility() * dt.sqrt();
        let up = log_up.exp();
        let down = 1.0 / up;
        let probability = ((params.rate() * dt).exp() - down) / (up - down);

        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(PricingError::ArbitrageViolation { probability });
        }

        Ok(Self {
            steps,
            dt,
            log_up,
            up,
            down,
            probability,
            discount: (-params.rate() * dt).exp(),
        })
    }

    /// Number of time steps N.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Step length in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Up factor u.
    #[inline]
    pub fn up(&self) -> f64 {
        self.up
    }

    /// Down factor d = 1/u.
    #[inline]
    pub fn down(&self) -> f64 {
        self.down
    }

    /// Risk-neutral probability of an up move.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// One-step discount factor.
    #[inline]
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Underlying price at node `j` of `level`: `spot·u^j·d^(level−j)`.
    ///
    /// Evaluated as `exp(ln(spot) + (2j − level)·σ√dt)`, independently per
    /// node.
    /// `j = 0` is the all-down node. Requires `j <= level`. Nodes beyond the
    /// `f64` range come back as `0` or `+∞`.
    #[inline]
    pub fn node_spot(&self, spot: f64, level: usize, j: usize) -> f64 {
        debug_assert!(j <= level);
        let moves = 2.0 * j as f64 - level as f64;
        (spot.ln() + moves * self.log_up).exp()
    }
}
