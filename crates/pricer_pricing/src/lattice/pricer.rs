//! Backward induction over the CRR tree.
//!
//! Values are rolled back in a single buffer of `steps + 1` nodes: level `i`
//! overwrites slots `0..=i` of level `i + 1` in place, so no per-level
//! allocation happens. Node spots come from [`CrrTree::node_spot`] one node
//! at a time; interior spots are only evaluated for American exercise.

use pricer_core::types::PricingError;
use pricer_models::instruments::{ExerciseStyle, OptionKind, PricingParameters, VanillaOption};

use super::tree::CrrTree;

/// Prices a vanilla option on a CRR binomial tree.
///
/// # Arguments
/// * `params` - Validated market and contract inputs
/// * `kind` - Call or put
/// * `style` - European (exercise at maturity only) or American
///
/// # Errors
/// - `PricingError::ArbitrageViolation` if the risk-neutral probability is
///   outside `[0, 1]` (including zero volatility)
/// - `PricingError::NumericalInstability` if the rollback produces a
///   non-finite value, e.g. when the top terminal node overflows `f64`
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ExerciseStyle, OptionKind, PricingParameters};
/// use pricer_pricing::lattice::price;
///
/// let params = PricingParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 100).unwrap();
/// let call = price(&params, OptionKind::Call, ExerciseStyle::European).unwrap();
/// assert!((call - 10.4306).abs() < 1e-4);
/// ```
pub fn price(
    params: &PricingParameters,
    kind: OptionKind,
    style: ExerciseStyle,
) -> Result<f64, PricingError> {
    let tree = CrrTree::new(params)?;
    let value = roll_back(&tree, params.spot(), params.strike(), kind, style);

    if !value.is_finite() {
        return Err(PricingError::NumericalInstability(format!(
            "lattice rollback produced {} after {} steps",
            value,
            tree.steps()
        )));
    }

    Ok(value)
}

/// Prices from raw scalar inputs, validating them first.
///
/// # Errors
/// `PricingError::InvalidInput` for any rejected input, otherwise as
/// [`price`].
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ExerciseStyle, OptionKind};
/// use pricer_pricing::lattice::crr_price;
///
/// let put = crr_price(100.0, 100.0, 0.05, 0.2, 1.0, 100, OptionKind::Put, ExerciseStyle::American)
///     .unwrap();
/// assert!(put > 5.5);
///
/// assert!(crr_price(-1.0, 100.0, 0.05, 0.2, 1.0, 100, OptionKind::Put, ExerciseStyle::American)
///     .is_err());
/// ```
#[allow(clippy::too_many_arguments)]
pub fn crr_price(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    steps: usize,
    kind: OptionKind,
    style: ExerciseStyle,
) -> Result<f64, PricingError> {
    let params = PricingParameters::new(spot, strike, rate, volatility, maturity, steps)?;
    price(&params, kind, style)
}

fn roll_back(
    tree: &CrrTree,
    spot: f64,
    strike: f64,
    kind: OptionKind,
    style: ExerciseStyle,
) -> f64 {
    let steps = tree.steps();
    let p = tree.probability();
    let disc = tree.discount();
    let early_exercise = style.allows_early_exercise();

    let mut values: Vec<f64> = (0..=steps)
        .map(|j| kind.intrinsic(tree.node_spot(spot, steps, j), strike))
        .collect();

    for i in (0..steps).rev() {
        for j in 0..=i {
            let hold = disc * (p * values[j + 1] + (1.0 - p) * values[j]);
            values[j] = if early_exercise {
                hold.max(kind.intrinsic(tree.node_spot(spot, i, j), strike))
            } else {
                hold
            };
        }
    }

    values[0]
}

/// Lattice pricing engine with a default exercise style.
///
/// A thin wrapper over [`price`] for callers that price many contracts
/// under the same exercise convention.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ExerciseStyle, OptionKind, PricingParameters};
/// use pricer_pricing::lattice::LatticePricer;
///
/// let pricer = LatticePricer::new(ExerciseStyle::American);
/// let params = PricingParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 200).unwrap();
///
/// let american = pricer.price(&params, OptionKind::Put).unwrap();
/// let european = LatticePricer::new(ExerciseStyle::European)
///     .price(&params, OptionKind::Put)
///     .unwrap();
/// assert!(american >= european);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatticePricer {
    style: ExerciseStyle,
}

impl LatticePricer {
    /// Creates a pricer using `style` by default.
    pub fn new(style: ExerciseStyle) -> Self {
        Self { style }
    }

    /// Returns the default exercise style.
    #[inline]
    pub fn style(&self) -> ExerciseStyle {
        self.style
    }

    /// Prices with the default exercise style.
    pub fn price(&self, params: &PricingParameters, kind: OptionKind) -> Result<f64, PricingError> {
        price(params, kind, self.style)
    }

    /// Prices an option contract.
    ///
    /// The contract carries its own exercise style, which takes precedence
    /// over the pricer default.
    pub fn price_option(&self, option: &VanillaOption) -> Result<f64, PricingError> {
        price(option.params(), option.kind(), option.exercise_style())
    }
}
