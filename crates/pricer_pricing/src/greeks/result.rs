//! Sensitivity result type.

/// Finite-difference delta and gamma of a lattice price.
///
/// - `delta`: ∂V/∂S, central difference `(V_up − V_down) / 2h`
/// - `gamma`: ∂²V/∂S², three-point formula `(V_up − 2V + V_down) / h²`
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::greeks::SensitivityResult;
///
/// let result = SensitivityResult { delta: 0.64, gamma: 0.019 };
/// assert!(result.delta > 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityResult {
    /// Delta: ∂V/∂S (sensitivity to spot price).
    pub delta: f64,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot).
    pub gamma: f64,
}

impl SensitivityResult {
    /// Builds the result from the base and bumped valuations.
    ///
    /// # Arguments
    /// * `base` - V at the unbumped spot
    /// * `up` - V at `spot + h`
    /// * `down` - V at `spot − h`
    /// * `bump` - Absolute bump `h`
    #[inline]
    pub fn from_bumps(base: f64, up: f64, down: f64, bump: f64) -> Self {
        Self {
            delta: (up - down) / (2.0 * bump),
            gamma: (up - 2.0 * base + down) / (bump * bump),
        }
    }
}
