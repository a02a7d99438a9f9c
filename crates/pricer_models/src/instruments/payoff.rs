//! Option payoff definitions.
//!
//! This module provides the call/put vocabulary and its intrinsic
//! (immediate-exercise) value, used both for terminal lattice payoffs and for
//! the early-exercise comparison at interior nodes.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::InstrumentError;

/// Kind of vanilla option payoff.
///
/// # Variants
/// - `Call`: max(S - K, 0)
/// - `Put`: max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionKind;
///
/// assert_eq!(OptionKind::Call.intrinsic(110.0_f64, 100.0), 10.0);
/// assert_eq!(OptionKind::Put.intrinsic(110.0_f64, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Evaluates the intrinsic value for the given spot and strike.
    ///
    /// The result is never negative.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::OptionKind;
    ///
    /// let put = OptionKind::Put;
    /// assert_eq!(put.intrinsic(90.0_f64, 100.0), 10.0);
    /// ```
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        match self {
            OptionKind::Call => (spot - strike).max(T::zero()),
            OptionKind::Put => (strike - spot).max(T::zero()),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionKind::Put)
    }

    /// Lowercase name used for parsing and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            other => Err(InstrumentError::InvalidParameter {
                message: format!("unknown option kind '{}'", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_call_intrinsic() {
        assert_relative_eq!(OptionKind::Call.intrinsic(120.0_f64, 100.0), 20.0);
        assert_eq!(OptionKind::Call.intrinsic(80.0_f64, 100.0), 0.0);
        assert_eq!(OptionKind::Call.intrinsic(100.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_put_intrinsic() {
        assert_relative_eq!(OptionKind::Put.intrinsic(80.0_f64, 100.0), 20.0);
        assert_eq!(OptionKind::Put.intrinsic(120.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_intrinsic_f32() {
        assert!((OptionKind::Call.intrinsic(105.0_f32, 100.0) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_call_minus_put_is_forward_payoff() {
        for spot in [50.0_f64, 99.0, 100.0, 101.0, 150.0] {
            let diff = OptionKind::Call.intrinsic(spot, 100.0) - OptionKind::Put.intrinsic(spot, 100.0);
            assert_relative_eq!(diff, spot - 100.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_predicates() {
        assert!(OptionKind::Call.is_call());
        assert!(!OptionKind::Call.is_put());
        assert!(OptionKind::Put.is_put());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("CALL".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("p".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert_eq!(OptionKind::Put.to_string(), "put");
        assert!("straddle".parse::<OptionKind>().is_err());
    }
}
