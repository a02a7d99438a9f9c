//! Analytical comparison tests for lattice pricing.
//!
//! European lattice prices converge to Black-Scholes as the step count grows.
//!
//! # Test Categories
//!
//! 1. **Reference Scenario**: S = K = 100, r = 5%, σ = 20%, T = 1
//! 2. **Convergence Tests**: Price error decreases with step count
//! 3. **Greeks**: Lattice delta close to the analytical delta

use approx::assert_relative_eq;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{ExerciseStyle, OptionKind, PricingParameters};
use pricer_pricing::greeks::sensitivities;
use pricer_pricing::lattice::price;

/// Standard test parameters for comparison tests.
fn standard_params(steps: usize) -> PricingParameters {
    PricingParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, steps).unwrap()
}

fn black_scholes(params: &PricingParameters, kind: OptionKind) -> f64 {
    BlackScholes::from_params(params)
        .unwrap()
        .price(kind, params.strike(), params.maturity())
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_reference_call_100_steps() {
    let params = standard_params(100);
    let lattice = price(&params, OptionKind::Call, ExerciseStyle::European).unwrap();

    assert_relative_eq!(lattice, 10.4306116622, epsilon = 1e-8);
    // Within a few cents of Black-Scholes (≈ 10.4506)
    assert!((lattice - black_scholes(&params, OptionKind::Call)).abs() < 0.025);
}

#[test]
fn test_reference_put_100_steps() {
    let params = standard_params(100);
    let european = price(&params, OptionKind::Put, ExerciseStyle::European).unwrap();
    let american = price(&params, OptionKind::Put, ExerciseStyle::American).unwrap();

    assert_relative_eq!(european, 5.5535541123, epsilon = 1e-8);
    assert_relative_eq!(american, 6.0823544091, epsilon = 1e-8);
    assert!((european - black_scholes(&params, OptionKind::Put)).abs() < 0.025);
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_european_call_convergence_to_black_scholes() {
    let reference = black_scholes(&standard_params(1), OptionKind::Call);

    let errors: Vec<f64> = [50, 500, 2000]
        .iter()
        .map(|&steps| {
            let lattice = price(&standard_params(steps), OptionKind::Call, ExerciseStyle::European)
                .unwrap();
            (lattice - reference).abs()
        })
        .collect();

    assert!(errors[0] > errors[1], "errors not decreasing: {:?}", errors);
    assert!(errors[1] > errors[2], "errors not decreasing: {:?}", errors);
    assert!(errors[2] < 2e-3, "N=2000 error too large: {}", errors[2]);
}

#[test]
fn test_european_put_convergence_across_strikes() {
    for strike in [80.0, 100.0, 120.0] {
        let params = PricingParameters::new(100.0, strike, 0.03, 0.25, 0.5, 1000).unwrap();
        let lattice = price(&params, OptionKind::Put, ExerciseStyle::European).unwrap();
        let analytical = black_scholes(&params, OptionKind::Put);
        assert!(
            (lattice - analytical).abs() < 1e-2,
            "K={}: lattice {} vs analytical {}",
            strike,
            lattice,
            analytical
        );
    }
}

// ============================================================================
// Greeks
// ============================================================================

#[test]
fn test_lattice_delta_close_to_analytical() {
    let params = standard_params(500);
    let bs = BlackScholes::from_params(&params).unwrap();

    for kind in [OptionKind::Call, OptionKind::Put] {
        let lattice = sensitivities(&params, kind).unwrap();
        let analytical = bs.delta(kind, params.strike(), params.maturity());
        assert!(
            (lattice.delta - analytical).abs() < 5e-3,
            "{}: lattice delta {} vs analytical {}",
            kind,
            lattice.delta,
            analytical
        );
    }
}
