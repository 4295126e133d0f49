//! Tests for the log-ratio and regression primitives

use approx::assert_relative_eq;
use degradation::kinetics::{fit_linear, ln_ratio, KineticsError};

#[test]
fn test_ln_ratio_reference_scenario() {
    let out = ln_ratio(100.0, &[100.0, 50.0, 25.0]);

    assert_eq!(out[0], 0.0);
    assert_relative_eq!(out[1], 0.6931, epsilon = 1e-4);
    assert_relative_eq!(out[2], 1.3863, epsilon = 1e-4);
}

#[test]
fn test_ln_ratio_equal_to_reference_is_zero() {
    let out = ln_ratio(0.734, &[0.5, 0.734, 0.2]);
    assert_eq!(out[1], 0.0);
}

#[test]
fn test_ln_ratio_zero_absorbance_is_infinite() {
    let out = ln_ratio(0.8, &[0.0]);
    assert_eq!(out[0], f64::INFINITY);
}

#[test]
fn test_fit_linear_reference_scenario() {
    let fit = fit_linear(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 3.0]).expect("fit should succeed");
    assert_eq!(fit.slope, 1.0);
    assert_eq!(fit.intercept, 0.0);
}

#[test]
fn test_fit_linear_identical_times() {
    let result = fit_linear(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]);
    assert!(matches!(
        result,
        Err(KineticsError::DegenerateRegression { .. })
    ));
}

#[test]
fn test_fit_linear_recovers_line() {
    // y = 0.042 t - 0.013 over irregular sampling
    let t = [0.0, 0.25, 1.0, 3.5, 6.0, 24.0];
    let y: Vec<f64> = t.iter().map(|t| 0.042 * t - 0.013).collect();

    let fit = fit_linear(&t, &y).unwrap();
    assert_relative_eq!(fit.slope, 0.042, epsilon = 1e-10);
    assert_relative_eq!(fit.intercept, -0.013, epsilon = 1e-10);
    assert_relative_eq!(fit.predict(10.0), 0.407, epsilon = 1e-10);
}

#[test]
fn test_chained_primitives_give_rate_constant() {
    // A = 2.0 * e^(-0.3 t)
    let t: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];
    let a: Vec<f64> = t.iter().map(|&t| 2.0 * (-0.3 * t).exp()).collect();

    let fit = fit_linear(&t, &ln_ratio(a[0], &a)).unwrap();
    assert_relative_eq!(fit.slope, 0.3, epsilon = 1e-10);
    assert_relative_eq!(fit.intercept, 0.0, epsilon = 1e-10);
}

#[test]
fn test_degenerate_error_message() {
    let err = fit_linear(&[1.0, 1.0], &[0.0, 1.0]).unwrap_err();
    assert!(err.to_string().starts_with("Degenerate regression"));
}
