//! Tests for single-series analysis through the public API

use approx::assert_relative_eq;
use degradation::kinetics::{analyze_spectra, KineticsOptions};
use degradation::{DegradationError, DegradationSeries, Kinetics, KineticsError, Spectrum};

/// Methylene blue photodegradation, peak absorbance at 664 nm, hourly scans
fn methylene_blue() -> DegradationSeries {
    DegradationSeries::builder("methylene_blue")
        .measurement(0.0, 1.250)
        .measurement(1.0, 0.936)
        .measurement(2.0, 0.702)
        .measurement(3.0, 0.525)
        .measurement(4.0, 0.394)
        .build()
}

/// Gaussian band centred at 664 nm with the given height
fn scan(height: f64) -> Spectrum {
    let wavelengths: Vec<f64> = (0..=40).map(|i| 600.0 + 4.0 * i as f64).collect();
    let absorbance = wavelengths
        .iter()
        .map(|w| height * (-((w - 664.0) / 30.0).powi(2)).exp())
        .collect();
    Spectrum::new(wavelengths, absorbance).unwrap()
}

#[test]
fn test_methylene_blue_kinetics() {
    let result = methylene_blue()
        .kinetics(&KineticsOptions::default())
        .expect("analysis should succeed");

    // Roughly 25% lost per hour
    assert_relative_eq!(result.rate_constant(), 0.288, epsilon = 0.005);
    assert!(result.fit.intercept.abs() < 0.01);
    assert_relative_eq!(result.half_life, 2.4, epsilon = 0.05);
    assert_relative_eq!(
        result.final_degradation_pct().unwrap(),
        68.48,
        epsilon = 1e-9
    );
    assert_eq!(result.sample_id, "methylene_blue");
    assert_eq!(result.time_unit, "h");
}

#[test]
fn test_analysis_from_spectra() {
    let spectra: Vec<Spectrum> = [1.0, 0.8, 0.64, 0.512].iter().map(|&h| scan(h)).collect();
    let options = KineticsOptions::default()
        .with_time_step(30.0)
        .with_time_unit("min");

    let result = analyze_spectra("rhodamine_b", &spectra, &options).unwrap();

    assert_eq!(result.times, vec![0.0, 30.0, 60.0, 90.0]);
    assert_relative_eq!(result.rate_constant(), 1.25f64.ln() / 30.0, epsilon = 1e-10);
    assert_relative_eq!(result.relative_concentration[3], 0.512, epsilon = 1e-12);
}

#[test]
fn test_analysis_from_spectra_rejects_bad_time_step() {
    let spectra = vec![scan(1.0), scan(0.5)];
    let options = KineticsOptions::default().with_time_step(0.0);

    assert!(matches!(
        analyze_spectra("x", &spectra, &options),
        Err(DegradationError::Kinetics(KineticsError::InvalidParameter { .. }))
    ));
}

#[test]
fn test_analysis_from_spectra_reports_unusable_scan() {
    let blank = Spectrum::new(vec![664.0], vec![f64::NAN]).unwrap();
    let spectra = vec![scan(1.0), blank];

    assert!(matches!(
        analyze_spectra("x", &spectra, &KineticsOptions::default()),
        Err(DegradationError::Spectrum(_))
    ));
}

#[test]
fn test_single_measurement_is_insufficient() {
    let series = DegradationSeries::builder("x").measurement(0.0, 1.0).build();
    assert_eq!(
        series.kinetics(&KineticsOptions::default()),
        Err(KineticsError::InsufficientData { n: 1, required: 2 })
    );
}

#[test]
fn test_result_serializes() {
    let result = methylene_blue()
        .kinetics(&KineticsOptions::default())
        .unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"sample_id\":\"methylene_blue\""));
    assert!(json.contains("\"fit\":{\"slope\":"));
}

#[test]
fn test_options_from_json() {
    let options =
        KineticsOptions::from_json(r#"{ "reference": { "Value": 2.5 }, "time_unit": "min" }"#)
            .unwrap();
    let result = methylene_blue().kinetics(&options).unwrap();
    assert_eq!(result.reference, 2.5);
    assert_eq!(result.time_unit, "min");

    let err: DegradationError = KineticsOptions::from_json("{ not json").unwrap_err().into();
    assert!(matches!(err, DegradationError::Config(_)));
}
