//! Property tests for the risk classifier
//!
//! These hold for every input, not just the fixtures: score range, level and
//! score agreement, day floors, confidence bounds and determinism.

mod common;

use common::{any_bands, any_reading, reading_in_bands};
use proptest::prelude::*;
use wearguard_core::{
    BandRisk, CostModel, Parameter, RiskClassifier, RiskLevel, RiskThresholds, SensorReading,
};

/// Nudge that moves a value past a boundary without reaching the next one.
const EPSILON: f64 = 1e-9;

#[test]
fn band_boundaries_for_every_parameter() {
    let thresholds = RiskThresholds::default();
    for parameter in Parameter::ALL {
        let band = thresholds[parameter];
        assert_eq!(band.risk(band.low()), BandRisk::Nominal, "{parameter} at low");
        assert_eq!(band.risk(band.low() + EPSILON), BandRisk::Elevated, "{parameter} past low");
        assert_eq!(band.risk(band.medium()), BandRisk::Elevated, "{parameter} at medium");
        assert_eq!(band.risk(band.medium() + EPSILON), BandRisk::Warning, "{parameter} past medium");
        assert_eq!(band.risk(band.high()), BandRisk::Warning, "{parameter} at high");
        assert_eq!(band.risk(band.high() + EPSILON), BandRisk::Critical, "{parameter} past high");
    }
}

proptest! {
    #[test]
    fn score_stays_in_unit_interval(reading in any_reading()) {
        let assessment = RiskClassifier::default().assess(&reading);
        prop_assert!((0.0..=1.0).contains(&assessment.risk_score));
        prop_assert!(assessment.risk_score >= 0.2);
    }

    #[test]
    fn level_agrees_with_unrounded_score(reading in any_reading()) {
        let classifier = RiskClassifier::default();
        let overall = classifier.parameter_risks(&reading).overall();
        let level = classifier.assess(&reading).failure_risk;

        let expected = if overall >= 0.8 {
            RiskLevel::High
        } else if overall >= 0.5 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };
        prop_assert_eq!(level, expected);
    }

    #[test]
    fn days_respect_level_floors(reading in any_reading()) {
        let assessment = RiskClassifier::default().assess(&reading);
        let floor = match assessment.failure_risk {
            RiskLevel::High => 1,
            RiskLevel::Medium => 5,
            RiskLevel::Low => 30,
        };
        prop_assert!(assessment.predicted_days_to_failure >= floor);
    }

    #[test]
    fn confidence_is_bounded(reading in any_reading()) {
        let assessment = RiskClassifier::default().assess(&reading);
        prop_assert!((60..=95).contains(&assessment.confidence));
    }

    #[test]
    fn assessment_is_deterministic(reading in any_reading()) {
        let classifier = RiskClassifier::default();
        prop_assert_eq!(classifier.assess(&reading), classifier.assess(&reading));
    }

    #[test]
    fn recommendations_depend_only_on_level(a in any_bands(), b in any_bands()) {
        let classifier = RiskClassifier::default();
        let first = classifier.assess(&reading_in_bands("a", a));
        let second = classifier.assess(&reading_in_bands("b", b));

        if first.failure_risk == second.failure_risk {
            prop_assert_eq!(first.recommendations, second.recommendations);
        }
    }

    #[test]
    fn reason_names_exactly_triggered_parameters(bands in any_bands()) {
        let assessment = RiskClassifier::default().assess(&reading_in_bands("r", bands));
        let prefixes = ["Vibration", "Temperature", "Current", "Pressure"];

        for (band, prefix) in bands.iter().zip(prefixes) {
            let named = assessment.reason.contains(prefix);
            prop_assert_eq!(named, *band >= BandRisk::Warning, "{} in {:?}", prefix, band);
        }
    }

    #[test]
    fn non_finite_values_never_leak(
        v in prop::sample::select(vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1.7]),
        t in prop::sample::select(vec![f64::NAN, f64::INFINITY, 85.0]),
    ) {
        let reading = SensorReading::new("nan").with_vibration(v).with_temperature(t);
        let assessment = RiskClassifier::default().assess(&reading);

        prop_assert!(assessment.risk_score.is_finite());
        prop_assert!(assessment.predicted_days_to_failure >= 1);
    }

    #[test]
    fn assessed_days_always_yield_planned_savings(reading in any_reading()) {
        let assessment = RiskClassifier::default().assess(&reading);
        let estimate = assessment.estimate_savings(&CostModel::default());
        prop_assert!(estimate.is_planned());
        prop_assert_eq!(estimate.savings(), 8000.0);
    }
}
