//! Rule-Based Risk Classifier
//!
//! ## Overview
//!
//! The classifier converts one [`SensorReading`] into a [`RiskAssessment`]
//! using nothing but the injected [`RiskThresholds`]. It holds no other
//! state, so `assess` is a pure function of its input.
//!
//! ## Scoring Pipeline
//!
//! ```text
//! reading ──sanitize──► values ──band lookup──► band risks (0.2/0.5/0.8/1.0)
//!                                                   │
//!                            weighted sum (0.30/0.25/0.25/0.20)
//!                                                   │
//!                                           overall score (unrounded)
//!                         ┌──────────────┬──────────┴─────────┬──────────────┐
//!                       level        days-to-failure     confidence      risk_score
//!                                                                      (rounded, 2dp)
//! ```
//!
//! Level, days and confidence are all derived from the *unrounded* score.
//! Rounding only happens for the published `risk_score`, so a blend such as
//! `0.7999999999999999` is reported as `0.8` but still classified Medium.
//!
//! ## Non-Finite Input
//!
//! NaN and infinite readings are replaced with 0 (and logged) before band
//! lookup. A zero reading lands in the nominal band for any sensible
//! configuration, so a dead sensor never inflates risk on its own.
//!
//! ## Example
//!
//! ```
//! use wearguard_core::{RiskClassifier, RiskLevel, RiskThresholds, SensorReading};
//!
//! let classifier = RiskClassifier::new(RiskThresholds::default());
//! let reading = SensorReading::new("press-04")
//!     .with_vibration(2.6)
//!     .with_temperature(95.0)
//!     .with_current(17.2)
//!     .with_pressure(3.4);
//!
//! let assessment = classifier.assess(&reading);
//! assert_eq!(assessment.failure_risk, RiskLevel::High);
//! assert_eq!(assessment.predicted_days_to_failure, 1);
//! assert_eq!(assessment.confidence, 95);
//! assert_eq!(
//!     assessment.reason,
//!     "Vibration exceeded 2 g and Temperature rose above 90°C and \
//!      Current consumption above 16 A and Pressure exceeded 3 bar"
//! );
//! ```

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::ops::Index;

use crate::{
    assessment::RiskAssessment,
    constants::scoring::{CONFIDENCE_MAX_PCT, CONFIDENCE_MIN_PCT, RISK_SCORE_SCALE},
    parameter::{Parameter, ParameterTable, PARAMETER_COUNT},
    reading::SensorReading,
    risk::{BandRisk, RiskLevel},
    thresholds::RiskThresholds,
};

/// Reason reported when no parameter reaches the warning band
pub const NOMINAL_REASON: &str = "All parameters within normal operating ranges";

/// Separator between reason clauses
pub const REASON_SEPARATOR: &str = " and ";

/// Band risk of every parameter for one reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRisks {
    risks: ParameterTable<BandRisk>,
}

impl ParameterRisks {
    /// Wrap a table of band risks
    pub fn new(risks: ParameterTable<BandRisk>) -> Self {
        Self { risks }
    }

    /// Weighted overall score, unrounded
    ///
    /// Terms are added in canonical order starting from the vibration term,
    /// which keeps the floating-point result identical to
    /// `0.30*v + 0.25*t + 0.25*c + 0.20*p` evaluated left to right.
    pub fn overall(&self) -> f64 {
        self.risks
            .iter()
            .map(|(parameter, risk)| risk.value() * parameter.weight())
            .fold(0.0, |acc, term| acc + term)
    }

    /// Parameters in the warning or critical band, canonical order
    pub fn triggered(&self) -> heapless::Vec<Parameter, PARAMETER_COUNT> {
        self.risks
            .iter()
            .filter(|(_, risk)| risk.is_triggered())
            .map(|(parameter, _)| parameter)
            .collect()
    }

    /// Iterate `(parameter, band risk)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &BandRisk)> {
        self.risks.iter()
    }
}

impl Index<Parameter> for ParameterRisks {
    type Output = BandRisk;

    fn index(&self, parameter: Parameter) -> &BandRisk {
        &self.risks[parameter]
    }
}

/// Converts sensor readings into risk assessments
#[derive(Debug, Clone, Default)]
pub struct RiskClassifier {
    thresholds: RiskThresholds,
}

impl RiskClassifier {
    /// Create a classifier over validated thresholds
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds this classifier was built with
    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Band risk of every parameter
    ///
    /// Expects finite values; [`assess`](Self::assess) sanitizes first.
    pub fn parameter_risks(&self, reading: &SensorReading) -> ParameterRisks {
        ParameterRisks::new(ParameterTable::from_fn(|parameter| {
            self.thresholds[parameter].risk(reading.value(parameter))
        }))
    }

    /// Assess one reading
    pub fn assess(&self, reading: &SensorReading) -> RiskAssessment {
        let (reading, _replaced) = reading.sanitized();
        let risks = self.parameter_risks(&reading);

        let overall = risks.overall();
        let level = RiskLevel::from_score(overall);
        let days = level.days_to_failure(overall);

        let assessment = RiskAssessment {
            machine_id: reading.machine_id,
            failure_risk: level,
            risk_score: round_score(overall),
            reason: self.reason(&risks),
            predicted_days_to_failure: days,
            confidence: confidence(overall),
            recommendations: level
                .recommendations()
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>(),
        };

        log_debug!(
            "machine {}: score {:.4} -> {} risk, {} days, confidence {}%",
            assessment.machine_id,
            overall,
            level,
            days,
            assessment.confidence
        );

        assessment
    }

    /// Human-readable justification naming every triggered parameter
    pub fn reason(&self, risks: &ParameterRisks) -> String {
        let triggered = risks.triggered();
        if triggered.is_empty() {
            return NOMINAL_REASON.to_string();
        }

        triggered
            .iter()
            .map(|&parameter| reason_clause(parameter, self.thresholds[parameter].high()))
            .collect::<Vec<_>>()
            .join(REASON_SEPARATOR)
    }
}

fn reason_clause(parameter: Parameter, high: f64) -> String {
    match parameter {
        Parameter::Vibration => format!("Vibration exceeded {} {}", high, parameter.unit()),
        Parameter::Temperature => format!("Temperature rose above {}{}", high, parameter.unit()),
        Parameter::Current => {
            format!("Current consumption above {} {}", high, parameter.unit())
        }
        Parameter::Pressure => format!("Pressure exceeded {} {}", high, parameter.unit()),
    }
}

/// Round the overall score for publication
pub fn round_score(overall: f64) -> f64 {
    libm::round(overall * RISK_SCORE_SCALE) / RISK_SCORE_SCALE
}

/// Reported confidence: `overall * 100` truncated, clamped to the
/// reporting bounds
pub fn confidence(overall: f64) -> u8 {
    let pct = libm::trunc(overall * 100.0);
    pct.clamp(CONFIDENCE_MIN_PCT as f64, CONFIDENCE_MAX_PCT as f64) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(v: f64, t: f64, c: f64, p: f64) -> SensorReading {
        SensorReading::new("M-001")
            .with_vibration(v)
            .with_temperature(t)
            .with_current(c)
            .with_pressure(p)
    }

    #[test]
    fn all_elevated_is_medium() {
        let classifier = RiskClassifier::default();
        let assessment = classifier.assess(&reading(1.5, 75.0, 13.0, 2.3));

        assert_eq!(assessment.machine_id, "M-001");
        assert_eq!(assessment.failure_risk, RiskLevel::Medium);
        assert_eq!(assessment.risk_score, 0.5);
        assert_eq!(assessment.reason, NOMINAL_REASON);
        assert_eq!(assessment.predicted_days_to_failure, 15);
        assert_eq!(assessment.confidence, 60);
        assert_eq!(
            assessment.recommendations,
            [
                "Schedule maintenance within 1-2 weeks",
                "Increase monitoring frequency",
                "Check for unusual patterns",
            ]
        );
    }

    #[test]
    fn all_nominal_is_low() {
        let assessment = RiskClassifier::default().assess(&reading(1.0, 70.0, 12.0, 2.0));

        assert_eq!(assessment.failure_risk, RiskLevel::Low);
        assert_eq!(assessment.risk_score, 0.2);
        assert_eq!(assessment.predicted_days_to_failure, 72);
        assert_eq!(assessment.confidence, 60);
        assert_eq!(assessment.recommendations.len(), 2);
    }

    #[test]
    fn all_critical_is_high() {
        let assessment = RiskClassifier::default().assess(&reading(5.0, 150.0, 40.0, 9.0));

        assert_eq!(assessment.failure_risk, RiskLevel::High);
        assert_eq!(assessment.risk_score, 1.0);
        assert_eq!(assessment.predicted_days_to_failure, 1);
        assert_eq!(assessment.confidence, 95);
        assert_eq!(assessment.reason.matches(REASON_SEPARATOR).count(), 3);
    }

    #[test]
    fn level_uses_unrounded_score() {
        // 1.0*0.3 + 0.8*0.25 + 0.8*0.25 + 0.5*0.2 lands just under 0.8
        let classifier = RiskClassifier::default();
        let assessment = classifier.assess(&reading(2.5, 85.0, 15.0, 2.4));

        assert_eq!(assessment.risk_score, 0.8);
        assert_eq!(assessment.failure_risk, RiskLevel::Medium);
        assert_eq!(assessment.predicted_days_to_failure, 6);
        assert_eq!(assessment.confidence, 80);
        assert_eq!(
            assessment.reason,
            "Vibration exceeded 2 g and Temperature rose above 90°C and Current consumption above 16 A"
        );
    }

    #[test]
    fn reason_follows_canonical_order() {
        let classifier = RiskClassifier::default();
        let risks = classifier.parameter_risks(&reading(0.5, 60.0, 20.0, 2.8));

        assert_eq!(risks[Parameter::Current], BandRisk::Critical);
        assert_eq!(risks[Parameter::Pressure], BandRisk::Warning);
        assert_eq!(
            classifier.reason(&risks),
            "Current consumption above 16 A and Pressure exceeded 3 bar"
        );
    }

    #[test]
    fn reason_uses_configured_high_threshold() {
        let thresholds = RiskThresholds::builder()
            .band(Parameter::Pressure, 4.0, 5.0, 6.5)
            .build()
            .unwrap();
        let classifier = RiskClassifier::new(thresholds);

        let assessment = classifier.assess(&reading(0.0, 0.0, 0.0, 7.0));
        assert_eq!(assessment.reason, "Pressure exceeded 6.5 bar");
    }

    #[test]
    fn nan_reading_is_treated_as_zero() {
        let classifier = RiskClassifier::default();
        let with_nan = classifier.assess(&reading(f64::NAN, 85.0, f64::INFINITY, 2.4));
        let with_zero = classifier.assess(&reading(0.0, 85.0, 0.0, 2.4));

        assert_eq!(with_nan, with_zero);
        assert!(with_nan.risk_score.is_finite());
    }

    #[test]
    fn overall_matches_weighted_sum() {
        let classifier = RiskClassifier::default();
        let risks = classifier.parameter_risks(&reading(1.2, 85.0, 11.0, 3.5));
        let expected = 0.5 * 0.3 + 0.8 * 0.25 + 0.2 * 0.25 + 1.0 * 0.2;
        assert_eq!(risks.overall(), expected);
    }

    #[test]
    fn confidence_bounds() {
        assert_eq!(confidence(0.2), 60);
        assert_eq!(confidence(0.61), 61);
        assert_eq!(confidence(0.87), 87);
        assert_eq!(confidence(1.0), 95);
    }

    #[test]
    fn score_rounding() {
        assert_eq!(round_score(0.7999999999999999), 0.8);
        assert_eq!(round_score(0.555), 0.56);
        assert_eq!(round_score(0.2), 0.2);
    }

    #[test]
    fn unknown_machine_label() {
        let assessment = RiskClassifier::default().assess(&SensorReading::default());
        assert_eq!(assessment.machine_id, "Unknown");
    }
}
