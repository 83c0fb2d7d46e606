//! Risk vocabulary: per-parameter band risk and overall risk level

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::scoring::{
    BAND_RISK_CRITICAL, BAND_RISK_ELEVATED, BAND_RISK_NOMINAL, BAND_RISK_WARNING,
    HIGH_RISK_CUTOFF, HIGH_RISK_HORIZON_DAYS, HIGH_RISK_MIN_DAYS, LOW_RISK_HORIZON_DAYS,
    LOW_RISK_MIN_DAYS, MEDIUM_RISK_CUTOFF, MEDIUM_RISK_HORIZON_DAYS, MEDIUM_RISK_MIN_DAYS,
    REASON_TRIGGER_RISK,
};

/// Which threshold band a single parameter value falls in
///
/// ```text
/// value <= low            -> Nominal  (0.2)
/// low < value <= medium   -> Elevated (0.5)
/// medium < value <= high  -> Warning  (0.8)
/// value > high            -> Critical (1.0)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BandRisk {
    /// At or below the low boundary
    Nominal,
    /// Above low, at or below medium
    Elevated,
    /// Above medium, at or below high
    Warning,
    /// Above high
    Critical,
}

impl BandRisk {
    /// Numeric risk contributed to the weighted score
    pub const fn value(self) -> f64 {
        match self {
            Self::Nominal => BAND_RISK_NOMINAL,
            Self::Elevated => BAND_RISK_ELEVATED,
            Self::Warning => BAND_RISK_WARNING,
            Self::Critical => BAND_RISK_CRITICAL,
        }
    }

    /// Whether this parameter is named in the assessment reason
    pub fn is_triggered(self) -> bool {
        self.value() >= REASON_TRIGGER_RISK
    }
}

/// Overall failure risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RiskLevel {
    /// Score below the medium cut-off
    Low,
    /// Score in `[medium, high)` cut-offs
    Medium,
    /// Score at or above the high cut-off
    High,
}

const HIGH_RISK_RECOMMENDATIONS: &[&str] = &[
    "Schedule immediate maintenance",
    "Consider reducing machine load",
    "Monitor continuously for changes",
];

const MEDIUM_RISK_RECOMMENDATIONS: &[&str] = &[
    "Schedule maintenance within 1-2 weeks",
    "Increase monitoring frequency",
    "Check for unusual patterns",
];

const LOW_RISK_RECOMMENDATIONS: &[&str] = &[
    "Continue regular monitoring",
    "Schedule routine maintenance as planned",
];

impl RiskLevel {
    /// All levels, least to most severe
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Classify an unrounded overall score
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_RISK_CUTOFF {
            Self::High
        } else if score >= MEDIUM_RISK_CUTOFF {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Estimated days to failure for an unrounded score at this level
    ///
    /// `max(min_days, floor(horizon * (1 - score)))`. The horizons differ per
    /// level, so the estimate jumps at each cut-off instead of varying
    /// smoothly with the score.
    pub fn days_to_failure(self, score: f64) -> u32 {
        let (horizon, min_days) = match self {
            Self::High => (HIGH_RISK_HORIZON_DAYS, HIGH_RISK_MIN_DAYS),
            Self::Medium => (MEDIUM_RISK_HORIZON_DAYS, MEDIUM_RISK_MIN_DAYS),
            Self::Low => (LOW_RISK_HORIZON_DAYS, LOW_RISK_MIN_DAYS),
        };

        let estimate = libm::floor(horizon * (1.0 - score));
        // Negative estimates (score > 1) saturate to 0 and then to the floor
        (estimate.max(0.0) as u32).max(min_days)
    }

    /// Fixed maintenance recommendations for this level
    pub const fn recommendations(self) -> &'static [&'static str] {
        match self {
            Self::High => HIGH_RISK_RECOMMENDATIONS,
            Self::Medium => MEDIUM_RISK_RECOMMENDATIONS,
            Self::Low => LOW_RISK_RECOMMENDATIONS,
        }
    }

    /// Display name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RiskLevel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_values() {
        assert_eq!(BandRisk::Nominal.value(), 0.2);
        assert_eq!(BandRisk::Elevated.value(), 0.5);
        assert_eq!(BandRisk::Warning.value(), 0.8);
        assert_eq!(BandRisk::Critical.value(), 1.0);

        assert!(!BandRisk::Elevated.is_triggered());
        assert!(BandRisk::Warning.is_triggered());
        assert!(BandRisk::Critical.is_triggered());
    }

    #[test]
    fn level_cutoffs() {
        assert_eq!(RiskLevel::from_score(0.2), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.49), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.5), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(0.7999999999999999), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(0.8), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(1.0), RiskLevel::High);
    }

    #[test]
    fn day_floors() {
        assert_eq!(RiskLevel::High.days_to_failure(1.0), 1);
        assert_eq!(RiskLevel::High.days_to_failure(0.85), 1);
        assert_eq!(RiskLevel::Medium.days_to_failure(0.5), 15);
        assert_eq!(RiskLevel::Medium.days_to_failure(0.79), 6);
        assert_eq!(RiskLevel::Medium.days_to_failure(0.95), 5);
        assert_eq!(RiskLevel::Low.days_to_failure(0.2), 72);
        assert_eq!(RiskLevel::Low.days_to_failure(0.45), 49);
        assert_eq!(RiskLevel::Low.days_to_failure(0.9), 30);
    }

    #[test]
    fn recommendations_by_level() {
        assert_eq!(RiskLevel::High.recommendations().len(), 3);
        assert_eq!(RiskLevel::Medium.recommendations().len(), 3);
        assert_eq!(RiskLevel::Low.recommendations().len(), 2);
        assert_eq!(RiskLevel::High.recommendations()[0], "Schedule immediate maintenance");
        assert_eq!(
            RiskLevel::Low.recommendations()[1],
            "Schedule routine maintenance as planned"
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(alloc::format!("{}", RiskLevel::Medium), "Medium");
        assert!(RiskLevel::Low < RiskLevel::High);
    }
}
