//! Boundary Sanitization of Non-Finite Floats
//!
//! JSON has no NaN or infinity. Before any record leaves the process, every
//! float is passed through [`sanitize_float`]:
//!
//! ```text
//! NaN        ->  0.0
//! +Infinity  ->  999999.0
//! -Infinity  -> -999999.0
//! finite     ->  unchanged
//! ```
//!
//! The engine itself never produces non-finite output, but readings are
//! echoed back to consumers as received and a custom [`CostModel`] may be
//! fed anything, so the boundary applies the rule uniformly.
//!
//! [`CostModel`]: wearguard_core::CostModel

use wearguard_core::{CostSavingsEstimate, RiskAssessment, SensorReading, Validatable};

/// Stand-in for positive infinity in exported records
pub const POSITIVE_INFINITY_SENTINEL: f64 = 999_999.0;

/// Stand-in for negative infinity in exported records
pub const NEGATIVE_INFINITY_SENTINEL: f64 = -999_999.0;

/// Map a float to a JSON-safe value
pub fn sanitize_float(value: f64) -> f64 {
    if value.is_valid() {
        value
    } else if value.is_nan() {
        0.0
    } else if value > 0.0 {
        POSITIVE_INFINITY_SENTINEL
    } else {
        NEGATIVE_INFINITY_SENTINEL
    }
}

/// Records that can be made JSON-safe
pub trait Sanitize {
    /// Replace every non-finite float in place
    fn sanitize(&mut self);

    /// Sanitized copy
    fn json_safe(mut self) -> Self
    where
        Self: Sized,
    {
        self.sanitize();
        self
    }
}

impl Sanitize for f64 {
    fn sanitize(&mut self) {
        *self = sanitize_float(*self);
    }
}

impl Sanitize for SensorReading {
    fn sanitize(&mut self) {
        self.vibration.sanitize();
        self.temperature.sanitize();
        self.current.sanitize();
        self.pressure.sanitize();
        self.operating_hours.sanitize();
    }
}

impl Sanitize for RiskAssessment {
    fn sanitize(&mut self) {
        self.risk_score.sanitize();
    }
}

impl Sanitize for CostSavingsEstimate {
    fn sanitize(&mut self) {
        match self {
            CostSavingsEstimate::Planned(breakdown) => {
                breakdown.savings.sanitize();
                breakdown.planned_maintenance_cost.sanitize();
                breakdown.unplanned_downtime_cost.sanitize();
                breakdown.downtime_hours.sanitize();
            }
            CostSavingsEstimate::Unavoidable { savings, downtime_cost } => {
                savings.sanitize();
                downtime_cost.sanitize();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wearguard_core::CostModel;

    #[test]
    fn float_mapping() {
        assert_eq!(sanitize_float(f64::NAN), 0.0);
        assert_eq!(sanitize_float(f64::INFINITY), 999_999.0);
        assert_eq!(sanitize_float(f64::NEG_INFINITY), -999_999.0);
        assert_eq!(sanitize_float(-3.25), -3.25);
        assert_eq!(sanitize_float(0.0), 0.0);
    }

    #[test]
    fn reading_keeps_identity() {
        let reading = SensorReading::new("M-1")
            .with_vibration(f64::INFINITY)
            .with_pressure(2.2)
            .with_operating_hours(f64::NAN)
            .json_safe();

        assert_eq!(reading.machine_id, "M-1");
        assert_eq!(reading.vibration, POSITIVE_INFINITY_SENTINEL);
        assert_eq!(reading.pressure, 2.2);
        assert_eq!(reading.operating_hours, 0.0);
    }

    #[test]
    fn estimate_from_infinite_cost() {
        let model = CostModel::new(f64::INFINITY, 24.0);
        let estimate = model.estimate_savings(3, 10000.0).json_safe();
        let breakdown = estimate.breakdown().unwrap();

        assert_eq!(breakdown.savings, NEGATIVE_INFINITY_SENTINEL);
        assert_eq!(breakdown.planned_maintenance_cost, POSITIVE_INFINITY_SENTINEL);
    }

    #[test]
    fn unavoidable_estimate() {
        let estimate = CostModel::default()
            .estimate_savings(0, f64::NAN)
            .json_safe();
        assert_eq!(estimate.downtime_cost(), 0.0);
    }
}
