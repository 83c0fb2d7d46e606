//! Risk assessment produced for one machine reading

use alloc::{string::String, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::cost::UNPLANNED_DOWNTIME_COST,
    cost::{CostModel, CostSavingsEstimate},
    risk::RiskLevel,
};

/// Outcome of classifying one [`SensorReading`](crate::SensorReading)
///
/// Constructed fresh on every call and never cached by the engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiskAssessment {
    /// Machine the reading came from
    pub machine_id: String,
    /// Overall classification
    pub failure_risk: RiskLevel,
    /// Weighted score in `[0, 1]`, rounded to two decimals
    pub risk_score: f64,
    /// Which parameters drove the score
    pub reason: String,
    /// Heuristic days until failure, at least 1
    pub predicted_days_to_failure: u32,
    /// Reporting confidence, 60..=95
    pub confidence: u8,
    /// Actions for the maintenance team, most urgent first
    pub recommendations: Vec<String>,
}

impl RiskAssessment {
    /// Whether the machine should be taken out of service for maintenance now
    pub fn requires_immediate_action(&self) -> bool {
        self.failure_risk == RiskLevel::High
    }

    /// Savings from acting on this prediction, at the default breakdown cost
    pub fn estimate_savings(&self, model: &CostModel) -> CostSavingsEstimate {
        self.estimate_savings_with(model, UNPLANNED_DOWNTIME_COST)
    }

    /// Savings from acting on this prediction, at a machine-specific
    /// breakdown cost
    pub fn estimate_savings_with(
        &self,
        model: &CostModel,
        unplanned_downtime_cost: f64,
    ) -> CostSavingsEstimate {
        model.estimate_savings(self.predicted_days_to_failure.into(), unplanned_downtime_cost)
    }
}
