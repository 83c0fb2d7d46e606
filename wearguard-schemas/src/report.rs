//! Per-machine report handed to presentation layers
//!
//! One report answers "how is this machine doing and what is acting on it
//! worth": the latest reading as received, its assessment, and the savings
//! estimate derived from the assessment's days-to-failure. Every float is
//! sanitized before the report is returned.

use serde::{Deserialize, Serialize};
use wearguard_core::{
    constants::UNPLANNED_DOWNTIME_COST, CostModel, CostSavingsEstimate, RiskAssessment,
    RiskClassifier, SensorReading,
};

use crate::{sanitize::Sanitize, SchemaError};

/// Assessment and savings for one machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineReport {
    /// Machine identifier
    pub machine_id: String,
    /// Reading as received, passed through the boundary sanitizer
    ///
    /// Infinities appear here as the ±999999 sentinels, while the
    /// classifier scored them as 0.
    pub latest_reading: SensorReading,
    /// Risk assessment
    pub current_status: RiskAssessment,
    /// Savings from acting on the assessment
    pub cost_savings: CostSavingsEstimate,
}

impl MachineReport {
    /// Assess `reading` and price the outcome at the default breakdown cost
    pub fn build(classifier: &RiskClassifier, model: &CostModel, reading: &SensorReading) -> Self {
        Self::build_with_cost(classifier, model, reading, UNPLANNED_DOWNTIME_COST)
    }

    /// Assess `reading` and price the outcome at a machine-specific
    /// breakdown cost
    pub fn build_with_cost(
        classifier: &RiskClassifier,
        model: &CostModel,
        reading: &SensorReading,
        unplanned_downtime_cost: f64,
    ) -> Self {
        let current_status = classifier.assess(reading);
        let cost_savings = current_status.estimate_savings_with(model, unplanned_downtime_cost);

        Self {
            machine_id: current_status.machine_id.clone(),
            latest_reading: reading.clone().json_safe(),
            current_status: current_status.json_safe(),
            cost_savings: cost_savings.json_safe(),
        }
    }

    /// Compact JSON
    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Sanitize for MachineReport {
    fn sanitize(&mut self) {
        self.latest_reading.sanitize();
        self.current_status.sanitize();
        self.cost_savings.sanitize();
    }
}
