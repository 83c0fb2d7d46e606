//! Batch assessment over many machines
//!
//! Each reading is assessed independently with the same classifier; nothing
//! carries over between machines. Results keep the input order.

use alloc::{string::String, vec::Vec};
use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    assessment::RiskAssessment, classifier::RiskClassifier, reading::SensorReading,
    risk::RiskLevel,
};

/// Compact per-machine status line
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MachineStatus {
    /// Machine identifier
    pub machine_id: String,
    /// Overall classification
    pub status: RiskLevel,
    /// Published risk score
    pub risk_score: f64,
    /// Heuristic days until failure
    pub predicted_days_to_failure: u32,
}

impl From<&RiskAssessment> for MachineStatus {
    fn from(assessment: &RiskAssessment) -> Self {
        Self {
            machine_id: assessment.machine_id.clone(),
            status: assessment.failure_risk,
            risk_score: assessment.risk_score,
            predicted_days_to_failure: assessment.predicted_days_to_failure,
        }
    }
}

/// Count of machines per risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FleetSummary {
    /// Machines assessed
    pub total: usize,
    /// Machines at Low risk
    pub low: usize,
    /// Machines at Medium risk
    pub medium: usize,
    /// Machines at High risk
    pub high: usize,
}

impl FleetSummary {
    /// Count one more machine at `level`
    pub fn record(&mut self, level: RiskLevel) {
        self.total += 1;
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
        }
    }

    /// Machines at `level`
    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
        }
    }
}

/// Assessments for a set of machines plus their summary
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FleetAssessment {
    /// One assessment per input reading, input order
    pub assessments: Vec<RiskAssessment>,
    /// Level counts
    pub summary: FleetSummary,
}

impl FleetAssessment {
    /// Status lines in input order
    pub fn statuses(&self) -> Vec<MachineStatus> {
        self.assessments.iter().map(MachineStatus::from).collect()
    }

    /// Most urgent machine: highest score, then fewest days to failure
    ///
    /// Ties keep the earliest machine in input order.
    pub fn highest_risk(&self) -> Option<&RiskAssessment> {
        self.assessments.iter().reduce(|best, candidate| {
            match urgency(candidate, best) {
                Ordering::Greater => candidate,
                _ => best,
            }
        })
    }

    /// Assessments at `level`, input order
    pub fn at_level(&self, level: RiskLevel) -> impl Iterator<Item = &RiskAssessment> {
        self.assessments.iter().filter(move |a| a.failure_risk == level)
    }
}

fn urgency(a: &RiskAssessment, b: &RiskAssessment) -> Ordering {
    a.risk_score
        .total_cmp(&b.risk_score)
        .then_with(|| b.predicted_days_to_failure.cmp(&a.predicted_days_to_failure))
}

/// Assess every reading independently
pub fn assess_fleet<'a, I>(classifier: &RiskClassifier, readings: I) -> FleetAssessment
where
    I: IntoIterator<Item = &'a SensorReading>,
{
    let mut fleet = FleetAssessment::default();
    for reading in readings {
        let assessment = classifier.assess(reading);
        fleet.summary.record(assessment.failure_risk);
        fleet.assessments.push(assessment);
    }

    log_debug!(
        "fleet of {}: {} high, {} medium, {} low",
        fleet.summary.total,
        fleet.summary.high,
        fleet.summary.medium,
        fleet.summary.low
    );

    fleet
}
