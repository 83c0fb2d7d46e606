//! Maintenance Cost-Savings Model
//!
//! ## Model
//!
//! If a failure is predicted with any lead time at all, the operator can
//! replace an unplanned breakdown with a planned visit:
//!
//! ```text
//! savings = unplanned_downtime_cost - planned_maintenance_cost
//! ```
//!
//! The size of the lead time does not matter, only whether it is positive.
//! With no lead time (`days <= 0`) nothing can be planned, so savings are 0
//! and the full downtime cost is reported.
//!
//! ## Output Shape
//!
//! The two outcomes serialize to different record shapes, which is what
//! existing dashboards consume:
//!
//! ```text
//! days > 0   {"savings", "planned_maintenance_cost", "unplanned_downtime_cost", "downtime_hours"}
//! days <= 0  {"savings", "downtime_cost"}
//! ```
//!
//! [`CostSavingsEstimate`] models this as an enum; [`CostSavingsEstimate::savings`]
//! and [`CostSavingsEstimate::downtime_cost`] give shape-independent access.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::cost::{
    PLANNED_MAINTENANCE_COST, UNPLANNED_DOWNTIME_COST, UNPLANNED_DOWNTIME_HOURS,
};

/// Full breakdown when there is lead time to plan maintenance
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SavingsBreakdown {
    /// Unplanned cost avoided minus planned cost incurred
    pub savings: f64,
    /// Cost of the planned visit
    pub planned_maintenance_cost: f64,
    /// Cost of the breakdown that is avoided
    pub unplanned_downtime_cost: f64,
    /// Production hours a breakdown would have cost
    pub downtime_hours: f64,
}

/// Savings from acting on a days-to-failure prediction
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum CostSavingsEstimate {
    /// Positive lead time: maintenance can be planned
    Planned(SavingsBreakdown),
    /// No lead time: the breakdown cost is unavoidable
    Unavoidable {
        /// Always 0
        savings: f64,
        /// Breakdown cost that will be incurred
        downtime_cost: f64,
    },
}

impl CostSavingsEstimate {
    /// Savings regardless of shape
    pub fn savings(&self) -> f64 {
        match self {
            Self::Planned(breakdown) => breakdown.savings,
            Self::Unavoidable { savings, .. } => *savings,
        }
    }

    /// Breakdown cost the estimate was computed against
    pub fn downtime_cost(&self) -> f64 {
        match self {
            Self::Planned(breakdown) => breakdown.unplanned_downtime_cost,
            Self::Unavoidable { downtime_cost, .. } => *downtime_cost,
        }
    }

    /// Whether there was lead time to plan maintenance
    pub fn is_planned(&self) -> bool {
        matches!(self, Self::Planned(_))
    }

    /// Breakdown, if maintenance could be planned
    pub fn breakdown(&self) -> Option<&SavingsBreakdown> {
        match self {
            Self::Planned(breakdown) => Some(breakdown),
            Self::Unavoidable { .. } => None,
        }
    }
}

/// Planned-versus-unplanned maintenance cost model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    planned_maintenance_cost: f64,
    downtime_hours: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            planned_maintenance_cost: PLANNED_MAINTENANCE_COST,
            downtime_hours: UNPLANNED_DOWNTIME_HOURS,
        }
    }
}

impl CostModel {
    /// Model with site-specific figures
    pub fn new(planned_maintenance_cost: f64, downtime_hours: f64) -> Self {
        Self {
            planned_maintenance_cost,
            downtime_hours,
        }
    }

    /// Cost of one planned visit
    pub fn planned_maintenance_cost(&self) -> f64 {
        self.planned_maintenance_cost
    }

    /// Hours lost to one breakdown
    pub fn downtime_hours(&self) -> f64 {
        self.downtime_hours
    }

    /// Estimate savings for a predicted failure `days_to_failure` days out
    pub fn estimate_savings(
        &self,
        days_to_failure: i64,
        unplanned_downtime_cost: f64,
    ) -> CostSavingsEstimate {
        if days_to_failure <= 0 {
            log_warn!(
                "no lead time ({} days); downtime cost {} is unavoidable",
                days_to_failure,
                unplanned_downtime_cost
            );
            return CostSavingsEstimate::Unavoidable {
                savings: 0.0,
                downtime_cost: unplanned_downtime_cost,
            };
        }

        let savings = unplanned_downtime_cost - self.planned_maintenance_cost;
        log_debug!(
            "{} days lead time: savings {} against downtime cost {}",
            days_to_failure,
            savings,
            unplanned_downtime_cost
        );

        CostSavingsEstimate::Planned(SavingsBreakdown {
            savings,
            planned_maintenance_cost: self.planned_maintenance_cost,
            unplanned_downtime_cost,
            downtime_hours: self.downtime_hours,
        })
    }

    /// [`estimate_savings`](Self::estimate_savings) at the default breakdown
    /// cost
    pub fn estimate_default(&self, days_to_failure: i64) -> CostSavingsEstimate {
        self.estimate_savings(days_to_failure, UNPLANNED_DOWNTIME_COST)
    }
}
