//! Constants for WearGuard Core
//!
//! Every number the risk engine depends on is defined here, with the unit in
//! its name where it has one.
//!
//! ## Organization
//!
//! - **Thresholds**: Reference band boundaries for each monitored parameter
//! - **Scoring**: Band risk values, parameter weights, level cut-offs and
//!   days-to-failure horizons
//! - **Cost**: Maintenance and downtime figures for the savings model
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Thresholds here are only defaults; deployments inject their own
//!    through [`RiskThresholds`](crate::RiskThresholds)
//! 3. Scoring constants are part of the model, not configuration

/// Reference threshold bands for the four monitored parameters.
pub mod thresholds;

/// Risk scoring weights, cut-offs and output bounds.
pub mod scoring;

/// Cost model figures.
pub mod cost;

// Re-export commonly used constants for convenience
pub use scoring::{
    HIGH_RISK_CUTOFF, MEDIUM_RISK_CUTOFF,
    CONFIDENCE_MIN_PCT, CONFIDENCE_MAX_PCT,
    RISK_SCORE_SCALE,
};

pub use cost::{
    PLANNED_MAINTENANCE_COST, UNPLANNED_DOWNTIME_COST, UNPLANNED_DOWNTIME_HOURS,
};
