//! Cost Model Figures
//!
//! Currency-agnostic averages used to compare a planned intervention with
//! an unplanned breakdown.

/// Average cost of one planned maintenance visit.
pub const PLANNED_MAINTENANCE_COST: f64 = 2000.0;

/// Default cost of one unplanned breakdown, used when the caller has no
/// machine-specific figure.
pub const UNPLANNED_DOWNTIME_COST: f64 = 10000.0;

/// Production hours lost to one unplanned breakdown.
pub const UNPLANNED_DOWNTIME_HOURS: f64 = 24.0;
