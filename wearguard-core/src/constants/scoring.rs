//! Risk Scoring Constants
//!
//! The risk model is a fixed weighted blend of four per-parameter step
//! functions. Changing anything here changes the model, so these are
//! constants rather than configuration.

// ===== BAND RISK VALUES =====

/// Risk contributed by a parameter at or below its `low` boundary.
pub const BAND_RISK_NOMINAL: f64 = 0.2;

/// Risk contributed by a parameter in `(low, medium]`.
pub const BAND_RISK_ELEVATED: f64 = 0.5;

/// Risk contributed by a parameter in `(medium, high]`.
pub const BAND_RISK_WARNING: f64 = 0.8;

/// Risk contributed by a parameter above its `high` boundary.
pub const BAND_RISK_CRITICAL: f64 = 1.0;

/// Band risk at or above which a parameter is named in the reason text.
pub const REASON_TRIGGER_RISK: f64 = BAND_RISK_WARNING;

// ===== PARAMETER WEIGHTS =====
// Sum to exactly 1.0, so the blended score stays within [0.2, 1.0].

/// Vibration weight.
pub const VIBRATION_WEIGHT: f64 = 0.3;

/// Temperature weight.
pub const TEMPERATURE_WEIGHT: f64 = 0.25;

/// Current draw weight.
pub const CURRENT_WEIGHT: f64 = 0.25;

/// Pressure weight.
pub const PRESSURE_WEIGHT: f64 = 0.2;

// ===== RISK LEVEL CUT-OFFS =====

/// Overall score at or above which a machine is High risk.
pub const HIGH_RISK_CUTOFF: f64 = 0.8;

/// Overall score at or above which a machine is Medium risk.
pub const MEDIUM_RISK_CUTOFF: f64 = 0.5;

// ===== DAYS-TO-FAILURE =====
// days = max(floor, floor(horizon * (1 - score))) for the matching level.

/// Days horizon scaled by remaining margin at High risk.
pub const HIGH_RISK_HORIZON_DAYS: f64 = 10.0;

/// Minimum days reported at High risk.
pub const HIGH_RISK_MIN_DAYS: u32 = 1;

/// Days horizon scaled by remaining margin at Medium risk.
pub const MEDIUM_RISK_HORIZON_DAYS: f64 = 30.0;

/// Minimum days reported at Medium risk.
pub const MEDIUM_RISK_MIN_DAYS: u32 = 5;

/// Days horizon scaled by remaining margin at Low risk.
pub const LOW_RISK_HORIZON_DAYS: f64 = 90.0;

/// Minimum days reported at Low risk.
pub const LOW_RISK_MIN_DAYS: u32 = 30;

// ===== OUTPUT BOUNDS =====

/// Lowest confidence ever reported (%).
///
/// Reporting floor, not a statistical bound.
pub const CONFIDENCE_MIN_PCT: u8 = 60;

/// Highest confidence ever reported (%).
pub const CONFIDENCE_MAX_PCT: u8 = 95;

/// Scale used to round the published risk score to two decimal places.
pub const RISK_SCORE_SCALE: f64 = 100.0;
