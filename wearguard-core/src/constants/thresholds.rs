//! Reference Threshold Bands
//!
//! Default `{low, medium, high}` boundaries for rotating production
//! machinery. A reading at or below `low` is nominal; above `high` it is
//! critical.

// ===== VIBRATION (g) =====

/// Vibration at or below this is nominal (g).
pub const VIBRATION_LOW_G: f64 = 1.0;

/// Upper edge of the elevated vibration band (g).
pub const VIBRATION_MEDIUM_G: f64 = 1.5;

/// Vibration above this is critical (g).
pub const VIBRATION_HIGH_G: f64 = 2.0;

// ===== TEMPERATURE (°C) =====

/// Temperature at or below this is nominal (°C).
pub const TEMPERATURE_LOW_C: f64 = 70.0;

/// Upper edge of the elevated temperature band (°C).
pub const TEMPERATURE_MEDIUM_C: f64 = 80.0;

/// Temperature above this is critical (°C).
pub const TEMPERATURE_HIGH_C: f64 = 90.0;

// ===== CURRENT (A) =====

/// Current draw at or below this is nominal (A).
pub const CURRENT_LOW_A: f64 = 12.0;

/// Upper edge of the elevated current band (A).
pub const CURRENT_MEDIUM_A: f64 = 14.0;

/// Current draw above this is critical (A).
pub const CURRENT_HIGH_A: f64 = 16.0;

// ===== PRESSURE (bar) =====

/// Pressure at or below this is nominal (bar).
pub const PRESSURE_LOW_BAR: f64 = 2.0;

/// Upper edge of the elevated pressure band (bar).
pub const PRESSURE_MEDIUM_BAR: f64 = 2.5;

/// Pressure above this is critical (bar).
pub const PRESSURE_HIGH_BAR: f64 = 3.0;
