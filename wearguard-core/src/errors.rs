//! Error Types for Threshold Configuration
//!
//! ## Where Errors Can Happen
//!
//! The classifier and the cost model are total: any reading yields an
//! assessment and any day count yields an estimate. The only thing that can
//! be wrong is the threshold configuration itself, and it is checked once,
//! when [`RiskThresholds`](crate::RiskThresholds) is built.
//!
//! A band that is not strictly ascending (`low < medium < high`) would turn
//! the per-parameter step function into a non-monotonic ladder, so it is
//! rejected rather than silently accepted:
//!
//! ```
//! use wearguard_core::{ConfigError, Parameter, RiskThresholds, ThresholdBand};
//!
//! let result = RiskThresholds::builder()
//!     .band(Parameter::Temperature, 90.0, 80.0, 70.0)
//!     .build();
//!
//! assert!(matches!(
//!     result,
//!     Err(ConfigError::NotAscending { parameter: Parameter::Temperature, .. })
//! ));
//! assert!(ThresholdBand::for_parameter(Parameter::Vibration, 1.0, 1.5, 2.0).is_ok());
//! ```
//!
//! ## Memory Layout
//!
//! Errors carry only the offending numbers and the parameter, so they stay
//! `Copy` and allocation-free:
//! ```text
//! ConfigError size = 32 bytes
//! ├── Discriminant + Parameter: 2 bytes (padded to 8)
//! └── Largest variant (NotAscending): 3 × f64
//! ```

use thiserror_no_std::Error;

use crate::parameter::Parameter;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Threshold configuration errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Band boundaries are not strictly ascending
    #[error("{parameter} thresholds must satisfy low < medium < high, got {low}/{medium}/{high}")]
    NotAscending {
        /// Parameter whose band is malformed
        parameter: Parameter,
        /// Configured low boundary
        low: f64,
        /// Configured medium boundary
        medium: f64,
        /// Configured high boundary
        high: f64,
    },

    /// A boundary is NaN or infinite
    #[error("{parameter} thresholds must be finite numbers")]
    NonFinite {
        /// Parameter whose band is malformed
        parameter: Parameter,
    },
}

impl ConfigError {
    /// Parameter the error refers to
    pub fn parameter(&self) -> Parameter {
        match self {
            Self::NotAscending { parameter, .. } | Self::NonFinite { parameter } => *parameter,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotAscending { parameter, low, medium, high } =>
                defmt::write!(fmt, "{} bands not ascending: {}/{}/{}", parameter, low, medium, high),
            Self::NonFinite { parameter } =>
                defmt::write!(fmt, "{} bands not finite", parameter),
        }
    }
}
