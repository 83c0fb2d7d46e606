//! Failure risk scoring engine for WearGuard
//!
//! Turns one periodic sensor reading from a manufacturing machine into a
//! risk assessment, and turns that assessment's days-to-failure estimate into
//! a maintenance cost-savings figure.
//!
//! Key properties:
//! - Deterministic: identical reading and thresholds give identical output
//! - Total: every numeric input produces an assessment, never an error
//! - Stateless: thresholds are immutable and injected at construction
//!
//! ```
//! use wearguard_core::{CostModel, RiskClassifier, RiskLevel, RiskThresholds, SensorReading};
//!
//! let classifier = RiskClassifier::new(RiskThresholds::default());
//! let reading = SensorReading::new("M-001")
//!     .with_vibration(1.5)
//!     .with_temperature(75.0)
//!     .with_current(13.0)
//!     .with_pressure(2.3);
//!
//! let assessment = classifier.assess(&reading);
//! assert_eq!(assessment.failure_risk, RiskLevel::Medium);
//! assert_eq!(assessment.predicted_days_to_failure, 15);
//!
//! let savings = CostModel::default().estimate_default(assessment.predicted_days_to_failure.into());
//! assert_eq!(savings.savings(), 8000.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod assessment;
pub mod classifier;
pub mod constants;
pub mod cost;
pub mod errors;
pub mod fleet;
pub mod parameter;
pub mod reading;
pub mod risk;
pub mod thresholds;

// Public API
pub use assessment::RiskAssessment;
pub use classifier::{ParameterRisks, RiskClassifier};
pub use cost::{CostModel, CostSavingsEstimate, SavingsBreakdown};
pub use errors::{ConfigError, ConfigResult};
pub use fleet::{assess_fleet, FleetAssessment, FleetSummary, MachineStatus};
pub use parameter::{Parameter, ParameterTable};
pub use reading::{SensorReading, Validatable};
pub use risk::{BandRisk, RiskLevel};
pub use thresholds::{RiskThresholds, RiskThresholdsBuilder, ThresholdBand};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
