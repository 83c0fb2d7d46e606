//! Boundary Layer for the WearGuard Risk Engine
//!
//! ## Overview
//!
//! `wearguard-core` is a pure function from readings to assessments. This
//! crate is everything around it that touches the outside world:
//!
//! - [`config`]: threshold configuration documents (JSON) turned into
//!   validated [`RiskThresholds`](wearguard_core::RiskThresholds)
//! - [`report`]: the per-machine record a dashboard consumes, combining the
//!   assessment with its cost-savings estimate
//! - [`sanitize`]: replacement of NaN and infinities before anything is
//!   serialized, since JSON cannot carry them
//! - [`schemas`] and [`registry`]: Avro record schemas for readings,
//!   assessments and savings, with version tracking
//!
//! ## Configuration Documents
//!
//! ```json
//! {
//!   "vibration":   { "low": 1.0, "medium": 1.5, "high": 2.0 },
//!   "temperature": { "low": 70,  "medium": 80,  "high": 90  }
//! }
//! ```
//!
//! Parameters left out keep their reference band. Every band is validated
//! once, at load time; a malformed band is a [`SchemaError::Config`].
//!
//! ## Usage Example
//!
//! ```
//! use wearguard_core::{CostModel, RiskClassifier, SensorReading};
//! use wearguard_schemas::{MachineReport, ThresholdConfig};
//!
//! let thresholds = ThresholdConfig::from_json_str(
//!     r#"{ "temperature": { "low": 75, "medium": 85, "high": 95 } }"#,
//! )?
//! .into_thresholds()?;
//!
//! let classifier = RiskClassifier::new(thresholds);
//! let reading = SensorReading::new("oven-2").with_temperature(f64::NAN);
//!
//! let report = MachineReport::build(&classifier, &CostModel::default(), &reading);
//! let json = report.to_json()?;
//! assert!(json.contains("\"machine_id\":\"oven-2\""));
//! # Ok::<(), wearguard_schemas::SchemaError>(())
//! ```

use thiserror_no_std::Error;
use wearguard_core::ConfigError;

pub mod config;
pub mod registry;
pub mod report;
pub mod sanitize;
pub mod schemas;

pub use config::{BandConfig, ThresholdConfig};
pub use registry::{SchemaMetadata, SchemaRegistry};
pub use report::MachineReport;
pub use sanitize::{sanitize_float, Sanitize, NEGATIVE_INFINITY_SENTINEL, POSITIVE_INFINITY_SENTINEL};

/// Boundary-layer errors
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A document or schema could not be parsed
    #[error("Failed to parse: {0}")]
    ParseError(String),

    /// A named schema is not registered
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// A schema failed registration checks
    #[error("Schema validation failed: {0}")]
    ValidationError(String),

    /// Threshold configuration is malformed
    #[error("Invalid threshold configuration: {0}")]
    Config(#[from] ConfigError),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for SchemaError {
    fn from(err: std::io::Error) -> Self {
        SchemaError::Io(err.to_string())
    }
}
