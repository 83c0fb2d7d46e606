//! WearGuard Avro schemas
//!
//! Record layouts for the three things the engine exchanges with the
//! outside world. Field names match the JSON produced by the serde derives
//! in `wearguard-core`, so a record can move between the two encodings
//! without renaming.

use apache_avro::Schema;
use serde_json::json;

use crate::SchemaError;

/// Namespace shared by every WearGuard record
pub const NAMESPACE: &str = "io.wearguard.v1";

/// Sensor reading schema v1
pub fn sensor_reading_v1() -> Result<Schema, SchemaError> {
    let schema_json = json!({
        "namespace": NAMESPACE,
        "type": "record",
        "name": "SensorReading",
        "doc": "One snapshot of a machine's four monitored parameters",
        "fields": [
            {
                "name": "machine_id",
                "type": "string",
                "doc": "Machine identifier"
            },
            {
                "name": "vibration",
                "type": "double",
                "doc": "Vibration amplitude, g"
            },
            {
                "name": "temperature",
                "type": "double",
                "doc": "Temperature, °C"
            },
            {
                "name": "current",
                "type": "double",
                "doc": "Current draw, A"
            },
            {
                "name": "pressure",
                "type": "double",
                "doc": "Pressure, bar"
            },
            {
                "name": "operating_hours",
                "type": "double",
                "default": 0.0,
                "doc": "Hours in service; carried through, not scored"
            }
        ]
    });

    Schema::parse(&schema_json)
        .map_err(|e| SchemaError::ParseError(e.to_string()))
}

/// Risk assessment schema v1
pub fn risk_assessment_v1() -> Result<Schema, SchemaError> {
    let schema_json = json!({
        "namespace": NAMESPACE,
        "type": "record",
        "name": "RiskAssessment",
        "doc": "Failure risk classification for one reading",
        "fields": [
            {
                "name": "machine_id",
                "type": "string"
            },
            {
                "name": "failure_risk",
                "type": {
                    "type": "enum",
                    "name": "RiskLevel",
                    "symbols": ["Low", "Medium", "High"]
                }
            },
            {
                "name": "risk_score",
                "type": "double",
                "doc": "Weighted score in [0, 1], two decimals"
            },
            {
                "name": "reason",
                "type": "string"
            },
            {
                "name": "predicted_days_to_failure",
                "type": "long"
            },
            {
                "name": "confidence",
                "type": "int",
                "doc": "Percent, 60 to 95"
            },
            {
                "name": "recommendations",
                "type": {
                    "type": "array",
                    "items": "string"
                }
            }
        ]
    });

    Schema::parse(&schema_json)
        .map_err(|e| SchemaError::ParseError(e.to_string()))
}

/// Cost-savings estimate schema v1
///
/// Breakdown fields are null when failure is already unavoidable.
pub fn cost_savings_v1() -> Result<Schema, SchemaError> {
    let schema_json = json!({
        "namespace": NAMESPACE,
        "type": "record",
        "name": "CostSavings",
        "doc": "Savings from planned maintenance versus a breakdown",
        "fields": [
            {
                "name": "savings",
                "type": "double"
            },
            {
                "name": "planned_maintenance_cost",
                "type": ["null", "double"],
                "default": null
            },
            {
                "name": "unplanned_downtime_cost",
                "type": ["null", "double"],
                "default": null
            },
            {
                "name": "downtime_hours",
                "type": ["null", "double"],
                "default": null
            },
            {
                "name": "downtime_cost",
                "type": ["null", "double"],
                "default": null,
                "doc": "Set only when no maintenance window remains"
            }
        ]
    });

    Schema::parse(&schema_json)
        .map_err(|e| SchemaError::ParseError(e.to_string()))
}
