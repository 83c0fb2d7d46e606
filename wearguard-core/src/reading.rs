//! Sensor reading supplied per machine per evaluation
//!
//! Numeric fields that are absent from an incoming document default to 0.
//! Non-finite values are legal to construct but are replaced by 0 before
//! scoring, see [`SensorReading::sanitized`].

use alloc::string::{String, ToString};
use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::parameter::{Parameter, ParameterTable, PARAMETER_COUNT};

/// Trait for values that can be fed into the risk model
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Parameters that were replaced while sanitizing a reading
pub type ReplacedParameters = Vec<Parameter, PARAMETER_COUNT>;

/// One periodic reading from a machine
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorReading {
    /// Machine identifier
    pub machine_id: String,
    /// Vibration, g
    pub vibration: f64,
    /// Temperature, °C
    pub temperature: f64,
    /// Current draw, A
    pub current: f64,
    /// Pressure, bar
    pub pressure: f64,
    /// Cumulative operating hours; carried through, not scored
    pub operating_hours: f64,
}

impl SensorReading {
    /// Reading for `machine_id` with every value at 0
    pub fn new(machine_id: impl Into<String>) -> Self {
        Self {
            machine_id: machine_id.into(),
            ..Self::default()
        }
    }

    /// Set vibration
    pub fn with_vibration(mut self, g: f64) -> Self {
        self.vibration = g;
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature = celsius;
        self
    }

    /// Set current draw
    pub fn with_current(mut self, amps: f64) -> Self {
        self.current = amps;
        self
    }

    /// Set pressure
    pub fn with_pressure(mut self, bar: f64) -> Self {
        self.pressure = bar;
        self
    }

    /// Set operating hours
    pub fn with_operating_hours(mut self, hours: f64) -> Self {
        self.operating_hours = hours;
        self
    }

    /// Value of a monitored parameter
    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Vibration => self.vibration,
            Parameter::Temperature => self.temperature,
            Parameter::Current => self.current,
            Parameter::Pressure => self.pressure,
        }
    }

    fn value_mut(&mut self, parameter: Parameter) -> &mut f64 {
        match parameter {
            Parameter::Vibration => &mut self.vibration,
            Parameter::Temperature => &mut self.temperature,
            Parameter::Current => &mut self.current,
            Parameter::Pressure => &mut self.pressure,
        }
    }

    /// Monitored values as a table
    pub fn values(&self) -> ParameterTable<f64> {
        ParameterTable::from_fn(|p| self.value(p))
    }

    /// Machine identifier, or `"Unknown"` when the reading carries none
    pub fn machine_label(&self) -> &str {
        if self.machine_id.is_empty() {
            "Unknown"
        } else {
            &self.machine_id
        }
    }

    /// Whether every numeric field is finite
    pub fn is_valid(&self) -> bool {
        Parameter::ALL.into_iter().all(|p| self.value(p).is_valid())
            && self.operating_hours.is_valid()
    }

    /// Copy of this reading with non-finite values replaced by 0
    ///
    /// Returns the monitored parameters that were replaced, in canonical
    /// order. A non-finite `operating_hours` is zeroed too but not reported,
    /// since it never reaches the score.
    pub fn sanitized(&self) -> (Self, ReplacedParameters) {
        let mut clean = self.clone();
        let mut replaced = ReplacedParameters::new();

        for parameter in Parameter::ALL {
            let value = clean.value_mut(parameter);
            if !value.is_valid() {
                log_warn!(
                    "machine {}: non-finite {} reading {} replaced with 0",
                    self.machine_label(),
                    parameter,
                    value
                );
                *value = 0.0;
                // Capacity equals the number of parameters
                let _ = replaced.push(parameter);
            }
        }

        if !clean.operating_hours.is_valid() {
            log_warn!(
                "machine {}: non-finite operating hours replaced with 0",
                self.machine_label()
            );
            clean.operating_hours = 0.0;
        }

        if clean.machine_id.is_empty() {
            clean.machine_id = "Unknown".to_string();
        }

        (clean, replaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_zero() {
        let reading = SensorReading::new("M-7");
        for p in Parameter::ALL {
            assert_eq!(reading.value(p), 0.0);
        }
        assert_eq!(reading.operating_hours, 0.0);
        assert!(reading.is_valid());
    }

    #[test]
    fn builder_sets_values() {
        let reading = SensorReading::new("M-7")
            .with_vibration(1.2)
            .with_temperature(72.0)
            .with_current(13.5)
            .with_pressure(2.2)
            .with_operating_hours(4100.0);

        let values = reading.values();
        assert_eq!(values[Parameter::Vibration], 1.2);
        assert_eq!(values[Parameter::Temperature], 72.0);
        assert_eq!(values[Parameter::Current], 13.5);
        assert_eq!(values[Parameter::Pressure], 2.2);
        assert_eq!(reading.operating_hours, 4100.0);
    }

    #[test]
    fn sanitize_replaces_non_finite() {
        let reading = SensorReading::new("M-9")
            .with_vibration(f64::NAN)
            .with_temperature(75.0)
            .with_pressure(f64::NEG_INFINITY)
            .with_operating_hours(f64::INFINITY);
        assert!(!reading.is_valid());

        let (clean, replaced) = reading.sanitized();
        assert!(clean.is_valid());
        assert_eq!(clean.vibration, 0.0);
        assert_eq!(clean.temperature, 75.0);
        assert_eq!(clean.pressure, 0.0);
        assert_eq!(clean.operating_hours, 0.0);
        assert_eq!(replaced.as_slice(), &[Parameter::Vibration, Parameter::Pressure]);
    }

    #[test]
    fn unnamed_machine_is_unknown() {
        let (clean, replaced) = SensorReading::default().sanitized();
        assert_eq!(clean.machine_id, "Unknown");
        assert!(replaced.is_empty());
    }
}
