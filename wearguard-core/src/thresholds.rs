//! Threshold bands and the immutable threshold configuration
//!
//! [`RiskThresholds`] is built once, validated, and handed to
//! [`RiskClassifier::new`](crate::RiskClassifier::new). It is never mutated
//! afterwards, so a single instance can be shared across threads freely.
//!
//! ```
//! use wearguard_core::{Parameter, RiskThresholds};
//!
//! // Reference bands
//! let defaults = RiskThresholds::default();
//! assert_eq!(defaults[Parameter::Temperature].high(), 90.0);
//!
//! // Hotter-running press line
//! let press = RiskThresholds::builder()
//!     .band(Parameter::Temperature, 80.0, 95.0, 105.0)
//!     .build()?;
//! assert_eq!(press[Parameter::Temperature].low(), 80.0);
//! assert_eq!(press[Parameter::Vibration], defaults[Parameter::Vibration]);
//! # Ok::<(), wearguard_core::ConfigError>(())
//! ```

use core::ops::Index;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::thresholds::*,
    errors::{ConfigError, ConfigResult},
    parameter::{Parameter, ParameterTable},
    reading::Validatable,
    risk::BandRisk,
};

/// Ascending `{low, medium, high}` boundaries for one parameter
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ThresholdBand {
    low: f64,
    medium: f64,
    high: f64,
}

impl ThresholdBand {
    /// Create a band for `parameter`, checking that boundaries are finite
    /// and strictly ascending
    pub fn for_parameter(
        parameter: Parameter,
        low: f64,
        medium: f64,
        high: f64,
    ) -> ConfigResult<Self> {
        if !(low.is_valid() && medium.is_valid() && high.is_valid()) {
            return Err(ConfigError::NonFinite { parameter });
        }

        if !(low < medium && medium < high) {
            return Err(ConfigError::NotAscending {
                parameter,
                low,
                medium,
                high,
            });
        }

        Ok(Self { low, medium, high })
    }

    // Reference constants are known-good, so skip validation for them
    const fn reference(low: f64, medium: f64, high: f64) -> Self {
        Self { low, medium, high }
    }

    /// Upper edge of the nominal band
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper edge of the elevated band
    pub fn medium(&self) -> f64 {
        self.medium
    }

    /// Upper edge of the warning band
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Band risk for a value. Each band includes its upper boundary.
    pub fn risk(&self, value: f64) -> BandRisk {
        if value <= self.low {
            BandRisk::Nominal
        } else if value <= self.medium {
            BandRisk::Elevated
        } else if value <= self.high {
            BandRisk::Warning
        } else {
            BandRisk::Critical
        }
    }
}

/// Reference vibration band, g
pub const REFERENCE_VIBRATION: ThresholdBand =
    ThresholdBand::reference(VIBRATION_LOW_G, VIBRATION_MEDIUM_G, VIBRATION_HIGH_G);

/// Reference temperature band, °C
pub const REFERENCE_TEMPERATURE: ThresholdBand =
    ThresholdBand::reference(TEMPERATURE_LOW_C, TEMPERATURE_MEDIUM_C, TEMPERATURE_HIGH_C);

/// Reference current band, A
pub const REFERENCE_CURRENT: ThresholdBand =
    ThresholdBand::reference(CURRENT_LOW_A, CURRENT_MEDIUM_A, CURRENT_HIGH_A);

/// Reference pressure band, bar
pub const REFERENCE_PRESSURE: ThresholdBand =
    ThresholdBand::reference(PRESSURE_LOW_BAR, PRESSURE_MEDIUM_BAR, PRESSURE_HIGH_BAR);

/// Validated threshold bands for every monitored parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    bands: ParameterTable<ThresholdBand>,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self::reference()
    }
}

impl RiskThresholds {
    /// Reference bands
    pub const fn reference() -> Self {
        Self {
            bands: ParameterTable::new([
                REFERENCE_VIBRATION,
                REFERENCE_TEMPERATURE,
                REFERENCE_CURRENT,
                REFERENCE_PRESSURE,
            ]),
        }
    }

    /// Start from the reference bands and override some of them
    pub fn builder() -> RiskThresholdsBuilder {
        RiskThresholdsBuilder::default()
    }

    /// Band for one parameter
    pub fn band(&self, parameter: Parameter) -> &ThresholdBand {
        &self.bands[parameter]
    }

    /// All bands in canonical order
    pub fn bands(&self) -> &ParameterTable<ThresholdBand> {
        &self.bands
    }
}

impl Index<Parameter> for RiskThresholds {
    type Output = ThresholdBand;

    fn index(&self, parameter: Parameter) -> &ThresholdBand {
        self.band(parameter)
    }
}

/// Builder for [`RiskThresholds`]
///
/// Raw boundaries are collected as given and validated together in
/// [`build`](RiskThresholdsBuilder::build); the first malformed band in
/// canonical order is reported.
#[derive(Debug, Clone)]
pub struct RiskThresholdsBuilder {
    raw: ParameterTable<(f64, f64, f64)>,
}

impl Default for RiskThresholdsBuilder {
    fn default() -> Self {
        let reference = RiskThresholds::reference();
        Self {
            raw: reference.bands.map(|_, b| (b.low, b.medium, b.high)),
        }
    }
}

impl RiskThresholdsBuilder {
    /// Override the band for `parameter`
    pub fn band(mut self, parameter: Parameter, low: f64, medium: f64, high: f64) -> Self {
        self.raw[parameter] = (low, medium, high);
        self
    }

    /// Override the band for `parameter` with an already validated band
    pub fn with_band(self, parameter: Parameter, band: ThresholdBand) -> Self {
        self.band(parameter, band.low, band.medium, band.high)
    }

    /// Validate every band and build the configuration
    pub fn build(self) -> ConfigResult<RiskThresholds> {
        let mut bands = RiskThresholds::reference().bands;
        for (parameter, &(low, medium, high)) in self.raw.iter() {
            bands[parameter] = ThresholdBand::for_parameter(parameter, low, medium, high)?;
        }
        Ok(RiskThresholds { bands })
    }
}
