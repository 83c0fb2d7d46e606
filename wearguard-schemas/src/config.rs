//! Threshold Configuration Documents
//!
//! A configuration document maps parameter names to `{low, medium, high}`
//! bands. It is parsed leniently (any parameter may be omitted) and then
//! validated strictly: [`ThresholdConfig::into_thresholds`] refuses any band
//! that is not finite and strictly ascending.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wearguard_core::{Parameter, RiskThresholds, ThresholdBand};

use crate::SchemaError;

/// Raw band as written in a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandConfig {
    /// Upper edge of the nominal band
    pub low: f64,
    /// Upper edge of the elevated band
    pub medium: f64,
    /// Upper edge of the warning band
    pub high: f64,
}

impl From<&ThresholdBand> for BandConfig {
    fn from(band: &ThresholdBand) -> Self {
        Self {
            low: band.low(),
            medium: band.medium(),
            high: band.high(),
        }
    }
}

/// Threshold configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    /// Vibration band, g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibration: Option<BandConfig>,
    /// Temperature band, °C
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<BandConfig>,
    /// Current band, A
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<BandConfig>,
    /// Pressure band, bar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<BandConfig>,
}

impl ThresholdConfig {
    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        log::info!("loaded threshold configuration from {}", path.display());
        Ok(config)
    }

    /// Band configured for `parameter`, if any
    pub fn band(&self, parameter: Parameter) -> Option<&BandConfig> {
        match parameter {
            Parameter::Vibration => self.vibration.as_ref(),
            Parameter::Temperature => self.temperature.as_ref(),
            Parameter::Current => self.current.as_ref(),
            Parameter::Pressure => self.pressure.as_ref(),
        }
    }

    fn band_mut(&mut self, parameter: Parameter) -> &mut Option<BandConfig> {
        match parameter {
            Parameter::Vibration => &mut self.vibration,
            Parameter::Temperature => &mut self.temperature,
            Parameter::Current => &mut self.current,
            Parameter::Pressure => &mut self.pressure,
        }
    }

    /// Validate and build thresholds; omitted parameters keep their
    /// reference band
    pub fn into_thresholds(self) -> Result<RiskThresholds, SchemaError> {
        let mut builder = RiskThresholds::builder();
        for parameter in Parameter::ALL {
            match self.band(parameter) {
                Some(band) => {
                    builder = builder.band(parameter, band.low, band.medium, band.high);
                }
                None => log::debug!("{parameter}: using reference thresholds"),
            }
        }

        let thresholds = builder.build().map_err(|err| {
            log::error!("rejected threshold configuration: {err}");
            SchemaError::from(err)
        })?;
        Ok(thresholds)
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&RiskThresholds> for ThresholdConfig {
    fn from(thresholds: &RiskThresholds) -> Self {
        let mut config = Self::default();
        for (parameter, band) in thresholds.bands().iter() {
            *config.band_mut(parameter) = Some(BandConfig::from(band));
        }
        config
    }
}
