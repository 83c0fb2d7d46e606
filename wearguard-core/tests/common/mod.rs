//! Shared fixtures for integration tests
//!
//! Readings are placed relative to the reference bands so each fixture lands
//! in a known band for every parameter.

#![allow(dead_code)]

use proptest::prelude::*;
use wearguard_core::{BandRisk, Parameter, RiskThresholds, SensorReading};

/// Value that falls inside `band` of `parameter` under `thresholds`
pub fn value_in_band(thresholds: &RiskThresholds, parameter: Parameter, band: BandRisk) -> f64 {
    let b = thresholds[parameter];
    match band {
        BandRisk::Nominal => b.low(),
        BandRisk::Elevated => (b.low() + b.medium()) / 2.0,
        BandRisk::Warning => (b.medium() + b.high()) / 2.0,
        BandRisk::Critical => b.high() * 2.0,
    }
}

/// Reading whose parameters sit in the given bands, canonical order
pub fn reading_in_bands(machine_id: &str, bands: [BandRisk; 4]) -> SensorReading {
    let thresholds = RiskThresholds::default();
    let mut reading = SensorReading::new(machine_id);
    for (parameter, band) in Parameter::ALL.into_iter().zip(bands) {
        let value = value_in_band(&thresholds, parameter, band);
        match parameter {
            Parameter::Vibration => reading.vibration = value,
            Parameter::Temperature => reading.temperature = value,
            Parameter::Current => reading.current = value,
            Parameter::Pressure => reading.pressure = value,
        }
    }
    reading
}

/// Every band in ascending order
pub const ALL_BANDS: [BandRisk; 4] = [
    BandRisk::Nominal,
    BandRisk::Elevated,
    BandRisk::Warning,
    BandRisk::Critical,
];

/// Strategy for plausible shop-floor readings, including out-of-range
/// and negative values
pub fn any_reading() -> impl Strategy<Value = SensorReading> {
    (
        -1.0f64..6.0,
        -20.0f64..160.0,
        -5.0f64..40.0,
        -1.0f64..8.0,
        0.0f64..100_000.0,
    )
        .prop_map(|(v, t, c, p, hours)| {
            SensorReading::new("prop")
                .with_vibration(v)
                .with_temperature(t)
                .with_current(c)
                .with_pressure(p)
                .with_operating_hours(hours)
        })
}

/// Strategy for any combination of bands
pub fn any_bands() -> impl Strategy<Value = [BandRisk; 4]> {
    prop::array::uniform4(prop::sample::select(ALL_BANDS.to_vec()))
}
