//! Monitored parameters and per-parameter tables
//!
//! The engine watches exactly four quantities. Rather than looking them up by
//! name, every per-parameter value (threshold band, band risk, weight) lives
//! in a [`ParameterTable`], a fixed array indexed by [`Parameter`]. Iteration
//! always follows [`Parameter::ALL`], which is also the order clauses appear
//! in the reason text.

use core::fmt;
use core::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::scoring::{
    CURRENT_WEIGHT, PRESSURE_WEIGHT, TEMPERATURE_WEIGHT, VIBRATION_WEIGHT,
};

/// Number of monitored parameters
pub const PARAMETER_COUNT: usize = 4;

/// A monitored machine parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Parameter {
    /// Housing vibration, g
    Vibration,
    /// Housing temperature, °C
    Temperature,
    /// Motor current draw, A
    Current,
    /// Line pressure, bar
    Pressure,
}

impl Parameter {
    /// All parameters in canonical order
    pub const ALL: [Parameter; PARAMETER_COUNT] = [
        Parameter::Vibration,
        Parameter::Temperature,
        Parameter::Current,
        Parameter::Pressure,
    ];

    /// Position in [`Parameter::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in configuration documents
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vibration => "vibration",
            Self::Temperature => "temperature",
            Self::Current => "current",
            Self::Pressure => "pressure",
        }
    }

    /// Display unit
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Vibration => "g",
            Self::Temperature => "°C",
            Self::Current => "A",
            Self::Pressure => "bar",
        }
    }

    /// Weight in the overall risk score
    pub const fn weight(self) -> f64 {
        match self {
            Self::Vibration => VIBRATION_WEIGHT,
            Self::Temperature => TEMPERATURE_WEIGHT,
            Self::Current => CURRENT_WEIGHT,
            Self::Pressure => PRESSURE_WEIGHT,
        }
    }

    /// Parse a lowercase parameter name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Parameter {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.name())
    }
}

/// Fixed-size table holding one value per [`Parameter`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParameterTable<T> {
    entries: [T; PARAMETER_COUNT],
}

impl<T> ParameterTable<T> {
    /// Build a table from entries in canonical order
    pub const fn new(entries: [T; PARAMETER_COUNT]) -> Self {
        Self { entries }
    }

    /// Build a table by evaluating `f` for each parameter
    pub fn from_fn(mut f: impl FnMut(Parameter) -> T) -> Self {
        Self {
            entries: Parameter::ALL.map(|p| f(p)),
        }
    }

    /// Map every entry, keeping parameter positions
    pub fn map<U>(&self, mut f: impl FnMut(Parameter, &T) -> U) -> ParameterTable<U> {
        ParameterTable::from_fn(|p| f(p, &self.entries[p.index()]))
    }

    /// Iterate `(parameter, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &T)> {
        Parameter::ALL.into_iter().zip(self.entries.iter())
    }
}

impl<T> Index<Parameter> for ParameterTable<T> {
    type Output = T;

    fn index(&self, parameter: Parameter) -> &T {
        &self.entries[parameter.index()]
    }
}

impl<T> IndexMut<Parameter> for ParameterTable<T> {
    fn index_mut(&mut self, parameter: Parameter) -> &mut T {
        &mut self.entries[parameter.index()]
    }
}
