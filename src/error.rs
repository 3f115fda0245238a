//! Error types for the Elecguide core.
//!
//! The solver and the cable advisor never fail: incomplete input simply
//! leaves fields untouched. [`ElecError`] only covers the string boundaries
//! where a front end hands us a name we do not know.

use thiserror::Error;

/// Result type alias using [`ElecError`].
pub type Result<T> = std::result::Result<T, ElecError>;

/// Unified error type for all Elecguide operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElecError {
    // ============ Calculator Errors ============
    /// Unknown calculator field identifier
    #[error("Unknown field '{name}' (expected voltage, current, resistance, power or phase)")]
    UnknownField { name: String },

    /// Unknown cable table name
    #[error("Unknown cable table '{name}' (expected standard or compact)")]
    UnknownCableTable { name: String },

    // ============ Guide Errors ============
    /// Unknown measurement type
    #[error("Unknown measurement '{name}' (expected voltage, current, resistance or capacitance)")]
    UnknownMeasurement { name: String },

    /// Unknown instrument model
    #[error("Unknown instrument '{name}' (expected red or yellow)")]
    UnknownInstrument { name: String },

    /// Component not listed for the selected measurement
    #[error("Unknown component '{component}' for {measurement} measurement")]
    UnknownComponent {
        measurement: String,
        component: String,
    },

    /// Component chosen before any measurement was selected
    #[error("No measurement selected")]
    NoMeasurement,
}

impl ElecError {
    /// Create an unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Create an unknown measurement error
    pub fn unknown_measurement(name: impl Into<String>) -> Self {
        Self::UnknownMeasurement { name: name.into() }
    }

    /// Create an unknown instrument error
    pub fn unknown_instrument(name: impl Into<String>) -> Self {
        Self::UnknownInstrument { name: name.into() }
    }

    /// Create an unknown component error
    pub fn unknown_component(measurement: impl Into<String>, component: impl Into<String>) -> Self {
        Self::UnknownComponent {
            measurement: measurement.into(),
            component: component.into(),
        }
    }
}
