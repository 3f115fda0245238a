//! Core types for the four linked circuit quantities.

use std::fmt;
use std::str::FromStr;

use crate::error::{ElecError, Result};
use crate::solver::{SINGLE_PHASE_VOLTAGE, SQRT3, THREE_PHASE_VOLTAGE};

/// One of the four numeric fields of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Voltage U, in volts
    Voltage,
    /// Current I, in amperes
    Current,
    /// Resistance R, in ohms
    Resistance,
    /// Power P, in watts
    Power,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: [Field; 4] = [Field::Voltage, Field::Current, Field::Resistance, Field::Power];

    /// Lowercase name used on the command line and from JavaScript.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Voltage => "voltage",
            Field::Current => "current",
            Field::Resistance => "resistance",
            Field::Power => "power",
        }
    }

    /// Unit symbol.
    pub fn unit(&self) -> &'static str {
        match self {
            Field::Voltage => "V",
            Field::Current => "A",
            Field::Resistance => "Ω",
            Field::Power => "W",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = ElecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "voltage" | "u" | "v" => Ok(Field::Voltage),
            "current" | "i" | "a" => Ok(Field::Current),
            "resistance" | "r" => Ok(Field::Resistance),
            "power" | "p" | "w" => Ok(Field::Power),
            _ => Err(ElecError::unknown_field(s)),
        }
    }
}

/// The single input that was just changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditEvent {
    Voltage,
    Current,
    Resistance,
    Power,
    /// The phase selector was switched; the state carries the new mode.
    PhaseMode,
}

impl From<Field> for EditEvent {
    fn from(field: Field) -> Self {
        match field {
            Field::Voltage => EditEvent::Voltage,
            Field::Current => EditEvent::Current,
            Field::Resistance => EditEvent::Resistance,
            Field::Power => EditEvent::Power,
        }
    }
}

impl FromStr for EditEvent {
    type Err = ElecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phase" | "phase-mode" | "phase_mode" => Ok(EditEvent::PhaseMode),
            other => other.parse::<Field>().map(EditEvent::from).map_err(|_| ElecError::unknown_field(s)),
        }
    }
}

/// Supply topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhaseMode {
    #[default]
    Single,
    Three,
}

impl PhaseMode {
    /// Build from the state of a "three-phase" checkbox.
    pub fn from_three_phase(three_phase: bool) -> Self {
        if three_phase {
            PhaseMode::Three
        } else {
            PhaseMode::Single
        }
    }

    pub fn is_three_phase(&self) -> bool {
        matches!(self, PhaseMode::Three)
    }

    /// The other mode.
    pub fn toggled(&self) -> Self {
        match self {
            PhaseMode::Single => PhaseMode::Three,
            PhaseMode::Three => PhaseMode::Single,
        }
    }

    /// Nominal supply voltage: 230 V single-phase, 400 V three-phase.
    pub fn nominal_voltage(&self) -> f64 {
        match self {
            PhaseMode::Single => SINGLE_PHASE_VOLTAGE,
            PhaseMode::Three => THREE_PHASE_VOLTAGE,
        }
    }

    /// Multiplier applied in the power law (P = U·I·k).
    pub fn power_factor(&self) -> f64 {
        match self {
            PhaseMode::Single => 1.0,
            PhaseMode::Three => SQRT3,
        }
    }
}

impl fmt::Display for PhaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseMode::Single => write!(f, "single-phase"),
            PhaseMode::Three => write!(f, "three-phase"),
        }
    }
}

/// Displayed values of the calculator.
///
/// `None` means the field is empty, which is not the same as zero. No
/// invariant ties all four values together: a field the last rule did not
/// touch keeps whatever it showed before.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CircuitState {
    pub voltage: Option<f64>,
    pub current: Option<f64>,
    pub resistance: Option<f64>,
    pub power: Option<f64>,
    pub phase: PhaseMode,
}

impl CircuitState {
    /// A fresh state with the voltage preset to the nominal value of `phase`.
    pub fn new(phase: PhaseMode) -> Self {
        Self {
            voltage: Some(phase.nominal_voltage()),
            phase,
            ..Self::empty(phase)
        }
    }

    /// A state with every field empty.
    pub fn empty(phase: PhaseMode) -> Self {
        Self {
            voltage: None,
            current: None,
            resistance: None,
            power: None,
            phase,
        }
    }

    /// Builder-style setter for a single field.
    pub fn with(mut self, field: Field, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }

    /// Raw displayed value of a field.
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Voltage => self.voltage,
            Field::Current => self.current,
            Field::Resistance => self.resistance,
            Field::Power => self.power,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        match field {
            Field::Voltage => self.voltage = value,
            Field::Current => self.current = value,
            Field::Resistance => self.resistance = value,
            Field::Power => self.power = value,
        }
    }

    /// Value of a field if it can take part in a computation
    /// (present, finite and non-zero).
    pub fn defined(&self, field: Field) -> Option<f64> {
        self.get(field).filter(|v| v.is_finite() && *v != 0.0)
    }

    /// Current handed to the cable advisor, if strictly positive.
    pub fn authoritative_current(&self) -> Option<f64> {
        self.current.filter(|i| i.is_finite() && *i > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parse() {
        assert_eq!("Voltage".parse::<Field>().unwrap(), Field::Voltage);
        assert_eq!("i".parse::<Field>().unwrap(), Field::Current);
        assert_eq!(" power ".parse::<Field>().unwrap(), Field::Power);
        assert!("ohms".parse::<Field>().is_err());
    }

    #[test]
    fn test_edit_event_parse() {
        assert_eq!("phase".parse::<EditEvent>().unwrap(), EditEvent::PhaseMode);
        assert_eq!("r".parse::<EditEvent>().unwrap(), EditEvent::Resistance);
        assert_eq!(
            "frequency".parse::<EditEvent>(),
            Err(ElecError::unknown_field("frequency"))
        );
    }

    #[test]
    fn test_phase_mode() {
        assert_eq!(PhaseMode::Single.toggled(), PhaseMode::Three);
        assert_eq!(PhaseMode::Three.nominal_voltage(), 400.0);
        assert_eq!(PhaseMode::Single.power_factor(), 1.0);
        assert_eq!(PhaseMode::Three.power_factor(), 1.732);
        assert!(PhaseMode::from_three_phase(true).is_three_phase());
    }

    #[test]
    fn test_defined_excludes_zero_and_nan() {
        let state = CircuitState::empty(PhaseMode::Single)
            .with(Field::Voltage, 0.0)
            .with(Field::Current, f64::NAN)
            .with(Field::Resistance, 12.0);

        assert_eq!(state.defined(Field::Voltage), None);
        assert_eq!(state.defined(Field::Current), None);
        assert_eq!(state.defined(Field::Resistance), Some(12.0));
        assert_eq!(state.defined(Field::Power), None);
    }

    #[test]
    fn test_new_presets_nominal_voltage() {
        let state = CircuitState::new(PhaseMode::Three);
        assert_eq!(state.voltage, Some(400.0));
        assert_eq!(state.current, None);
        assert_eq!(state.authoritative_current(), None);
    }

    #[test]
    fn test_authoritative_current_requires_positive() {
        let mut state = CircuitState::empty(PhaseMode::Single);
        state.current = Some(-3.0);
        assert_eq!(state.authoritative_current(), None);
        state.current = Some(0.0);
        assert_eq!(state.authoritative_current(), None);
        state.current = Some(4.5);
        assert_eq!(state.authoritative_current(), Some(4.5));
    }
}
