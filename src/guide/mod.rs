//! Multimeter measurement guide.
//!
//! Static reference content: for each kind of measurement, a title, a safety
//! warning, short guidance and a longer explanation, plus where the selector
//! dial sits on the photo of each supported instrument.
//!
//! # Example
//!
//! ```
//! use elecguide_core::guide::{lookup, InstrumentModel, MeasurementType, Severity};
//!
//! let entry = lookup(MeasurementType::Resistance, InstrumentModel::Red);
//! assert_eq!(entry.severity, Severity::Safe);
//! assert!(entry.overlay.is_some());
//! ```

mod data;
mod session;

pub use session::{GuideSession, GuideView};

use std::fmt;
use std::str::FromStr;

use crate::error::{ElecError, Result};

/// Number of help photos probed per component.
pub const GALLERY_SIZE: usize = 6;

/// Kind of measurement taken with the multimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementType {
    Voltage,
    Current,
    Resistance,
    Capacitance,
}

impl MeasurementType {
    pub const ALL: [MeasurementType; 4] = [
        MeasurementType::Voltage,
        MeasurementType::Current,
        MeasurementType::Resistance,
        MeasurementType::Capacitance,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MeasurementType::Voltage => "voltage",
            MeasurementType::Current => "current",
            MeasurementType::Resistance => "resistance",
            MeasurementType::Capacitance => "capacitance",
        }
    }
}

impl fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MeasurementType {
    type Err = ElecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "voltage" => Ok(MeasurementType::Voltage),
            "current" => Ok(MeasurementType::Current),
            "resistance" | "continuity" => Ok(MeasurementType::Resistance),
            "capacitance" => Ok(MeasurementType::Capacitance),
            _ => Err(ElecError::unknown_measurement(s)),
        }
    }
}

/// Reference instrument shown in the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InstrumentModel {
    /// Red bench multimeter
    #[default]
    Red,
    /// Yellow clamp meter
    Yellow,
}

impl InstrumentModel {
    pub const ALL: [InstrumentModel; 2] = [InstrumentModel::Red, InstrumentModel::Yellow];

    pub fn key(&self) -> &'static str {
        match self {
            InstrumentModel::Red => "red",
            InstrumentModel::Yellow => "yellow",
        }
    }

    /// Photo of the instrument, relative to the web root.
    pub fn image_path(&self) -> &'static str {
        match self {
            InstrumentModel::Red => "assets/red_multimeter.png",
            InstrumentModel::Yellow => "assets/yellow_multimeter.png",
        }
    }
}

impl fmt::Display for InstrumentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InstrumentModel {
    type Err = ElecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(InstrumentModel::Red),
            "yellow" => Ok(InstrumentModel::Yellow),
            _ => Err(ElecError::unknown_instrument(s)),
        }
    }
}

/// Safety level of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Taken on a live or charged circuit
    Danger,
    /// Taken with the circuit de-energized
    Safe,
}

impl Severity {
    pub fn key(&self) -> &'static str {
        match self {
            Severity::Danger => "danger",
            Severity::Safe => "safe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Ring position over the instrument photo, in percent of its height/width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub top: f64,
    pub left: f64,
}

/// A typical component the measurement is taken on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentOption {
    /// Identifier, also used in help image file names
    pub key: &'static str,
    pub label: &'static str,
}

/// Guide content for one measurement on one instrument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideEntry {
    pub measurement: MeasurementType,
    pub title: &'static str,
    pub severity: Severity,
    pub warning: &'static str,
    pub guidance: &'static str,
    /// Long-form explanation
    pub info: &'static str,
    pub overlay: Option<Overlay>,
}

/// Look up the guide entry for `measurement` on `instrument`.
pub fn lookup(measurement: MeasurementType, instrument: InstrumentModel) -> GuideEntry {
    let text = data::text(measurement);
    GuideEntry {
        measurement,
        title: text.title,
        severity: text.severity,
        warning: text.warning,
        guidance: text.guidance,
        info: text.info,
        overlay: data::overlay(instrument, measurement),
    }
}

/// Typical components for a measurement.
pub fn components(measurement: MeasurementType) -> &'static [ComponentOption] {
    data::components(measurement)
}

/// Find a component listed for `measurement` by key.
pub fn find_component(measurement: MeasurementType, key: &str) -> Result<&'static ComponentOption> {
    let key = key.trim();
    components(measurement)
        .iter()
        .find(|c| c.key.eq_ignore_ascii_case(key))
        .ok_or_else(|| ElecError::unknown_component(measurement.key(), key))
}

/// Candidate help photo paths for a component.
///
/// Not every photo exists; the renderer drops the ones that fail to load.
pub fn gallery(measurement: MeasurementType, component: &ComponentOption) -> Vec<String> {
    (1..=GALLERY_SIZE)
        .map(|n| format!("assets/{}_{}_{}.jpg", measurement.key(), component.key, n))
        .collect()
}
