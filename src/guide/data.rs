//! Static guide content.

use super::{ComponentOption, InstrumentModel, MeasurementType, Overlay, Severity};

pub(super) struct MeasurementText {
    pub title: &'static str,
    pub severity: Severity,
    pub warning: &'static str,
    pub guidance: &'static str,
    pub info: &'static str,
}

pub(super) fn text(measurement: MeasurementType) -> MeasurementText {
    match measurement {
        MeasurementType::Voltage => MeasurementText {
            title: "Voltage (Volt)",
            severity: Severity::Danger,
            warning: "WARNING: LIVE CIRCUIT!",
            guidance: "Connect in parallel. Select the V~ range above 230 V.",
            info: "Checks that voltage is present. 230 V between phase and neutral, 400 V between phases.",
        },
        MeasurementType::Current => MeasurementText {
            title: "Current (Ampere)",
            severity: Severity::Danger,
            warning: "Use a clamp meter",
            guidance: "Clamp the phase conductor only.",
            info: "Measures the current flowing in the circuit. Always clamp around a SINGLE conductor.",
        },
        MeasurementType::Resistance => MeasurementText {
            title: "Resistance / Continuity",
            severity: Severity::Safe,
            warning: "IMPORTANT: POWER OFF!",
            guidance: "Switch the supply off before measuring.",
            info: "Continuity test (beep) or ohmic value. Always with the circuit DE-ENERGIZED.",
        },
        MeasurementType::Capacitance => MeasurementText {
            title: "Capacitor (Capacitance)",
            severity: Severity::Danger,
            warning: "DANGER: DISCHARGE FIRST!",
            guidance: "Short the capacitor terminals with an insulated screwdriver before measuring.",
            info: "Measures the capacitance (µF) of capacitors. Discharge the capacitor before measuring!",
        },
    }
}

const fn at(top: f64, left: f64) -> Option<Overlay> {
    Some(Overlay { top, left })
}

/// Position of the selector dial setting on each instrument photo.
pub(super) fn overlay(instrument: InstrumentModel, measurement: MeasurementType) -> Option<Overlay> {
    use InstrumentModel::*;
    use MeasurementType::*;

    match (instrument, measurement) {
        (Red, Voltage) => at(80.0, 35.0),
        (Red, Resistance) => at(85.0, 30.0),
        (Red, Current) => at(25.0, 25.0),
        // Capacitor symbol, approximate
        (Red, Capacitance) => at(75.0, 80.0),
        (Yellow, Voltage) => at(75.0, 22.0),
        (Yellow, Resistance) => at(48.0, 12.0),
        (Yellow, Current) => at(12.0, 50.0),
        // Shares the ohm position on the clamp meter
        (Yellow, Capacitance) => at(48.0, 12.0),
    }
}

const fn opt(key: &'static str, label: &'static str) -> ComponentOption {
    ComponentOption { key, label }
}

static VOLTAGE_COMPONENTS: [ComponentOption; 3] = [
    opt("outlet", "Power outlet"),
    opt("motor", "Motor / Terminal block"),
    opt("contactor", "Contactor / Circuit breaker"),
];

static RESISTANCE_COMPONENTS: [ComponentOption; 3] = [
    opt("contact", "Dry contact / Thermostat"),
    opt("motor", "Motor winding"),
    opt("heater", "Heating element"),
];

static CURRENT_COMPONENTS: [ComponentOption; 2] = [
    opt("motor", "Motor"),
    opt("panel", "Panel outgoing circuit"),
];

static CAPACITANCE_COMPONENTS: [ComponentOption; 3] = [
    opt("start", "Start capacitor"),
    opt("run", "Run capacitor"),
    opt("board", "Electronic component"),
];

pub(super) fn components(measurement: MeasurementType) -> &'static [ComponentOption] {
    match measurement {
        MeasurementType::Voltage => &VOLTAGE_COMPONENTS,
        MeasurementType::Resistance => &RESISTANCE_COMPONENTS,
        MeasurementType::Current => &CURRENT_COMPONENTS,
        MeasurementType::Capacitance => &CAPACITANCE_COMPONENTS,
    }
}
