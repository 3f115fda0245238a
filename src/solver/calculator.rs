//! Calculator session: owned state threaded through the solver.

use tracing::debug;

use crate::cable::{CableRecommendation, CableTable};
use crate::circuit::{format_field, normalize_value, parse_field, CircuitState, EditEvent, Field, PhaseMode};

use super::{solve_rounded, DISPLAY_DECIMALS, MAX_DECIMALS};

/// Calculator configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorConfig {
    /// Phase mode selected when the calculator starts or is reset.
    pub phase: PhaseMode,
    /// Threshold table used for cable recommendations.
    pub cable_table: CableTable,
    /// Decimals kept when a computed value is written to a field.
    pub decimals: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            phase: PhaseMode::Single,
            cable_table: CableTable::Standard,
            decimals: DISPLAY_DECIMALS,
        }
    }
}

impl CalculatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial phase mode.
    pub fn with_phase(mut self, phase: PhaseMode) -> Self {
        self.phase = phase;
        self
    }

    /// Set the cable threshold table.
    pub fn with_cable_table(mut self, cable_table: CableTable) -> Self {
        self.cable_table = cable_table;
        self
    }

    /// Set the display decimals.
    ///
    /// Values written by the solver are rounded to this precision and read
    /// back rounded on the next edit. Capped at [`MAX_DECIMALS`].
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals.min(MAX_DECIMALS);
        self
    }
}

/// The calculator as seen by a front end.
///
/// Holds the displayed fields, the phase mode and the last cable
/// recommendation. Every mutating call runs the solver to completion and
/// returns the new recommendation.
#[derive(Debug, Clone)]
pub struct Calculator {
    state: CircuitState,
    cable: CableRecommendation,
    config: CalculatorConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl Calculator {
    /// Create a calculator with the voltage preset to the nominal value.
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            state: CircuitState::new(config.phase),
            cable: CableRecommendation::Undetermined,
            config,
        }
    }

    /// Start from an existing state (e.g. restored by the front end).
    pub fn with_state(config: CalculatorConfig, state: CircuitState) -> Self {
        let mut calculator = Self {
            state,
            cable: CableRecommendation::Undetermined,
            config,
        };
        calculator.refresh_cable();
        calculator
    }

    /// The user typed `raw` into `field`.
    pub fn edit(&mut self, field: Field, raw: &str) -> CableRecommendation {
        self.set_value(field, parse_field(raw))
    }

    /// Set a field from an already numeric value and run the solver.
    pub fn set_value(&mut self, field: Field, value: Option<f64>) -> CableRecommendation {
        self.state.set(field, normalize_value(value));
        self.apply(EditEvent::from(field))
    }

    /// Switch to `phase`. Selecting the current mode again changes nothing.
    pub fn set_phase(&mut self, phase: PhaseMode) -> CableRecommendation {
        if phase == self.state.phase {
            return self.cable;
        }
        self.state.phase = phase;
        self.apply(EditEvent::PhaseMode)
    }

    /// Switch between single-phase and three-phase.
    pub fn toggle_phase(&mut self) -> CableRecommendation {
        self.set_phase(self.state.phase.toggled())
    }

    /// Clear every field and preset the nominal voltage of the current mode.
    pub fn reset(&mut self) {
        self.state = CircuitState::new(self.state.phase);
        self.cable = CableRecommendation::Undetermined;
        debug!(phase = %self.state.phase, "calculator reset");
    }

    /// Run the solver for an edit already reflected in the state.
    pub fn apply(&mut self, event: EditEvent) -> CableRecommendation {
        self.state = solve_rounded(event, self.state, self.config.decimals);
        self.refresh_cable();
        debug!(?event, cable = %self.cable, "edit applied");
        self.cable
    }

    fn refresh_cable(&mut self) {
        self.cable =
            CableRecommendation::from_current_with(self.config.cable_table, self.state.authoritative_current());
    }

    pub fn state(&self) -> &CircuitState {
        &self.state
    }

    pub fn phase(&self) -> PhaseMode {
        self.state.phase
    }

    pub fn cable(&self) -> CableRecommendation {
        self.cable
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Raw value of a field.
    pub fn value(&self, field: Field) -> Option<f64> {
        self.state.get(field)
    }

    /// Field value formatted for display.
    pub fn display(&self, field: Field) -> String {
        format_field(self.state.get(field), self.config.decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cable::CableSection;

    #[test]
    fn test_new_presets_voltage() {
        let calc = Calculator::default();
        assert_eq!(calc.value(Field::Voltage), Some(230.0));
        assert_eq!(calc.cable(), CableRecommendation::Undetermined);

        let calc = Calculator::new(CalculatorConfig::new().with_phase(PhaseMode::Three));
        assert_eq!(calc.value(Field::Voltage), Some(400.0));
    }

    #[test]
    fn test_edit_text() {
        let mut calc = Calculator::default();
        let cable = calc.edit(Field::Resistance, "23");
        assert_eq!(calc.value(Field::Current), Some(10.0));
        assert_eq!(calc.display(Field::Power), "2300.00");
        assert_eq!(cable.section(), Some(CableSection::Mm1_5));
    }

    #[test]
    fn test_cleared_field_keeps_others() {
        let mut calc = Calculator::default();
        calc.edit(Field::Current, "10");
        let cable = calc.edit(Field::Current, "");
        assert_eq!(calc.value(Field::Current), None);
        assert_eq!(calc.value(Field::Power), Some(2300.0));
        assert_eq!(cable, CableRecommendation::Undetermined);
    }

    #[test]
    fn test_negative_input_is_cleared() {
        let mut calc = Calculator::default();
        calc.set_value(Field::Current, Some(-2.0));
        assert_eq!(calc.value(Field::Current), None);
        assert_eq!(calc.value(Field::Power), None);
    }

    #[test]
    fn test_set_same_phase_is_noop() {
        let mut calc = Calculator::default();
        calc.edit(Field::Voltage, "400");
        calc.set_phase(PhaseMode::Single);
        assert_eq!(calc.value(Field::Voltage), Some(400.0));
        assert_eq!(calc.phase(), PhaseMode::Single);
    }

    #[test]
    fn test_reset() {
        let mut calc = Calculator::default();
        calc.toggle_phase();
        calc.edit(Field::Current, "12");
        calc.reset();
        assert_eq!(calc.phase(), PhaseMode::Three);
        assert_eq!(calc.value(Field::Voltage), Some(400.0));
        assert_eq!(calc.value(Field::Current), None);
        assert_eq!(calc.value(Field::Power), None);
        assert_eq!(calc.cable(), CableRecommendation::Undetermined);
    }

    #[test]
    fn test_compact_table() {
        let config = CalculatorConfig::new().with_cable_table(CableTable::Compact);
        let mut calc = Calculator::new(config);
        let cable = calc.edit(Field::Current, "22");
        assert_eq!(cable.section(), Some(CableSection::Mm6));
    }

    #[test]
    fn test_decimals_are_capped() {
        let config = CalculatorConfig::new().with_decimals(400);
        assert_eq!(config.decimals, MAX_DECIMALS);

        let mut calc = Calculator::new(config);
        calc.edit(Field::Current, "10");
        assert_eq!(calc.value(Field::Power), Some(2300.0));
        assert_eq!(calc.value(Field::Resistance), Some(23.0));
    }

    #[test]
    fn test_with_state_computes_cable() {
        let state = CircuitState::new(PhaseMode::Single).with(Field::Current, 30.0);
        let calc = Calculator::with_state(CalculatorConfig::default(), state);
        assert_eq!(calc.cable().section(), Some(CableSection::Mm6));
    }
}
