//! Rule table driven by the edited field.

use tracing::{debug, trace};

use crate::circuit::{round_to, CircuitState, EditEvent, Field};

use super::DISPLAY_DECIMALS;

/// A derivation fired by an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// U, R known: write I and P
    FromResistance,
    /// U, I known: write P and R
    FromCurrent,
    /// U, P known: write I and R
    FromPower,
}

/// Recompute the fields that depend on `event`.
///
/// Never fails: if the edited field or its partner is empty the state is
/// returned unchanged. Written values are rounded to two decimals.
pub fn solve(event: EditEvent, state: CircuitState) -> CircuitState {
    solve_rounded(event, state, DISPLAY_DECIMALS)
}

/// [`solve`] with a configurable number of display decimals.
pub fn solve_rounded(event: EditEvent, state: CircuitState, decimals: u32) -> CircuitState {
    let mut next = state;

    match event {
        EditEvent::Resistance => {
            apply(Rule::FromResistance, &mut next, decimals);
        }
        EditEvent::Current | EditEvent::Voltage => {
            apply(Rule::FromCurrent, &mut next, decimals);
        }
        EditEvent::Power => {
            apply(Rule::FromPower, &mut next, decimals);
        }
        EditEvent::PhaseMode => {
            let previous = next.phase.toggled();
            let at_previous_default = next
                .defined(Field::Voltage)
                .map_or(true, |u| u == previous.nominal_voltage());

            if at_previous_default {
                let nominal = next.phase.nominal_voltage();
                debug!(phase = %next.phase, voltage = nominal, "reset voltage to nominal");
                next.voltage = Some(nominal);
            }

            if next.defined(Field::Current).is_some() {
                apply(Rule::FromCurrent, &mut next, decimals);
            } else if next.defined(Field::Resistance).is_some() {
                apply(Rule::FromResistance, &mut next, decimals);
            }
        }
    }

    next
}

/// Fire `rule` if its inputs are defined. Returns whether anything was written.
fn apply(rule: Rule, state: &mut CircuitState, decimals: u32) -> bool {
    let k = state.phase.power_factor();
    let round = |v: f64| Some(round_to(v, decimals)).filter(|x| x.is_finite());

    let Some(u) = state.defined(Field::Voltage) else {
        trace!(?rule, "skipped: no voltage");
        return false;
    };

    match rule {
        Rule::FromResistance => {
            let Some(r) = state.defined(Field::Resistance) else {
                trace!(?rule, "skipped: no resistance");
                return false;
            };
            let i = u / r;
            state.current = round(i);
            state.power = round(u * i * k);
        }
        Rule::FromCurrent => {
            let Some(i) = state.defined(Field::Current) else {
                trace!(?rule, "skipped: no current");
                return false;
            };
            state.power = round(u * i * k);
            state.resistance = round(u / i);
        }
        Rule::FromPower => {
            let Some(p) = state.defined(Field::Power) else {
                trace!(?rule, "skipped: no power");
                return false;
            };
            let i = p / (u * k);
            state.current = round(i);
            // An overflowed current leaves nothing to derive R from
            state.resistance = if i.is_finite() { round(u / i) } else { None };
        }
    }

    debug!(
        ?rule,
        phase = %state.phase,
        voltage = ?state.voltage,
        current = ?state.current,
        resistance = ?state.resistance,
        power = ?state.power,
        "solved"
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::PhaseMode;
    use approx::assert_relative_eq;

    fn single(u: Option<f64>, i: Option<f64>, r: Option<f64>, p: Option<f64>) -> CircuitState {
        CircuitState {
            voltage: u,
            current: i,
            resistance: r,
            power: p,
            phase: PhaseMode::Single,
        }
    }

    #[test]
    fn test_resistance_edit() {
        let state = single(Some(230.0), None, Some(23.0), None);
        let next = solve(EditEvent::Resistance, state);
        assert_eq!(next.current, Some(10.0));
        assert_eq!(next.power, Some(2300.0));
        assert_eq!(next.resistance, Some(23.0));
    }

    #[test]
    fn test_current_edit() {
        let state = single(Some(230.0), Some(4.0), None, None);
        let next = solve(EditEvent::Current, state);
        assert_eq!(next.power, Some(920.0));
        assert_eq!(next.resistance, Some(57.5));
    }

    #[test]
    fn test_voltage_edit_uses_current_rule() {
        let state = single(Some(115.0), Some(5.0), Some(46.0), Some(1150.0));
        let next = solve(EditEvent::Voltage, state);
        assert_eq!(next.power, Some(575.0));
        assert_eq!(next.resistance, Some(23.0));
        assert_eq!(next.current, Some(5.0));
    }

    #[test]
    fn test_power_edit() {
        let state = single(Some(230.0), None, None, Some(1000.0));
        let next = solve(EditEvent::Power, state);
        assert_eq!(next.current, Some(4.35));
        // R uses the unrounded current: 230 / (1000 / 230) = 52.9
        assert_eq!(next.resistance, Some(52.9));
    }

    #[test]
    fn test_three_phase_power() {
        let state = CircuitState {
            phase: PhaseMode::Three,
            ..single(Some(400.0), Some(10.0), None, None)
        };
        let next = solve(EditEvent::Current, state);
        assert_relative_eq!(next.power.unwrap(), 6928.0);
        assert_eq!(next.resistance, Some(40.0));
    }

    #[test]
    fn test_three_phase_power_edit() {
        let state = CircuitState {
            phase: PhaseMode::Three,
            ..single(Some(400.0), None, None, Some(6928.0))
        };
        let next = solve(EditEvent::Power, state);
        assert_relative_eq!(next.current.unwrap(), 10.0);
        assert_relative_eq!(next.resistance.unwrap(), 40.0);
    }

    #[test]
    fn test_missing_partner_writes_nothing() {
        let state = single(None, Some(10.0), None, None);
        assert_eq!(solve(EditEvent::Current, state), state);

        let state = single(Some(230.0), None, None, None);
        assert_eq!(solve(EditEvent::Resistance, state), state);
        assert_eq!(solve(EditEvent::Power, state), state);
        assert_eq!(solve(EditEvent::Voltage, state), state);
    }

    #[test]
    fn test_zero_is_undefined() {
        let state = single(Some(230.0), Some(0.0), None, None);
        assert_eq!(solve(EditEvent::Current, state), state);
    }

    #[test]
    fn test_phase_toggle_resets_nominal_voltage() {
        let state = CircuitState {
            phase: PhaseMode::Three,
            ..single(Some(230.0), None, None, None)
        };
        let next = solve(EditEvent::PhaseMode, state);
        assert_eq!(next.voltage, Some(400.0));
    }

    #[test]
    fn test_phase_toggle_fills_empty_voltage() {
        let state = single(None, None, None, None);
        let next = solve(EditEvent::PhaseMode, state);
        assert_eq!(next.voltage, Some(230.0));
    }

    #[test]
    fn test_phase_toggle_keeps_custom_voltage() {
        let state = CircuitState {
            phase: PhaseMode::Three,
            ..single(Some(250.0), None, None, None)
        };
        let next = solve(EditEvent::PhaseMode, state);
        assert_eq!(next.voltage, Some(250.0));
    }

    #[test]
    fn test_phase_toggle_cascades_current_first() {
        // Single -> Three with I and R both present: the current rule wins
        let state = CircuitState {
            phase: PhaseMode::Three,
            ..single(Some(230.0), Some(10.0), Some(23.0), Some(2300.0))
        };
        let next = solve(EditEvent::PhaseMode, state);
        assert_eq!(next.voltage, Some(400.0));
        assert_eq!(next.current, Some(10.0));
        assert_eq!(next.resistance, Some(40.0));
        assert_relative_eq!(next.power.unwrap(), 6928.0);
    }

    #[test]
    fn test_phase_toggle_cascades_resistance() {
        let state = CircuitState {
            phase: PhaseMode::Three,
            ..single(Some(230.0), None, Some(40.0), None)
        };
        let next = solve(EditEvent::PhaseMode, state);
        assert_eq!(next.current, Some(10.0));
        assert_relative_eq!(next.power.unwrap(), 6928.0);
    }

    #[test]
    fn test_overflow_empties_field() {
        let state = single(Some(1e300), Some(1e300), None, None);
        let next = solve(EditEvent::Current, state);
        assert_eq!(next.power, None);
        assert_eq!(next.resistance, Some(1.0));
    }

    #[test]
    fn test_overflowed_current_writes_no_resistance() {
        let state = single(Some(5e-324), None, Some(7.0), Some(1.0));
        let next = solve(EditEvent::Power, state);
        assert_eq!(next.current, None);
        assert_eq!(next.resistance, None);
    }

    #[test]
    fn test_power_edit_rounds_exact_binary_current() {
        // 6 / 400 = 0.01499999999999999944..., displayed as 0.01
        let state = single(Some(400.0), None, None, Some(6.0));
        let next = solve(EditEvent::Power, state);
        assert_eq!(next.current, Some(0.01));
        assert_eq!(next.resistance, Some(26666.67));

        // The next edit reads back the rounded current
        let next = solve(EditEvent::Voltage, next);
        assert_eq!(next.power, Some(4.0));
        assert_eq!(next.resistance, Some(40000.0));
    }

    #[test]
    fn test_custom_decimals() {
        let state = single(Some(230.0), None, None, Some(1000.0));
        let next = solve_rounded(EditEvent::Power, state, 3);
        assert_eq!(next.current, Some(4.348));
    }
}
