//! Ohm's law / power law solver.
//!
//! This module keeps the four calculator fields consistent after an edit.
//!
//! ## Laws
//!
//! ```text
//! U = R · I
//! P = U · I · k        k = 1 (single-phase), 1.732 (three-phase)
//! ```
//!
//! The solver is not a constraint solver. Each edit fires at most one rule,
//! which rewrites the two fields derived from the edited one; other fields
//! keep their previous (possibly stale) value. Written values are rounded to
//! the display precision, and later edits read those rounded values back.
//!
//! [`solve`] is the pure core. [`Calculator`] owns a [`CircuitState`] and the
//! last cable recommendation for front ends that want a session object.
//!
//! [`CircuitState`]: crate::circuit::CircuitState

mod calculator;
mod rules;

pub use calculator::{Calculator, CalculatorConfig};
pub use rules::{solve, solve_rounded};

/// √3 to four significant digits, as used on site.
pub const SQRT3: f64 = 1.732;

/// Nominal single-phase voltage (phase to neutral).
pub const SINGLE_PHASE_VOLTAGE: f64 = 230.0;

/// Nominal three-phase voltage (phase to phase).
pub const THREE_PHASE_VOLTAGE: f64 = 400.0;

/// Decimals kept when a computed value is written to a field.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Upper bound on configurable decimals; an f64 carries no more.
pub const MAX_DECIMALS: u32 = 15;
