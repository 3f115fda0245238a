//! # Elecguide Core
//!
//! An electrical calculator and multimeter guide for electricians.
//!
//! This library provides:
//! - A reactive Ohm's law / power law solver over four linked fields
//!   (voltage, current, resistance, power), single-phase or three-phase
//! - A cable cross-section advisor driven by the computed current
//! - A reference guide telling where to set a multimeter for a measurement
//!
//! ## Architecture
//!
//! - [`circuit`] - Field values, phase mode and input normalization
//! - [`solver`] - Rule-based solver and the [`Calculator`] session
//! - [`cable`] - Cable section threshold tables
//! - [`guide`] - Measurement guide content and selection state
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! elecguide solve --voltage 400 --current 10 --edited current --three-phase
//! elecguide cable 18.5
//! elecguide guide capacitance --instrument yellow
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmCalculator } from 'elecguide_core';
//!
//! const calc = new WasmCalculator(false);
//! calc.edit('resistance', '23');
//! console.log(calc.current, calc.cable); // "10.00", "1.5 mm²"
//! ```
//!
//! ### Library
//!
//! ```
//! use elecguide_core::{solve, CableRecommendation, CircuitState, EditEvent, Field, PhaseMode};
//!
//! let state = CircuitState::new(PhaseMode::Single).with(Field::Resistance, 23.0);
//! let state = solve(EditEvent::Resistance, state);
//! assert_eq!(state.current, Some(10.0));
//!
//! let cable = CableRecommendation::from_current(state.authoritative_current());
//! assert_eq!(cable.label(), "1.5 mm²");
//! ```

pub mod cable;
pub mod circuit;
pub mod error;
pub mod guide;
pub mod solver;

// Re-export main types for convenience
pub use cable::{recommend, CableRecommendation, CableSection, CableTable};
pub use circuit::{CircuitState, EditEvent, Field, PhaseMode};
pub use error::{ElecError, Result};
pub use solver::{solve, Calculator, CalculatorConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{WasmCalculator, WasmGuide};
