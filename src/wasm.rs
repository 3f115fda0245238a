//! WASM bindings for Elecguide Core.
//!
//! This module provides JavaScript-friendly bindings for the browser front
//! end. The page owns the DOM; these objects own the state.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCalculator, WasmGuide } from 'elecguide_core';
//!
//! await init();
//!
//! const calc = new WasmCalculator(phaseToggle.checked);
//! for (const input of [uInput, iInput, rInput, pInput]) {
//!   input.addEventListener('input', (e) => {
//!     cableOutput.innerText = calc.edit(e.target.dataset.field, e.target.value);
//!     refreshFields(calc, e.target); // write every field except the one being typed in
//!   });
//! }
//! phaseToggle.addEventListener('change', () => {
//!   cableOutput.innerText = calc.set_three_phase(phaseToggle.checked);
//!   refreshFields(calc);
//! });
//!
//! const guide = new WasmGuide('red');
//! guide.select_measurement('voltage');
//! ring.style.top = guide.overlay_top + '%';
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{Field, PhaseMode};
use crate::error::ElecError;
use crate::guide::{GuideSession, GuideView, InstrumentModel, MeasurementType};
use crate::solver::{Calculator, CalculatorConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: ElecError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible electrical calculator.
///
/// Wraps the native [`Calculator`]. Field values are exchanged as the text
/// shown in the inputs; every mutating call returns the cable label.
#[wasm_bindgen]
pub struct WasmCalculator {
    calculator: Calculator,
}

#[wasm_bindgen]
impl WasmCalculator {
    /// Create a calculator with the voltage preset to 230 V or 400 V.
    ///
    /// # Example
    /// ```javascript
    /// const calc = new WasmCalculator(false);
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(three_phase: bool) -> WasmCalculator {
        let config = CalculatorConfig::new().with_phase(PhaseMode::from_three_phase(three_phase));
        WasmCalculator {
            calculator: Calculator::new(config),
        }
    }

    /// Apply the text typed into a field.
    ///
    /// # Arguments
    /// * `field` - `voltage`, `current`, `resistance` or `power`
    /// * `raw` - the input's current value
    ///
    /// # Returns
    /// The cable recommendation label (`---` when undetermined).
    #[wasm_bindgen]
    pub fn edit(&mut self, field: &str, raw: &str) -> Result<String, JsValue> {
        let field: Field = field.parse().map_err(to_js)?;
        Ok(self.calculator.edit(field, raw).to_string())
    }

    /// Follow the three-phase checkbox.
    #[wasm_bindgen]
    pub fn set_three_phase(&mut self, three_phase: bool) -> String {
        self.calculator
            .set_phase(PhaseMode::from_three_phase(three_phase))
            .to_string()
    }

    #[wasm_bindgen]
    pub fn toggle_phase(&mut self) -> String {
        self.calculator.toggle_phase().to_string()
    }

    /// Clear every field; the voltage goes back to the nominal value.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.calculator.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn three_phase(&self) -> bool {
        self.calculator.phase().is_three_phase()
    }

    #[wasm_bindgen(getter)]
    pub fn voltage(&self) -> String {
        self.calculator.display(Field::Voltage)
    }

    #[wasm_bindgen(getter)]
    pub fn current(&self) -> String {
        self.calculator.display(Field::Current)
    }

    #[wasm_bindgen(getter)]
    pub fn resistance(&self) -> String {
        self.calculator.display(Field::Resistance)
    }

    #[wasm_bindgen(getter)]
    pub fn power(&self) -> String {
        self.calculator.display(Field::Power)
    }

    /// Cable recommendation label.
    #[wasm_bindgen(getter)]
    pub fn cable(&self) -> String {
        self.calculator.cable().to_string()
    }
}

/// WASM-compatible measurement guide.
#[wasm_bindgen]
pub struct WasmGuide {
    session: GuideSession,
    view: Option<GuideView>,
}

#[wasm_bindgen]
impl WasmGuide {
    /// Create a guide for the `red` or `yellow` instrument.
    #[wasm_bindgen(constructor)]
    pub fn new(instrument: &str) -> Result<WasmGuide, JsValue> {
        let instrument: InstrumentModel = instrument.parse().map_err(to_js)?;
        Ok(WasmGuide {
            session: GuideSession::new(instrument),
            view: None,
        })
    }

    #[wasm_bindgen]
    pub fn select_measurement(&mut self, measurement: &str) -> Result<(), JsValue> {
        let measurement: MeasurementType = measurement.parse().map_err(to_js)?;
        self.view = Some(self.session.select_measurement(measurement));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn select_instrument(&mut self, instrument: &str) -> Result<(), JsValue> {
        let instrument: InstrumentModel = instrument.parse().map_err(to_js)?;
        self.view = self.session.select_instrument(instrument);
        Ok(())
    }

    /// Select a component by key; an empty key clears the selection.
    #[wasm_bindgen]
    pub fn select_component(&mut self, component: &str) -> Result<(), JsValue> {
        self.view = Some(self.session.select_component(component).map_err(to_js)?);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> Option<String> {
        self.view.as_ref().map(|v| v.entry.title.to_string())
    }

    /// `danger` or `safe`.
    #[wasm_bindgen(getter)]
    pub fn severity(&self) -> Option<String> {
        self.view.as_ref().map(|v| v.entry.severity.to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn warning(&self) -> Option<String> {
        self.view.as_ref().map(|v| v.entry.warning.to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn guidance(&self) -> Option<String> {
        self.view.as_ref().map(|v| v.entry.guidance.to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn info(&self) -> Option<String> {
        self.view.as_ref().map(|v| v.entry.info.to_string())
    }

    /// Ring position from the top of the photo, in percent.
    #[wasm_bindgen(getter)]
    pub fn overlay_top(&self) -> Option<f64> {
        self.view.as_ref().and_then(|v| v.entry.overlay).map(|o| o.top)
    }

    /// Ring position from the left of the photo, in percent.
    #[wasm_bindgen(getter)]
    pub fn overlay_left(&self) -> Option<f64> {
        self.view.as_ref().and_then(|v| v.entry.overlay).map(|o| o.left)
    }

    #[wasm_bindgen(getter)]
    pub fn image(&self) -> String {
        self.session.instrument().image_path().to_string()
    }

    /// Component keys offered for the selected measurement.
    #[wasm_bindgen]
    pub fn component_keys(&self) -> Vec<String> {
        self.view
            .as_ref()
            .map(|v| v.components.iter().map(|c| c.key.to_string()).collect())
            .unwrap_or_default()
    }

    /// Component labels, in the same order as [`component_keys`](Self::component_keys).
    #[wasm_bindgen]
    pub fn component_labels(&self) -> Vec<String> {
        self.view
            .as_ref()
            .map(|v| v.components.iter().map(|c| c.label.to_string()).collect())
            .unwrap_or_default()
    }

    /// Help photo paths for the selected component.
    #[wasm_bindgen]
    pub fn gallery(&self) -> Vec<String> {
        self.view.as_ref().map(|v| v.gallery.clone()).unwrap_or_default()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
