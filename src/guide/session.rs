//! Guide selection state.

use tracing::debug;

use crate::error::{ElecError, Result};

use super::{components, find_component, gallery, lookup, ComponentOption, GuideEntry, InstrumentModel, MeasurementType};

/// What the guide shows for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideView {
    pub entry: GuideEntry,
    pub instrument: InstrumentModel,
    /// Photo of the selected instrument
    pub image: &'static str,
    pub components: &'static [ComponentOption],
    pub component: Option<&'static ComponentOption>,
    /// Help photos for the selected component, empty if none is selected
    pub gallery: Vec<String>,
}

/// Selections made in the guide: measurement, instrument and component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuideSession {
    measurement: Option<MeasurementType>,
    instrument: InstrumentModel,
    component: Option<&'static ComponentOption>,
}

impl GuideSession {
    pub fn new(instrument: InstrumentModel) -> Self {
        Self {
            instrument,
            ..Self::default()
        }
    }

    /// Select a measurement. Clears the component selection.
    pub fn select_measurement(&mut self, measurement: MeasurementType) -> GuideView {
        debug!(%measurement, "measurement selected");
        self.measurement = Some(measurement);
        self.component = None;
        self.build_view(measurement)
    }

    /// Switch instrument; returns the updated view if a measurement is selected.
    pub fn select_instrument(&mut self, instrument: InstrumentModel) -> Option<GuideView> {
        debug!(%instrument, "instrument selected");
        self.instrument = instrument;
        self.view()
    }

    /// Select a component of the current measurement by key.
    ///
    /// An empty key clears the selection.
    pub fn select_component(&mut self, key: &str) -> Result<GuideView> {
        let measurement = self.measurement.ok_or(ElecError::NoMeasurement)?;
        self.component = if key.trim().is_empty() {
            None
        } else {
            Some(find_component(measurement, key)?)
        };
        debug!(%measurement, component = key, "component selected");
        Ok(self.build_view(measurement))
    }

    pub fn measurement(&self) -> Option<MeasurementType> {
        self.measurement
    }

    pub fn instrument(&self) -> InstrumentModel {
        self.instrument
    }

    pub fn component(&self) -> Option<&'static ComponentOption> {
        self.component
    }

    /// Current view, or `None` before any measurement is selected.
    pub fn view(&self) -> Option<GuideView> {
        self.measurement.map(|m| self.build_view(m))
    }

    fn build_view(&self, measurement: MeasurementType) -> GuideView {
        GuideView {
            entry: lookup(measurement, self.instrument),
            instrument: self.instrument,
            image: self.instrument.image_path(),
            components: components(measurement),
            component: self.component,
            gallery: self.component.map(|c| gallery(measurement, c)).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_view_before_selection() {
        let mut session = GuideSession::default();
        assert!(session.view().is_none());
        assert!(session.select_instrument(InstrumentModel::Yellow).is_none());
        assert_eq!(session.select_component("motor"), Err(ElecError::NoMeasurement));
    }

    #[test]
    fn test_select_measurement() {
        let mut session = GuideSession::new(InstrumentModel::Yellow);
        let view = session.select_measurement(MeasurementType::Voltage);
        assert_eq!(view.entry.measurement, MeasurementType::Voltage);
        assert_eq!(view.image, "assets/yellow_multimeter.png");
        assert_eq!(view.components.len(), 3);
        assert!(view.gallery.is_empty());
    }

    #[test]
    fn test_component_gallery() {
        let mut session = GuideSession::default();
        session.select_measurement(MeasurementType::Resistance);
        let view = session.select_component("heater").unwrap();
        assert_eq!(view.component.map(|c| c.key), Some("heater"));
        assert_eq!(view.gallery[0], "assets/resistance_heater_1.jpg");

        let view = session.select_component("").unwrap();
        assert!(view.component.is_none());
        assert!(view.gallery.is_empty());
    }

    #[test]
    fn test_new_measurement_clears_component() {
        let mut session = GuideSession::default();
        session.select_measurement(MeasurementType::Current);
        session.select_component("panel").unwrap();
        session.select_measurement(MeasurementType::Capacitance);
        assert!(session.component().is_none());
        assert!(session.select_component("panel").is_err());
    }

    #[test]
    fn test_instrument_switch_moves_overlay() {
        let mut session = GuideSession::default();
        let red = session.select_measurement(MeasurementType::Resistance);
        let yellow = session.select_instrument(InstrumentModel::Yellow).unwrap();
        assert_ne!(red.entry.overlay, yellow.entry.overlay);
        assert_eq!(yellow.instrument, InstrumentModel::Yellow);
    }
}
