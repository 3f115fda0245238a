//! Cable section advisor.
//!
//! Maps the current computed by the solver to a recommended conductor
//! cross-section. The tables are a rule of thumb for domestic copper
//! wiring, not a sizing calculation.
//!
//! [`recommend`] is only meaningful for a positive current. Callers holding
//! a possibly empty current go through [`CableRecommendation::from_current`],
//! which returns [`CableRecommendation::Undetermined`] instead of calling it.

mod table;

pub use table::{CableBand, CableSection, CableTable};

use std::fmt;

/// Label shown when no current can be determined.
pub const UNDETERMINED_LABEL: &str = "---";

/// Recommend a section for `current` amperes using the standard table.
pub fn recommend(current: f64) -> CableSection {
    CableTable::Standard.recommend(current)
}

/// Advisor output as surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CableRecommendation {
    Section(CableSection),
    /// No positive current is available
    #[default]
    Undetermined,
}

impl CableRecommendation {
    /// Recommendation for an optional current, using the standard table.
    pub fn from_current(current: Option<f64>) -> Self {
        Self::from_current_with(CableTable::Standard, current)
    }

    /// Recommendation for an optional current using `table`.
    pub fn from_current_with(table: CableTable, current: Option<f64>) -> Self {
        match current {
            Some(amps) if amps.is_finite() && amps > 0.0 => Self::Section(table.recommend(amps)),
            _ => Self::Undetermined,
        }
    }

    pub fn section(&self) -> Option<CableSection> {
        match self {
            Self::Section(section) => Some(*section),
            Self::Undetermined => None,
        }
    }

    pub fn is_determined(&self) -> bool {
        self.section().is_some()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Section(section) => section.label(),
            Self::Undetermined => UNDETERMINED_LABEL,
        }
    }
}

impl fmt::Display for CableRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_boundaries() {
        assert_eq!(recommend(10.00).label(), "1.5 mm²");
        assert_eq!(recommend(10.01).label(), "1.5 mm² / 2.5 mm²");
        assert_eq!(recommend(63.00).label(), "16 mm²");
        assert!(recommend(63.01).label().starts_with("greater than 16 mm²"));
    }

    #[test]
    fn test_undetermined_without_current() {
        assert_eq!(CableRecommendation::from_current(None), CableRecommendation::Undetermined);
        assert_eq!(CableRecommendation::from_current(Some(0.0)), CableRecommendation::Undetermined);
        assert_eq!(CableRecommendation::from_current(Some(-5.0)), CableRecommendation::Undetermined);
        assert_eq!(
            CableRecommendation::from_current(Some(f64::NAN)),
            CableRecommendation::Undetermined
        );
        assert_eq!(CableRecommendation::Undetermined.to_string(), "---");
    }

    #[test]
    fn test_from_current_uses_table() {
        let amps = Some(22.0);
        assert_eq!(
            CableRecommendation::from_current_with(CableTable::Standard, amps).section(),
            Some(CableSection::Mm4)
        );
        assert_eq!(
            CableRecommendation::from_current_with(CableTable::Compact, amps).section(),
            Some(CableSection::Mm6)
        );
    }
}
