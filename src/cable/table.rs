//! Conductor sections and the current thresholds that select them.

use std::fmt;
use std::str::FromStr;

use crate::error::{ElecError, Result};

/// A recommended copper conductor cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CableSection {
    /// 1.5 mm²
    Mm1_5,
    /// 1.5 mm² or 2.5 mm² depending on the installation method
    Mm1_5Or2_5,
    /// 2.5 mm²
    Mm2_5,
    /// 4 mm²
    Mm4,
    /// 6 mm²
    Mm6,
    /// 10 mm²
    Mm10,
    /// 16 mm²
    Mm16,
    /// Above 16 mm², sized by an engineering study
    EngineeringStudy,
}

impl CableSection {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            CableSection::Mm1_5 => "1.5 mm²",
            CableSection::Mm1_5Or2_5 => "1.5 mm² / 2.5 mm²",
            CableSection::Mm2_5 => "2.5 mm²",
            CableSection::Mm4 => "4 mm²",
            CableSection::Mm6 => "6 mm²",
            CableSection::Mm10 => "10 mm²",
            CableSection::Mm16 => "16 mm²",
            CableSection::EngineeringStudy => "greater than 16 mm² (requires engineering study)",
        }
    }

    /// Whether this band needs more than a table lookup.
    pub fn requires_study(&self) -> bool {
        matches!(self, CableSection::EngineeringStudy)
    }
}

impl fmt::Display for CableSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a threshold table: currents up to `max_current` (inclusive)
/// map to `section`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableBand {
    pub max_current: f64,
    pub section: CableSection,
}

const fn band(max_current: f64, section: CableSection) -> CableBand {
    CableBand {
        max_current,
        section,
    }
}

static STANDARD_BANDS: [CableBand; 7] = [
    band(10.0, CableSection::Mm1_5),
    band(16.0, CableSection::Mm1_5Or2_5),
    band(20.0, CableSection::Mm2_5),
    band(25.0, CableSection::Mm4),
    band(32.0, CableSection::Mm6),
    band(40.0, CableSection::Mm10),
    band(63.0, CableSection::Mm16),
];

static COMPACT_BANDS: [CableBand; 6] = [
    band(10.0, CableSection::Mm1_5),
    band(16.0, CableSection::Mm1_5Or2_5),
    band(20.0, CableSection::Mm2_5),
    band(32.0, CableSection::Mm6),
    band(40.0, CableSection::Mm10),
    band(63.0, CableSection::Mm16),
];

/// Ordered threshold table used to pick a section.
///
/// `Standard` is the canonical table. `Compact` has no 4 mm² band and sends
/// everything between 20 A and 32 A straight to 6 mm².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CableTable {
    #[default]
    Standard,
    Compact,
}

impl CableTable {
    /// Bands in ascending order of current; anything above the last one
    /// is [`CableSection::EngineeringStudy`].
    pub fn bands(&self) -> &'static [CableBand] {
        match self {
            CableTable::Standard => &STANDARD_BANDS,
            CableTable::Compact => &COMPACT_BANDS,
        }
    }

    /// First band whose upper bound covers `current` (amperes).
    pub fn recommend(&self, current: f64) -> CableSection {
        self.bands()
            .iter()
            .find(|b| current <= b.max_current)
            .map(|b| b.section)
            .unwrap_or(CableSection::EngineeringStudy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CableTable::Standard => "standard",
            CableTable::Compact => "compact",
        }
    }
}

impl fmt::Display for CableTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CableTable {
    type Err = ElecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(CableTable::Standard),
            "compact" => Ok(CableTable::Compact),
            _ => Err(ElecError::UnknownCableTable { name: s.to_string() }),
        }
    }
}
