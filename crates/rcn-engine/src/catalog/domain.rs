use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Semantic axes a catalog adjusts cost along.
///
/// Declaration order is the fixed composition order, so ordered maps keyed by
/// this enum iterate the same way the audit breakdown is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorCategory {
    BuildingTypes,
    Regions,
    Quality,
    Condition,
    Complexity,
    Age,
}

impl FactorCategory {
    pub const fn label(self) -> &'static str {
        match self {
            FactorCategory::BuildingTypes => "buildingTypes",
            FactorCategory::Regions => "regions",
            FactorCategory::Quality => "quality",
            FactorCategory::Condition => "condition",
            FactorCategory::Complexity => "complexity",
            FactorCategory::Age => "age",
        }
    }
}

impl fmt::Display for FactorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One validated row of a code-keyed table. For the building type table the
/// factor carries the base cost rather than a multiplier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorEntry {
    pub code: String,
    pub description: String,
    pub factor: f64,
}

/// One validated age band over whole years; `high` is `None` for the
/// unbounded terminator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeBand {
    pub low: u32,
    pub high: Option<u32>,
    pub description: String,
    pub factor: f64,
}

impl AgeBand {
    pub fn label(&self) -> String {
        match self.high {
            Some(high) => format!("{}-{}", self.low, high),
            None => format!("{}+", self.low),
        }
    }

    /// Whether a non-negative age in years falls inside this band.
    ///
    /// Band bounds are whole years; a fractional age belongs to the band
    /// containing its integer part, which keeps contiguous integer bands
    /// exhaustive over `[0, ∞)`.
    pub fn contains(&self, age_years: f64) -> bool {
        let years = age_years.floor();
        years >= f64::from(self.low)
            && self.high.map_or(true, |high| years <= f64::from(high))
    }
}

/// A validated code-keyed table, order preserved from the source document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeTable {
    pub(super) category: FactorCategory,
    pub(super) entries: Vec<FactorEntry>,
}

impl CodeTable {
    pub fn category(&self) -> FactorCategory {
        self.category
    }

    pub fn entries(&self) -> &[FactorEntry] {
        &self.entries
    }

    /// Exact, case-sensitive lookup; codes are canonical upper-case tokens.
    pub fn get(&self, code: &str) -> Option<&FactorEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }
}

/// The validated age table, bands sorted ascending by `low`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeTable {
    pub(super) bands: Vec<AgeBand>,
}

impl AgeTable {
    pub fn bands(&self) -> &[AgeBand] {
        &self.bands
    }
}

/// An immutable, validated factor catalog.
///
/// Instances exist only as the output of [`validate`](super::validate::validate);
/// every table invariant (unique codes, positive factors, contiguous age
/// bands) holds for the catalog's whole lifetime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorCatalog {
    pub(super) version: String,
    pub(super) last_updated: NaiveDate,
    pub(super) building_types: CodeTable,
    pub(super) regions: CodeTable,
    pub(super) quality: CodeTable,
    pub(super) condition: CodeTable,
    pub(super) complexity: CodeTable,
    pub(super) age: AgeTable,
}

impl FactorCatalog {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn last_updated(&self) -> NaiveDate {
        self.last_updated
    }

    pub fn building_types(&self) -> &CodeTable {
        &self.building_types
    }

    pub fn regions(&self) -> &CodeTable {
        &self.regions
    }

    pub fn quality(&self) -> &CodeTable {
        &self.quality
    }

    pub fn condition(&self) -> &CodeTable {
        &self.condition
    }

    pub fn complexity(&self) -> &CodeTable {
        &self.complexity
    }

    pub fn age(&self) -> &AgeTable {
        &self.age
    }
}
