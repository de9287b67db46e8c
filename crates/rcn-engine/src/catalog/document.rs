use serde::{Deserialize, Serialize};

use super::validate::ValidationError;

/// Raw, untrusted catalog document as it arrives on the wire.
///
/// Field names follow the published JSON contract (camelCase keys, one array
/// per factor table). Category arrays default to empty so an absent table is
/// reported as a semantic validation failure rather than a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub factors: FactorTables,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorTables {
    #[serde(default)]
    pub building_types: Vec<BuildingTypeRow>,
    #[serde(default)]
    pub regions: Vec<RegionRow>,
    #[serde(default)]
    pub quality: Vec<LevelRow>,
    #[serde(default)]
    pub condition: Vec<LevelRow>,
    #[serde(default)]
    pub age: Vec<AgeRow>,
    #[serde(default)]
    pub complexity: Vec<LevelRow>,
}

/// Building type row; `baseCost` is the dollar-per-unit starting cost the
/// remaining factors multiply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingTypeRow {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub base_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRow {
    pub code: String,
    #[serde(default)]
    pub name: String,
    pub factor: f64,
}

/// Row shape shared by the quality, condition, and complexity tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRow {
    pub level: String,
    #[serde(default)]
    pub description: String,
    pub factor: f64,
}

/// Age row; `range` is `"LOW-HIGH"` or `"LOW+"` in whole years.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRow {
    pub range: String,
    #[serde(default)]
    pub description: String,
    pub factor: f64,
}

impl CatalogDocument {
    /// Parse a raw JSON document. Structural JSON problems surface here;
    /// semantic table rules are checked by [`validate`](super::validate::validate).
    pub fn from_json(raw: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(raw).map_err(ValidationError::Document)
    }
}
