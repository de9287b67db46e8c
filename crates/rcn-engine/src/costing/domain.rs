use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::FactorCategory;

/// One replacement-cost request.
///
/// `size_factor` and `height_factor` are caller-derived normalized
/// multipliers (from square footage and story count); the engine treats them
/// as opaque positive inputs, not catalog lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRequest {
    pub building_type: String,
    pub region: String,
    pub quality: String,
    pub condition: String,
    pub complexity: String,
    pub age_years: f64,
    pub size_factor: f64,
    pub height_factor: f64,
}

/// A factor chosen for one category: the matched code (or band label) and
/// its value at full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFactor {
    pub code: String,
    pub value: f64,
}

impl ResolvedFactor {
    pub fn new(code: impl Into<String>, value: f64) -> Self {
        Self {
            code: code.into(),
            value,
        }
    }
}

/// One labelled line of the audit breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub label: String,
    pub value: f64,
}

/// The outcome of one composition: final cost plus everything needed to
/// audit it. Created fresh per call, never mutated after return.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostResult {
    pub catalog_version: String,
    pub base_cost: f64,
    pub resolved_factors: BTreeMap<FactorCategory, ResolvedFactor>,
    pub final_cost: f64,
    pub breakdown: Vec<BreakdownLine>,
}
