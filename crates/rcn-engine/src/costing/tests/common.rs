use std::sync::Arc;

use crate::catalog::{standard_catalog, CatalogRegistry, FactorCatalog};
use crate::costing::compose::FactorSelection;
use crate::costing::domain::{CostRequest, ResolvedFactor};
use crate::costing::CostingEngine;

pub(super) fn catalog() -> FactorCatalog {
    standard_catalog().expect("standard table validates")
}

pub(super) fn engine() -> CostingEngine {
    let registry = Arc::new(CatalogRegistry::new());
    registry.swap(catalog());
    CostingEngine::new(registry)
}

/// The published reference scenario: a custom-grade residential build in the
/// north region, well maintained, eight years old.
pub(super) fn reference_request() -> CostRequest {
    CostRequest {
        building_type: "RES".to_string(),
        region: "BC-NORTH".to_string(),
        quality: "CUSTOM".to_string(),
        condition: "GOOD".to_string(),
        complexity: "STANDARD".to_string(),
        age_years: 8.0,
        size_factor: 1.0,
        height_factor: 1.0,
    }
}

pub(super) fn synthetic_selection() -> FactorSelection {
    FactorSelection {
        base: ResolvedFactor::new("BASE", 100.0),
        region: ResolvedFactor::new("R1", 1.1),
        quality: ResolvedFactor::new("Q1", 1.2),
        condition: ResolvedFactor::new("C1", 0.9),
        complexity: ResolvedFactor::new("X1", 1.05),
        age: ResolvedFactor::new("A1", 0.85),
    }
}
