use super::document::{AgeRow, BuildingTypeRow, CatalogDocument, FactorTables, LevelRow, RegionRow};
use super::domain::FactorCatalog;
use super::validate::{validate, ValidationError};

/// The published standard factor table, used whenever no external catalog
/// document is configured.
pub fn standard_document() -> CatalogDocument {
    CatalogDocument {
        version: "2025.1".to_string(),
        last_updated: "2025-07-01".to_string(),
        factors: FactorTables {
            building_types: vec![
                building_type("RES", "Residential", "Single and multi family dwellings", 150.00),
                building_type("COM", "Commercial", "Retail, office, and mixed use", 135.00),
                building_type("IND", "Industrial", "Warehouses and light manufacturing", 110.00),
                building_type("AGR", "Agricultural", "Barns and outbuildings", 85.00),
            ],
            regions: vec![
                region("BC-NORTH", "North county", 1.10),
                region("BC-CENTRAL", "Central county", 1.00),
                region("BC-SOUTH", "South county", 0.95),
                region("BC-WEST", "West county", 1.05),
            ],
            quality: vec![
                level("ECONOMY", "Minimum grade materials and finish", 0.85),
                level("STANDARD", "Builder grade throughout", 1.00),
                level("CUSTOM", "Upgraded materials and trim", 1.15),
                level("LUXURY", "Architect designed, premium finish", 1.35),
            ],
            condition: vec![
                level("POOR", "Deferred maintenance throughout", 0.75),
                level("FAIR", "Worn but serviceable", 0.90),
                level("AVERAGE", "Typical wear for age", 1.00),
                level("GOOD", "Well maintained", 1.10),
                level("EXCELLENT", "Like new condition", 1.20),
            ],
            age: vec![
                age("0-5", "New construction", 1.00),
                age("6-10", "Early depreciation", 0.95),
                age("11-20", "Established", 0.88),
                age("21-30", "Mature", 0.80),
                age("31-50", "Aging", 0.70),
                age("51+", "Historic stock", 0.60),
            ],
            complexity: vec![
                level("SIMPLE", "Rectangular footprint, single roofline", 0.90),
                level("STANDARD", "Typical footprint and rooflines", 1.00),
                level("COMPLEX", "Irregular footprint, multiple rooflines", 1.12),
            ],
        },
    }
}

/// The standard table validated into an immutable catalog.
pub fn standard_catalog() -> Result<FactorCatalog, ValidationError> {
    validate(standard_document())
}

fn building_type(code: &str, name: &str, description: &str, base_cost: f64) -> BuildingTypeRow {
    BuildingTypeRow {
        code: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        base_cost,
    }
}

fn region(code: &str, name: &str, factor: f64) -> RegionRow {
    RegionRow {
        code: code.to_string(),
        name: name.to_string(),
        factor,
    }
}

fn level(level: &str, description: &str, factor: f64) -> LevelRow {
    LevelRow {
        level: level.to_string(),
        description: description.to_string(),
        factor,
    }
}

fn age(range: &str, description: &str, factor: f64) -> AgeRow {
    AgeRow {
        range: range.to_string(),
        description: description.to_string(),
        factor,
    }
}
