use crate::catalog::document::{AgeRow, CatalogDocument};
use crate::catalog::standard::standard_document;

pub(super) fn document() -> CatalogDocument {
    standard_document()
}

pub(super) fn document_json() -> String {
    serde_json::to_string(&standard_document()).expect("document serializes")
}

pub(super) fn age_rows(ranges: &[(&str, f64)]) -> Vec<AgeRow> {
    ranges
        .iter()
        .map(|(range, factor)| AgeRow {
            range: range.to_string(),
            description: String::new(),
            factor: *factor,
        })
        .collect()
}
