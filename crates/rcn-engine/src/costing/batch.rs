use std::io::Read;

use serde::Serialize;

use crate::catalog::FactorCatalog;

use super::domain::{CostRequest, CostResult};
use super::CostingEngine;

/// Outcome of one CSV row: either the computed result or the error message
/// for that row. Rows are numbered from 1, excluding the header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum RowOutcome {
    Success { row: usize, result: CostResult },
    Error { row: usize, error: String },
}

/// Aggregated batch result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub catalog_version: String,
    pub outcomes: Vec<RowOutcome>,
    pub succeeded: usize,
    pub failed: usize,
}

/// Evaluate a CSV of cost requests against a single catalog snapshot.
///
/// The snapshot is captured once by the caller, so every row of the batch is
/// priced from the same catalog version even if a swap lands mid-run. A row
/// that fails to parse or resolve is reported in place; it never aborts the
/// rest of the batch.
pub fn run_batch<R: Read>(catalog: &FactorCatalog, reader: R) -> BatchReport {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut outcomes = Vec::new();
    let mut succeeded = 0;
    let mut failed = 0;

    for (index, record) in csv_reader.deserialize::<CostRequest>().enumerate() {
        let row = index + 1;
        let outcome = match record {
            Ok(request) => {
                match CostingEngine::calculate_with(catalog, &request) {
                    Ok(result) => {
                        succeeded += 1;
                        RowOutcome::Success { row, result }
                    }
                    Err(err) => {
                        failed += 1;
                        RowOutcome::Error {
                            row,
                            error: err.to_string(),
                        }
                    }
                }
            }
            Err(err) => {
                failed += 1;
                RowOutcome::Error {
                    row,
                    error: err.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }

    BatchReport {
        catalog_version: catalog.version().to_string(),
        outcomes,
        succeeded,
        failed,
    }
}
