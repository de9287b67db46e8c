use super::common::catalog;
use crate::costing::batch::{run_batch, RowOutcome};

const HEADER: &str =
    "buildingType,region,quality,condition,complexity,ageYears,sizeFactor,heightFactor\n";

#[test]
fn prices_every_row_against_one_snapshot() {
    let csv = format!(
        "{HEADER}RES,BC-NORTH,CUSTOM,GOOD,STANDARD,8,1.0,1.0\nCOM,BC-CENTRAL,STANDARD,AVERAGE,SIMPLE,25,1.1,1.0\n"
    );

    let catalog = catalog();
    let report = run_batch(&catalog, csv.as_bytes());

    assert_eq!(report.catalog_version, "2025.1");
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 0);
    assert_eq!(report.outcomes.len(), 2);

    match &report.outcomes[0] {
        RowOutcome::Success { row, result } => {
            assert_eq!(*row, 1);
            assert_eq!(result.final_cost, 198.29);
        }
        other => panic!("expected success for row 1, got {other:?}"),
    }
}

#[test]
fn bad_rows_are_reported_in_place_without_aborting() {
    let csv = format!(
        "{HEADER}RES,BC-NORTH,CUSTOM,GOOD,STANDARD,8,1.0,1.0\nRES,BC-EAST,CUSTOM,GOOD,STANDARD,8,1.0,1.0\nRES,BC-NORTH,CUSTOM,GOOD,STANDARD,not-a-number,1.0,1.0\nCOM,BC-SOUTH,ECONOMY,FAIR,COMPLEX,60,1.0,1.2\n"
    );

    let catalog = catalog();
    let report = run_batch(&catalog, csv.as_bytes());

    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 2);

    match &report.outcomes[1] {
        RowOutcome::Error { row, error } => {
            assert_eq!(*row, 2);
            assert!(error.contains("BC-EAST"), "unexpected message: {error}");
        }
        other => panic!("expected error for row 2, got {other:?}"),
    }
    match &report.outcomes[2] {
        RowOutcome::Error { row, .. } => assert_eq!(*row, 3),
        other => panic!("expected error for row 3, got {other:?}"),
    }
    assert!(matches!(
        &report.outcomes[3],
        RowOutcome::Success { row: 4, .. }
    ));
}

#[test]
fn empty_input_yields_an_empty_report() {
    let catalog = catalog();
    let report = run_batch(&catalog, HEADER.as_bytes());

    assert_eq!(report.succeeded, 0);
    assert_eq!(report.failed, 0);
    assert!(report.outcomes.is_empty());
}
