use chrono::NaiveDate;

use super::common::{age_rows, document, document_json};
use crate::catalog::document::RegionRow;
use crate::catalog::validate::{validate, validate_json, ValidationError};
use crate::catalog::FactorCategory;

#[test]
fn standard_document_validates() {
    let catalog = validate(document()).expect("standard table is valid");

    assert_eq!(catalog.version(), "2025.1");
    assert_eq!(
        catalog.last_updated(),
        NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid date")
    );
    assert_eq!(catalog.building_types().entries().len(), 4);
    assert_eq!(catalog.age().bands().len(), 6);

    let residential = catalog
        .building_types()
        .get("RES")
        .expect("RES is present");
    assert_eq!(residential.factor, 150.00);
}

#[test]
fn round_trips_through_the_wire_format() {
    let catalog = validate_json(&document_json()).expect("serialized document validates");
    assert_eq!(catalog.version(), "2025.1");

    let region = catalog.regions().get("BC-NORTH").expect("region present");
    assert_eq!(region.factor, 1.10);
}

#[test]
fn rejects_unparseable_json() {
    let result = validate_json("{ not json");
    assert!(matches!(result, Err(ValidationError::Document(_))));
}

#[test]
fn rejects_blank_version() {
    let mut doc = document();
    doc.version = "  ".to_string();
    assert!(matches!(
        validate(doc),
        Err(ValidationError::MissingVersion)
    ));
}

#[test]
fn rejects_malformed_last_updated() {
    let mut doc = document();
    doc.last_updated = "July 2025".to_string();
    match validate(doc) {
        Err(ValidationError::InvalidLastUpdated { value }) => assert_eq!(value, "July 2025"),
        other => panic!("expected InvalidLastUpdated, got {other:?}"),
    }
}

#[test]
fn rejects_duplicate_region_code() {
    let mut doc = document();
    doc.factors.regions.push(RegionRow {
        code: "BC-NORTH".to_string(),
        name: "Duplicate".to_string(),
        factor: 1.2,
    });

    match validate(doc) {
        Err(ValidationError::DuplicateCode { category, code }) => {
            assert_eq!(category, FactorCategory::Regions);
            assert_eq!(category.label(), "regions");
            assert_eq!(code, "BC-NORTH");
        }
        other => panic!("expected DuplicateCode, got {other:?}"),
    }
}

#[test]
fn rejects_zero_factor() {
    let mut doc = document();
    doc.factors.quality[0].factor = 0.0;
    match validate(doc) {
        Err(ValidationError::NonPositiveFactor { category, code, .. }) => {
            assert_eq!(category, FactorCategory::Quality);
            assert_eq!(code, "ECONOMY");
        }
        other => panic!("expected NonPositiveFactor, got {other:?}"),
    }
}

#[test]
fn rejects_negative_base_cost() {
    let mut doc = document();
    doc.factors.building_types[0].base_cost = -150.0;
    assert!(matches!(
        validate(doc),
        Err(ValidationError::NonPositiveFactor {
            category: FactorCategory::BuildingTypes,
            ..
        })
    ));
}

#[test]
fn rejects_non_finite_factor() {
    let mut doc = document();
    doc.factors.condition[1].factor = f64::NAN;
    assert!(matches!(
        validate(doc),
        Err(ValidationError::NonPositiveFactor {
            category: FactorCategory::Condition,
            ..
        })
    ));
}

#[test]
fn rejects_empty_category() {
    let mut doc = document();
    doc.factors.complexity.clear();
    assert!(matches!(
        validate(doc),
        Err(ValidationError::EmptyCategory {
            category: FactorCategory::Complexity
        })
    ));
}

#[test]
fn missing_category_key_reads_as_empty() {
    let raw = r#"{
        "version": "2025.2",
        "lastUpdated": "2025-08-01",
        "factors": {
            "buildingTypes": [{ "code": "RES", "name": "Residential", "baseCost": 150.0 }],
            "regions": [{ "code": "BC-NORTH", "name": "North", "factor": 1.1 }],
            "quality": [{ "level": "STANDARD", "description": "", "factor": 1.0 }],
            "condition": [{ "level": "AVERAGE", "description": "", "factor": 1.0 }],
            "age": [{ "range": "0+", "description": "", "factor": 1.0 }]
        }
    }"#;

    assert!(matches!(
        validate_json(raw),
        Err(ValidationError::EmptyCategory {
            category: FactorCategory::Complexity
        })
    ));
}

#[test]
fn rejects_malformed_age_ranges() {
    for bad in ["abc", "10", "20-10", "-5-10", "5..10"] {
        let mut doc = document();
        doc.factors.age = age_rows(&[(bad, 1.0)]);
        match validate(doc) {
            Err(ValidationError::MalformedRange { range }) => assert_eq!(range, bad),
            other => panic!("expected MalformedRange for '{bad}', got {other:?}"),
        }
    }
}

#[test]
fn rejects_age_gap() {
    let mut doc = document();
    doc.factors.age = age_rows(&[
        ("0-5", 1.00),
        ("6-10", 0.95),
        ("21-30", 0.80),
        ("31-50", 0.70),
        ("51+", 0.60),
    ]);

    match validate(doc) {
        Err(ValidationError::RangeGap { previous, next }) => {
            assert_eq!(previous, "6-10");
            assert_eq!(next, "21-30");
        }
        other => panic!("expected RangeGap, got {other:?}"),
    }
}

#[test]
fn rejects_age_overlap() {
    let mut doc = document();
    doc.factors.age = age_rows(&[("0-5", 1.00), ("5-10", 0.95), ("11+", 0.80)]);

    match validate(doc) {
        Err(ValidationError::RangeOverlap { first, second }) => {
            assert_eq!(first, "0-5");
            assert_eq!(second, "5-10");
        }
        other => panic!("expected RangeOverlap, got {other:?}"),
    }
}

#[test]
fn rejects_missing_unbounded_terminator() {
    let mut doc = document();
    doc.factors.age = age_rows(&[("0-5", 1.00), ("6-50", 0.90)]);
    assert!(matches!(
        validate(doc),
        Err(ValidationError::MissingUnboundedTerminator)
    ));
}

#[test]
fn rejects_unbounded_band_before_the_end() {
    let mut doc = document();
    doc.factors.age = age_rows(&[("0-5", 1.00), ("6+", 0.95), ("12-20", 0.88)]);

    match validate(doc) {
        Err(ValidationError::UnboundedBandNotLast { range }) => assert_eq!(range, "6+"),
        other => panic!("expected UnboundedBandNotLast, got {other:?}"),
    }
}

#[test]
fn rejects_bands_that_start_above_zero() {
    let mut doc = document();
    doc.factors.age = age_rows(&[("1-5", 1.00), ("6+", 0.95)]);

    match validate(doc) {
        Err(ValidationError::MissingZeroStart { range }) => assert_eq!(range, "1-5"),
        other => panic!("expected MissingZeroStart, got {other:?}"),
    }
}

#[test]
fn sorts_age_bands_regardless_of_document_order() {
    let mut doc = document();
    doc.factors.age = age_rows(&[("51+", 0.60), ("0-5", 1.00), ("6-50", 0.90)]);

    let catalog = validate(doc).expect("shuffled bands still validate");
    let lows: Vec<u32> = catalog.age().bands().iter().map(|band| band.low).collect();
    assert_eq!(lows, vec![0, 6, 51]);
}
