use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::document::{AgeRow, CatalogDocument, LevelRow};
use super::domain::{AgeBand, AgeTable, CodeTable, FactorCatalog, FactorCategory, FactorEntry};

/// Rules a catalog document can break, each naming the offending category.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("catalog document did not parse: {0}")]
    Document(#[source] serde_json::Error),
    #[error("catalog version must be a non-empty string")]
    MissingVersion,
    #[error("catalog lastUpdated '{value}' is not a YYYY-MM-DD date")]
    InvalidLastUpdated { value: String },
    #[error("category {category} must contain at least one entry")]
    EmptyCategory { category: FactorCategory },
    #[error("category {category} contains duplicate code '{code}'")]
    DuplicateCode {
        category: FactorCategory,
        code: String,
    },
    #[error("category {category} entry '{code}' has non-positive factor {value}")]
    NonPositiveFactor {
        category: FactorCategory,
        code: String,
        value: f64,
    },
    #[error("category age range '{range}' is not 'LOW-HIGH' or 'LOW+'")]
    MalformedRange { range: String },
    #[error("category age bands must start at 0, found '{range}'")]
    MissingZeroStart { range: String },
    #[error("category age has a range gap between '{previous}' and '{next}'")]
    RangeGap { previous: String, next: String },
    #[error("category age bands '{first}' and '{second}' overlap")]
    RangeOverlap { first: String, second: String },
    #[error("category age must end with exactly one unbounded band")]
    MissingUnboundedTerminator,
    #[error("category age unbounded band '{range}' must be the final band")]
    UnboundedBandNotLast { range: String },
}

/// Validate a parsed document into an immutable [`FactorCatalog`].
///
/// All-or-nothing: on any rule violation no catalog is produced.
pub fn validate(document: CatalogDocument) -> Result<FactorCatalog, ValidationError> {
    let version = document.version.trim().to_string();
    if version.is_empty() {
        return Err(ValidationError::MissingVersion);
    }

    let last_updated = NaiveDate::parse_from_str(document.last_updated.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidLastUpdated {
            value: document.last_updated.clone(),
        })?;

    let tables = document.factors;

    let building_types = code_table(
        FactorCategory::BuildingTypes,
        tables
            .building_types
            .into_iter()
            .map(|row| FactorEntry {
                code: row.code,
                description: pick_description(row.description, row.name),
                factor: row.base_cost,
            })
            .collect(),
    )?;

    let regions = code_table(
        FactorCategory::Regions,
        tables
            .regions
            .into_iter()
            .map(|row| FactorEntry {
                code: row.code,
                description: row.name,
                factor: row.factor,
            })
            .collect(),
    )?;

    let quality = level_table(FactorCategory::Quality, tables.quality)?;
    let condition = level_table(FactorCategory::Condition, tables.condition)?;
    let complexity = level_table(FactorCategory::Complexity, tables.complexity)?;
    let age = age_table(tables.age)?;

    Ok(FactorCatalog {
        version,
        last_updated,
        building_types,
        regions,
        quality,
        condition,
        complexity,
        age,
    })
}

/// Parse and validate a raw JSON document in one step.
pub fn validate_json(raw: &str) -> Result<FactorCatalog, ValidationError> {
    validate(CatalogDocument::from_json(raw)?)
}

fn pick_description(description: String, name: String) -> String {
    if description.trim().is_empty() {
        name
    } else {
        description
    }
}

fn level_table(
    category: FactorCategory,
    rows: Vec<LevelRow>,
) -> Result<CodeTable, ValidationError> {
    code_table(
        category,
        rows.into_iter()
            .map(|row| FactorEntry {
                code: row.level,
                description: row.description,
                factor: row.factor,
            })
            .collect(),
    )
}

fn code_table(
    category: FactorCategory,
    entries: Vec<FactorEntry>,
) -> Result<CodeTable, ValidationError> {
    if entries.is_empty() {
        return Err(ValidationError::EmptyCategory { category });
    }

    let mut seen = BTreeSet::new();
    for entry in &entries {
        if !entry.factor.is_finite() || entry.factor <= 0.0 {
            return Err(ValidationError::NonPositiveFactor {
                category,
                code: entry.code.clone(),
                value: entry.factor,
            });
        }
        if !seen.insert(entry.code.clone()) {
            return Err(ValidationError::DuplicateCode {
                category,
                code: entry.code.clone(),
            });
        }
    }

    Ok(CodeTable { category, entries })
}

fn age_table(rows: Vec<AgeRow>) -> Result<AgeTable, ValidationError> {
    if rows.is_empty() {
        return Err(ValidationError::EmptyCategory {
            category: FactorCategory::Age,
        });
    }

    let mut bands = Vec::with_capacity(rows.len());
    for row in rows {
        let (low, high) = parse_range(&row.range)?;
        if !row.factor.is_finite() || row.factor <= 0.0 {
            return Err(ValidationError::NonPositiveFactor {
                category: FactorCategory::Age,
                code: row.range,
                value: row.factor,
            });
        }
        bands.push(AgeBand {
            low,
            high,
            description: row.description,
            factor: row.factor,
        });
    }

    bands.sort_by_key(|band| band.low);

    let first = &bands[0];
    if first.low != 0 {
        return Err(ValidationError::MissingZeroStart {
            range: first.label(),
        });
    }

    for pair in bands.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        let high = match current.high {
            Some(high) => high,
            // An unbounded band followed by anything cannot terminate the table.
            None => {
                return Err(ValidationError::UnboundedBandNotLast {
                    range: current.label(),
                })
            }
        };
        if high >= next.low {
            return Err(ValidationError::RangeOverlap {
                first: current.label(),
                second: next.label(),
            });
        }
        if high + 1 < next.low {
            return Err(ValidationError::RangeGap {
                previous: current.label(),
                next: next.label(),
            });
        }
    }

    let last = bands.last().filter(|band| band.high.is_none());
    if last.is_none() {
        return Err(ValidationError::MissingUnboundedTerminator);
    }

    Ok(AgeTable { bands })
}

fn parse_range(range: &str) -> Result<(u32, Option<u32>), ValidationError> {
    let malformed = || ValidationError::MalformedRange {
        range: range.to_string(),
    };
    let trimmed = range.trim();

    if let Some(low) = trimmed.strip_suffix('+') {
        let low = low.parse::<u32>().map_err(|_| malformed())?;
        return Ok((low, None));
    }

    let (low, high) = trimmed.split_once('-').ok_or_else(malformed)?;
    let low = low.trim().parse::<u32>().map_err(|_| malformed())?;
    let high = high.trim().parse::<u32>().map_err(|_| malformed())?;
    if high < low {
        return Err(malformed());
    }

    Ok((low, Some(high)))
}
