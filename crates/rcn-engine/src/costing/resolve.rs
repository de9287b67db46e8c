use tracing::error;

use crate::catalog::{AgeBand, AgeTable, CodeTable, FactorCatalog, FactorCategory, FactorEntry};

use super::compose::FactorSelection;
use super::domain::{CostRequest, ResolvedFactor};

/// A request referenced a code the active catalog does not carry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown code '{code}' in category {category}")]
pub struct LookupError {
    pub category: FactorCategory,
    pub code: String,
}

/// A request's continuous fields are outside their domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("age must be non-negative, got {0}")]
    NegativeAge(f64),
    #[error("size factor must be a finite number > 0, got {0}")]
    NonPositiveSizeFactor(f64),
    #[error("height factor must be a finite number > 0, got {0}")]
    NonPositiveHeightFactor(f64),
}

/// A validated catalog produced an impossible lookup outcome. This is a
/// defect in the engine, never a request error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("age {age_years} matched {matches} bands in a validated catalog")]
pub struct InvariantFault {
    pub age_years: f64,
    pub matches: usize,
}

/// Exact-code lookup against one table.
pub fn resolve_code<'a>(table: &'a CodeTable, code: &str) -> Result<&'a FactorEntry, LookupError> {
    table.get(code).ok_or_else(|| LookupError {
        category: table.category(),
        code: code.to_string(),
    })
}

/// Band lookup for a non-negative age.
///
/// Validation guarantees contiguous, exhaustive bands, so exactly one band
/// matches any non-negative age; anything else is an invariant fault and is
/// escalated, not returned as a lookup miss.
pub fn resolve_age(table: &AgeTable, age_years: f64) -> Result<&AgeBand, AgeResolveError> {
    if !age_years.is_finite() || age_years < 0.0 {
        return Err(AgeResolveError::Input(InputError::NegativeAge(age_years)));
    }

    let matches: Vec<&AgeBand> = table
        .bands()
        .iter()
        .filter(|band| band.contains(age_years))
        .collect();

    match matches.as_slice() {
        [band] => Ok(*band),
        other => {
            let fault = InvariantFault {
                age_years,
                matches: other.len(),
            };
            error!(age_years, matches = other.len(), "age band invariant violated");
            Err(AgeResolveError::Invariant(fault))
        }
    }
}

/// The two ways an age lookup can fail, kept distinct so a bad request is
/// never conflated with an engine defect.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AgeResolveError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Invariant(#[from] InvariantFault),
}

/// Resolve every categorical and age input of a request against one catalog
/// snapshot. The first failure short-circuits.
pub fn resolve_selection(
    catalog: &FactorCatalog,
    request: &CostRequest,
) -> Result<FactorSelection, super::CostError> {
    let base = resolve_code(catalog.building_types(), &request.building_type)?;
    let region = resolve_code(catalog.regions(), &request.region)?;
    let quality = resolve_code(catalog.quality(), &request.quality)?;
    let condition = resolve_code(catalog.condition(), &request.condition)?;
    let complexity = resolve_code(catalog.complexity(), &request.complexity)?;
    let age = match resolve_age(catalog.age(), request.age_years) {
        Ok(band) => band,
        Err(AgeResolveError::Input(err)) => return Err(err.into()),
        Err(AgeResolveError::Invariant(fault)) => return Err(fault.into()),
    };

    Ok(FactorSelection {
        base: ResolvedFactor::new(base.code.clone(), base.factor),
        region: ResolvedFactor::new(region.code.clone(), region.factor),
        quality: ResolvedFactor::new(quality.code.clone(), quality.factor),
        condition: ResolvedFactor::new(condition.code.clone(), condition.factor),
        complexity: ResolvedFactor::new(complexity.code.clone(), complexity.factor),
        age: ResolvedFactor::new(age.label(), age.factor),
    })
}
