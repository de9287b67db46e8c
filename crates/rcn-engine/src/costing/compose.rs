use std::collections::BTreeMap;

use crate::catalog::FactorCategory;

use super::domain::{BreakdownLine, CostResult, ResolvedFactor};
use super::resolve::InputError;

/// A complete set of resolved factors ready for composition.
///
/// Usually produced by [`resolve_selection`](super::resolve::resolve_selection),
/// but constructible directly for ad-hoc calculations that bypass the
/// catalog entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorSelection {
    pub base: ResolvedFactor,
    pub region: ResolvedFactor,
    pub quality: ResolvedFactor,
    pub condition: ResolvedFactor,
    pub complexity: ResolvedFactor,
    pub age: ResolvedFactor,
}

/// Multiply a resolved factor set into a final cost with an audit breakdown.
///
/// The multiplication order is fixed so repeated calls with identical input
/// are bit-reproducible:
/// base × region × quality × condition × complexity × age × size × height.
/// Intermediates keep full precision; only the final cost is rounded, to
/// cents.
pub fn compose(
    catalog_version: &str,
    selection: FactorSelection,
    size_factor: f64,
    height_factor: f64,
) -> Result<CostResult, InputError> {
    if !size_factor.is_finite() || size_factor <= 0.0 {
        return Err(InputError::NonPositiveSizeFactor(size_factor));
    }
    if !height_factor.is_finite() || height_factor <= 0.0 {
        return Err(InputError::NonPositiveHeightFactor(height_factor));
    }

    let FactorSelection {
        base,
        region,
        quality,
        condition,
        complexity,
        age,
    } = selection;

    let mut cost = base.value;
    cost *= region.value;
    cost *= quality.value;
    cost *= condition.value;
    cost *= complexity.value;
    cost *= age.value;
    cost *= size_factor;
    cost *= height_factor;
    let final_cost = round_to_cents(cost);

    let ordered = [
        (FactorCategory::BuildingTypes, &base),
        (FactorCategory::Regions, &region),
        (FactorCategory::Quality, &quality),
        (FactorCategory::Condition, &condition),
        (FactorCategory::Complexity, &complexity),
        (FactorCategory::Age, &age),
    ];

    let mut breakdown: Vec<BreakdownLine> = ordered
        .iter()
        .map(|(category, factor)| BreakdownLine {
            label: format!("{} {}", category, factor.code),
            value: factor.value,
        })
        .collect();
    breakdown.push(BreakdownLine {
        label: "sizeFactor".to_string(),
        value: size_factor,
    });
    breakdown.push(BreakdownLine {
        label: "heightFactor".to_string(),
        value: height_factor,
    });
    breakdown.push(BreakdownLine {
        label: "finalCost".to_string(),
        value: final_cost,
    });

    let resolved_factors: BTreeMap<FactorCategory, ResolvedFactor> = ordered
        .into_iter()
        .map(|(category, factor)| (category, factor.clone()))
        .collect();

    Ok(CostResult {
        catalog_version: catalog_version.to_string(),
        base_cost: base.value,
        resolved_factors,
        final_cost,
        breakdown,
    })
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
