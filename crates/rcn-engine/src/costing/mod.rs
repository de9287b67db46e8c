//! Cost composition: resolvers, the pure composer, the engine facade, and
//! batch evaluation over one catalog snapshot.

pub mod batch;
pub mod compose;
pub mod domain;
pub mod resolve;
pub mod router;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::catalog::{CatalogRegistry, FactorCatalog, RegistryError};

pub use batch::{run_batch, BatchReport, RowOutcome};
pub use compose::{compose, FactorSelection};
pub use domain::{BreakdownLine, CostRequest, CostResult, ResolvedFactor};
pub use resolve::{InputError, InvariantFault, LookupError};
pub use router::valuation_router;

/// Every way a cost calculation can fail, each kind kept distinct so the
/// caller can tell a bad request from a bad deployment.
#[derive(Debug, thiserror::Error)]
pub enum CostError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Invariant(#[from] InvariantFault),
}

/// Stateless calculation facade over the catalog registry.
///
/// Each call captures exactly one catalog snapshot up front and uses it for
/// the whole calculation, so a concurrent catalog swap never mixes factor
/// versions within a result.
pub struct CostingEngine {
    registry: Arc<CatalogRegistry>,
}

impl CostingEngine {
    pub fn new(registry: Arc<CatalogRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CatalogRegistry {
        &self.registry
    }

    /// Calculate against the active catalog, or a specific registered version.
    pub fn calculate(
        &self,
        request: &CostRequest,
        version: Option<&str>,
    ) -> Result<CostResult, CostError> {
        let catalog = self.registry.snapshot(version)?;
        Self::calculate_with(&catalog, request)
    }

    /// Calculate against an explicit snapshot.
    pub fn calculate_with(
        catalog: &FactorCatalog,
        request: &CostRequest,
    ) -> Result<CostResult, CostError> {
        let selection = resolve::resolve_selection(catalog, request)?;
        let result = compose::compose(
            catalog.version(),
            selection,
            request.size_factor,
            request.height_factor,
        )?;
        Ok(result)
    }
}
