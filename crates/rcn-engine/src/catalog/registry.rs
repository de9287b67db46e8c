use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::domain::FactorCatalog;
use super::validate::{validate_json, ValidationError};

/// Failures raised by registry lookups.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown catalog version '{0}'")]
    UnknownVersion(String),
    #[error("no catalog has been loaded")]
    NoneLoaded,
}

/// Process-wide holder of validated catalog versions with one active pointer.
///
/// Writes take the lock exclusively; readers clone the active `Arc` once and
/// keep that snapshot for the whole computation, so replacing the active
/// catalog never tears an in-flight calculation.
#[derive(Debug, Default)]
pub struct CatalogRegistry {
    state: RwLock<RegistryState>,
}

#[derive(Debug, Default)]
struct RegistryState {
    catalogs: BTreeMap<String, Arc<FactorCatalog>>,
    active: Option<Arc<FactorCatalog>>,
}

/// Listing entry for the catalog inventory endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogVersionInfo {
    pub version: String,
    pub last_updated: NaiveDate,
    pub active: bool,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a raw JSON document, returning its version.
    ///
    /// On failure the registry is untouched. The first successful load
    /// becomes the active catalog; later loads register inactive until
    /// [`set_active`](Self::set_active) or [`swap`](Self::swap).
    pub fn load(&self, raw: &str) -> Result<String, ValidationError> {
        let catalog = validate_json(raw)?;
        let version = catalog.version().to_string();
        self.register(Arc::new(catalog));
        Ok(version)
    }

    fn register(&self, catalog: Arc<FactorCatalog>) {
        let mut state = self.state.write().expect("registry lock poisoned");
        let version = catalog.version().to_string();
        let first = state.active.is_none();
        state.catalogs.insert(version.clone(), catalog.clone());
        if first {
            state.active = Some(catalog);
            info!(%version, "catalog activated");
        } else {
            info!(%version, "catalog registered");
        }
    }

    /// Register a validated catalog and make it active in one atomic write.
    pub fn swap(&self, catalog: FactorCatalog) {
        let catalog = Arc::new(catalog);
        let mut state = self.state.write().expect("registry lock poisoned");
        let version = catalog.version().to_string();
        state.catalogs.insert(version.clone(), catalog.clone());
        state.active = Some(catalog);
        info!(%version, "catalog swapped in");
    }

    /// Point the active catalog at an already-registered version.
    pub fn set_active(&self, version: &str) -> Result<(), RegistryError> {
        let mut state = self.state.write().expect("registry lock poisoned");
        let catalog = state
            .catalogs
            .get(version)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownVersion(version.to_string()))?;
        state.active = Some(catalog);
        info!(%version, "catalog activated");
        Ok(())
    }

    /// Capture one immutable snapshot: the named version, or the active one.
    ///
    /// Calling with `None` before any successful load is a configuration
    /// fault, not a request error.
    pub fn snapshot(&self, version: Option<&str>) -> Result<Arc<FactorCatalog>, RegistryError> {
        let state = self.state.read().expect("registry lock poisoned");
        match version {
            Some(version) => state
                .catalogs
                .get(version)
                .cloned()
                .ok_or_else(|| RegistryError::UnknownVersion(version.to_string())),
            None => state.active.clone().ok_or(RegistryError::NoneLoaded),
        }
    }

    /// All registered versions in lexical order, flagging the active one.
    pub fn versions(&self) -> Vec<CatalogVersionInfo> {
        let state = self.state.read().expect("registry lock poisoned");
        let active_version = state
            .active
            .as_ref()
            .map(|catalog| catalog.version().to_string());
        state
            .catalogs
            .values()
            .map(|catalog| CatalogVersionInfo {
                version: catalog.version().to_string(),
                last_updated: catalog.last_updated(),
                active: active_version.as_deref() == Some(catalog.version()),
            })
            .collect()
    }
}
