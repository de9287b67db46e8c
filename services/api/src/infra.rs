use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use rcn_engine::catalog::{standard_catalog, CatalogRegistry};
use rcn_engine::config::CatalogConfig;
use rcn_engine::error::AppError;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) registry: Arc<CatalogRegistry>,
    pub(crate) catalog_path: Option<PathBuf>,
}

/// Populate the registry at startup: the configured document when a path is
/// set, otherwise the shipped standard table.
pub(crate) fn bootstrap_registry(
    registry: &CatalogRegistry,
    config: &CatalogConfig,
) -> Result<String, AppError> {
    match &config.path {
        Some(path) => load_catalog_file(registry, path),
        None => {
            let catalog = standard_catalog()?;
            let version = catalog.version().to_string();
            registry.swap(catalog);
            info!(%version, "standard factor table loaded");
            Ok(version)
        }
    }
}

/// Read, validate, and register a catalog document from disk.
pub(crate) fn load_catalog_file(
    registry: &CatalogRegistry,
    path: &Path,
) -> Result<String, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let version = registry.load(&raw)?;
    info!(%version, path = %path.display(), "catalog document loaded");
    Ok(version)
}

pub(crate) fn parse_positive(raw: &str) -> Result<f64, String> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as a number ({err})"))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("'{raw}' must be a finite number > 0"));
    }
    Ok(value)
}

pub(crate) fn parse_non_negative(raw: &str) -> Result<f64, String> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as a number ({err})"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("'{raw}' must be a finite number >= 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_without_a_path_loads_the_standard_table() {
        let registry = CatalogRegistry::new();
        let version = bootstrap_registry(&registry, &CatalogConfig { path: None })
            .expect("standard table loads");
        assert_eq!(version, "2025.1");
        assert!(registry.snapshot(None).is_ok());
    }

    #[test]
    fn positive_parser_rejects_zero() {
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("1.25").is_ok());
    }

    #[test]
    fn non_negative_parser_accepts_zero() {
        assert_eq!(parse_non_negative("0").expect("zero parses"), 0.0);
        assert!(parse_non_negative("-3").is_err());
    }
}
