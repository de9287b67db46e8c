//! Versioned factor catalogs: wire schema, validation into immutable
//! snapshots, and the registry that holds them.

pub mod document;
pub mod domain;
pub mod registry;
pub mod standard;
pub mod validate;

#[cfg(test)]
mod tests;

pub use document::CatalogDocument;
pub use domain::{AgeBand, AgeTable, CodeTable, FactorCatalog, FactorCategory, FactorEntry};
pub use registry::{CatalogRegistry, CatalogVersionInfo, RegistryError};
pub use standard::{standard_catalog, standard_document};
pub use validate::{validate, validate_json, ValidationError};
