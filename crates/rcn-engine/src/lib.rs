//! Factor catalog and cost composition engine for building replacement cost
//! estimates.
//!
//! The engine loads versioned factor catalogs, validates them into immutable
//! snapshots, and composes per-request adjustment factors into a final cost
//! with an auditable breakdown. All computation is pure and non-blocking;
//! catalog replacement is an atomic snapshot swap.

pub mod catalog;
pub mod config;
pub mod costing;
pub mod error;
pub mod telemetry;
