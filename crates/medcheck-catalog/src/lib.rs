//! medcheck-catalog
//!
//! The static medical catalog and the rule-based predictor. Pure data and
//! pure functions; the only I/O is optionally loading a catalog from JSON.

pub mod catalog;
pub mod data;
pub mod display;
pub mod error;
pub mod predictor;

pub use catalog::{Catalog, SymptomFilter};
pub use error::CatalogError;
pub use predictor::{confidence, predict};
