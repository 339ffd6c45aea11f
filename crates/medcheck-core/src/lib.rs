//! medcheck-core
//!
//! Pure domain types for the symptom checker: symptoms, diseases, the user's
//! selection and rule-based prediction results. No I/O, no network.

pub mod error;
pub mod models;
