//! Compiled-in catalog tables.

pub mod diseases;
pub mod symptoms;

pub use diseases::builtin_diseases;
pub use symptoms::builtin_symptoms;
