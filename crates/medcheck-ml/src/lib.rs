//! medcheck-ml
//!
//! Client for the remote disease-classification service: wire types, the
//! [`service::PredictionService`] boundary and its HTTP implementation.

pub mod client;
pub mod error;
pub mod service;
pub mod types;

pub use client::MlApiClient;
pub use error::MlError;
pub use service::{BoxFuture, PredictionService};
