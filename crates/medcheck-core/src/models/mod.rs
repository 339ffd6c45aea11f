pub mod disease;
pub mod prediction;
pub mod selection;
pub mod symptom;

pub use disease::{Disease, Severity};
pub use prediction::{ConfidenceTier, PredictionResult};
pub use selection::Selection;
pub use symptom::Symptom;
