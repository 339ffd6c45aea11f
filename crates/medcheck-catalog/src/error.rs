use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("disease '{disease_id}' references unknown symptom '{symptom_id}'")]
    UnknownSymptomReference {
        disease_id: String,
        symptom_id: String,
    },

    #[error("disease '{disease_id}' has an empty symptom profile")]
    EmptySymptomProfile { disease_id: String },

    #[error("duplicate symptom id: {id}")]
    DuplicateSymptom { id: String },

    #[error("duplicate disease id: {id}")]
    DuplicateDisease { id: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
