use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown severity: {0}")]
    InvalidSeverity(String),
}
