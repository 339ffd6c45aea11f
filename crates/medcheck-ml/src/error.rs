use thiserror::Error;

/// Failure talking to the prediction service.
///
/// Every variant means the same thing to callers: the service is
/// unavailable. The variants exist for logging.
#[derive(Debug, Error)]
pub enum MlError {
    #[error("could not reach prediction service at {url}: {reason}")]
    Connection { url: String, reason: String },

    #[error("request to {url} timed out after {secs}s")]
    Timeout { url: String, secs: u64 },

    #[error("prediction service returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("request task failed: {0}")]
    Task(String),
}
