use thiserror::Error;

#[derive(Debug, Error)]
pub enum NeedleError {
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("invalid question type: {0}")]
    InvalidQuestion(String),

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("topology {topology} cannot present a {kind} chain")]
    TopologyMismatch { topology: String, kind: String },

    #[error("trial {idx}: no chain accepted after {attempts} attempts")]
    AcceptanceExhausted { idx: usize, attempts: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("completion error: {0}")]
    Completion(String),

    #[error("store error: {0}")]
    Store(String),
}

pub type NeedleResult<T> = Result<T, NeedleError>;
