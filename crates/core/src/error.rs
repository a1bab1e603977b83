use thiserror::Error;

/// Why a decoded response could not be turned into concept records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("response does not contain a key_concepts field")]
    MissingKeyConcepts,

    #[error("key_concepts is {found}, expected an array")]
    NotASequence { found: &'static str },
}

#[derive(Error, Debug)]
pub enum DynamocardsError {
    #[error("Invalid analysis endpoint {base_url}: {reason}")]
    InvalidEndpoint { base_url: String, reason: String },

    #[error("Request to analysis endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Analysis endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    Shape(#[from] ShapeError),
}

pub type Result<T> = std::result::Result<T, DynamocardsError>;
