use thiserror::Error;

#[derive(Debug, Error)]
pub enum SavegateError {
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid job snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),
}
