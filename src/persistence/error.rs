use thiserror::Error;

/// Errors raised while writing to durable storage.
///
/// Read-side problems never surface as errors: unreadable data loads as an empty list.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize items: {0}")]
    Serialize(#[from] serde_json::Error),
}
