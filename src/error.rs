use std::path::PathBuf;

/// Errors raised while reading or writing persisted data.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot persist non-finite {field}: {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl PersistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PersistError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        PersistError::Json {
            path: path.into(),
            source,
        }
    }
}

/// Errors from parsing an interactive command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("invalid argument for '{command}': {message}")]
    InvalidArgument { command: String, message: String },

    #[error("'{command}' is not available on the {scene} screen")]
    Unavailable { command: String, scene: String },
}
