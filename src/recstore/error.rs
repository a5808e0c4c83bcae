use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecStoreError {
    #[error("{0}")]
    Config(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),
}

impl RecStoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn missing_flag(flag: &str) -> Self {
        Self::Config(format!("-{} flag has to be specified", flag))
    }
}

pub type Result<T> = std::result::Result<T, RecStoreError>;
