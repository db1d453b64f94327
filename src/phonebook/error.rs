use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("No contact with {field} '{value}'")]
    ContactNotFound { field: &'static str, value: String },

    #[error("File operation failed on {}: {source}", .path.display())]
    FileOperation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Console I/O. Anything touching the contact or config file is `FileOperation`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl PhonebookError {
    pub fn not_found_by_name(name: &str) -> Self {
        Self::ContactNotFound {
            field: "name",
            value: name.to_string(),
        }
    }

    pub fn not_found_by_id(id: &str) -> Self {
        Self::ContactNotFound {
            field: "ID",
            value: id.to_string(),
        }
    }

    pub fn file_op(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOperation {
            path: path.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContactNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
