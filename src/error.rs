//! Error types for loading and analyzing student records.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudentError {
    /// Caller asked for a subject other than math, english or science.
    #[error("Invalid subject: '{subject}' (expected math, english or science)")]
    InvalidSubject { subject: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StudentError {
    pub fn invalid_subject(subject: impl Into<String>) -> Self {
        Self::InvalidSubject {
            subject: subject.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StudentError>;
