// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or writing a stock table on disk.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid stock table: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode stock table for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejected input from an edit prompt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("'{0}' is not a valid number")]
    InvalidFloat(String),

    #[error("'{0}' is not a valid whole number")]
    InvalidInteger(String),
}
