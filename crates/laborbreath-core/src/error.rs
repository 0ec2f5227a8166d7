//! Core error types for laborbreath-core.
//!
//! Every failure in this crate is non-fatal by design: the log keeps its
//! in-memory state and the caller decides how loudly to surface the error.

use std::path::PathBuf;
use thiserror::Error;

use crate::contraction::ContractionEvent;

/// Errors from the persisted contraction store.
///
/// A missing file on load is *not* an error; it maps to an empty log.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The application data directory could not be resolved or created.
    #[error("Cannot prepare data directory: {0}")]
    DataDir(String),

    /// The store file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file was read but its contents did not parse.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the store file failed (disk full, permissions, ...).
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A contraction was recorded in memory but could not be persisted.
///
/// The event is carried inside the error so the caller still has it;
/// the in-memory log is *not* rolled back.
#[derive(Error, Debug)]
#[error("Contraction {id} recorded but not persisted: {source}", id = .event.id)]
pub struct RecordError {
    pub event: ContractionEvent,
    #[source]
    pub source: StoreError,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}
