//! Engine error types
//!
//! Fatal defects (bad specifier, bad configuration) abort the run and
//! unwind to the process boundary; recoverable failures (one source down,
//! one descriptor unresolvable) are collected and reported while the
//! engine keeps going.

use thiserror::Error;

/// Module engine errors
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid host manifest: {0}")]
    InvalidManifest(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Specifier '{0}' failed: {1}")]
    SpecifierFailed(String, String),

    #[error("Source enumeration failed: {0}")]
    SourceUnavailable(String),

    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
