//! Error types for loading traces and parsing cookies.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a report run.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to read trace {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid trace JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Write(#[source] io::Error),
}

/// Errors from parsing a `Set-Cookie` value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CookieError {
    #[error("attribute '{0}' appears before any cookie")]
    AttributeBeforeCookie(String),
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("cookie with empty name")]
    EmptyName,
}
