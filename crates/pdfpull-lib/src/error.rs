use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfPullError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),

    #[error("Missing or invalid configuration: {details}")]
    ConfigurationMissing { details: String },

    #[error("Invalid input: {details}")]
    InvalidInput { details: String },

    #[error("Connection probe to {url} failed: {reason}")]
    ProbeFailed { url: String, reason: String },

    #[error("Failed to download document {index} from {url}: {reason}")]
    ItemDownloadFailed {
        index: u32,
        url: String,
        reason: String,
    },

    #[error("Download directory creation failed at {path}: {reason}")]
    OutputDirectoryCreation { path: PathBuf, reason: String },

    #[error("Failed to write run report to {path}: {reason}")]
    ReportWrite { path: PathBuf, reason: String },

    #[error("Integrity check failed for {path}: recorded {expected}, found {actual}")]
    IntegrityMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}
