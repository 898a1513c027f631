use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlossaryError {
    #[error("input file {0:?} does not exist")]
    SourceMissing(PathBuf),
    #[error("failed to read {source_name}: {message}")]
    SourceRead {
        source_name: String,
        message: String,
    },
    #[error("{0} produced no records")]
    EmptyResult(String),
    #[error("document renderer '{backend}' is not installed; {remediation}")]
    RenderBackendMissing {
        backend: String,
        remediation: String,
    },
    #[error("document conversion failed: {0}")]
    ConversionFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl GlossaryError {
    pub fn source_read(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::SourceRead {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GlossaryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("stroke lookup failed for '{ch}': {reason}")]
pub struct StrokeLookupError {
    pub ch: char,
    pub reason: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LegacyDecodeError {
    #[error("malformed {encoding} byte sequence")]
    Malformed { encoding: &'static str },
    #[error("unknown fallback encoding '{0}'")]
    UnknownEncoding(String),
    #[error("unreadable file: {0}")]
    Unreadable(String),
}
