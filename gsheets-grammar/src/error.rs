//! Error types for grammar assembly

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading fragments or writing the grammar
#[derive(Debug)]
pub enum GrammarError {
    /// A fragment or output file could not be read or written
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A fragment or base grammar exists but is not valid JSON
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A fragment parsed as JSON but matches neither accepted shape
    /// (bare rule array, or rules nested under `repository.<key>.patterns`)
    MalformedFragment { path: PathBuf, detail: String },
    /// A name-list file exists but contains no usable entries
    EmptyNameList { path: PathBuf },
}

impl GrammarError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GrammarError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        GrammarError::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        GrammarError::MalformedFragment {
            path: path.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            GrammarError::Parse { path, source } => {
                write!(f, "Failed to parse {}: {}", path.display(), source)
            }
            GrammarError::MalformedFragment { path, detail } => {
                write!(f, "Malformed fragment {}: {}", path.display(), detail)
            }
            GrammarError::EmptyNameList { path } => {
                write!(f, "Name list {} is empty", path.display())
            }
        }
    }
}

impl std::error::Error for GrammarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrammarError::Io { source, .. } => Some(source),
            GrammarError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Type alias for results produced by this crate
pub type GrammarResult<T> = Result<T, GrammarError>;
