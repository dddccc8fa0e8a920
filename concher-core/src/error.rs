//! Error types for concher-core.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of in-memory registry operations. None of these mutate the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{0} not found in locations")]
    LocationNotFound(String),

    #[error("context {0} not found")]
    ContextNotFound(String),

    #[error("{location} not found in context {context}")]
    NotAMember { location: String, context: String },

    #[error("{location} is already in context {context}")]
    AlreadyMember { location: String, context: String },

    /// Neither a location nor a context carries this name.
    #[error("{0} not found in either contexts or locations")]
    NameNotFound(String),
}

/// All errors that can arise from loading or saving the registry.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure (permission denied, disk full, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML serialization error (save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load: includes file path and line context from serde_yaml.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The file was written by a different storage format.
    #[error("{path} has format version {found}, expected {expected}")]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    /// `dirs::home_dir()` returned `None` and no override was set.
    #[error("cannot determine home directory; set $HOME or $CONCHER_HOME")]
    HomeNotFound,
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.into(),
        source,
    }
}
