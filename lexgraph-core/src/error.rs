//! Error types for loading the relation store and its configuration.
//!
//! Queries never fail: unknown keys resolve to empty results. Everything
//! here happens once, at startup.

use crate::node_id::NodeIdError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the source mappings from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A mapping file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A mapping file is not valid JSON of the expected shape.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A composite `language:word` identifier in a mapping file is malformed.
    #[error("malformed identifier '{id}' in {file}: {source}")]
    MalformedIdentifier {
        file: String,
        id: String,
        #[source]
        source: NodeIdError,
    },
}

/// Errors raised while reading the YAML configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// `traversal.max_depth` is above the supported ceiling.
    #[error("traversal.max_depth {max_depth} exceeds the ceiling of {ceiling}")]
    DepthTooLarge { max_depth: usize, ceiling: usize },
}
