//! Lexicon configuration parsing
//!
//! Loads the data locations, traversal bounds and server settings from YAML.
//! Every section and field is optional; a missing value falls back to the
//! defaults below.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::traversal::{TraversalLimits, MAX_DEPTH_CEILING};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub data: DataConfig,
    pub traversal: TraversalLimits,
    pub search: SearchConfig,
    pub server: ServerConfig,
}

/// Search result bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of `(language, word)` hits per search
    pub max_word_matches: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_word_matches: 100,
        }
    }
}

/// Locations of the precomputed mapping files
///
/// File names are relative to `dir`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub dir: PathBuf,
    pub word_languages: String,
    pub meanings: String,
    pub parents: String,
    pub children: String,
    pub language_samples: String,
    pub relation_samples: String,
    pub languages: String,
    /// Optional: a missing file yields an empty language network
    pub language_network: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            word_languages: "word_langs.json".to_string(),
            meanings: "word_meanings.json".to_string(),
            parents: "word_parents.json".to_string(),
            children: "word_children.json".to_string(),
            language_samples: "lang_samples.json".to_string(),
            relation_samples: "relation_samples.json".to_string(),
            languages: "langs.json".to_string(),
            language_network: "lang_network.json".to_string(),
        }
    }
}

impl DataConfig {
    /// Use `dir` as the data directory with default file names
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Full path of a file inside the data directory
    pub fn path_of(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Directory of the built front end, served for unmatched paths
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
            static_dir: PathBuf::from("build"),
        }
    }
}

impl LexiconConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot honor safely
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.traversal.max_depth > MAX_DEPTH_CEILING {
            return Err(ConfigError::DepthTooLarge {
                max_depth: self.traversal.max_depth,
                ceiling: MAX_DEPTH_CEILING,
            });
        }
        Ok(())
    }
}
