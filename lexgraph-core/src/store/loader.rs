//! Loading the relation store from the precomputed JSON mappings.
//!
//! Every composite identifier is decoded here, so a malformed `language:word`
//! in the data aborts startup instead of surfacing at query time.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use super::{LanguageMeta, RelationStore, RelationStoreBuilder};
use crate::config::DataConfig;
use crate::error::LoadError;
use crate::node_id::LexicalNode;

type KeyedList = HashMap<String, Vec<String>>;

/// On-disk shape of the language network file
#[derive(Debug, Default, Deserialize)]
struct RawNetwork {
    #[serde(default)]
    from: HashMap<String, Vec<(String, u64)>>,
    #[serde(default)]
    to: HashMap<String, Vec<(String, u64)>>,
}

impl RelationStore {
    /// Load every mapping named by `config`
    ///
    /// # Errors
    /// Fails on the first unreadable file, invalid JSON, or malformed
    /// composite identifier. The language network file may be absent.
    pub fn load(config: &DataConfig) -> Result<Self, LoadError> {
        info!(dir = %config.dir.display(), "Loading relation store");

        let word_languages: KeyedList = read_json(&config.path_of(&config.word_languages))?;
        let meanings = read_node_mapping(config, &config.meanings)?;
        let parents = read_node_mapping(config, &config.parents)?;
        let children = read_node_mapping(config, &config.children)?;
        let language_samples: KeyedList = read_json(&config.path_of(&config.language_samples))?;
        let relation_samples: KeyedList = read_json(&config.path_of(&config.relation_samples))?;
        let languages: HashMap<String, LanguageMeta> =
            read_json(&config.path_of(&config.languages))?;

        let network_path = config.path_of(&config.language_network);
        let network: RawNetwork = if network_path.exists() {
            read_json(&network_path)?
        } else {
            debug!(path = %network_path.display(), "No language network file");
            RawNetwork::default()
        };

        info!(
            words = word_languages.len(),
            meanings = meanings.len(),
            parents = parents.len(),
            children = children.len(),
            language_samples = language_samples.len(),
            relation_samples = relation_samples.len(),
            languages = languages.len(),
            network_from = network.from.len(),
            network_to = network.to.len(),
            "Relation store loaded"
        );

        let mut builder = RelationStoreBuilder::new();
        for (word, langs) in word_languages {
            builder = builder.with_word_languages(word, langs);
        }
        for (node, edges) in meanings {
            builder = builder.with_meanings(node, edges);
        }
        for (node, edges) in parents {
            builder = builder.with_parents(node, edges);
        }
        for (node, edges) in children {
            builder = builder.with_children(node, edges);
        }
        for (lang, samples) in language_samples {
            builder = builder.with_language_samples(lang, samples);
        }
        for (key, samples) in relation_samples {
            builder = builder.with_relation_samples_raw(key, samples);
        }
        for (code, meta) in languages {
            builder = builder.with_language(code, meta.name);
        }
        for (lang, links) in network.from {
            builder = builder.with_network_from(lang, links);
        }
        for (lang, links) in network.to {
            builder = builder.with_network_to(lang, links);
        }

        Ok(builder.build())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a `"language:word" -> ["language:word", ...]` file, decoding both sides
fn read_node_mapping(
    config: &DataConfig,
    file: &str,
) -> Result<Vec<(LexicalNode, Vec<LexicalNode>)>, LoadError> {
    let raw: KeyedList = read_json(&config.path_of(file))?;
    let decode = |id: &str| {
        LexicalNode::decode(id).map_err(|source| LoadError::MalformedIdentifier {
            file: file.to_string(),
            id: id.to_string(),
            source,
        })
    };

    raw.iter()
        .map(|(key, values)| {
            let node = decode(key.as_str())?;
            let edges = values
                .iter()
                .map(|v| decode(v.as_str()))
                .collect::<Result<Vec<_>, _>>()?;
            Ok((node, edges))
        })
        .collect()
}
