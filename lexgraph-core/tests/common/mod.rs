//! Shared fixtures: writes a small lexical graph as JSON mapping files.

#![allow(dead_code)]

use std::path::Path;

use serde_json::{json, Value};
use tempfile::TempDir;

use lexgraph_core::DataConfig;

pub fn write(dir: &Path, file: &str, value: &Value) {
    std::fs::write(dir.join(file), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

/// Write the default fixture set into a fresh temp dir
pub fn fixture_dir() -> (TempDir, DataConfig) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path();

    write(
        path,
        "word_langs.json",
        &json!({
            "cat": ["eng", "fra"],
            "engine": ["eng"],
            "chat": ["fra"],
            "cattus": ["lat"]
        }),
    );
    write(
        path,
        "word_meanings.json",
        &json!({
            "eng:cat": ["eng:feline", "fra:chat"],
            "fra:chat": ["eng:cat"]
        }),
    );
    write(
        path,
        "word_parents.json",
        &json!({
            "eng:cat": ["lat:cattus"],
            "lat:cattus": ["eng:cat"]
        }),
    );
    write(
        path,
        "word_children.json",
        &json!({
            "lat:cattus": ["eng:cat", "fra:chat"]
        }),
    );
    write(
        path,
        "lang_samples.json",
        &json!({
            "eng": ["The cat sat on the mat."],
            "lat": ["Cattus in horto est."]
        }),
    );
    write(
        path,
        "relation_samples.json",
        &json!({
            "englat": ["cat < cattus"]
        }),
    );
    write(
        path,
        "langs.json",
        &json!({
            "eng": { "name": "English", "family": "Germanic" },
            "fra": { "name": "French" },
            "lat": { "name": "Latin" }
        }),
    );
    write(
        path,
        "lang_network.json",
        &json!({
            "from": { "eng": [["eng", 500], ["fra", 20], ["lat", 60]] },
            "to": { "lat": [["eng", 60], ["fra", 140]] }
        }),
    );

    let config = DataConfig::with_dir(path);
    (dir, config)
}
