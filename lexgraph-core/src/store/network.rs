//! Language contact network
//!
//! For each language the source data lists the languages it exchanges words
//! with and a word count per pair. Self-pairs are dropped, entries are ranked
//! by count and each carries its share of the language's total.

use serde::{Deserialize, Serialize};

/// One weighted edge of the language network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkLink {
    pub language: String,
    pub count: u64,
    /// `count` divided by the sum of counts over the same language's links
    pub proportion: f64,
}

pub(crate) fn normalize_links(language: &str, links: Vec<(String, u64)>) -> Vec<NetworkLink> {
    let mut links: Vec<(String, u64)> = links
        .into_iter()
        .filter(|(other, _)| other != language)
        .collect();

    // Stable: equal counts keep source order
    links.sort_by(|a, b| b.1.cmp(&a.1));

    let total: u64 = links.iter().map(|(_, count)| count).sum();

    links
        .into_iter()
        .map(|(other, count)| NetworkLink {
            language: other,
            count,
            proportion: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect()
}
