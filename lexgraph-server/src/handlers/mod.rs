//! HTTP handlers, one module per resource.

pub mod health;
pub mod language;
pub mod search;
pub mod word;
