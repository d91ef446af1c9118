//! The declarative schema describing where metrics live inside a JSON document.
//!
//! A schema is an ordered list of [`Indexer`] nodes forming a tree that
//! mirrors the JSON structure to traverse. Each node can contribute a static
//! segment to the metric name, select the child key to descend into (or
//! iterate every key with `'*'`), and list the [`MetricSpec`] leaves to read
//! from objects reached under a wildcard.
//!
//! The tree is parsed once at startup and is read-only afterwards; traversal
//! state lives entirely in the accumulator carried by the extraction engine.

mod model;

pub use model::{DEFAULT_SCHEMA_YAML, Indexer, MetricSpec, Schema, WILDCARD_KEY};
