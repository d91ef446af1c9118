//! The extraction engine.
//!
//! Extraction is a recursive walk over a parsed JSON document, steered by the
//! indexer tree of a [`Schema`](crate::schema::Schema). Three rules govern the
//! walk:
//!
//! - An indexer's `name` appends a segment to the metric name being built,
//!   and the segment stays in place for the later indexers of the same list.
//! - A `*` key iterates every key/value pair of the current object, records
//!   the key under the indexer's `label`, and applies the indexer's metric
//!   specs to each value that is itself an object.
//! - Any other effective key descends into the matching field, handing the
//!   child indexer list a copy of the state built so far.
//!
//! Matched metric leaves come out as exposition-style text lines through the
//! [`Emitter`], one line per leaf, deterministic for a given schema and
//! document.

mod accumulator;
mod emit;
mod traverse;

pub use accumulator::Accumulator;
pub use emit::Emitter;
pub use traverse::Extractor;
