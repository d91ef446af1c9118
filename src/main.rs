//! A tool to turn JSON documents into metric exposition lines.
//!
//! # Overview
//!
//! `json2prom` reads a JSON document, walks it under the guidance of a small
//! schema file, and prints one `name{label="value",...} value` line per metric
//! the schema matches. It exists for the gap between "this service has a JSON
//! status endpoint" and "this service has a metrics endpoint": point the tool
//! at the JSON and describe the fields you care about, and the output is ready
//! for a textfile collector or any other exposition-format consumer.
//!
//! # Installation
//!
//! ```bash
//! cargo install json2prom
//! ```
//!
//! # Quick Start
//!
//! Generate a starting schema, then pipe a document through it:
//!
//! ```bash
//! json2prom init
//! curl -s "$VAULT_ADDR/v1/sys/replication/status" | json2prom extract
//! ```
//!
//! # Commands
//!
//! **Extract metric lines from a document:**
//! ```bash
//! json2prom extract --schema status.yml < status.json
//! json2prom extract --schema status.yml --input status.json
//! ```
//!
//! **Validate a schema file:**
//! ```bash
//! json2prom validate --schema status.yml
//! ```
//!
//! **Generate a commented example schema:**
//! ```bash
//! json2prom init my-schema.yml
//! ```
//!
//! The schema path defaults to `schema.yml` and can also come from the
//! `JSON2PROM_SCHEMA` environment variable. Schemas may be YAML (`.yml`,
//! `.yaml`) or JSON (`.json`).
//!
//! # Schemas
//!
//! A schema is a list of indexer nodes. Each node describes one step through
//! the document:
//!
//! ```yaml
//! - name: vault_replication_status   # appended to the metric name
//!   key: data                        # descend into this field
//!   contains:                        # nodes applied one level down
//!     - label: replicationType       # record each iterated key as this label
//!       key: '*'                     # iterate every key/value pair
//!       metrics:
//!         - value: last_wal          # numeric field to read
//!           labels:                  # fields copied as labels
//!             - mode
//! ```
//!
//! Node fields:
//!
//! - `name`: static segment appended to the metric name, for this node and
//!   all of its siblings that follow it in the same list
//! - `key`: field to descend into; `'*'` instead iterates every key/value
//!   pair of the current object; when omitted, `name` is used as the key
//! - `label`: with `key: '*'`, the label under which each iterated key is
//!   recorded; a wildcard without a label matches nothing
//! - `metrics`: extraction rules applied to each object a wildcard reaches
//! - `contains`: child nodes applied one level down
//!
//! Metric fields:
//!
//! - `value`: key of the field holding the metric value; when omitted the
//!   metric emits a constant 1, but only if at least one label matched
//! - `labels`: keys whose present, non-null values become labels
//!
//! # Values
//!
//! JSON numbers are used as-is and strings are parsed as numbers. Anything
//! else that is present but not numeric (booleans, objects, arrays,
//! unparseable strings) produces `NaN`, so the metric's existence is still
//! visible. A missing or null value field skips just that metric.
//!
//! # Example
//!
//! With the quick-start schema above and this document:
//!
//! ```json
//! {
//!   "data": {
//!     "dr": {"last_wal": 380, "mode": "primary"},
//!     "performance": {"last_wal": 415, "mode": "secondary"}
//!   }
//! }
//! ```
//!
//! the output is:
//!
//! ```text
//! vault_replication_status_last_wal{mode="primary",replicationType="dr"} 380.000000
//! vault_replication_status_last_wal{mode="secondary",replicationType="performance"} 415.000000
//! ```
//!
//! Output order is deterministic: wildcard keys are visited in ascending
//! order and labels print sorted by key, so the same schema and document
//! always produce the same bytes.
//!
//! # Exit Codes
//!
//! - `0`: extraction or validation succeeded
//! - `1`: the schema or the input was rejected; details go to stderr
//!
//! # Troubleshooting
//!
//! ## No output
//!
//! An extraction that matches nothing exits successfully with empty output.
//! Check that wildcard nodes carry a `label` and that `key` chains actually
//! reach the objects holding your metric fields. Running with
//! `--log-level debug` shows how many indexers loaded and how many lines
//! were written.
//!
//! ## NaN values
//!
//! `NaN` means the field was present but not numeric. If the field is a
//! status string, move it from `value` into `labels`.

use json2prom::{Host, run};
use std::io::{Read, Write};
use std::io::{stderr, stdin, stdout};

/// Default host that uses the real process streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn input(&mut self) -> impl Read {
        stdin()
    }

    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args())
}
