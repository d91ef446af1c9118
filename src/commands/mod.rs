//! Command-line interface and orchestration for json2prom
//!
//! This module implements the CLI commands and wires the schema model and the
//! extraction engine into end-to-end workflows. It handles argument parsing,
//! logging setup, and the routing of input and output streams through the
//! [`Host`] abstraction so that every command can run against an in-memory
//! host in tests.
//!
//! # Implementation Model
//!
//! The module is organized around three commands:
//!
//! - **extract**: Load a schema, parse a JSON document from standard input or
//!   a file, walk the document, and write one exposition-style line per
//!   matched metric
//! - **validate**: Check that a schema file parses and holds at least one
//!   indexer
//! - **init**: Generate a commented example schema file to start from
//!
//! The `run` function parses command-line arguments using clap and routes to
//! the appropriate command handler. The `common` module provides logging
//! setup shared by all commands.

mod common;
mod extract;
mod host;
mod init;
mod run;
mod validate;

pub use extract::{ExtractArgs, extract_metrics};
pub use host::Host;
pub use init::{InitArgs, init_schema};
pub use run::run;
pub use validate::{ValidateArgs, validate_schema};
