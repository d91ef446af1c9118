use super::Host;
use crate::Result;
use crate::schema::Schema;
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to schema file
    #[arg(long, short = 's', value_name = "PATH", default_value = "schema.yml", env = "JSON2PROM_SCHEMA")]
    pub schema: Utf8PathBuf,
}

/// Check that a schema file loads and holds at least one indexer
///
/// # Errors
///
/// Returns an error if the schema file cannot be read, parsed, or is empty
pub fn validate_schema<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    match Schema::load(&args.schema) {
        Ok(schema) => {
            let _ = writeln!(host.output(), "Schema validation successful");
            let _ = writeln!(host.output(), "Schema file: {}", args.schema);
            let _ = writeln!(host.output(), "Root indexers: {}", schema.indexers().len());
            Ok(())
        }
        Err(e) => {
            // {e:#} renders the whole context chain, not just the outermost message.
            let _ = writeln!(host.error(), "❌ Schema validation failed: {e:#}");
            host.exit(1);
            Err(e)
        }
    }
}
