use super::Host;
use crate::Result;
use crate::schema::Schema;
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output schema file path
    #[arg(value_name = "PATH", default_value = "schema.yml")]
    pub output: Utf8PathBuf,
}

/// Write the commented example schema to a file
///
/// # Errors
///
/// Returns an error if the file cannot be written or its extension is not recognized
pub fn init_schema<H: Host>(host: &mut H, args: &InitArgs) -> Result<()> {
    Schema::save_default(&args.output)?;
    let _ = writeln!(host.output(), "Generated default schema file: {}", args.output);
    Ok(())
}
