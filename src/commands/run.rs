//! Command dispatch logic for json2prom

use super::common::{LogLevel, init_logging};
use super::{ExtractArgs, InitArgs, ValidateArgs, extract_metrics, init_schema, validate_schema};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "json2prom", version, about = "Turn JSON documents into metric exposition lines", author)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Json2PromSubcommand,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Json2PromSubcommand {
    /// Extract metric lines from a JSON document
    Extract(ExtractArgs),
    /// Validate a schema file
    Validate(ValidateArgs),
    /// Generate a default schema file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    init_logging(cli.log_level);

    match &cli.command {
        Json2PromSubcommand::Extract(extract_args) => extract_metrics(host, extract_args),
        Json2PromSubcommand::Validate(validate_args) => validate_schema(host, validate_args),
        Json2PromSubcommand::Init(init_args) => init_schema(host, init_args),
    }
}
