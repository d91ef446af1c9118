use super::Host;
use crate::Result;
use crate::extract::Extractor;
use crate::schema::Schema;
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::IntoAppError;
use serde_json::Value;
use std::fs;
use std::io;

const LOG_TARGET: &str = "extract";

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Path to schema file
    #[arg(long, short = 's', value_name = "PATH", default_value = "schema.yml", env = "JSON2PROM_SCHEMA")]
    pub schema: Utf8PathBuf,

    /// Read the JSON document from a file instead of standard input
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<Utf8PathBuf>,
}

/// Extract metric lines from a JSON document and write them to the host's output
///
/// # Errors
///
/// Returns an error if the schema cannot be loaded, the input cannot be read
/// or parsed as JSON, or the document shape does not match the schema
pub fn extract_metrics<H: Host>(host: &mut H, args: &ExtractArgs) -> Result<()> {
    // Resolve the schema before touching the input stream, so a bad schema
    // fails without consuming anything.
    let schema = Schema::load(&args.schema)?;
    let document = read_document(host, args.input.as_ref())?;

    let mut out = host.output();
    let lines = Extractor::new(&mut out).run(&schema, &document)?;

    log::debug!(target: LOG_TARGET, "wrote {lines} metric line(s)");
    Ok(())
}

fn read_document<H: Host>(host: &mut H, input: Option<&Utf8PathBuf>) -> Result<Value> {
    let text = match input {
        Some(path) => fs::read_to_string(path).into_app_err_with(|| format!("reading input from {path}"))?,
        None => io::read_to_string(host.input()).into_app_err("reading input from stdin")?,
    };

    serde_json::from_str(&text).into_app_err("parsing input as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;

    fn write_schema(dir: &tempfile::TempDir, contents: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from(dir.path().to_string_lossy().to_string()).join("schema.yml");
        std::fs::write(&path, contents).expect("Failed to write test schema");
        path
    }

    const WILDCARD_SCHEMA: &str = "
- name: svc
  label: shard
  key: '*'
  metrics:
    - value: v
";

    #[test]
    fn test_extract_from_stdin() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = write_schema(&temp_dir, WILDCARD_SCHEMA);

        let mut host = TestHost::with_input(r#"{"a": {"v": 1}, "b": {"v": 2}}"#);
        let args = ExtractArgs { schema, input: None };

        extract_metrics(&mut host, &args).expect("extraction should succeed");

        assert_eq!(
            String::from_utf8(host.output_buf).unwrap(),
            "svc_v{shard=\"a\"} 1.000000\nsvc_v{shard=\"b\"} 2.000000\n"
        );
    }

    #[test]
    fn test_extract_from_input_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = write_schema(&temp_dir, WILDCARD_SCHEMA);

        let input = Utf8PathBuf::from(temp_dir.path().to_string_lossy().to_string()).join("input.json");
        std::fs::write(&input, r#"{"a": {"v": 3}}"#).expect("Failed to write test input");

        let mut host = TestHost::new();
        let args = ExtractArgs {
            schema,
            input: Some(input),
        };

        extract_metrics(&mut host, &args).expect("extraction should succeed");

        assert_eq!(String::from_utf8(host.output_buf).unwrap(), "svc_v{shard=\"a\"} 3.000000\n");
    }

    #[test]
    fn test_bad_schema_fails_before_input_is_read() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = write_schema(&temp_dir, "[]");

        let mut host = TestHost::with_input(r#"{"a": {"v": 1}}"#);
        let args = ExtractArgs { schema, input: None };

        let result = extract_metrics(&mut host, &args);

        assert!(result.unwrap_err().to_string().contains("loading schema from"));
        assert!(host.output_buf.is_empty());
    }

    #[test]
    fn test_missing_schema_file_is_an_error() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = Utf8PathBuf::from(temp_dir.path().to_string_lossy().to_string()).join("absent.yml");

        let mut host = TestHost::with_input("{}");
        let args = ExtractArgs { schema, input: None };

        let result = extract_metrics(&mut host, &args);

        assert!(result.unwrap_err().to_string().contains("reading schema from"));
    }

    #[test]
    fn test_malformed_json_input_is_an_error() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = write_schema(&temp_dir, WILDCARD_SCHEMA);

        let mut host = TestHost::with_input("{not json");
        let args = ExtractArgs { schema, input: None };

        let result = extract_metrics(&mut host, &args);

        assert!(result.unwrap_err().to_string().contains("parsing input as JSON"));
        assert!(host.output_buf.is_empty());
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = write_schema(&temp_dir, WILDCARD_SCHEMA);

        let mut host = TestHost::new();
        let args = ExtractArgs { schema, input: None };

        assert!(extract_metrics(&mut host, &args).is_err());
    }

    #[test]
    fn test_document_with_no_matches_produces_no_output() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let schema = write_schema(&temp_dir, WILDCARD_SCHEMA);

        let mut host = TestHost::with_input(r#"{"a": {"unrelated": true}}"#);
        let args = ExtractArgs { schema, input: None };

        extract_metrics(&mut host, &args).expect("extraction should succeed");

        assert!(host.output_buf.is_empty());
    }

    // Log targets are padded to a common width across the crate.
    #[test]
    fn test_log_target_alignment() {
        assert_eq!(LOG_TARGET, "extract");
        assert_eq!(LOG_TARGET.len(), " schema".len());
    }
}
