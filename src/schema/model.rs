use crate::Result;
use camino::Utf8Path;
use ohno::{IntoAppError, app_err, bail};
use serde::{Deserialize, Serialize};
use std::fs;

const LOG_TARGET: &str = " schema";

/// The example schema YAML content, embedded from `default_schema.yml`
pub const DEFAULT_SCHEMA_YAML: &str = include_str!("../../default_schema.yml");

/// Key value directing an indexer to iterate every member of the current object.
pub const WILDCARD_KEY: &str = "*";

/// One node of the schema tree: how to step from the current JSON level into
/// child levels, and which metrics to extract along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Indexer {
    /// Static segment appended to the metric name; empty contributes nothing.
    pub name: String,

    /// Label key receiving each iterated object key; meaningful only with `key: '*'`.
    pub label: String,

    /// Child key to descend into; empty reuses `name`, `'*'` iterates every key.
    pub key: String,

    /// Metrics read from objects reached by a wildcard iteration.
    pub metrics: Vec<MetricSpec>,

    /// Nested indexers applied one level down.
    pub contains: Vec<Indexer>,
}

impl Indexer {
    /// Key used for the literal child descent: `key` unless it is empty or the
    /// wildcard, in which case `name` stands in.
    #[must_use]
    pub fn descent_key(&self) -> &str {
        if self.key.is_empty() || self.key == WILDCARD_KEY {
            &self.name
        } else {
            &self.key
        }
    }

    /// Whether this node iterates every key of the current object.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.key == WILDCARD_KEY
    }
}

/// A leaf rule naming the numeric field to read and the object fields to copy as labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricSpec {
    /// Key of the numeric field; empty emits a constant 1 instead.
    pub value: String,

    /// Keys whose present, non-null values become labels on the emitted metric.
    pub labels: Vec<String>,
}

/// A full schema document: the ordered list of root indexer nodes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Schema {
    indexers: Vec<Indexer>,
}

impl Schema {
    /// Load a schema from a file, choosing the parser by file extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if the extension
    /// is not recognized, or if the schema contains no indexers
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading schema from {path}"))?;

        let extension = path.extension().unwrap_or_default();
        let schema = match extension {
            "yml" | "yaml" => Self::from_yaml(&text),
            "json" => Self::from_json(&text),
            _ => return Err(app_err!("unsupported schema file extension: {extension}")),
        }
        .into_app_err_with(|| format!("loading schema from {path}"))?;

        log::debug!(target: LOG_TARGET, "loaded {} root indexer(s) from {path}", schema.indexers.len());
        Ok(schema)
    }

    /// Parse and validate a schema from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid YAML or the schema is empty
    pub fn from_yaml(text: &str) -> Result<Self> {
        let schema: Self = serde_yaml::from_str(text).into_app_err("parsing YAML schema")?;
        schema.validate()?;
        Ok(schema)
    }

    /// Parse and validate a schema from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or the schema is empty
    pub fn from_json(text: &str) -> Result<Self> {
        let schema: Self = serde_json::from_str(text).into_app_err("parsing JSON schema")?;
        schema.validate()?;
        Ok(schema)
    }

    /// Save the example schema to a file, preserving comments for YAML output
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the extension is not recognized
    pub fn save_default(path: &Utf8Path) -> Result<()> {
        let extension = path.extension().unwrap_or_default();
        let text = match extension {
            "yml" | "yaml" => DEFAULT_SCHEMA_YAML.to_string(),
            "json" => serde_json::to_string_pretty(&Self::default())
                .into_app_err_with(|| format!("serializing default schema for saving to {path}"))?,
            _ => return Err(app_err!("unsupported schema file extension: {extension}")),
        };

        fs::write(path, text).into_app_err_with(|| format!("writing schema to {path}"))?;
        Ok(())
    }

    /// The ordered list of root indexer nodes.
    #[must_use]
    pub fn indexers(&self) -> &[Indexer] {
        &self.indexers
    }

    /// An empty document matches nothing and would silently produce no
    /// output, so it is rejected up front.
    fn validate(&self) -> Result<()> {
        if self.indexers.is_empty() {
            bail!("schema contains no indexers");
        }

        Ok(())
    }
}

impl Default for Schema {
    fn default() -> Self {
        serde_yaml::from_str(DEFAULT_SCHEMA_YAML).expect("default_schema.yml should be valid YAML that deserializes to a schema")
    }
}
