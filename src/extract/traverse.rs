use crate::Result;
use crate::extract::{Accumulator, Emitter};
use crate::schema::{Indexer, MetricSpec, Schema};
use ohno::bail;
use serde_json::{Map, Value};
use std::io::Write;

/// Walks a JSON document under the guidance of a schema, emitting one metric
/// line per matched metric leaf.
///
/// Traversal branches copy the [`Accumulator`] so that array elements,
/// wildcard keys, and keyed descents each build on an independent snapshot of
/// the state gathered above them. Within one object's indexer list the
/// accumulator is shared, so name segments contributed by earlier indexers
/// carry into later ones.
#[derive(Debug)]
pub struct Extractor<'w, W: Write> {
    emitter: Emitter<'w, W>,
}

impl<'w, W: Write> Extractor<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        Self {
            emitter: Emitter::new(out),
        }
    }

    /// Walk `document` guided by `schema` and return the number of metric
    /// lines written.
    pub fn run(mut self, schema: &Schema, document: &Value) -> Result<u64> {
        self.walk(Accumulator::new(), schema.indexers(), document)?;
        Ok(self.emitter.lines())
    }

    fn walk(&mut self, acc: Accumulator, indexers: &[Indexer], value: &Value) -> Result<()> {
        if indexers.is_empty() {
            return Ok(());
        }

        match value {
            Value::Object(object) => self.walk_object(acc, indexers, object),
            Value::Array(elements) => {
                // Validate every element before processing any, so a malformed
                // element cannot leave behind a partial prefix of the array's
                // output.
                let mut objects = Vec::with_capacity(elements.len());
                for (index, element) in elements.iter().enumerate() {
                    match element.as_object() {
                        Some(object) => objects.push(object),
                        None => bail!(
                            "array elements must all be objects, but element {index} is {}",
                            shape_name(element)
                        ),
                    }
                }

                for object in objects {
                    self.walk_object(acc.clone(), indexers, object)?;
                }

                Ok(())
            }
            other => bail!(
                "only an object or an array of objects can be indexed, not {}",
                shape_name(other)
            ),
        }
    }

    fn walk_object(
        &mut self,
        mut acc: Accumulator,
        indexers: &[Indexer],
        object: &Map<String, Value>,
    ) -> Result<()> {
        for indexer in indexers {
            if !indexer.name.is_empty() {
                // Appended to the accumulator shared across this indexer
                // list, so the segment also prefixes every later sibling.
                acc.push_segment(&indexer.name);
            }

            if indexer.is_wildcard() && !indexer.label.is_empty() {
                for (key, child) in object {
                    let mut branch = acc.clone();
                    branch.set_label(&indexer.label, key.clone());

                    self.walk(branch.clone(), &indexer.contains, child)?;
                    if let Value::Object(fields) = child {
                        self.emit_metrics(&branch, &indexer.metrics, fields)?;
                    }
                }
            }

            if let Some(child) = object.get(indexer.descent_key()) {
                self.walk(acc.clone(), &indexer.contains, child)?;
            }
        }

        Ok(())
    }

    fn emit_metrics(
        &mut self,
        acc: &Accumulator,
        metrics: &[MetricSpec],
        object: &Map<String, Value>,
    ) -> Result<()> {
        for metric in metrics {
            let mut branch = acc.clone();

            let mut found_labels = false;
            for label in &metric.labels {
                if let Some(value) = object.get(label)
                    && !value.is_null()
                {
                    branch.set_label(label, label_text(value));
                    found_labels = true;
                }
            }

            // A metric with neither a value field nor any matched labels says
            // nothing about this object.
            if metric.value.is_empty() {
                if found_labels {
                    self.emitter.emit(&branch, 1.0)?;
                }
                continue;
            }

            branch.push_segment(&metric.value);
            let value = match object.get(&metric.value) {
                None | Some(Value::Null) => continue,
                Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
                Some(Value::String(text)) => text.parse().unwrap_or(f64::NAN),
                Some(Value::Bool(_) | Value::Array(_) | Value::Object(_)) => f64::NAN,
            };

            self.emitter.emit(&branch, value)?;
        }

        Ok(())
    }
}

/// JSON strings label verbatim; every other value labels with its JSON text
/// form.
fn label_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
