use std::collections::BTreeMap;

/// Traversal-carried state: the metric name being assembled and the labels
/// collected so far.
///
/// The accumulator is a value type with fully owned storage. Wherever the
/// traversal branches (per array element, per wildcard key, per keyed
/// descent), the branch works on a clone; mutations on one branch are never
/// visible to sibling branches or to the parent after the branch point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    segments: Vec<String>,
    labels: BTreeMap<String, String>,
}

impl Accumulator {
    /// An accumulator with no name segments and no labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one segment to the metric name under construction.
    pub fn push_segment(&mut self, segment: &str) {
        self.segments.push(segment.to_string());
    }

    /// Insert or overwrite a label; the last write for a key wins.
    pub fn set_label(&mut self, key: &str, value: String) {
        let _ = self.labels.insert(key.to_string(), value);
    }

    /// The finished metric name: segments joined with `_`.
    #[must_use]
    pub fn metric_name(&self) -> String {
        self.segments.join("_")
    }

    /// Labels in ascending key order, ready for deterministic rendering.
    pub fn labels(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
