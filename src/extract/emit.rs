use crate::Result;
use crate::extract::Accumulator;
use std::io::Write;

/// Writes finished metric lines in the exposition text style:
/// `name{key="value",...} value`.
#[derive(Debug)]
pub struct Emitter<'w, W: Write> {
    out: &'w mut W,
    lines: u64,
}

impl<'w, W: Write> Emitter<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        Self { out, lines: 0 }
    }

    /// Write one metric line for the accumulator's name and labels and the
    /// computed value.
    ///
    /// The label block is printed even when empty. Values use six-decimal
    /// fixed notation, which renders non-finite values as `NaN`. Label values
    /// are written verbatim.
    pub fn emit(&mut self, acc: &Accumulator, value: f64) -> Result<()> {
        let labels: Vec<_> = acc
            .labels()
            .map(|(key, text)| format!("{key}=\"{text}\""))
            .collect();

        writeln!(self.out, "{}{{{}}} {value:.6}", acc.metric_name(), labels.join(","))?;
        self.lines += 1;
        Ok(())
    }

    /// Number of lines written so far.
    #[must_use]
    pub fn lines(&self) -> u64 {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_one(acc: &Accumulator, value: f64) -> String {
        let mut out = Vec::new();
        let mut emitter = Emitter::new(&mut out);
        emitter.emit(acc, value).unwrap();
        assert_eq!(emitter.lines(), 1);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_line_without_labels_keeps_empty_brace_block() {
        let mut acc = Accumulator::new();
        acc.push_segment("up");

        assert_eq!(emit_one(&acc, 1.0), "up{} 1.000000\n");
    }

    #[test]
    fn test_labels_render_sorted_and_comma_joined() {
        let mut acc = Accumulator::new();
        acc.push_segment("vault");
        acc.push_segment("last_wal");
        acc.set_label("mode", "primary".to_string());
        acc.set_label("cluster", "c1".to_string());

        assert_eq!(
            emit_one(&acc, 42.0),
            "vault_last_wal{cluster=\"c1\",mode=\"primary\"} 42.000000\n"
        );
    }

    #[test]
    fn test_values_use_six_decimal_notation() {
        let mut acc = Accumulator::new();
        acc.push_segment("ratio");

        assert_eq!(emit_one(&acc, 0.5), "ratio{} 0.500000\n");
        assert_eq!(emit_one(&acc, -3.25), "ratio{} -3.250000\n");
    }

    #[test]
    fn test_nan_values_render_as_nan() {
        let mut acc = Accumulator::new();
        acc.push_segment("bad");

        assert_eq!(emit_one(&acc, f64::NAN), "bad{} NaN\n");
    }

    #[test]
    fn test_label_values_are_written_verbatim() {
        let mut acc = Accumulator::new();
        acc.push_segment("raw");
        acc.set_label("note", "says \"hi\"".to_string());

        assert_eq!(emit_one(&acc, 1.0), "raw{note=\"says \"hi\"\"} 1.000000\n");
    }

    #[test]
    fn test_debug_output_shows_line_count() {
        let mut out = Vec::new();
        let mut emitter = Emitter::new(&mut out);
        let mut acc = Accumulator::new();
        acc.push_segment("seen");
        emitter.emit(&acc, 1.0).unwrap();

        assert!(format!("{emitter:?}").contains("lines: 1"));
    }

    #[test]
    fn test_line_counter_tracks_every_emission() {
        let mut out = Vec::new();
        let mut emitter = Emitter::new(&mut out);
        let mut acc = Accumulator::new();
        acc.push_segment("counted");

        emitter.emit(&acc, 1.0).unwrap();
        emitter.emit(&acc, 2.0).unwrap();
        emitter.emit(&acc, 3.0).unwrap();

        assert_eq!(emitter.lines(), 3);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }
}
