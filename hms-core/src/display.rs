//! Plain-text rendering of records as `label: value` lines.

use crate::record::Record;
use crate::schema::RecordKind;

/// Render `record` as one `label: value` line per label, in label order.
///
/// A label without a matching field renders with an empty value; fields
/// beyond the last label are not shown.
pub fn render_record(record: &Record, labels: &[&str]) -> String {
    let mut output = String::new();
    for (i, label) in labels.iter().enumerate() {
        output.push_str(label);
        output.push_str(": ");
        output.push_str(record.get(i));
        output.push('\n');
    }
    output
}

/// Render using the schema labels of `kind`
pub fn render_kind(kind: RecordKind, record: &Record) -> String {
    render_record(record, &kind.schema().labels())
}

/// A list of records rendered one block after another.
pub struct RecordSheet {
    labels: Vec<String>,
    blocks: Vec<String>,
    separator: String,
}

impl RecordSheet {
    /// Create a sheet with the given labels
    pub fn new(labels: Vec<impl Into<String>>) -> Self {
        Self {
            labels: labels.into_iter().map(|s| s.into()).collect(),
            blocks: Vec::new(),
            separator: "-".repeat(29),
        }
    }

    /// Create a sheet labelled for `kind`
    pub fn for_kind(kind: RecordKind) -> Self {
        Self::new(kind.schema().labels())
    }

    /// Line printed after each record
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Add a record to the sheet
    pub fn push(&mut self, record: &Record) {
        let labels: Vec<&str> = self.labels.iter().map(String::as_str).collect();
        self.blocks.push(render_record(record, &labels));
    }

    /// Number of records added
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True when no record has been added
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Convert to a string, each block followed by the separator
    pub fn render(&self) -> String {
        let mut output = String::new();
        for block in &self.blocks {
            output.push_str(block);
            if !self.separator.is_empty() {
                output.push_str(&self.separator);
                output.push('\n');
            }
        }
        output
    }
}

impl Extend<Record> for RecordSheet {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.push(&record);
        }
    }
}
