//! Normalized tables: an ordered header plus ordered rows of text fields
//!
//! The column set is only known once a file has been read, so rows are kept
//! as ordered name/value pairs rather than a compiled record type.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One order row: ordered mapping from column name to text value.
///
/// `None` marks SQL NULL (an unset `note`, for instance). Rows produced by
/// the ingestion normalizer never contain `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    fields: Vec<(String, Option<String>)>,
}

impl Row {
    pub fn new(fields: Vec<(String, Option<String>)>) -> Self {
        Self { fields }
    }

    /// Pair header names with non-null text values
    pub fn from_texts<C, V>(columns: C, values: V) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let fields = columns
            .into_iter()
            .zip(values)
            .map(|(c, v)| (c.into(), Some(v.into())))
            .collect();
        Self { fields }
    }

    /// Value of `column`; `None` when the column is absent or NULL
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == column)
    }

    /// True when the column exists and holds NULL
    pub fn is_null(&self, column: &str) -> bool {
        self.fields
            .iter()
            .any(|(name, value)| name == column && value.is_none())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Format-independent table: header order and row order preserved
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct NormalizedTable {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl NormalizedTable {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The same header with at most the first `n` rows
    pub fn head(&self, n: usize) -> NormalizedTable {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}
