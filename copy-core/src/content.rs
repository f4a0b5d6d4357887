//! Generated copy and its two content shapes.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Cell separator used by [`CopyTable::render`].
pub const CELL_SEPARATOR: &str = " | ";

/// Tabular copy: ordered columns, one row per structured item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CopyTable {
    pub columns: Vec<String>,
    pub rows: Vec<IndexMap<String, String>>,
}

impl CopyTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Cells are reordered to the table's columns and missing
    /// cells are left empty.
    pub fn push_row(&mut self, mut row: IndexMap<String, String>) {
        let ordered = self
            .columns
            .iter()
            .map(|c| (c.clone(), row.shift_remove(c).unwrap_or_default()))
            .collect();
        self.rows.push(ordered);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Full textual rendering: a header line, then one line per row.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.columns.join(CELL_SEPARATOR));
        for row in &self.rows {
            let cells: Vec<&str> = self
                .columns
                .iter()
                .map(|c| row.get(c).map(String::as_str).unwrap_or(""))
                .collect();
            lines.push(cells.join(CELL_SEPARATOR));
        }
        lines.join("\n")
    }

    /// Comma-delimited text with a header row.
    pub fn to_delimited(&self) -> String {
        let mut out = String::new();
        out.push_str(&delimited_line(self.columns.iter().map(String::as_str)));
        for row in &self.rows {
            out.push_str(&delimited_line(
                self.columns.iter().map(|c| row.get(c).map(String::as_str).unwrap_or("")),
            ));
        }
        out
    }
}

fn delimited_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = cells.map(quote_cell).collect::<Vec<_>>().join(",");
    line.push('\n');
    line
}

fn quote_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Generated content: a text blob or a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CopyContent {
    Text(String),
    Table(CopyTable),
}

impl CopyContent {
    /// Plain-text form used for scoring and history export.
    pub fn as_plain_text(&self) -> String {
        match self {
            CopyContent::Text(text) => text.clone(),
            CopyContent::Table(table) => table.render(),
        }
    }

    pub fn as_table(&self) -> Option<&CopyTable> {
        match self {
            CopyContent::Table(table) => Some(table),
            CopyContent::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CopyContent::Text(text) => Some(text),
            CopyContent::Table(_) => None,
        }
    }
}

/// One generation result. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedCopy {
    pub content: CopyContent,
    pub metadata: Map<String, Value>,
    pub word_count: usize,
    /// Always within [0.0, 1.0]
    pub compliance_score: f64,
    pub timestamp: DateTime<Utc>,
    pub request_id: String,
}

impl GeneratedCopy {
    /// Assemble a result, clamping the compliance score into [0.0, 1.0].
    pub fn new(
        content: CopyContent,
        metadata: Map<String, Value>,
        word_count: usize,
        compliance_score: f64,
        timestamp: DateTime<Utc>,
        request_id: impl Into<String>,
    ) -> Self {
        let compliance_score =
            if compliance_score.is_nan() { 0.0 } else { compliance_score.clamp(0.0, 1.0) };
        Self {
            content,
            metadata,
            word_count,
            compliance_score,
            timestamp,
            request_id: request_id.into(),
        }
    }

    /// The `request_type` metadata echo, if present.
    pub fn request_type(&self) -> Option<&str> {
        self.metadata.get("request_type").and_then(Value::as_str)
    }
}
