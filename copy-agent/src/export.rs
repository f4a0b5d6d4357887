//! Writing results to disk.

use crate::history::CopyHistory;
use copy_core::{BrandGuidelines, CopyContent, CopyError, GeneratedCopy, Result};
use std::fs;
use std::path::Path;

fn write(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| CopyError::io(path.display().to_string(), e.to_string()))
}

/// Write one result. Tables are written as delimited text with a header
/// row; text is written as-is.
pub fn export_copy<P: AsRef<Path>>(copy: &GeneratedCopy, path: P) -> Result<()> {
    let path = path.as_ref();
    let body = match &copy.content {
        CopyContent::Table(table) => table.to_delimited(),
        CopyContent::Text(text) => text.clone(),
    };
    write(path, body.as_bytes())?;
    tracing::info!(request_id = %copy.request_id, path = %path.display(), "exported copy");
    Ok(())
}

/// Write the whole history as pretty JSON.
pub fn export_history<P: AsRef<Path>>(history: &CopyHistory, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = history.export_json()?;
    write(path, json.as_bytes())?;
    tracing::info!(entries = history.len(), path = %path.display(), "exported history");
    Ok(())
}

/// Write brand guidelines as pretty JSON.
pub fn export_guidelines<P: AsRef<Path>>(guidelines: &BrandGuidelines, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(guidelines)?;
    write(path, json.as_bytes())
}
