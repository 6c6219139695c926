//! Clipboard integration.

use arboard::Clipboard;

use crate::data::{ColumnKey, Record};
use crate::error::Result;

/// Render rows as tab-separated values, header line included.
pub fn rows_as_tsv(rows: &[&Record]) -> String {
    let mut out = String::new();

    let header: Vec<&str> = ColumnKey::ALL.iter().map(|k| k.title()).collect();
    out.push_str(&header.join("\t"));
    out.push('\n');

    for row in rows {
        let cells: Vec<String> = ColumnKey::ALL.iter().map(|k| row.cell(*k)).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }

    out
}

/// Copy the given rows to the clipboard as TSV.
pub fn copy_rows(rows: &[&Record]) -> Result<()> {
    copy_to_clipboard(&rows_as_tsv(rows))
}

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
