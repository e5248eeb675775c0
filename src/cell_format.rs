use crate::models::enums::CellValue;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render one raw column value as the string shown in a table cell.
pub fn format_cell(value: &CellValue) -> String {
    match value {
        CellValue::Null => String::new(),
        CellValue::Text(s) => s.clone(),
        CellValue::Integer(i) => i.to_string(),
        CellValue::Real(f) => f.to_string(),
        CellValue::Blob(bytes) => decode_lossless_valid(bytes),
        CellValue::Date(d) => d.format(DATE_FORMAT).to_string(),
        CellValue::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
        CellValue::List(items) => items.iter().map(format_cell).collect::<Vec<_>>().join(", "),
    }
}

/// Format a whole fetched row.
pub fn format_row(row: &[CellValue]) -> Vec<String> {
    row.iter().map(format_cell).collect()
}

// Keeps the valid UTF-8 runs and drops everything else.
fn decode_lossless_valid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_cell(self))
    }
}
