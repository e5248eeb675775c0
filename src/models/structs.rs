use crate::models::enums::{FieldKind, RowTag, SelectionMarker};

/// Form input bound to one SQL column.
#[derive(Clone, Copy, Debug)]
pub struct FieldDef {
    pub label: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDef {
    pub const fn required(label: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            column,
            kind,
            required: true,
        }
    }

    pub const fn optional(label: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            column,
            kind,
            required: false,
        }
    }
}

/// Column shown in the entity table, in SELECT order.
#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub id: &'static str,
    pub heading: &'static str,
    pub column: &'static str,
}

impl ColumnDef {
    pub const fn new(id: &'static str, heading: &'static str, column: &'static str) -> Self {
        Self { id, heading, column }
    }
}

/// Static shape of one bank table.
#[derive(Debug)]
pub struct EntityDef {
    /// Tab title and message prefix, e.g. "Department".
    pub name: &'static str,
    pub plural: &'static str,
    pub table: &'static str,
    pub key_column: &'static str,
    pub key_is_integer: bool,
    pub fields: &'static [FieldDef],
    pub columns: &'static [ColumnDef],
    /// Columns filled by a fixed SQL expression on insert.
    pub insert_defaults: &'static [(&'static str, &'static str)],
}

impl EntityDef {
    pub fn noun(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn field_labels(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.label.to_string()).collect()
    }

    /// Position of the key among the display columns.
    pub fn key_position(&self) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.column == self.key_column)
    }

    pub fn quoted_table(&self) -> String {
        format!("\"{}\"", self.table)
    }

    pub fn select_sql(&self) -> String {
        let cols: Vec<&str> = self.columns.iter().map(|c| c.column).collect();
        format!("SELECT {} FROM {}", cols.join(", "), self.quoted_table())
    }

    pub fn insert_sql(&self) -> String {
        let mut cols: Vec<&str> = self.fields.iter().map(|f| f.column).collect();
        let mut values: Vec<&str> = vec!["?"; cols.len()];
        for (col, expr) in self.insert_defaults {
            cols.push(col);
            values.push(expr);
        }
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.quoted_table(),
            cols.join(", "),
            values.join(",")
        )
    }

    pub fn update_sql(&self) -> String {
        let sets: Vec<String> = self.fields.iter().map(|f| format!("{}=?", f.column)).collect();
        format!(
            "UPDATE {} SET {} WHERE {}=?",
            self.quoted_table(),
            sets.join(", "),
            self.key_column
        )
    }

    pub fn delete_sql(&self) -> String {
        format!("DELETE FROM {} WHERE {} = ?", self.quoted_table(), self.key_column)
    }
}

/// Heading of one table column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub id: String,
    pub heading: String,
}

/// One displayed row. Recreated wholesale on every reload.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub marker: Option<SelectionMarker>,
    pub tag: RowTag,
}

impl TableRow {
    /// Row values with the selection glyph prefixed when present.
    pub fn values(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.cells.len() + 1);
        if let Some(marker) = self.marker {
            out.push(marker.glyph().to_string());
        }
        out.extend(self.cells.iter().cloned());
        out
    }

    pub fn is_checked(&self) -> bool {
        self.marker.is_some_and(|m| m.is_checked())
    }
}

/// Current sort column and direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    pub column_id: String,
    pub ascending: bool,
}
