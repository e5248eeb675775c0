use chrono::{NaiveDate, NaiveDateTime};

/// Raw column value as decoded from a result row.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Null,
    Text(String),
    Integer(i64),
    Real(f64),
    Blob(Vec<u8>),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    List(Vec<CellValue>),
}

/// Value bound to a `?` placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    Text(String),
    Integer(i64),
    Real(f64),
    Null,
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Text(value)
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Integer(value)
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Real(value)
    }
}

/// How a form input is coerced before it is bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
}

/// Background tag assigned to a row at insertion time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowTag {
    Even,
    Odd,
}

impl RowTag {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 1 { RowTag::Odd } else { RowTag::Even }
    }
}

/// Two-state checkbox glyph stored in the selection column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionMarker {
    #[default]
    Unchecked,
    Checked,
}

impl SelectionMarker {
    pub const UNCHECKED_GLYPH: &'static str = "☐";
    pub const CHECKED_GLYPH: &'static str = "☑";

    pub fn glyph(self) -> &'static str {
        match self {
            SelectionMarker::Unchecked => Self::UNCHECKED_GLYPH,
            SelectionMarker::Checked => Self::CHECKED_GLYPH,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SelectionMarker::Unchecked => SelectionMarker::Checked,
            SelectionMarker::Checked => SelectionMarker::Unchecked,
        }
    }

    pub fn is_checked(self) -> bool {
        self == SelectionMarker::Checked
    }
}

/// Lifecycle of an edit dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogState {
    Open,
    Saving,
    Cancelled,
    Closed,
}

/// Result of a bulk delete request, reported back to the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum BulkDeleteOutcome {
    NothingChecked,
    Declined,
    Deleted(usize),
    Failed(String),
}
