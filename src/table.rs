use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;

use crate::models::enums::{RowTag, SelectionMarker};
use crate::models::structs::{ColumnSpec, SortState, TableRow};

pub const SELECTION_COLUMN_ID: &str = "_sel";
pub const SELECTION_COLUMN_WIDTH: f32 = 36.0;

/// Rows and column layout behind one entity table.
///
/// When built with a selection column, the model keeps that fact as an
/// explicit flag: display column 0 is the checkbox and data columns follow.
#[derive(Clone, Debug, Default)]
pub struct TableModel {
    columns: Vec<ColumnSpec>,
    with_selection: bool,
    rows: Vec<TableRow>,
    highlighted: Option<usize>,
    sort: Option<SortState>,
    // Direction the next header click will use, per column id.
    next_descending: HashMap<String, bool>,
}

impl TableModel {
    pub fn build<S: AsRef<str>>(column_ids: &[S], headings: &[S], with_selection: bool) -> Self {
        let columns = column_ids
            .iter()
            .zip(headings.iter())
            .map(|(id, heading)| ColumnSpec {
                id: id.as_ref().to_string(),
                heading: heading.as_ref().to_string(),
            })
            .collect();
        Self {
            columns,
            with_selection,
            ..Default::default()
        }
    }

    pub fn with_selection(&self) -> bool {
        self.with_selection
    }

    /// Data columns, without the synthetic selection column.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Every displayed column, selection column first when enabled.
    pub fn display_columns(&self) -> Vec<ColumnSpec> {
        let mut out = Vec::with_capacity(self.columns.len() + 1);
        if self.with_selection {
            out.push(ColumnSpec {
                id: SELECTION_COLUMN_ID.to_string(),
                heading: String::new(),
            });
        }
        out.extend(self.columns.iter().cloned());
        out
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace every row. Markers reset to unchecked, the highlight is dropped
    /// and the next header click sorts ascending again.
    pub fn load_rows(&mut self, rows: Vec<Vec<String>>) {
        self.rows.clear();
        self.highlighted = None;
        self.sort = None;
        self.next_descending.clear();
        for row in rows {
            self.insert_row(row);
        }
    }

    /// Append one row; the odd/even tag follows its insertion index.
    pub fn insert_row(&mut self, cells: Vec<String>) {
        let tag = RowTag::for_index(self.rows.len());
        let marker = self.with_selection.then_some(SelectionMarker::Unchecked);
        self.rows.push(TableRow { cells, marker, tag });
    }

    /// Full row values, selection glyph included.
    pub fn row_values(&self, index: usize) -> Option<Vec<String>> {
        self.rows.get(index).map(TableRow::values)
    }

    /// Data cells only.
    pub fn row_cells(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(|r| r.cells.as_slice())
    }

    pub fn marker(&self, index: usize) -> Option<SelectionMarker> {
        self.rows.get(index).and_then(|r| r.marker)
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlight(&mut self, index: Option<usize>) {
        self.highlighted = index.filter(|i| *i < self.rows.len());
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Pointer click on `(row, display column)`.
    ///
    /// The row is always highlighted. A click in the selection column also
    /// flips that row's marker. Returns whether a marker was toggled.
    pub fn click(&mut self, row: usize, column: usize) -> bool {
        if row >= self.rows.len() {
            return false;
        }
        self.highlighted = Some(row);
        if self.with_selection && column == 0 {
            self.toggle(row);
            return true;
        }
        false
    }

    pub fn toggle(&mut self, row: usize) {
        if let Some(marker) = self.rows.get_mut(row).and_then(|r| r.marker.as_mut()) {
            *marker = marker.toggled();
        }
    }

    pub fn set_all_checked(&mut self, checked: bool) {
        let marker = if checked {
            SelectionMarker::Checked
        } else {
            SelectionMarker::Unchecked
        };
        for row in &mut self.rows {
            if row.marker.is_some() {
                row.marker = Some(marker);
            }
        }
    }

    /// Indices of checked rows in table order.
    pub fn checked_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_checked())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn remove_rows(&mut self, indices: &[usize]) {
        let surviving = self.highlighted.filter(|h| !indices.contains(h));
        let mut idx = 0;
        self.rows.retain(|_| {
            let keep = !indices.contains(&idx);
            idx += 1;
            keep
        });
        self.highlighted = surviving.map(|h| h - indices.iter().filter(|i| **i < h).count());
    }

    /// Header click. Sorts by the column, alternating direction per column.
    /// Returns false for the selection column or an unknown id.
    pub fn header_clicked(&mut self, column_id: &str) -> bool {
        if column_id == SELECTION_COLUMN_ID {
            return false;
        }
        let descending = self
            .next_descending
            .get(column_id)
            .copied()
            .unwrap_or(false);
        if !self.sort_by(column_id, descending) {
            return false;
        }
        self.next_descending
            .insert(column_id.to_string(), !descending);
        true
    }

    /// Stable sort by one data column using [`compare_sort_values`].
    pub fn sort_by(&mut self, column_id: &str, descending: bool) -> bool {
        if column_id == SELECTION_COLUMN_ID {
            return false;
        }
        let Some(col) = self.columns.iter().position(|c| c.id == column_id) else {
            return false;
        };

        let mut indexed: Vec<(usize, TableRow)> = self.rows.drain(..).enumerate().collect();
        indexed.sort_by(|(_, a), (_, b)| {
            let a = a.cells.get(col).map(String::as_str).unwrap_or("");
            let b = b.cells.get(col).map(String::as_str).unwrap_or("");
            let ord = compare_sort_values(a, b);
            if descending { ord.reverse() } else { ord }
        });

        let old_highlight = self.highlighted;
        self.highlighted = None;
        for (new_pos, (old_pos, row)) in indexed.into_iter().enumerate() {
            if Some(old_pos) == old_highlight {
                self.highlighted = Some(new_pos);
            }
            self.rows.push(row);
        }

        self.sort = Some(SortState {
            column_id: column_id.to_string(),
            ascending: !descending,
        });
        debug!(
            "Sorted {} rows by '{}' {}",
            self.rows.len(),
            column_id,
            if descending { "descending" } else { "ascending" }
        );
        true
    }
}

/// Sort key for one cell: a number when the text parses as one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> SortKey<'a> {
    pub fn parse(value: &'a str) -> Self {
        match value.trim().parse::<f64>() {
            Ok(n) => SortKey::Number(n),
            Err(_) => SortKey::Text(value),
        }
    }
}

/// Total order over cell text: every numeric value sorts before every
/// non-numeric one, numbers compare by value and text compares bytewise.
pub fn compare_sort_values(a: &str, b: &str) -> Ordering {
    match (SortKey::parse(a), SortKey::parse(b)) {
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(&y),
        (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
    }
}
