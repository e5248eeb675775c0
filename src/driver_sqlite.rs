use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{Column, Row, TypeInfo};

use crate::models::enums::{CellValue, Param};

/// Bind positional parameters in order.
pub(crate) fn bind_params<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &[Param],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for param in params {
        query = match param {
            Param::Text(s) => query.bind(s.clone()),
            Param::Integer(i) => query.bind(*i),
            Param::Real(f) => query.bind(*f),
            Param::Null => query.bind(Option::<String>::None),
        };
    }
    query
}

// Helper function to convert SQLite rows to raw cell values with proper type checking
pub(crate) fn convert_sqlite_rows(rows: &[SqliteRow]) -> Vec<Vec<CellValue>> {
    rows.iter().map(convert_sqlite_row).collect()
}

fn convert_sqlite_row(row: &SqliteRow) -> Vec<CellValue> {
    let mut values = Vec::with_capacity(row.columns().len());
    for (idx, column) in row.columns().iter().enumerate() {
        let type_name = column.type_info().name().to_ascii_uppercase();
        let value = match type_name.as_str() {
            "NULL" => read_any(row, idx),
            "INTEGER" | "INT" | "BIGINT" | "BOOLEAN" => read_integer(row, idx),
            "REAL" | "FLOAT" | "DOUBLE" => read_real(row, idx),
            "NUMERIC" | "DECIMAL" => read_numeric(row, idx),
            "DATE" => match row.try_get::<Option<NaiveDate>, _>(idx) {
                Ok(Some(d)) => CellValue::Date(d),
                Ok(None) => CellValue::Null,
                Err(_) => read_any(row, idx),
            },
            "DATETIME" | "TIMESTAMP" => match row.try_get::<Option<NaiveDateTime>, _>(idx) {
                Ok(Some(dt)) => CellValue::DateTime(dt),
                Ok(None) => CellValue::Null,
                Err(_) => read_any(row, idx),
            },
            "BLOB" => match row.try_get::<Option<Vec<u8>>, _>(idx) {
                Ok(Some(bytes)) => CellValue::Blob(bytes),
                Ok(None) => CellValue::Null,
                Err(_) => read_any(row, idx),
            },
            _ => read_any(row, idx),
        };
        values.push(value);
    }
    values
}

fn read_integer(row: &SqliteRow, idx: usize) -> CellValue {
    match row.try_get::<Option<i64>, _>(idx) {
        Ok(Some(v)) => CellValue::Integer(v),
        Ok(None) => CellValue::Null,
        Err(_) => read_any(row, idx),
    }
}

fn read_real(row: &SqliteRow, idx: usize) -> CellValue {
    match row.try_get::<Option<f64>, _>(idx) {
        Ok(Some(v)) => CellValue::Real(v),
        Ok(None) => CellValue::Null,
        Err(_) => read_any(row, idx),
    }
}

fn read_numeric(row: &SqliteRow, idx: usize) -> CellValue {
    if let Ok(Some(v)) = row.try_get::<Option<i64>, _>(idx) {
        CellValue::Integer(v)
    } else if let Ok(Some(v)) = row.try_get::<Option<f64>, _>(idx) {
        CellValue::Real(v)
    } else {
        read_any(row, idx)
    }
}

// Declared type unknown or mismatched: fall back on the stored value.
fn read_any(row: &SqliteRow, idx: usize) -> CellValue {
    if let Ok(v) = row.try_get::<Option<String>, _>(idx) {
        return v.map(CellValue::Text).unwrap_or(CellValue::Null);
    }
    if let Ok(v) = row.try_get::<Option<i64>, _>(idx) {
        return v.map(CellValue::Integer).unwrap_or(CellValue::Null);
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(idx) {
        return v.map(CellValue::Real).unwrap_or(CellValue::Null);
    }
    match row.try_get::<Option<Vec<u8>>, _>(idx) {
        Ok(v) => v.map(CellValue::Blob).unwrap_or(CellValue::Null),
        Err(e) => {
            debug!("Unreadable value in column {}: {}", idx, e);
            CellValue::Null
        }
    }
}
