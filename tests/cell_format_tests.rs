use bank_manager::cell_format::{format_cell, format_row};
use bank_manager::models::enums::CellValue;
use chrono::NaiveDate;

#[test]
fn null_is_empty() {
    assert_eq!(format_cell(&CellValue::Null), "");
}

#[test]
fn date_only_value() {
    let d = NaiveDate::from_ymd_opt(2023, 7, 4).unwrap();
    assert_eq!(format_cell(&CellValue::Date(d)), "2023-07-04");
}

#[test]
fn date_and_time_value() {
    let dt = NaiveDate::from_ymd_opt(2023, 7, 4)
        .unwrap()
        .and_hms_opt(9, 5, 30)
        .unwrap();
    assert_eq!(format_cell(&CellValue::DateTime(dt)), "2023-07-04 09:05:30");
}

#[test]
fn sequence_joined_with_comma_space() {
    let value = CellValue::List(vec![CellValue::Text("a".into()), CellValue::Text("b".into())]);
    assert_eq!(format_cell(&value), "a, b");
}

#[test]
fn blob_decodes_valid_text() {
    assert_eq!(format_cell(&CellValue::Blob(b"IBAN-01".to_vec())), "IBAN-01");
}

#[test]
fn scalars_use_default_conversion() {
    assert_eq!(format_cell(&CellValue::Integer(-42)), "-42");
    assert_eq!(format_cell(&CellValue::Text("plain".into())), "plain");
    assert_eq!(format_cell(&CellValue::Real(1500.25)), "1500.25");
}

#[test]
fn row_keeps_column_order() {
    let row = vec![CellValue::Integer(7), CellValue::Null, CellValue::Text("x".into())];
    assert_eq!(format_row(&row), vec!["7", "", "x"]);
}
