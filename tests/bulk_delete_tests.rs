mod common;

use bank_manager::bulk_delete::{delete_checked, DeleteTemplate};
use bank_manager::error::AppError;
use bank_manager::models::enums::{BulkDeleteOutcome, Param};
use bank_manager::table::TableModel;
use common::{Level, RecordingDb, ScriptedNotifier};

const DELETE_BRANCH: DeleteTemplate<'static> = DeleteTemplate {
    sql: "DELETE FROM \"Branch\" WHERE BranchId = ?",
    id_index: 1,
    id_is_integer: true,
};

fn branch_table() -> TableModel {
    let mut table = TableModel::build(&["ID", "Code"], &["ID", "Code"], true);
    table.load_rows(
        [["11", "B1"], ["12", "B2"], ["13", "B3"], ["14", "B4"]]
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect(),
    );
    table
}

#[test]
fn nothing_checked_warns_without_prompt() {
    let mut table = branch_table();
    let db = RecordingDb::new();
    let mut notifier = ScriptedNotifier::answering(true);

    let outcome = delete_checked(&mut table, &db, &DELETE_BRANCH, &mut notifier, None);

    assert_eq!(outcome, BulkDeleteOutcome::NothingChecked);
    assert_eq!(notifier.count(Level::Confirm), 0);
    assert_eq!(notifier.last(Level::Warning), Some("No rows checked for deletion."));
    assert!(db.calls().is_empty());
    assert_eq!(table.len(), 4);
}

#[test]
fn three_checked_rows_issue_three_deletes_in_table_order() {
    let mut table = branch_table();
    table.click(3, 0);
    table.click(0, 0);
    table.click(2, 0);
    let db = RecordingDb::new();
    let mut notifier = ScriptedNotifier::answering(true);
    let mut reloads = 0;
    let mut reload = |_: &mut TableModel| -> Result<(), AppError> {
        reloads += 1;
        Ok(())
    };

    let outcome = delete_checked(&mut table, &db, &DELETE_BRANCH, &mut notifier, Some(&mut reload));

    assert_eq!(outcome, BulkDeleteOutcome::Deleted(3));
    assert_eq!(notifier.last(Level::Confirm), Some("Delete 3 selected rows?"));
    let executes = db.executes();
    assert_eq!(executes.len(), 3);
    let ids: Vec<Param> = executes.iter().map(|(_, p)| p[0].clone()).collect();
    assert_eq!(ids, vec![Param::Integer(11), Param::Integer(13), Param::Integer(14)]);
    assert!(executes.iter().all(|(sql, p)| sql == DELETE_BRANCH.sql && p.len() == 1));
    assert_eq!(reloads, 1);
    assert_eq!(notifier.last(Level::Info), Some("Deleted 3 rows."));
}

#[test]
fn declined_confirmation_deletes_nothing() {
    let mut table = branch_table();
    table.click(1, 0);
    let db = RecordingDb::new();
    let mut notifier = ScriptedNotifier::answering(false);

    let outcome = delete_checked(&mut table, &db, &DELETE_BRANCH, &mut notifier, None);

    assert_eq!(outcome, BulkDeleteOutcome::Declined);
    assert!(db.calls().is_empty());
    assert_eq!(table.checked_rows(), vec![1]);
    assert_eq!(notifier.count(Level::Info), 0);
}

#[test]
fn without_callback_rows_are_removed_in_place() {
    let mut table = branch_table();
    table.click(1, 0);
    table.click(3, 0);
    let db = RecordingDb::new();
    let mut notifier = ScriptedNotifier::answering(true);

    let outcome = delete_checked(&mut table, &db, &DELETE_BRANCH, &mut notifier, None);

    assert_eq!(outcome, BulkDeleteOutcome::Deleted(2));
    let ids: Vec<&str> = table.rows().iter().map(|r| r.cells[0].as_str()).collect();
    assert_eq!(ids, vec!["11", "13"]);
}

#[test]
fn database_failure_reports_and_keeps_rows() {
    let mut table = branch_table();
    table.click(0, 0);
    table.click(1, 0);
    let db = RecordingDb::new();
    db.fail_writes("FOREIGN KEY constraint failed");
    let mut notifier = ScriptedNotifier::answering(true);
    let mut reloads = 0;
    let mut reload = |_: &mut TableModel| -> Result<(), AppError> {
        reloads += 1;
        Ok(())
    };

    let outcome = delete_checked(&mut table, &db, &DELETE_BRANCH, &mut notifier, Some(&mut reload));

    assert!(matches!(outcome, BulkDeleteOutcome::Failed(ref m) if m.contains("FOREIGN KEY")));
    assert_eq!(reloads, 0);
    assert_eq!(table.len(), 4);
    assert_eq!(table.checked_rows(), vec![0, 1]);
    assert!(notifier.last(Level::Error).unwrap().starts_with("No rows were deleted"));
    assert_eq!(notifier.count(Level::Info), 0);
}

#[test]
fn non_integer_identifier_stops_before_any_statement() {
    let mut table = TableModel::build(&["ID"], &["ID"], true);
    table.load_rows(vec![vec!["7".into()], vec!["x9".into()]]);
    table.click(0, 0);
    table.click(1, 0);
    let db = RecordingDb::new();
    let mut notifier = ScriptedNotifier::answering(true);

    let outcome = delete_checked(&mut table, &db, &DELETE_BRANCH, &mut notifier, None);

    assert!(matches!(outcome, BulkDeleteOutcome::Failed(_)));
    assert!(db.calls().is_empty());
}

#[test]
fn text_identifiers_are_bound_verbatim() {
    let mut table = TableModel::build(&["Code", "Desc"], &["Dept Code", "Description"], true);
    table.load_rows(vec![vec!["OPS".into(), "Operations".into()]]);
    table.click(0, 0);
    let db = RecordingDb::new();
    let mut notifier = ScriptedNotifier::answering(true);
    let template = DeleteTemplate {
        sql: "DELETE FROM \"Department\" WHERE DeptCode = ?",
        id_index: 1,
        id_is_integer: false,
    };

    delete_checked(&mut table, &db, &template, &mut notifier, None);

    assert_eq!(db.executes()[0].1, vec![Param::Text("OPS".into())]);
}

#[test]
fn rows_already_gone_are_reported() {
    let mut table = branch_table();
    table.click(0, 0);
    table.click(1, 0);
    table.click(2, 0);
    let db = RecordingDb::new();
    db.report_batch_affected(2);
    let mut notifier = ScriptedNotifier::answering(true);

    let outcome = delete_checked(&mut table, &db, &DELETE_BRANCH, &mut notifier, None);

    assert_eq!(outcome, BulkDeleteOutcome::Deleted(2));
    assert_eq!(db.executes().len(), 3);
    assert_eq!(notifier.count(Level::Info), 0);
    assert_eq!(
        notifier.last(Level::Warning),
        Some("Deleted 2 of 3 rows. The others were already gone.")
    );
    assert_eq!(table.len(), 1);
}
