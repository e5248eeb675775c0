use log::{info, warn};

use crate::data_access::Database;
use crate::error::AppError;
use crate::models::enums::{BulkDeleteOutcome, Param};
use crate::notifier::Notifier;
use crate::table::TableModel;

pub type ReloadCallback<'a> = &'a mut dyn FnMut(&mut TableModel) -> Result<(), AppError>;

/// Delete statement with one `?` bound to each checked row's identifier.
#[derive(Clone, Copy, Debug)]
pub struct DeleteTemplate<'a> {
    pub sql: &'a str,
    /// Position in the full row values, selection column included.
    pub id_index: usize,
    pub id_is_integer: bool,
}

/// Delete every checked row after confirmation.
///
/// All statements share one transaction: a failure on any row leaves the
/// database and the table as they were. On success `on_complete` reloads
/// the table, or the deleted rows are dropped from it in place. The reported
/// count is the number of rows the database actually removed.
pub fn delete_checked(
    table: &mut TableModel,
    db: &impl Database,
    template: &DeleteTemplate<'_>,
    notifier: &mut dyn Notifier,
    on_complete: Option<ReloadCallback<'_>>,
) -> BulkDeleteOutcome {
    let checked = table.checked_rows();
    if checked.is_empty() {
        notifier.warning("No selection", "No rows checked for deletion.");
        return BulkDeleteOutcome::NothingChecked;
    }

    if !notifier.confirm("Confirm", &format!("Delete {} selected rows?", checked.len())) {
        return BulkDeleteOutcome::Declined;
    }

    let batch = match collect_identifiers(table, &checked, template) {
        Ok(batch) => batch,
        Err(e) => return report_failure(notifier, e),
    };

    let affected = match db.execute_batch(template.sql, &batch) {
        Ok(affected) => usize::try_from(affected).unwrap_or(usize::MAX),
        Err(e) => {
            warn!("Bulk delete rolled back: {}", e);
            return report_failure(notifier, e);
        }
    };
    info!("Bulk delete removed {} of {} checked rows", affected, checked.len());

    match on_complete {
        Some(reload) => {
            if let Err(e) = reload(table) {
                notifier.error("Error", &e.to_string());
            }
        }
        None => table.remove_rows(&checked),
    }
    if affected < checked.len() {
        notifier.warning(
            "Deleted",
            &format!(
                "Deleted {} of {} rows. The others were already gone.",
                affected,
                checked.len()
            ),
        );
    } else {
        notifier.info("Deleted", &format!("Deleted {} rows.", affected));
    }
    BulkDeleteOutcome::Deleted(affected)
}

fn collect_identifiers(
    table: &TableModel,
    checked: &[usize],
    template: &DeleteTemplate<'_>,
) -> Result<Vec<Vec<Param>>, AppError> {
    let mut batch = Vec::with_capacity(checked.len());
    for &row in checked {
        let values = table.row_values(row).unwrap_or_default();
        let Some(raw) = values.get(template.id_index) else {
            return Err(AppError::validation(format!(
                "Row {} has no value at column {}.",
                row + 1,
                template.id_index
            )));
        };
        let param = if template.id_is_integer {
            let id = raw.trim().parse::<i64>().map_err(|_| {
                AppError::validation(format!("Identifier '{}' is not an integer.", raw))
            })?;
            Param::Integer(id)
        } else {
            Param::Text(raw.clone())
        };
        batch.push(vec![param]);
    }
    Ok(batch)
}

fn report_failure(notifier: &mut dyn Notifier, error: AppError) -> BulkDeleteOutcome {
    let message = error.to_string();
    notifier.error("Error", &format!("No rows were deleted: {}", message));
    BulkDeleteOutcome::Failed(message)
}
