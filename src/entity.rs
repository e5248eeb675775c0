use std::path::PathBuf;

use log::{debug, info, warn};

use crate::bulk_delete::{self, DeleteTemplate};
use crate::cell_format::format_row;
use crate::data_access::Database;
use crate::edit_dialog::{DialogOutcome, EditDialog};
use crate::error::AppError;
use crate::export;
use crate::form::{FieldValues, FormState};
use crate::models::enums::{BulkDeleteOutcome, FieldKind, Param};
use crate::models::structs::EntityDef;
use crate::notifier::Notifier;
use crate::table::TableModel;

/// One entity tab: add form, table, edit dialog and delete actions bound
/// to a single bank table.
#[derive(Debug)]
pub struct EntityController {
    def: &'static EntityDef,
    form: FormState,
    table: TableModel,
    edit: Option<EditDialog>,
}

impl EntityController {
    pub fn new(def: &'static EntityDef) -> Self {
        let ids: Vec<&str> = def.columns.iter().map(|c| c.id).collect();
        let headings: Vec<&str> = def.columns.iter().map(|c| c.heading).collect();
        Self {
            def,
            form: FormState::build(&def.field_labels()),
            table: TableModel::build(&ids, &headings, true),
            edit: None,
        }
    }

    pub fn def(&self) -> &'static EntityDef {
        self.def
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn table(&self) -> &TableModel {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableModel {
        &mut self.table
    }

    pub fn edit_dialog(&self) -> Option<&EditDialog> {
        self.edit.as_ref()
    }

    pub fn edit_dialog_mut(&mut self) -> Option<&mut EditDialog> {
        self.edit.as_mut()
    }

    /// Refetch every row. Returns false when the fetch failed.
    pub fn reload(&mut self, db: &impl Database, notifier: &mut dyn Notifier) -> bool {
        match load_table(self.def, db, &mut self.table) {
            Ok(()) => true,
            Err(e) => {
                notifier.error(&format!("Error loading {}", self.def.plural), &e.to_string());
                false
            }
        }
    }

    /// Insert the form values as a new row, then reload and clear the form.
    pub fn add(&mut self, db: &impl Database, notifier: &mut dyn Notifier) -> bool {
        let params = match coerce_fields(self.def, &self.form.values()) {
            Ok(params) => params,
            Err(e) => {
                notifier.error("Validation error", &e.to_string());
                return false;
            }
        };

        if let Err(e) = db.execute(&self.def.insert_sql(), &params) {
            notifier.error(&format!("Error adding {}", self.def.noun()), &e.to_string());
            return false;
        }
        info!("{} added", self.def.name);

        // The row exists now, so the form is cleared even if the refresh fails.
        self.form.clear_all();
        self.refresh_after_write(db, notifier, "Success", &format!("{} added.", self.def.name));
        true
    }

    /// Open the edit dialog for the highlighted row.
    pub fn begin_edit<D>(&mut self, db: &D, notifier: &mut dyn Notifier) -> bool
    where
        D: Database + Clone + 'static,
    {
        let def = self.def;
        let Some(cells) = self.highlighted_cells() else {
            notifier.warning(
                "Select row",
                &format!("Select {} to edit.", with_article(&def.noun())),
            );
            return false;
        };

        let key = match key_param(def, &cells) {
            Ok(key) => key,
            Err(e) => {
                notifier.error("Error", &e.to_string());
                return false;
            }
        };

        let values: Vec<String> = def
            .fields
            .iter()
            .map(|f| {
                def.columns
                    .iter()
                    .position(|c| c.column == f.column)
                    .and_then(|pos| cells.get(pos).cloned())
                    .unwrap_or_default()
            })
            .collect();

        let db = db.clone();
        let sql = def.update_sql();
        let dialog = EditDialog::open(
            format!("Edit {}", def.name),
            &def.field_labels(),
            &values,
            move |data: &FieldValues| {
                let mut params = coerce_fields(def, data)?;
                params.push(key.clone());
                db.execute(&sql, &params)?;
                Ok(())
            },
        );
        debug!("Editing {} {:?}", def.noun(), cells.first());
        self.edit = Some(dialog);
        true
    }

    /// Press Save on the open dialog and apply the result.
    pub fn confirm_edit(&mut self, db: &impl Database, notifier: &mut dyn Notifier) -> DialogOutcome {
        let outcome = match self.edit.as_mut() {
            Some(dialog) => dialog.confirm(),
            None => DialogOutcome::Ignored,
        };
        self.finish_edit(&outcome, db, notifier);
        outcome
    }

    pub fn cancel_edit(&mut self) -> DialogOutcome {
        let outcome = match self.edit.as_mut() {
            Some(dialog) => dialog.cancel(),
            None => DialogOutcome::Ignored,
        };
        self.finish_edit_without_reload(&outcome);
        outcome
    }

    /// Drop a dialog that reached a closed state; reload after a save.
    pub fn finish_edit(&mut self, outcome: &DialogOutcome, db: &impl Database, notifier: &mut dyn Notifier) {
        self.finish_edit_without_reload(outcome);
        if *outcome == DialogOutcome::Saved {
            let done = format!("{} updated.", self.def.name);
            self.refresh_after_write(db, notifier, "Saved", &done);
        }
    }

    fn finish_edit_without_reload(&mut self, outcome: &DialogOutcome) {
        if matches!(outcome, DialogOutcome::Saved | DialogOutcome::Cancelled) {
            self.edit = None;
        }
    }

    /// Delete the highlighted row after confirmation.
    pub fn delete_highlighted(&mut self, db: &impl Database, notifier: &mut dyn Notifier) -> bool {
        let def = self.def;
        let Some(cells) = self.highlighted_cells() else {
            notifier.warning(
                "Select row",
                &format!("Select {} to delete.", with_article(&def.noun())),
            );
            return false;
        };
        let key_text = def
            .key_position()
            .and_then(|pos| cells.get(pos).cloned())
            .unwrap_or_default();

        if !notifier.confirm("Confirm", &format!("Delete {} {}?", def.noun(), key_text)) {
            return false;
        }

        let result = key_param(def, &cells).and_then(|key| db.execute(&def.delete_sql(), &[key]));
        match result {
            Ok(_) => {
                info!("{} {} deleted", def.name, key_text);
                self.refresh_after_write(db, notifier, "Deleted", &format!("{} deleted.", def.name));
                true
            }
            Err(e) => {
                notifier.error("Error", &e.to_string());
                false
            }
        }
    }

    /// Bulk delete every checkbox-marked row.
    pub fn delete_checked(&mut self, db: &impl Database, notifier: &mut dyn Notifier) -> BulkDeleteOutcome {
        let def = self.def;
        let sql = def.delete_sql();
        let Some(key_pos) = def.key_position() else {
            notifier.error("Error", &format!("{} has no key column on screen.", def.name));
            return BulkDeleteOutcome::Failed("missing key column".to_string());
        };
        let template = DeleteTemplate {
            sql: &sql,
            // +1 for the selection column
            id_index: key_pos + 1,
            id_is_integer: def.key_is_integer,
        };
        let mut reload = |table: &mut TableModel| load_table(def, db, table);
        bulk_delete::delete_checked(&mut self.table, db, &template, notifier, Some(&mut reload))
    }

    /// Headings and rows as currently displayed, selection column excluded.
    pub fn export_rows(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let headers = self.table.columns().iter().map(|c| c.heading.clone()).collect();
        let rows = self.table.rows().iter().map(|r| r.cells.clone()).collect();
        (headers, rows)
    }

    /// Save the displayed rows to a CSV file picked by the user.
    pub fn export_csv(&self, notifier: &mut dyn Notifier) -> Option<PathBuf> {
        let (headers, rows) = self.export_rows();
        match export::export_to_csv(&headers, &rows, self.def.plural) {
            Ok(Some(path)) => {
                notifier.info(
                    "Exported",
                    &format!("Exported {} rows to {}.", rows.len(), path.display()),
                );
                Some(path)
            }
            Ok(None) => None,
            Err(e) => {
                notifier.error("Export error", &e.to_string());
                None
            }
        }
    }

    /// Reload after a committed write. One message either way: the success
    /// text, or a warning that the write went through but the table is stale.
    fn refresh_after_write(&mut self, db: &impl Database, notifier: &mut dyn Notifier, title: &str, done: &str) {
        match load_table(self.def, db, &mut self.table) {
            Ok(()) => notifier.info(title, done),
            Err(e) => {
                warn!("Reload of {} failed after write: {}", self.def.plural, e);
                notifier.warning(
                    "Refresh failed",
                    &format!("{} The {} list could not be reloaded: {}", done, self.def.plural, e),
                );
            }
        }
    }

    fn highlighted_cells(&self) -> Option<Vec<String>> {
        self.table
            .highlighted()
            .and_then(|idx| self.table.row_cells(idx))
            .map(|cells| cells.to_vec())
    }
}

/// Fetch an entity's rows and redraw the table with them.
pub fn load_table(def: &EntityDef, db: &impl Database, table: &mut TableModel) -> Result<(), AppError> {
    let rows = db.fetch(&def.select_sql())?;
    debug!("Loaded {} {}", rows.len(), def.plural);
    table.load_rows(rows.iter().map(|r| format_row(r)).collect());
    Ok(())
}

/// Validate and coerce form values into insert/update parameters, in field order.
pub fn coerce_fields(def: &EntityDef, values: &FieldValues) -> Result<Vec<Param>, AppError> {
    let value_of = |label: &str| values.get(label).unwrap_or("");

    let required: Vec<&str> = def.fields.iter().filter(|f| f.required).map(|f| f.label).collect();
    if required.iter().any(|label| value_of(label).is_empty()) {
        let verb = if required.len() == 1 { "is" } else { "are" };
        return Err(AppError::validation(format!(
            "{} {} required.",
            join_labels(&required),
            verb
        )));
    }

    let integers: Vec<&str> = labels_of_kind(def, FieldKind::Integer);
    if integers.iter().any(|l| {
        let v = value_of(l);
        !v.is_empty() && v.parse::<i64>().is_err()
    }) {
        let tail = if integers.len() == 1 { "must be an integer." } else { "must be integers." };
        return Err(AppError::validation(format!("{} {}", join_labels(&integers), tail)));
    }

    let decimals: Vec<&str> = labels_of_kind(def, FieldKind::Decimal);
    if decimals.iter().any(|l| {
        let v = value_of(l);
        !v.is_empty() && v.parse::<f64>().map(|n| !n.is_finite()).unwrap_or(true)
    }) {
        let tail = if decimals.len() == 1 { "must be a number." } else { "must be numbers." };
        return Err(AppError::validation(format!("{} {}", join_labels(&decimals), tail)));
    }

    let params = def
        .fields
        .iter()
        .map(|f| {
            let v = value_of(f.label);
            match f.kind {
                FieldKind::Text => Param::Text(v.to_string()),
                FieldKind::Integer => v.parse::<i64>().map(Param::Integer).unwrap_or(Param::Null),
                FieldKind::Decimal => Param::Real(v.parse::<f64>().unwrap_or(0.0)),
            }
        })
        .collect();
    Ok(params)
}

fn key_param(def: &EntityDef, cells: &[String]) -> Result<Param, AppError> {
    let raw = def
        .key_position()
        .and_then(|pos| cells.get(pos))
        .ok_or_else(|| AppError::validation(format!("{} row has no key.", def.name)))?;
    if def.key_is_integer {
        raw.trim()
            .parse::<i64>()
            .map(Param::Integer)
            .map_err(|_| AppError::validation(format!("{} key '{}' is not an integer.", def.name, raw)))
    } else {
        Ok(Param::Text(raw.clone()))
    }
}

fn labels_of_kind(def: &EntityDef, kind: FieldKind) -> Vec<&'static str> {
    def.fields.iter().filter(|f| f.kind == kind).map(|f| f.label).collect()
}

/// "A", "A and B", "A, B and C".
fn join_labels(labels: &[&str]) -> String {
    match labels {
        [] => String::new(),
        [one] => one.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

fn with_article(noun: &str) -> String {
    let article = match noun.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    };
    format!("{} {}", article, noun)
}
