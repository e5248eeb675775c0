use eframe::egui;

use crate::edit_dialog::EditDialog;
use crate::form::FormState;

const INPUT_HEIGHT: f32 = 22.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EditAction {
    Save,
    Cancel,
}

/// Label + single-line input per field; inputs stretch to the available width.
pub(crate) fn render_form(ui: &mut egui::Ui, id_salt: &str, form: &mut FormState) {
    egui::Grid::new(id_salt)
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            for input in form.inputs_mut() {
                ui.label(input.label());
                ui.add_sized(
                    [ui.available_width(), INPUT_HEIGHT],
                    egui::TextEdit::singleline(input.text_mut()),
                );
                ui.end_row();
            }
        });
}

/// Show the edit dialog as an application-modal window on `ctx`.
///
/// Escape or a click on the backdrop counts as Cancel.
pub(crate) fn render_edit_dialog(ctx: &egui::Context, dialog: &mut EditDialog) -> Option<EditAction> {
    let mut action = None;
    let title = dialog.title().to_string();

    let response = egui::Modal::new(egui::Id::new("edit_dialog")).show(ctx, |ui| {
        ui.set_min_width(380.0);
        ui.heading(&title);
        ui.separator();

        render_form(ui, "edit_dialog_form", dialog.form_mut());

        if let Some(error) = dialog.error() {
            ui.add_space(4.0);
            ui.colored_label(egui::Color32::RED, error);
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                action = Some(EditAction::Save);
            }
            if ui.button("Cancel").clicked() {
                action = Some(EditAction::Cancel);
            }
        });
    });

    if action.is_none() && response.should_close() {
        action = Some(EditAction::Cancel);
    }
    action
}
