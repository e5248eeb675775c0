use eframe::egui;
use log::info;

use crate::bank::ALL_ENTITIES;
use crate::config::AppPreferences;
use crate::data_access::DataAccess;
use crate::entity::EntityController;
use crate::notifier::RfdNotifier;
use crate::{data_table, dialog};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TabAction {
    Add,
    Edit,
    Delete,
    DeleteChecked,
    Refresh,
    Export,
    CheckAll(bool),
}

/// Main window: one tab per bank entity.
pub struct BankManager {
    db: DataAccess,
    notifier: RfdNotifier,
    tabs: Vec<EntityController>,
    active_tab: usize,
}

impl BankManager {
    pub fn new(db: DataAccess) -> Self {
        let mut notifier = RfdNotifier;
        let mut tabs: Vec<EntityController> =
            ALL_ENTITIES.iter().copied().map(EntityController::new).collect();
        for tab in &mut tabs {
            tab.reload(&db, &mut notifier);
        }
        info!("Opened {} entity tabs", tabs.len());
        Self {
            db,
            notifier,
            tabs,
            active_tab: 0,
        }
    }

    fn apply(&mut self, action: TabAction) {
        let db = &self.db;
        let notifier = &mut self.notifier;
        let tab = &mut self.tabs[self.active_tab];
        match action {
            TabAction::Add => {
                tab.add(db, notifier);
            }
            TabAction::Edit => {
                tab.begin_edit(db, notifier);
            }
            TabAction::Delete => {
                tab.delete_highlighted(db, notifier);
            }
            TabAction::DeleteChecked => {
                tab.delete_checked(db, notifier);
            }
            TabAction::Refresh => {
                tab.reload(db, notifier);
            }
            TabAction::Export => {
                tab.export_csv(notifier);
            }
            TabAction::CheckAll(checked) => tab.table_mut().set_all_checked(checked),
        }
    }

    fn render_tab_bar(&mut self, ctx: &egui::Context) {
        let names: Vec<&str> = self.tabs.iter().map(|t| t.def().name).collect();
        egui::TopBottomPanel::top("entity_tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (idx, name) in names.iter().enumerate() {
                    if ui.selectable_label(self.active_tab == idx, *name).clicked() {
                        self.active_tab = idx;
                    }
                }
            });
        });
    }

    fn render_active_tab(&mut self, ctx: &egui::Context) -> Option<TabAction> {
        let mut action = None;
        let tab = &mut self.tabs[self.active_tab];
        let name = tab.def().name;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(name);
            ui.add_space(4.0);
            dialog::render_form(ui, name, tab.form_mut());
            ui.add_space(4.0);

            if ui.button("Add").clicked() {
                action = Some(TabAction::Add);
            }
            ui.horizontal(|ui| {
                if ui.button("Edit").clicked() {
                    action = Some(TabAction::Edit);
                }
                if ui.button("Delete").clicked() {
                    action = Some(TabAction::Delete);
                }
                if ui.button("Delete Selected").clicked() {
                    action = Some(TabAction::DeleteChecked);
                }
                ui.separator();
                if ui.button("Check all").clicked() {
                    action = Some(TabAction::CheckAll(true));
                }
                if ui.button("Uncheck all").clicked() {
                    action = Some(TabAction::CheckAll(false));
                }
                ui.separator();
                if ui.button("Refresh").clicked() {
                    action = Some(TabAction::Refresh);
                }
                if ui.button("Export CSV").clicked() {
                    action = Some(TabAction::Export);
                }
            });
            ui.separator();

            data_table::render_table_data(ui, name, tab.table_mut());
        });
        action
    }

    fn render_edit_modal(&mut self, ctx: &egui::Context) {
        let idx = self.active_tab;
        let edit_action = self.tabs[idx]
            .edit_dialog_mut()
            .and_then(|d| dialog::render_edit_dialog(ctx, d));
        match edit_action {
            Some(dialog::EditAction::Save) => {
                self.tabs[idx].confirm_edit(&self.db, &mut self.notifier);
            }
            Some(dialog::EditAction::Cancel) => {
                self.tabs[idx].cancel_edit();
            }
            None => {}
        }
    }
}

impl eframe::App for BankManager {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_tab_bar(ctx);
        if let Some(action) = self.render_active_tab(ctx) {
            self.apply(action);
        }
        self.render_edit_modal(ctx);
    }
}

/// Theme and text size from the saved preferences.
pub fn apply_preferences(ctx: &egui::Context, prefs: &AppPreferences) {
    ctx.set_visuals(if prefs.is_dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    let scale = prefs.font_size / 14.0;
    ctx.style_mut(|style| {
        for font in style.text_styles.values_mut() {
            font.size *= scale;
        }
    });
}
