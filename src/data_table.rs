use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::models::enums::RowTag;
use crate::table::{SELECTION_COLUMN_ID, SELECTION_COLUMN_WIDTH, TableModel};

const ROW_HEIGHT: f32 = 24.0;

/// Draw the table and apply header and cell clicks to the model.
pub(crate) fn render_table_data(ui: &mut egui::Ui, id_salt: &str, table: &mut TableModel) {
    let columns = table.display_columns();
    let with_selection = table.with_selection();
    let highlighted = table.highlighted();
    let sort = table.sort_state().cloned();

    // Defer model mutations until the table has been drawn
    let mut header_clicks: Vec<String> = Vec::new();
    let mut cell_clicks: Vec<(usize, usize)> = Vec::new();

    ui.push_id(id_salt, |ui| {
        let rows = table.rows();
        let odd_bg = ui.visuals().faint_bg_color;

        let mut builder = TableBuilder::new(ui)
            .striped(false)
            .resizable(true)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::centered_and_justified(egui::Direction::LeftToRight))
            .auto_shrink([false, false])
            .min_scrolled_height(0.0);
        let last = columns.len().saturating_sub(1);
        for idx in 0..columns.len() {
            builder = if with_selection && idx == 0 {
                builder.column(Column::exact(SELECTION_COLUMN_WIDTH).resizable(false))
            } else if idx == last {
                builder.column(Column::remainder().at_least(60.0).clip(true))
            } else {
                builder.column(Column::initial(140.0).at_least(60.0).clip(true))
            };
        }

        builder
            .header(ROW_HEIGHT, |mut header| {
                for col in &columns {
                    header.col(|ui| {
                        if col.id == SELECTION_COLUMN_ID {
                            return;
                        }
                        let arrow = match &sort {
                            Some(s) if s.column_id == col.id => {
                                if s.ascending { " ^" } else { " v" }
                            }
                            _ => "",
                        };
                        let text = egui::RichText::new(format!("{}{}", col.heading, arrow)).strong();
                        if ui.add(egui::Button::new(text).frame(false)).clicked() {
                            header_clicks.push(col.id.clone());
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let idx = row.index();
                    let data = &rows[idx];
                    row.set_selected(highlighted == Some(idx));
                    let bg = (data.tag == RowTag::Odd).then_some(odd_bg);

                    let mut col_idx = 0;
                    if let Some(marker) = data.marker {
                        let (_, resp) = row.col(|ui| {
                            paint_row_tag(ui, bg);
                            ui.label(marker.glyph());
                        });
                        if resp.clicked() {
                            cell_clicks.push((idx, col_idx));
                        }
                        col_idx += 1;
                    }
                    for cell in &data.cells {
                        let (_, resp) = row.col(|ui| {
                            paint_row_tag(ui, bg);
                            ui.label(cell);
                        });
                        if resp.clicked() {
                            cell_clicks.push((idx, col_idx));
                        }
                        col_idx += 1;
                    }
                });
            });
    });

    for column_id in header_clicks {
        table.header_clicked(&column_id);
    }
    for (row, column) in cell_clicks {
        table.click(row, column);
    }
}

fn paint_row_tag(ui: &mut egui::Ui, bg: Option<egui::Color32>) {
    if let Some(color) = bg {
        ui.painter().rect_filled(ui.max_rect(), 0.0, color);
    }
}
