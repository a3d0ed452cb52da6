use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – frequency table
// ---------------------------------------------------------------------------

/// Render the left panel listing every value with its count.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    let table = &state.chart.table;

    ui.heading("Frequencies");
    ui.separator();

    if let Some((value, count)) = table.mode() {
        ui.label(format!(
            "Most used: {value} {} ({count} of {})",
            state.chart.metric.unit(),
            table.total()
        ));
        ui.separator();
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("frequency_table")
                .striped(true)
                .num_columns(3)
                .show(ui, |ui: &mut Ui| {
                    ui.strong(state.chart.metric.unit());
                    ui.strong("Images");
                    ui.strong("Share");
                    ui.end_row();

                    for (value, count) in table.iter() {
                        let share = count as f64 / table.total().max(1) as f64 * 100.0;
                        ui.label(value.to_string());
                        ui.label(count.to_string());
                        ui.label(format!("{share:.1}%"));
                        ui.end_row();
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export table…").clicked() {
                export_table_dialog(state);
                ui.close_menu();
            }
            if ui.button("Save chart…").clicked() {
                save_chart_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} images, {} distinct values",
            state.chart.table.total(),
            state.chart.table.distinct()
        ));

        ui.separator();

        if ui.selectable_label(state.show_points, "Points").clicked() {
            state.show_points = !state.show_points;
        }
        if ui.selectable_label(state.show_curve, "Curve").clicked() {
            state.show_curve = !state.show_curve;
        }

        if let Some(msg) = &state.status_message {
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn export_table_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export frequency table")
        .set_file_name("frequencies.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        state.export_table(&path);
    }
}

pub fn save_chart_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save chart")
        .set_file_name("frequencies.svg")
        .add_filter("SVG", &["svg"])
        .add_filter("PNG", &["png"])
        .save_file();

    if let Some(path) = file {
        state.save_chart(&path);
    }
}
