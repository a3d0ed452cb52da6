use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, Chart};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FocalTallyApp {
    pub state: AppState,
}

impl FocalTallyApp {
    pub fn new(chart: Chart) -> Self {
        Self {
            state: AppState::new(chart),
        }
    }
}

impl eframe::App for FocalTallyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: frequency table ----
        egui::SidePanel::left("table_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::frequency_plot(ui, &self.state);
        });
    }
}

/// Open the chart window; returns once the user closes it.
pub fn run_window(chart: Chart) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let title = chart.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(FocalTallyApp::new(chart)))),
    )
}
