use std::path::Path;

use crate::data::export::export_table;
use crate::ui::image::save_chart;
use crate::ui::Chart;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The window's state, independent of rendering.
pub struct AppState {
    /// Chart handed over by the scanner; never modified.
    pub chart: Chart,

    /// Whether the interpolated curve is drawn.
    pub show_curve: bool,

    /// Whether the discrete markers are drawn.
    pub show_points: bool,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(chart: Chart) -> Self {
        Self {
            chart,
            show_curve: true,
            show_points: true,
            status_message: None,
        }
    }

    /// Write the frequency table, reporting the outcome in the status line.
    pub fn export_table(&mut self, path: &Path) {
        match export_table(path, self.chart.metric, &self.chart.table) {
            Ok(()) => self.status_message = Some(format!("Exported {}", path.display())),
            Err(e) => {
                log::error!("Failed to export table: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Save the chart as an image, reporting the outcome in the status line.
    pub fn save_chart(&mut self, path: &Path) {
        match save_chart(path, &self.chart) {
            Ok(()) => self.status_message = Some(format!("Saved {}", path.display())),
            Err(e) => {
                log::error!("Failed to save chart: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
