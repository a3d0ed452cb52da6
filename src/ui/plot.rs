use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use super::{CURVE_LABEL, DISCRETE_LABEL};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Frequency plot (central panel)
// ---------------------------------------------------------------------------

/// Render the counts and the interpolated curve in the central panel.
pub fn frequency_plot(ui: &mut Ui, state: &AppState) {
    let chart = &state.chart;

    Plot::new("frequency_plot")
        .legend(Legend::default())
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if state.show_curve {
                let curve: PlotPoints = chart.curve.iter().copied().collect();
                plot_ui.line(
                    Line::new(curve)
                        .name(CURVE_LABEL)
                        .color(Color32::LIGHT_BLUE)
                        .width(1.5),
                );
            }

            if state.show_points {
                let discrete: PlotPoints = chart.discrete.iter().copied().collect();
                plot_ui.points(
                    Points::new(discrete)
                        .name(DISCRETE_LABEL)
                        .color(Color32::LIGHT_RED)
                        .radius(4.0),
                );
            }
        });
}
