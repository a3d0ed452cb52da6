//! Chart rendering.
//!
//! ```text
//!   FrequencyTable + SampleCurve
//!              │
//!              ▼
//!          ┌───────┐
//!          │ Chart │  discrete points, curve, labels
//!          └───────┘
//!         │         │
//!         ▼         ▼
//!   WindowVisualizer   FileVisualizer
//!   (eframe/egui_plot) (plotters → svg/png)
//! ```

pub mod image;
pub mod panels;
pub mod plot;

use std::ops::Range;

use crate::data::interpolate::SampleCurve;
use crate::data::model::{FrequencyTable, Metric};
use crate::error::ScanError;

pub use self::image::FileVisualizer;

pub const DISCRETE_LABEL: &str = "discrete";
pub const CURVE_LABEL: &str = "barycentric interpolation";

// ---------------------------------------------------------------------------
// Chart – everything a backend needs to draw
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Chart {
    pub metric: Metric,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// `[value, count]`, ascending by value.
    pub discrete: Vec<[f64; 2]>,
    /// Interpolated `[x, y]`, ascending by x.
    pub curve: Vec<[f64; 2]>,
    /// Source counts, kept for the table panel and export.
    pub table: FrequencyTable,
}

impl Chart {
    pub fn new(metric: Metric, table: &FrequencyTable, curve: &SampleCurve) -> Self {
        Self {
            metric,
            title: format!("{} frequency ({} images)", metric.axis_label(), table.total()),
            x_label: metric.axis_label(),
            y_label: "Images".to_string(),
            discrete: table.points(),
            curve: curve.points(),
            table: table.clone(),
        }
    }

    /// Both series must have something to draw.
    pub fn check(&self) -> Result<(), ScanError> {
        if self.discrete.is_empty() || self.curve.is_empty() {
            return Err(ScanError::render("chart has an empty series"));
        }
        Ok(())
    }

    pub fn x_range(&self) -> Range<f64> {
        let (lo, hi) = bounds(self.discrete.iter().chain(&self.curve).map(|p| p[0]));
        pad(lo, hi)
    }

    /// Y range always includes zero so counts read from a common baseline.
    pub fn y_range(&self) -> Range<f64> {
        let (lo, hi) = bounds(self.discrete.iter().chain(&self.curve).map(|p| p[1]));
        pad(lo.min(0.0), hi.max(0.0))
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn pad(lo: f64, hi: f64) -> Range<f64> {
    let span = hi - lo;
    let margin = if span.abs() < f64::EPSILON { 1.0 } else { span * 0.05 };
    (lo - margin)..(hi + margin)
}

// ---------------------------------------------------------------------------
// Visualizer – where a chart ends up
// ---------------------------------------------------------------------------

pub trait Visualizer {
    fn render(&mut self, chart: &Chart) -> Result<(), ScanError>;
}

/// Opens a native window and blocks until the user closes it.
#[derive(Debug, Default)]
pub struct WindowVisualizer;

impl Visualizer for WindowVisualizer {
    fn render(&mut self, chart: &Chart) -> Result<(), ScanError> {
        chart.check()?;
        crate::app::run_window(chart.clone()).map_err(ScanError::render)
    }
}
