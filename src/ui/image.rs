use std::path::{Path, PathBuf};

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{Chart, Visualizer, CURVE_LABEL, DISCRETE_LABEL};
use crate::error::ScanError;

const SIZE: (u32, u32) = (1024, 640);
const CURVE_COLOR: RGBColor = RGBColor(31, 119, 180);
const POINT_COLOR: RGBColor = RGBColor(214, 39, 40);

// ---------------------------------------------------------------------------
// FileVisualizer – headless output
// ---------------------------------------------------------------------------

/// Writes the chart to `.svg` or `.png`, picked by extension.
#[derive(Debug, Clone)]
pub struct FileVisualizer {
    path: PathBuf,
}

impl FileVisualizer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Visualizer for FileVisualizer {
    fn render(&mut self, chart: &Chart) -> Result<(), ScanError> {
        chart.check()?;
        save_chart(&self.path, chart)?;
        info!("Chart written to {}", self.path.display());
        Ok(())
    }
}

/// Render `chart` to `path`. Also used by the window's "Save chart…" entry.
pub fn save_chart(path: &Path, chart: &Chart) -> Result<(), ScanError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "svg" => draw(SVGBackend::new(path, SIZE).into_drawing_area(), chart),
        "png" => draw(BitMapBackend::new(path, SIZE).into_drawing_area(), chart),
        other => Err(ScanError::render(format!(
            "unsupported image extension: .{other} (use .svg or .png)"
        ))),
    }
}

fn draw<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, chart: &Chart) -> Result<(), ScanError> {
    root.fill(&WHITE).map_err(ScanError::render)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 24).into_font())
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(chart.x_range(), chart.y_range())
        .map_err(ScanError::render)?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()
        .map_err(ScanError::render)?;

    ctx.draw_series(LineSeries::new(
        chart.curve.iter().map(|p| (p[0], p[1])),
        CURVE_COLOR.stroke_width(2),
    ))
    .map_err(ScanError::render)?
    .label(CURVE_LABEL)
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CURVE_COLOR.stroke_width(2)));

    ctx.draw_series(
        chart
            .discrete
            .iter()
            .map(|p| Circle::new((p[0], p[1]), 5, POINT_COLOR.filled())),
    )
    .map_err(ScanError::render)?
    .label(DISCRETE_LABEL)
    .legend(|(x, y)| Circle::new((x + 10, y), 5, POINT_COLOR.filled()));

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(ScanError::render)?;

    root.present().map_err(ScanError::render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::interpolate::interpolate;
    use crate::data::model::{FrequencyTable, Metric, TagValue};

    fn chart() -> Chart {
        let table: FrequencyTable = [18u32, 35, 35, 50, 50, 50, 85]
            .into_iter()
            .map(TagValue::from)
            .collect();
        let curve = interpolate(&table, 100).unwrap();
        Chart::new(Metric::FocalLength, &table, &curve)
    }

    #[test]
    fn writes_svg_with_both_series() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("focal.svg");

        FileVisualizer::new(&path).render(&chart()).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("<polyline"));
        assert!(svg.contains(DISCRETE_LABEL));
        assert!(svg.contains(CURVE_LABEL));
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("focal.bmpx");

        let err = FileVisualizer::new(&path).render(&chart()).unwrap_err();
        assert!(matches!(err, ScanError::Render { .. }));
        assert!(!path.exists());
    }
}
