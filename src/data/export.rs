use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use super::model::{FrequencyTable, Metric};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write the frequency table to a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header `value,count`, one row per distinct value
/// * `.json` – `{ "metric", "unit", "total", "rows": [{ "value", "count" }] }`
pub fn export_table(path: &Path, metric: Metric, table: &FrequencyTable) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => write_csv(path, table),
        "json" => write_json(path, metric, table),
        other => bail!("Unsupported export extension: .{other}"),
    }?;

    log::info!(
        "Exported {} rows to {}",
        table.distinct(),
        path.display()
    );
    Ok(())
}

#[derive(Debug, Serialize)]
struct Row {
    value: f64,
    count: u64,
}

fn rows(table: &FrequencyTable) -> Vec<Row> {
    table
        .iter()
        .map(|(value, count)| Row {
            value: value.get(),
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

fn write_csv(path: &Path, table: &FrequencyTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for row in rows(table) {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct JsonExport {
    metric: Metric,
    unit: &'static str,
    total: u64,
    rows: Vec<Row>,
}

fn write_json(path: &Path, metric: Metric, table: &FrequencyTable) -> Result<()> {
    let doc = JsonExport {
        metric,
        unit: metric.unit(),
        total: table.total(),
        rows: rows(table),
    };
    let text = serde_json::to_string_pretty(&doc).context("serializing JSON")?;
    std::fs::write(path, text).context("writing JSON file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::TagValue;

    fn table() -> FrequencyTable {
        [50u32, 35, 50, 85, 50]
            .into_iter()
            .map(TagValue::from)
            .collect()
    }

    #[test]
    fn csv_has_one_row_per_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("focal.csv");
        export_table(&path, Metric::FocalLength, &table()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, vec!["value", "count"]);

        let rows: Vec<(f64, u64)> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].parse().unwrap(), r[1].parse().unwrap())
            })
            .collect();
        assert_eq!(rows, vec![(35.0, 1), (50.0, 3), (85.0, 1)]);
    }

    #[test]
    fn json_carries_metric_and_total() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("focal.json");
        export_table(&path, Metric::FocalLength, &table()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["metric"], "focal_length");
        assert_eq!(doc["unit"], "mm");
        assert_eq!(doc["total"], 5);
        assert_eq!(doc["rows"].as_array().unwrap().len(), 3);
        assert_eq!(doc["rows"][1]["value"], 50.0);
        assert_eq!(doc["rows"][1]["count"], 3);
    }

    #[test]
    fn unknown_extension_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_table(&dir.path().join("focal.xlsx"), Metric::FocalLength, &table())
            .unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }
}
