mod app;
mod config;
mod data;
mod error;
mod state;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::builder::TypedValueParser;
use clap::Parser;

use config::{OutputTarget, ScanConfig, DEFAULT_EXTENSION};
use data::export::export_table;
use data::interpolate::DEFAULT_SAMPLES;
use data::model::Metric;
use data::scanner::DirectoryScanner;
use ui::{FileVisualizer, Visualizer, WindowVisualizer};

/// Tally the focal lengths of a folder of RAW photos and chart them.
#[derive(Parser, Debug)]
#[command(name = "focal-tally")]
#[command(version)]
struct Args {
    /// Directory scanned recursively
    #[arg(env = "FOCAL_TALLY_ROOT")]
    root: PathBuf,

    /// RAW file extension, matched case-sensitively
    #[arg(short, long, default_value = DEFAULT_EXTENSION, env = "FOCAL_TALLY_EXTENSION")]
    extension: String,

    /// EXIF measurement to tally
    #[arg(short, long, value_enum, default_value_t = Metric::FocalLength, env = "FOCAL_TALLY_METRIC")]
    metric: Metric,

    /// Write the chart to this .svg/.png instead of opening a window
    #[arg(short, long, env = "FOCAL_TALLY_OUTPUT")]
    output: Option<PathBuf>,

    /// Also write the frequency table to this .csv/.json
    #[arg(long, env = "FOCAL_TALLY_EXPORT")]
    export: Option<PathBuf>,

    /// Points on the interpolated curve
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES,
          value_parser = clap::value_parser!(u32).range(2..).map(|n| n as usize))]
    samples: usize,

    /// Seconds allowed for reading one file's metadata
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Round focal lengths to the nearest common prime (18, 24, 35, 55, 85 … 300 mm)
    #[arg(long)]
    snap_primes: bool,
}

impl Args {
    fn scan_config(&self) -> ScanConfig {
        let mut config = ScanConfig::new(&self.root).with_extension(&self.extension);
        config.metric = self.metric;
        config.samples = self.samples;
        config.timeout = Duration::from_secs(self.timeout_secs);
        config.snap_to_primes = self.snap_primes;
        config
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut scanner = DirectoryScanner::new(args.scan_config());
    let report = scanner.scan().context("scan failed")?;

    if let Some(path) = &args.export {
        export_table(path, args.metric, &report.table)
            .with_context(|| format!("exporting table to {}", path.display()))?;
    }

    let mut visualizer: Box<dyn Visualizer> = match OutputTarget::from(args.output.clone()) {
        OutputTarget::Window => Box::new(WindowVisualizer),
        OutputTarget::File(path) => Box::new(FileVisualizer::new(path)),
    };
    scanner
        .render(&report, visualizer.as_mut())
        .context("cannot chart the scan results")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["focal-tally", "/photos"]).unwrap();
        let config = args.scan_config();
        assert_eq!(config.root, PathBuf::from("/photos"));
        assert_eq!(config.extension, "NEF");
        assert_eq!(config.metric, Metric::FocalLength);
        assert_eq!(config.samples, 100);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.snap_to_primes);
        assert_eq!(OutputTarget::from(args.output), OutputTarget::Window);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "focal-tally",
            "/photos",
            "--extension",
            ".CR2",
            "--metric",
            "aperture",
            "--output",
            "chart.png",
            "--export",
            "table.json",
            "-n",
            "250",
            "--timeout-secs",
            "3",
            "--snap-primes",
        ])
        .unwrap();
        let config = args.scan_config();
        assert_eq!(config.extension, "CR2");
        assert_eq!(config.metric, Metric::Aperture);
        assert_eq!(config.samples, 250);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(config.snap_to_primes);
        assert_eq!(args.export, Some(PathBuf::from("table.json")));
    }

    #[test]
    fn rejects_too_few_samples() {
        assert!(Args::try_parse_from(["focal-tally", "/photos", "-n", "1"]).is_err());
        assert!(Args::try_parse_from(["focal-tally", "/photos", "-n", "0"]).is_err());
    }

    #[test]
    fn two_samples_is_the_minimum() {
        let args = Args::try_parse_from(["focal-tally", "/photos", "--samples", "2"]).unwrap();
        assert_eq!(args.scan_config().samples, 2);
    }

    #[test]
    fn end_to_end_writes_chart_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let photos = dir.path().join("photos");
        std::fs::create_dir(&photos).unwrap();
        data::fixtures::write_raw(&photos.join("a.NEF"), Some(35));
        data::fixtures::write_raw(&photos.join("b.NEF"), Some(35));
        data::fixtures::write_raw(&photos.join("c.NEF"), Some(85));
        let chart = dir.path().join("chart.svg");
        let table = dir.path().join("table.csv");

        let args = Args::try_parse_from([
            OsStr::new("focal-tally"),
            photos.as_os_str(),
            OsStr::new("--output"),
            chart.as_os_str(),
            OsStr::new("--export"),
            table.as_os_str(),
        ])
        .unwrap();
        run(&args).unwrap();

        assert!(chart.exists());
        assert!(std::fs::read_to_string(&table).unwrap().contains("35.0,2"));
    }

    #[test]
    fn missing_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::try_parse_from([
            OsStr::new("focal-tally"),
            dir.path().join("nope").as_os_str(),
        ])
        .unwrap();
        assert!(run(&args).is_err());
    }
}
