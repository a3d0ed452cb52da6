use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};
use walkdir::WalkDir;

use super::interpolate::interpolate;
use super::lens::nearest_standard;
use super::metadata::read_tag;
use super::model::{FrequencyTable, Metric, TagValue};
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::ui::{Chart, Visualizer};

// ---------------------------------------------------------------------------
// Scan phases and results
// ---------------------------------------------------------------------------

/// `Idle → Scanning → Aggregated → Rendered → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Scanning,
    Aggregated,
    Rendered,
}

/// What one pass over the directory tree produced.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub table: FrequencyTable,
    /// Files whose name matched the extension.
    pub matched: usize,
    /// Per-file errors that were logged and skipped.
    pub failures: Vec<ScanError>,
}

// ---------------------------------------------------------------------------
// DirectoryScanner
// ---------------------------------------------------------------------------

pub struct DirectoryScanner {
    config: ScanConfig,
    phase: ScanPhase,
}

impl DirectoryScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            phase: ScanPhase::Idle,
        }
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    fn set_phase(&mut self, phase: ScanPhase) {
        debug!("scanner phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// Walk the root and tally every matching file into a fresh table.
    ///
    /// Only an inaccessible root (or failing to start the reader thread)
    /// aborts; individual bad files end up in [`ScanReport::failures`].
    pub fn scan(&mut self) -> Result<ScanReport, ScanError> {
        self.set_phase(ScanPhase::Scanning);
        let result = self.scan_tree();
        self.set_phase(match result {
            Ok(_) => ScanPhase::Aggregated,
            Err(_) => ScanPhase::Idle,
        });
        result
    }

    /// Interpolate the scanned table and hand the chart to `visualizer`.
    pub fn render(
        &mut self,
        report: &ScanReport,
        visualizer: &mut dyn Visualizer,
    ) -> Result<(), ScanError> {
        let result = self.build_and_render(report, visualizer);
        if result.is_ok() {
            self.set_phase(ScanPhase::Rendered);
        }
        self.set_phase(ScanPhase::Idle);
        result
    }

    fn build_and_render(
        &self,
        report: &ScanReport,
        visualizer: &mut dyn Visualizer,
    ) -> Result<(), ScanError> {
        let curve = interpolate(&report.table, self.config.samples)?;
        let chart = Chart::new(self.config.metric, &report.table, &curve);
        visualizer.render(&chart)
    }

    fn scan_tree(&self) -> Result<ScanReport, ScanError> {
        let root = &self.config.root;
        check_root(root)?;
        info!(
            "Scanning {} for *.{} ({})",
            root.display(),
            self.config.extension,
            self.config.metric
        );

        let mut worker = ExtractionWorker::spawn(self.config.metric)?;
        let mut report = ScanReport::default();

        for entry in WalkDir::new(root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.config.matches(entry.file_name()) {
                continue;
            }
            report.matched += 1;

            match worker.extract(entry.path(), self.config.timeout) {
                Ok(value) => report.table.record(self.normalise(value)),
                Err(err) if err.is_per_file() => {
                    warn!("Skipping {err}");
                    report.failures.push(err);
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            "Scanned {} matching files: {} tallied, {} skipped, {} distinct values",
            report.matched,
            report.table.total(),
            report.failures.len(),
            report.table.distinct()
        );
        Ok(report)
    }

    fn normalise(&self, value: TagValue) -> TagValue {
        if self.config.snap_to_primes && self.config.metric == Metric::FocalLength {
            TagValue::new(nearest_standard(value.get())).unwrap_or(value)
        } else {
            value
        }
    }
}

fn check_root(root: &Path) -> Result<(), ScanError> {
    let access = |source| ScanError::DirectoryAccess {
        path: root.to_path_buf(),
        source,
    };
    let meta = fs::metadata(root).map_err(access)?;
    if !meta.is_dir() {
        return Err(access(io::Error::other("not a directory")));
    }
    fs::read_dir(root).map_err(access)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Reader thread with a per-file deadline
// ---------------------------------------------------------------------------

/// Runs [`read_tag`] on a background thread so a hung read can be abandoned.
///
/// After a timeout the stuck thread is left to finish on its own; it exits as
/// soon as it notices its channels are gone. A fresh thread takes over.
struct ExtractionWorker {
    metric: Metric,
    read: ReadFn,
    jobs: Sender<PathBuf>,
    results: Receiver<Result<TagValue, ScanError>>,
}

type ReadFn = fn(&Path, Metric) -> Result<TagValue, ScanError>;

impl ExtractionWorker {
    fn spawn(metric: Metric) -> Result<Self, ScanError> {
        Self::spawn_with(metric, read_tag)
    }

    fn spawn_with(metric: Metric, read: ReadFn) -> Result<Self, ScanError> {
        let (jobs, job_rx) = mpsc::channel::<PathBuf>();
        let (result_tx, results) = mpsc::channel();

        thread::Builder::new()
            .name("metadata-reader".into())
            .spawn(move || {
                for path in job_rx {
                    if result_tx.send(read(&path, metric)).is_err() {
                        break;
                    }
                }
            })
            .map_err(ScanError::Worker)?;

        Ok(Self {
            metric,
            read,
            jobs,
            results,
        })
    }

    fn extract(&mut self, path: &Path, timeout: Duration) -> Result<TagValue, ScanError> {
        let outcome = match self.jobs.send(path.to_path_buf()) {
            Ok(()) => self.results.recv_timeout(timeout),
            Err(_) => Err(RecvTimeoutError::Disconnected),
        };

        match outcome {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                *self = Self::spawn_with(self.metric, self.read)?;
                Err(ScanError::ExtractionTimeout {
                    path: path.to_path_buf(),
                    timeout,
                })
            }
            // The reader panicked on this file.
            Err(RecvTimeoutError::Disconnected) => {
                *self = Self::spawn_with(self.metric, self.read)?;
                Err(ScanError::metadata_missing(
                    path,
                    self.metric,
                    "metadata reader stopped unexpectedly",
                ))
            }
        }
    }
}
