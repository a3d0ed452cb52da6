use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::Duration;

use crate::data::interpolate::DEFAULT_SAMPLES;
use crate::data::model::Metric;

pub const DEFAULT_EXTENSION: &str = "NEF";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// ScanConfig – everything the scanner needs, passed in at construction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory walked recursively.
    pub root: PathBuf,
    /// RAW extension without the leading dot, matched case-sensitively.
    pub extension: String,
    pub metric: Metric,
    /// Points on the interpolated curve.
    pub samples: usize,
    /// Upper bound on reading one file's metadata.
    pub timeout: Duration,
    /// Round focal lengths to the nearest standard prime before counting.
    pub snap_to_primes: bool,
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            metric: Metric::FocalLength,
            samples: DEFAULT_SAMPLES,
            timeout: DEFAULT_TIMEOUT,
            snap_to_primes: false,
        }
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Whether a file name ends in `.<extension>`, exact case.
    pub fn matches(&self, file_name: &OsStr) -> bool {
        let name = file_name.to_string_lossy();
        name.strip_suffix(self.extension.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    }
}

// ---------------------------------------------------------------------------
// OutputTarget – where the chart goes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Interactive window; blocks until closed.
    Window,
    /// Static image, format picked from the extension.
    File(PathBuf),
}

impl From<Option<PathBuf>> for OutputTarget {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Window, OutputTarget::File)
    }
}
