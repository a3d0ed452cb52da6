use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Metric – which EXIF measurement is being tallied
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// EXIF `FocalLength`, in millimetres.
    FocalLength,
    /// EXIF `FNumber` (or the APEX `ApertureValue` when absent).
    Aperture,
}

impl Metric {
    pub fn unit(self) -> &'static str {
        match self {
            Metric::FocalLength => "mm",
            Metric::Aperture => "f-number",
        }
    }

    /// Axis label used by both chart backends.
    pub fn axis_label(self) -> String {
        let name = match self {
            Metric::FocalLength => "Focal length",
            Metric::Aperture => "Aperture",
        };
        format!("{name} ({})", self.unit())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::FocalLength => write!(f, "focal length"),
            Metric::Aperture => write!(f, "aperture"),
        }
    }
}

// ---------------------------------------------------------------------------
// TagValue – one measurement read from one file
// ---------------------------------------------------------------------------

/// A finite tag value. `f64` is not `Ord`, so this wraps it with the IEEE
/// total order to be usable as a `BTreeMap` key.
#[derive(Debug, Clone, Copy)]
pub struct TagValue(f64);

impl TagValue {
    /// Returns `None` for NaN and infinities.
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // -0.0 and 0.0 must compare equal under total_cmp.
        Some(TagValue(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<u32> for TagValue {
    fn from(value: u32) -> Self {
        TagValue(value as f64)
    }
}

impl PartialEq for TagValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for TagValue {}

impl PartialOrd for TagValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TagValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::hash::Hash for TagValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}

// ---------------------------------------------------------------------------
// FrequencyTable – value → occurrence count
// ---------------------------------------------------------------------------

/// Occurrence counts keyed by tag value, kept in ascending key order.
///
/// Grows only through [`FrequencyTable::record`]; a value that was never
/// recorded has an implicit count of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<TagValue, u64>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: TagValue) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn count(&self, value: TagValue) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Number of `record` calls so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct values seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// `(value, count)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (TagValue, u64)> + '_ {
        self.counts.iter().map(|(v, c)| (*v, *c))
    }

    /// The table as plot points `[value, count]`.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.iter().map(|(v, c)| [v.get(), c as f64]).collect()
    }

    /// The most frequent value; ties go to the smaller value.
    pub fn mode(&self) -> Option<(TagValue, u64)> {
        self.iter()
            .fold(None, |best: Option<(TagValue, u64)>, (v, c)| match best {
                Some((_, bc)) if bc >= c => best,
                _ => Some((v, c)),
            })
    }
}

impl FromIterator<TagValue> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = TagValue>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for value in iter {
            table.record(value);
        }
        table
    }
}
