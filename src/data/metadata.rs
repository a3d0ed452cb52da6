use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{Exif, Field, In, Tag, Value};

use super::model::{Metric, TagValue};
use crate::error::ScanError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read the tag for `metric` from one image file.
///
/// The file is opened, parsed and closed inside this call. Any problem with
/// the file (unreadable, not an EXIF container, tag absent, tag of the wrong
/// shape) comes back as [`ScanError::MetadataMissing`].
pub fn read_tag(path: &Path, metric: Metric) -> Result<TagValue, ScanError> {
    let exif = open_exif(path, metric)?;

    let value = match metric {
        Metric::FocalLength => field_value(&exif, Tag::FocalLength),
        Metric::Aperture => aperture_value(&exif),
    };

    let value = value.map_err(|reason| ScanError::metadata_missing(path, metric, reason))?;
    if value <= 0.0 {
        return Err(ScanError::metadata_missing(
            path,
            metric,
            format!("non-positive value {value}"),
        ));
    }

    TagValue::new(value)
        .ok_or_else(|| ScanError::metadata_missing(path, metric, "value is not finite"))
}

fn open_exif(path: &Path, metric: Metric) -> Result<Exif, ScanError> {
    let file = File::open(path)
        .map_err(|e| ScanError::metadata_missing(path, metric, format!("cannot open: {e}")))?;
    let mut reader = BufReader::new(file);

    exif::Reader::new()
        .read_from_container(&mut reader)
        .map_err(|e| ScanError::metadata_missing(path, metric, format!("unparsable: {e}")))
}

// ---------------------------------------------------------------------------
// Tag accessors
// ---------------------------------------------------------------------------

/// Look up `tag` in the primary image and decode it as a single number.
fn field_value(exif: &Exif, tag: Tag) -> Result<f64, String> {
    let field = exif
        .get_field(tag, In::PRIMARY)
        .ok_or_else(|| format!("{tag} tag absent"))?;
    single_number(field).ok_or_else(|| {
        format!(
            "{tag} has unexpected shape: {}",
            field.display_value().with_unit(exif)
        )
    })
}

/// Prefer `FNumber`; fall back to the APEX-encoded `ApertureValue`.
fn aperture_value(exif: &Exif) -> Result<f64, String> {
    match field_value(exif, Tag::FNumber) {
        Ok(f_number) => Ok(f_number),
        Err(fnumber_reason) => {
            let apex = field_value(exif, Tag::ApertureValue)
                .map_err(|apex_reason| format!("{fnumber_reason}; {apex_reason}"))?;
            Ok(apex_to_f_number(apex))
        }
    }
}

/// APEX aperture value AV → f-number N, with N = 2^(AV / 2).
pub fn apex_to_f_number(av: f64) -> f64 {
    (av / 2.0).exp2()
}

/// Decode a field holding exactly one unsigned rational or integer.
fn single_number(field: &Field) -> Option<f64> {
    match &field.value {
        Value::Rational(v) if v.len() == 1 => {
            let r = v[0];
            (r.denom != 0).then(|| r.to_f64())
        }
        Value::Short(v) if v.len() == 1 => Some(f64::from(v[0])),
        Value::Long(v) if v.len() == 1 => Some(f64::from(v[0])),
        _ => None,
    }
}
