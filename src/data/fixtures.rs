//! Synthetic RAW files: minimal little-endian TIFF containers, the same
//! layout NEF uses, written with kamadak-exif's writer. Shared by the unit
//! tests and the `generate_sample` binary.

use std::io::Cursor;
use std::path::Path;

use exif::experimental::Writer;
use exif::{Field, In, Tag, Value};

pub fn ascii(tag: Tag, text: &str) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![text.as_bytes().to_vec()]),
    }
}

pub fn rational(tag: Tag, num: u32, denom: u32) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Rational(vec![(num, denom).into()]),
    }
}

pub fn write_fields(path: &Path, fields: &[Field]) {
    let mut writer = Writer::new();
    for field in fields {
        writer.push_field(field);
    }
    let mut buf = Cursor::new(Vec::new());
    writer.write(&mut buf, true).expect("Failed to encode TIFF");
    std::fs::write(path, buf.into_inner()).expect("Failed to write RAW file");
}

/// A RAW file with a camera make and, optionally, a focal length in mm.
pub fn write_raw(path: &Path, focal_mm: Option<u32>) {
    let mut fields = vec![ascii(Tag::Make, "NIKON CORPORATION")];
    if let Some(mm) = focal_mm {
        fields.push(rational(Tag::FocalLength, mm, 1));
    }
    write_fields(path, &fields);
}
