//! Data layer: scanning, tallying, smoothing and export.
//!
//! Architecture:
//! ```text
//!   root dir (*.NEF)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ scanner  │  walk tree, filter by extension, per-file deadline
//!   └──────────┘
//!        │ path
//!        ▼
//!   ┌──────────┐
//!   │ metadata │  open file → EXIF tag → TagValue
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────────┐
//!   │ FrequencyTable │  value → count   (optionally snapped by `lens`)
//!   └────────────────┘
//!        │
//!        ├──────────────► export (csv / json)
//!        ▼
//!   ┌─────────────┐
//!   │ interpolate │  barycentric curve over [min, max]
//!   └─────────────┘
//! ```

pub mod export;
pub mod interpolate;
pub mod lens;
pub mod metadata;
pub mod model;
pub mod scanner;

#[cfg(test)]
pub mod fixtures;
