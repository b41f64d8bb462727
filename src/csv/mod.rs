//! CSV Module
//!
//! The on-disk line format for asteroid records.
//!
//! ## File Format
//! ```text
//! date,name,id,hazardous,absolute_magnitude_h,diameter_min_m,diameter_max_m,miss_distance_km,velocity_km_s
//! 2026-01-04,67381 (2000 OL8),2067381,True,19.8000000000,291.4400000000,651.6800000000,12024984.0100000000,19.8400000000
//! ```
//!
//! One record per line, nine comma-separated fields in fixed order. No
//! quoting: a comma inside a value is not representable (accepted
//! limitation of the format). The first line is a header whose first
//! field is literally `date`; decoding treats it, and any row with
//! fewer than nine fields, as skippable noise rather than an error.

mod codec;

pub use codec::{decode_line, encode_record};

// =============================================================================
// Shared Constants
// =============================================================================

/// Header line written by full-resync saves and skipped on load
pub const HEADER: &str = "date,name,id,hazardous,absolute_magnitude_h,diameter_min_m,diameter_max_m,miss_distance_km,velocity_km_s";

/// Number of fields in one record line
pub const FIELD_COUNT: usize = 9;

/// Fractional digits printed for floating-point fields.
///
/// High enough that repeated load/save cycles do not drift the values.
pub const FLOAT_PRECISION: usize = 10;
