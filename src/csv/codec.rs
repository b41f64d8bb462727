//! CSV codec
//!
//! Decoding a line into an `Asteroid` and encoding one back.
//!
//! Decoding is deliberately forgiving: header lines, blank lines, and
//! short rows yield `None` so a load can skip them; numeric fields that
//! fail to parse are repaired to zero (each repair logged at debug).

use crate::catalog::{clamp, Asteroid, DATE_MAX, NAME_MAX};

use super::{FIELD_COUNT, FLOAT_PRECISION};

// =============================================================================
// Decoding
// =============================================================================

/// Decode one CSV line into a record.
///
/// Returns `None` for lines that carry no record: empty lines, the
/// header (first field literally `date`), and rows with fewer than nine
/// fields. Such lines are skipped by the caller, never treated as load
/// failures.
pub fn decode_line(line: &str) -> Option<Asteroid> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return None;
    }

    let fields: Vec<&str> = line.split(',').collect();

    // Header signal: first field is the literal column name
    if fields[0] == "date" {
        return None;
    }

    if fields.len() < FIELD_COUNT {
        tracing::debug!(
            "skipping short row ({} of {} fields): {:?}",
            fields.len(),
            FIELD_COUNT,
            line
        );
        return None;
    }

    Some(Asteroid {
        date: clamp(fields[0], DATE_MAX),
        name: clamp(fields[1], NAME_MAX),
        id: parse_i64_or_zero(fields[2], "id"),
        // Strict equality check, not a general boolean parser: anything
        // that is not (case-insensitively) "true" decodes to false.
        is_hazardous: fields[3].eq_ignore_ascii_case("true"),
        absolute_magnitude_h: parse_f64_or_zero(fields[4], "absolute_magnitude_h"),
        diameter_min_m: parse_f64_or_zero(fields[5], "diameter_min_m"),
        diameter_max_m: parse_f64_or_zero(fields[6], "diameter_max_m"),
        miss_distance_km: parse_f64_or_zero(fields[7], "miss_distance_km"),
        velocity_km_s: parse_f64_or_zero(fields[8], "velocity_km_s"),
    })
}

/// Parse an integer field, defaulting to 0 on failure
fn parse_i64_or_zero(field: &str, column: &str) -> i64 {
    match field.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            tracing::debug!("defaulting unparsable {} field to 0: {:?}", column, field);
            0
        }
    }
}

/// Parse a float field, defaulting to 0.0 on failure
fn parse_f64_or_zero(field: &str, column: &str) -> f64 {
    match field.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            tracing::debug!("defaulting unparsable {} field to 0: {:?}", column, field);
            0.0
        }
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode a record as one CSV line (no trailing newline).
///
/// Always emits all nine fields in fixed order; booleans as the literal
/// tokens `True` / `False`; floats at fixed precision so values survive
/// repeated load/save cycles.
pub fn encode_record(record: &Asteroid) -> String {
    format!(
        "{},{},{},{},{:.p$},{:.p$},{:.p$},{:.p$},{:.p$}",
        record.date,
        record.name,
        record.id,
        if record.is_hazardous { "True" } else { "False" },
        record.absolute_magnitude_h,
        record.diameter_min_m,
        record.diameter_max_m,
        record.miss_distance_km,
        record.velocity_km_s,
        p = FLOAT_PRECISION,
    )
}
