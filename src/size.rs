//! Human-readable byte counts
//!
//! Sizes are formatted with integer arithmetic only, so every `u64` (including
//! `u64::MAX`) formats without overflow or floating point rounding.

/// Number of fractional digits computed before trailing zeros are stripped.
const FRACTION_DIGITS: u32 = 2;
const FRACTION_SCALE: u64 = 10u64.pow(FRACTION_DIGITS);

const BINARY_UNITS: [&str; 8] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];
const DECIMAL_UNITS: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a size in bytes using powers of 1024 (`KiB`) or, with
/// `use_decimal_units`, powers of 1000 (`kB`).
///
/// The value is truncated to two fractional digits and trailing zeros are
/// dropped: `1024` is `"1 KiB"`, `1536` is `"1.5 KiB"`. Anything below one
/// multiplier step is printed as a raw count, e.g. `"1023 bytes"`.
pub fn format_size(size: u64, use_decimal_units: bool) -> String {
    let (multiplier, units) = if use_decimal_units {
        (1000, &DECIMAL_UNITS)
    } else {
        (1024, &BINARY_UNITS)
    };
    let max_scale = units.len();

    // Reduce first so that multiplying by FRACTION_SCALE can never overflow.
    let mut value = size;
    let mut scale = 0;
    while value > u64::MAX / FRACTION_SCALE && scale < max_scale {
        value /= multiplier;
        scale += 1;
    }

    let mut scaled = value * FRACTION_SCALE;
    while scaled >= multiplier * FRACTION_SCALE && scale < max_scale {
        scaled /= multiplier;
        scale += 1;
    }

    if scale == 0 {
        return format!("{} bytes", size);
    }

    let whole = scaled / FRACTION_SCALE;
    let fraction = format!("{:0width$}", scaled % FRACTION_SCALE, width = FRACTION_DIGITS as usize);
    let fraction = fraction.trim_end_matches('0');
    let unit = units[scale - 1];

    if fraction.is_empty() {
        format!("{} {}", whole, unit)
    } else {
        format!("{}.{} {}", whole, fraction, unit)
    }
}
