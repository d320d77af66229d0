//! Display formatting for statistic values
//!
//! Every function here is total. Absent data is surfaced to the viewer as
//! a sentinel string rather than an error. Number rendering follows the
//! conventions of the replay browser the tables are shown in, so a whole
//! percentage prints as `50` and not `50.0`.

use crate::stats::Ratio;

/// Shown for a ratio whose quotient is undefined (zero total) or missing
pub const NOT_AVAILABLE: &str = "N/A";

/// Stand-in for a null opponent ratio in simple-ratio comparisons
pub const ZERO_RATIO: &str = "0.000";

/// Separator between the components of a composite field
pub const COMPOSITE_SEPARATOR: &str = " / ";

/// Fractional digits needed to print any `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Fixed-point rendering with `precision` decimals
///
/// Rounds on the exact binary value, and a value lying exactly halfway
/// rounds away from zero (`0.25` gives `"0.3"`). Magnitudes of `1e21` and
/// above fall back to [`js_number`], as the browser does.
pub fn to_fixed(value: f64, precision: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return js_number(value);
    }
    // -0 renders as 0
    let value = if value == 0.0 { 0.0 } else { value };

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let point = match exact.find('.') {
        Some(point) if precision < EXACT_FRACTION_DIGITS => point,
        _ => return format!("{:.*}", precision, value),
    };
    let (kept, rest) = exact.split_at(point + 1 + precision);

    if rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0') {
        round_up_last_digit(kept.trim_end_matches('.'))
    } else {
        format!("{:.*}", precision, value)
    }
}

/// Add one unit in the last place to a decimal string, away from zero
fn round_up_last_digit(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();

    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'9' => bytes[i] = b'0',
            b'0'..=b'8' => {
                bytes[i] += 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
            _ => {}
        }
    }

    // carried past the leading digit
    let sign = usize::from(bytes.first() == Some(&b'-'));
    bytes.insert(sign, b'1');
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Fixed-point rendering, or `sentinel` when there is no value
pub fn fixed_or(value: Option<f64>, precision: usize, sentinel: &str) -> String {
    match value {
        Some(v) => to_fixed(v, precision),
        None => sentinel.to_string(),
    }
}

/// Round half up, the way the browser's `Math.round` does
pub fn js_round(value: f64) -> f64 {
    let rounded = value.round();
    // `round` takes negative halves away from zero
    if value - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Shortest round-trip rendering of a number, without a trailing `.0`
///
/// Matches the browser for magnitudes in `[1e-6, 1e21)`, which covers
/// every percentage and count a table shows. Outside that range the
/// browser switches to exponent notation and this does not.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        // -0 renders as 0
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Percentage with one decimal plus the raw fraction: `"33.3% (1 / 3)"`
pub fn percent_fraction(ratio: &Ratio) -> String {
    match ratio.ratio {
        Some(r) => format!(
            "{}% ({} / {})",
            js_number(js_round(r * 1000.0) / 10.0),
            ratio.count,
            ratio.total
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// A count followed by its whole percentage: `"12 (50%)"`, or just `"3"`
/// when the ratio is undefined
pub fn count_with_percent(count: u64, ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{} ({}%)", count, js_number(js_round(r * 100.0))),
        None => count.to_string(),
    }
}

/// Join the formatted components of a composite field
pub fn join_composite<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(COMPOSITE_SEPARATOR)
}

/// Parse the leading decimal number of `text`, `NaN` when there is none
///
/// Formatted cells are re-parsed before comparison, so a value compares
/// at the precision it is displayed with.
pub fn parse_float(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// Parse the leading integer of `text`, `NaN` when there is none
pub fn parse_int(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return f64::NAN;
    }

    text[..end].parse().unwrap_or(f64::NAN)
}
