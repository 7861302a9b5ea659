//! Number rendering for graph labels.
//!
//! Labels are compared textually between graphs, so every number is written
//! with a fixed, reproducible algorithm:
//!
//! - [`format_float`] gives the shortest decimal string that round-trips to
//!   the same `f64`, in fixed notation for decimal exponents `-4 ..= 15` and
//!   scientific notation (`1e-05`, `1.5e+16`) outside that window.  Fixed
//!   notation always keeps a fractional part (`2.0`).
//! - [`round_scale`] truncates a link delay to its first significant digit
//!   (never fewer than one decimal place).
//! - [`round_digits`] rounds half-to-even at a fixed number of decimals.

/// Truncate `x` to one significant digit, keeping at least one decimal place.
///
/// ```text
/// scale   = -floor(log10(|x|)), clamped to >= 1
/// rounded = sign(x) * floor(|x| * 10^scale) / 10^scale
/// ```
///
/// `0.0` maps to `0.0`.
///
/// ```
/// use bpd_core::round_scale;
///
/// assert_eq!(round_scale(0.0034567), 0.003);
/// assert_eq!(round_scale(1.5), 1.5);
/// ```
pub fn round_scale(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let magnitude = x.abs();
    let scale = (-magnitude.log10().floor()) as i32;
    let scale = if scale <= 0 { 1 } else { scale };
    let floored = (magnitude * pow10(scale)).floor();
    let rounded = if scale <= 22 {
        floored / pow10(scale)
    } else {
        // Beyond 1e22 the divisor is inexact; parsing the decimal quotient
        // gives the correctly rounded result instead.
        format!("{floored:.0}e-{scale}").parse().unwrap_or(0.0)
    };
    sign * rounded
}

/// Round `x` half-to-even at `digits` decimal places of its exact binary
/// value, returning the nearest `f64` to the decimal result.
pub fn round_digits(x: f64, digits: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{x:.digits$}").parse().unwrap_or(x)
}

/// Shortest round-trip rendering of `x` (see the module docs for notation).
///
/// ```
/// use bpd_core::format_float;
///
/// assert_eq!(format_float(2.5), "2.5");
/// assert_eq!(format_float(2.0), "2.0");
/// assert_eq!(format_float(0.00001), "1e-05");
/// ```
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_owned();
    }
    if x.is_infinite() {
        return if x < 0.0 { "-inf" } else { "inf" }.to_owned();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_owned();
    }

    // `{:e}` only fixes how many digits are needed to round-trip; on an exact
    // tie it may pick the upper candidate.  Exact mode at that precision
    // rounds half-to-even, e.g. "2.1110000610351562e0".
    let shortest = format!("{x:e}");
    let sig_digits = shortest
        .split_once('e')
        .map_or(shortest.as_str(), |(mantissa, _)| mantissa)
        .chars()
        .filter(char::is_ascii_digit)
        .count();
    let sci = format!("{x:.prec$e}", prec = sig_digits.saturating_sub(1));
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if (-4..16).contains(&exp) {
        if exp >= 0 {
            let int_len = exp as usize + 1;
            if digits.len() > int_len {
                format!("{}.{}", &digits[..int_len], &digits[int_len..])
            } else {
                format!("{digits}{}.0", "0".repeat(int_len - digits.len()))
            }
        } else {
            format!("0.{}{digits}", "0".repeat((-exp - 1) as usize))
        }
    } else {
        let (lead, rest) = digits.split_at(1);
        let frac = if rest.is_empty() { String::new() } else { format!(".{rest}") };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{lead}{frac}e{exp_sign}{:02}", exp.unsigned_abs())
    };

    format!("{sign}{body}")
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `10^n` as the nearest `f64`.  Exact for `n <= 22`, the range
/// [`round_scale`] divides by.
fn pow10(n: i32) -> f64 {
    if n <= 22 {
        10f64.powi(n)
    } else {
        format!("1e{n}").parse().unwrap_or(f64::INFINITY)
    }
}
