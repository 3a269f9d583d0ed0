use crate::constants::DISCOUNT_MULTIPLIER;

/// The output amount for a given input amount, as shown in the "to" field.
pub fn derive_amount(input: &str) -> String {
    derive_amount_with(input, DISCOUNT_MULTIPLIER)
}

pub fn derive_amount_with(input: &str, multiplier: f64) -> String {
    to_fixed(parse_float(input) * multiplier, 2)
}

/// Reads the longest numeric prefix of `input`, after leading whitespace.
///
/// Mirrors how browsers read number-ish text: `"12abc"` is 12, `"Infinity"` is
/// infinite, and anything without a leading number is NaN.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return match s.starts_with('-') {
            true => f64::NEG_INFINITY,
            false => f64::INFINITY,
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // an exponent only counts if it has digits
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Formats with a fixed number of decimals, the way the amount fields display.
///
/// Non-finite values print as `NaN` / `Infinity`, negative zero prints as zero,
/// and huge magnitudes switch to exponent form.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return match value.is_sign_negative() {
            true => "-Infinity".to_string(),
            false => "Infinity".to_string(),
        };
    }
    if value.abs() >= 1e21 {
        return format!("{value:e}").replace('e', "e+");
    }

    let value = if value == 0.0 { 0.0 } else { value };
    let sign = if value.is_sign_negative() { "-" } else { "" };

    // `{:.N}` breaks exact ties to even, the amount fields break them away from zero
    let magnitude = value.abs();
    let magnitude = match is_midpoint(magnitude, decimals) {
        true => f64::from_bits(magnitude.to_bits() + 1),
        false => magnitude,
    };

    format!("{sign}{magnitude:.decimals$}")
}

/// Whether `magnitude` sits exactly halfway between two `decimals`-place values.
fn is_midpoint(magnitude: f64, decimals: usize) -> bool {
    // Any double at or above the half step prints exactly within this many places.
    let precision = 54 + 5 * (decimals + 1);
    let exact = format!("{magnitude:.precision$}");
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };

    let rest = &fraction[decimals..];
    rest.starts_with('5') && rest[1..].bytes().all(|digit| digit == b'0')
}
