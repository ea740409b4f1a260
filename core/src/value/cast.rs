//! Loose string <-> number coercions.
//!
//! Recorded values and typed-in filter values are plain text as often as they are numbers, so both
//! directions have to be total: every string has a numeric reading (possibly NaN) and every number has a
//! canonical string form.

/// Read a number out of text the permissive way a form field is read.
///
/// Surrounding whitespace is ignored, blank text is zero, `Infinity` and the `0x` / `0o` / `0b` prefixes
/// are understood, and anything else that is not a plain decimal literal is NaN.
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(n) = parse_radix_literal(s) {
        return n;
    }

    // f64::from_str also accepts "inf" and "NaN" spellings that are not numbers here
    let decimal = s.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal || !s.chars().any(|c| c.is_ascii_digit()) {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    Some(u64::from_str_radix(digits, radix).map(|n| n as f64).unwrap_or(f64::NAN))
}

/// Canonical string form of a number: integral values carry no fraction, `-0` prints as `0`, and the
/// infinities print as `Infinity` / `-Infinity`. Magnitudes from `1e21` up and below `1e-6` use exponent
/// notation with an explicit sign, as in `1e+21` or `1.5e-7`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exponential = format!("{:e}", n);
        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
            _ => exponential,
        }
    } else {
        n.to_string()
    }
}
