//! Utility functions and helpers

use rand::Rng;

/// Format a number with thousands separators
pub fn format_number<T: ToString>(n: T) -> String {
    let s = n.to_string();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };

    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    let grouped: String = result.chars().rev().collect();
    format!("{}{}", sign, grouped)
}

/// Format a float the way an en-US locale does: grouped integer part,
/// at most three fraction digits, trailing zeros dropped.
pub fn format_locale(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else if value > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    // Round half away from zero before formatting; `{:.3}` alone rounds ties to even.
    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let fixed = format!("{:.3}", rounded);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let negative = value < 0.0 && (int_part != "0" || !frac.is_empty());
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&format_number(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Escape text for insertion into HTML.
///
/// Only `&`, `<`, `"` and `'` are replaced; `>` passes through unchanged.
pub fn escape_html(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a random base-36 identifier with the given prefix
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R, prefix: &str, len: usize) -> String {
    let mut id = String::with_capacity(prefix.len() + len);
    id.push_str(prefix);
    for _ in 0..len {
        id.push(BASE36[rng.gen_range(0..BASE36.len())] as char);
    }
    id
}
