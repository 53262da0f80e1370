//! Phone normalizer
//!
//! Best-effort rewrite to a single assumed country code. No general
//! international parsing.

/// Normalize a phone value on focus loss
///
/// Keeps digits and a `+` in leading position. A leading trunk `0` becomes
/// `country_code`; a value already starting with `+` is kept; anything else
/// gets `country_code` prepended. Returns `None` when no digits or `+` are
/// left, in which case the field should stay as typed.
pub fn normalize(raw: &str, country_code: &str) -> Option<String> {
    let mut stripped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() || (c == '+' && stripped.is_empty()) {
            stripped.push(c);
        }
    }

    if stripped.is_empty() {
        return None;
    }

    let normalized = if let Some(rest) = stripped.strip_prefix('0') {
        format!("{}{}", country_code, rest)
    } else if stripped.starts_with('+') {
        stripped
    } else {
        format!("{}{}", country_code, stripped)
    };

    Some(normalized)
}
