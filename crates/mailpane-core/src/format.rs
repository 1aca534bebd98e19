//! Display formatting helpers shared by the presentation layer.

/// Unit table for byte humanization.
const BYTE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Formats a byte count as a human-readable size.
///
/// Zero renders as `"0 Bytes"`. Otherwise the unit is
/// `floor(log(bytes) / log(1024))` clamped into the unit table, and the
/// value is rounded to two decimal places with trailing zeros trimmed:
/// `1024` renders as `"1 KB"`, `2_500_000` as `"2.38 MB"`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(BYTE_UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", BYTE_UNITS[exponent])
}

/// Truncates a string to at most `max` characters, on a character boundary.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

/// Derives up to two uppercase initials from a display name.
///
/// "James Hong" becomes "JH"; a single-word name yields one initial.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
