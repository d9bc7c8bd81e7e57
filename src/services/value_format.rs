/// Parsing and display of the compact value notation participants type
/// into submissions ("1,234", "10k", "2.5m", "1b").
///
/// Both directions signal failure with `None`; callers turn that into a
/// user-facing validation message.

/// Hard ceiling applied at intake. A single submission above this is
/// assumed to be a typo.
pub const MAX_SUBMISSION_VALUE: i64 = 200_000_000;

/// Parses a human-entered value into an integer quantity. The input is
/// trimmed, lower-cased and stripped of thousands-separator commas, then
/// must fully match digits, an optional decimal fraction and an optional
/// single `k`/`m`/`b` suffix. Fractional input rounds to the nearest
/// integer ("2.5" parses to 3).
pub fn parse_value_input(input: &str) -> Option<i64> {
    let normalized = input.trim().to_lowercase().replace(',', "");
    if normalized.is_empty() {
        return None;
    }

    let (number_part, multiplier) = if let Some(rest) = normalized.strip_suffix('k') {
        (rest, 1_000.0)
    } else if let Some(rest) = normalized.strip_suffix('m') {
        (rest, 1_000_000.0)
    } else if let Some(rest) = normalized.strip_suffix('b') {
        (rest, 1_000_000_000.0)
    } else {
        (normalized.as_str(), 1.0)
    };

    if !is_plain_decimal(number_part) {
        return None;
    }

    let number: f64 = number_part.parse().ok()?;
    Some((number * multiplier).round() as i64)
}

/// Digits, optionally followed by a dot and more digits. Anything else
/// (signs, exponents, a second dot) is rejected.
fn is_plain_decimal(input: &str) -> bool {
    let mut parts = input.splitn(2, '.');
    let integer = parts.next().unwrap_or("");
    if integer.is_empty() || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match parts.next() {
        None => true,
        Some(fraction) => !fraction.is_empty() && fraction.bytes().all(|b| b.is_ascii_digit()),
    }
}

/// Parses a submitted value and applies the intake cap. Stored values
/// never exceed [`MAX_SUBMISSION_VALUE`].
pub fn normalize_submission_value(input: &str) -> Option<i64> {
    parse_value_input(input).map(|value| value.min(MAX_SUBMISSION_VALUE))
}

/// Renders a quantity back into the compact notation, two decimals at
/// most, trailing zero decimals stripped ("2m", "2.5m"). Lossy and for
/// display only; `None` for non-finite input.
pub fn format_value_output(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let formatted = if value >= 1_000_000_000.0 {
        format!("{}b", trim_decimals(format!("{:.2}", value / 1e9)))
    } else if value >= 1_000_000.0 {
        format!("{}m", trim_decimals(format!("{:.2}", value / 1e6)))
    } else if value >= 1_000.0 {
        format!("{}k", trim_decimals(format!("{:.2}", value / 1e3)))
    } else {
        format!("{value}")
    };
    Some(formatted)
}

fn trim_decimals(formatted: String) -> String {
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
