use chrono::DateTime;

/// Formats an RFC 3339 timestamp for display, e.g. "07 Aug 2026".
///
/// The API is not the only writer of these fields, so malformed input is
/// expected: on parse failure the raw string is returned unchanged instead
/// of erroring out of a render.
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
