//! Common display utilities and helpers

use chrono::DateTime;

/// Truncate string to max characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a console epoch-seconds timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Anything unparseable is returned as-is.
pub fn format_epoch_seconds(timestamp: &str) -> String {
    timestamp
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Check or cross mark for a boolean column
pub fn yes_no(value: bool) -> String {
    if value { "✓" } else { "✗" }.to_string()
}
