use std::time::Duration;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// Render a usage measured in tenths of a megabyte, e.g. `2000` → `"200.0 MB"`.
pub fn format_usage(tenths: i64) -> String {
    format!("{:.1} MB", tenths as f64 / 10.0)
}

/// How far back the oldest point of a full history reaches, e.g.
/// `"2 mins ago"` for 60 samples at 2 s.
pub fn history_span_label(capacity: usize, interval: Duration) -> String {
    let secs = (interval.as_millis() * capacity as u128 / 1000) as u64;
    if secs < 60 {
        format!("{secs} secs ago")
    } else if secs < 3600 {
        let mins = secs / 60;
        if mins == 1 {
            "1 min ago".to_string()
        } else {
            format!("{mins} mins ago")
        }
    } else {
        let hours = secs / 3600;
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{hours} hours ago")
        }
    }
}
