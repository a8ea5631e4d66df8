//! Display clock formatting for the dashboard header.

use chrono::{DateTime, Local};

/// 12-hour clock string, e.g. "09:41 AM".
pub fn format_time(now: &DateTime<Local>) -> String {
    now.format("%I:%M %p").to_string()
}

/// Long date string, e.g. "August 30, 2026".
pub fn format_date(now: &DateTime<Local>) -> String {
    now.format("%B %-d, %Y").to_string()
}
