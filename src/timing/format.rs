//! Display formatting for elapsed time and lap start times.

use std::time::Duration;

use chrono::{DateTime, Local};

/// Format a duration as "HH:MM:SS", flooring to whole seconds.
///
/// The hour field grows past two digits instead of wrapping.
pub fn format_hms(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Format a wall-clock reading as a local time of day.
pub fn format_time_of_day(at: &DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}
