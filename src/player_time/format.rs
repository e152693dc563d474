//! Display formatting for "last played N ago".

/// Format a duration in seconds as `MM:SS`, or `H:MM:SS` from one hour up.
///
/// Fractions are truncated. Negative durations (a timestamp in the future)
/// keep their sign; NaN and infinities render as `--:--`.
pub fn format_elapsed(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "--:--".to_string();
    }

    let sign = if seconds < 0.0 { "-" } else { "" };
    let total_secs = seconds.abs() as u64;
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}{}:{:02}:{:02}", sign, hours, mins, secs)
    } else {
        format!("{}{:02}:{:02}", sign, mins, secs)
    }
}
