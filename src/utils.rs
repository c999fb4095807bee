//! Utility functions for common operations.

use std::time::Duration;

/// Format duration as MM:SS
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Format playback progress as MM:SS/MM:SS
pub fn format_progress(elapsed: Duration, total: Duration) -> String {
    format!("{}/{}", format_duration(elapsed), format_duration(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(Duration::from_secs(0)), "00:00");
    }

    #[test]
    fn test_format_duration_seconds_only() {
        assert_eq!(format_duration(Duration::from_secs(45)), "00:45");
    }

    #[test]
    fn test_format_duration_minutes_and_seconds() {
        assert_eq!(format_duration(Duration::from_secs(125)), "02:05");
    }

    #[test]
    fn test_format_duration_truncates_millis() {
        assert_eq!(format_duration(Duration::from_millis(2999)), "00:02");
    }

    #[test]
    fn test_format_progress() {
        assert_eq!(
            format_progress(Duration::from_secs(1), Duration::from_secs(3)),
            "00:01/00:03"
        );
    }
}
