/// Format seconds into a compact human-readable duration (e.g. 59s, 10m,
/// 1h 30m, 2d 4h). Sub-minute detail is dropped once hours are involved.
pub fn format_compact_duration(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 && days == 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 && days == 0 && hours == 0 {
        parts.push(format!("{}s", seconds));
    }

    if parts.is_empty() {
        return "0s".to_owned();
    }
    parts.join(" ")
}

/// Green/red state label used by the settings display.
pub fn enabled_label(enabled: bool) -> &'static str {
    if enabled { "🟢 Enabled" } else { "🔴 Disabled" }
}

#[cfg(test)]
mod tests {
    use super::{enabled_label, format_compact_duration};

    #[test]
    fn compact_duration_formatting() {
        assert_eq!(format_compact_duration(0), "0s");
        assert_eq!(format_compact_duration(59), "59s");
        assert_eq!(format_compact_duration(60), "1m");
        assert_eq!(format_compact_duration(61), "1m 1s");
        assert_eq!(format_compact_duration(3_600), "1h");
        assert_eq!(format_compact_duration(3_660), "1h 1m");
        assert_eq!(format_compact_duration(14_400), "4h");
        assert_eq!(format_compact_duration(86_400), "1d");
        assert_eq!(format_compact_duration(90_000), "1d 1h");
        assert_eq!(format_compact_duration(259_200), "3d");
        assert_eq!(format_compact_duration(604_800), "7d");
    }

    #[test]
    fn toggle_labels() {
        assert_eq!(enabled_label(true), "🟢 Enabled");
        assert_eq!(enabled_label(false), "🔴 Disabled");
    }
}
