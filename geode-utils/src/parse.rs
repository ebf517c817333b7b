/// Parse a duration token like `30s`, `10m`, `2h`, `1d`, or plain seconds.
pub fn parse_duration_seconds(raw: &str) -> Option<u64> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    let (digits, unit) = match value.char_indices().find(|(_, ch)| !ch.is_ascii_digit()) {
        Some((split, _)) => value.split_at(split),
        None => (value, ""),
    };

    let number = digits.parse::<u64>().ok().filter(|number| *number > 0)?;
    let multiplier = match unit {
        "" | "s" | "S" => 1,
        "m" | "M" => 60,
        "h" | "H" => 3_600,
        "d" | "D" => 86_400,
        _ => return None,
    };

    number.checked_mul(multiplier)
}

/// Parse a warning amount: a positive base-10 integer.
pub fn parse_positive_u32(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

#[cfg(test)]
mod tests {
    use super::{parse_duration_seconds, parse_positive_u32};

    #[test]
    fn parses_duration_tokens() {
        assert_eq!(parse_duration_seconds("30s"), Some(30));
        assert_eq!(parse_duration_seconds("10m"), Some(600));
        assert_eq!(parse_duration_seconds("2h"), Some(7_200));
        assert_eq!(parse_duration_seconds("1d"), Some(86_400));
        assert_eq!(parse_duration_seconds("1D"), Some(86_400));
        assert_eq!(parse_duration_seconds("90"), Some(90));
        assert_eq!(parse_duration_seconds(" 45m "), Some(2_700));
    }

    #[test]
    fn rejects_bad_durations() {
        assert_eq!(parse_duration_seconds(""), None);
        assert_eq!(parse_duration_seconds("0m"), None);
        assert_eq!(parse_duration_seconds("abc"), None);
        assert_eq!(parse_duration_seconds("5w"), None);
        assert_eq!(parse_duration_seconds("m5"), None);
    }

    #[test]
    fn parses_warning_amounts() {
        assert_eq!(parse_positive_u32("1"), Some(1));
        assert_eq!(parse_positive_u32(" 12 "), Some(12));
        assert_eq!(parse_positive_u32("0"), None);
        assert_eq!(parse_positive_u32("-3"), None);
        assert_eq!(parse_positive_u32("three"), None);
    }
}
