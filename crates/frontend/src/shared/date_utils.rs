/// Utilities for date and time formatting
///
/// The backend sends ISO-8601 strings; these helpers render them for
/// display without round-tripping through a datetime type.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn month_name(month: &str) -> Option<&'static str> {
    let idx: usize = month.parse().ok()?;
    MONTHS.get(idx.checked_sub(1)?).copied()
}

/// Format an ISO date string as "Mar 15, 2024".
/// Accepts either a bare date or a full datetime.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            if let Some(name) = month_name(month) {
                return format!("{} {}, {}", name, day.trim_start_matches('0'), year);
            }
        }
    }
    date_str.to_string()
}

/// Format an ISO datetime string as "Mar 15, 2024 14:02".
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        let hhmm: String = time_part.chars().take(5).collect();
        if date != date_part && hhmm.len() == 5 {
            return format!("{} {}", date, hhmm);
        }
    }
    datetime_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_date("2024-03-05T14:02:26.123456"), "Mar 5, 2024");
        assert_eq!(format_date("2024-12-31T23:59:59Z"), "Dec 31, 2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123456"),
            "Mar 15, 2024 14:02"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "Dec 31, 2024 23:59");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("2024-13-01"), "2024-13-01");
    }
}
