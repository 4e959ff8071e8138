//! Date string helpers shared by the engine and the renderer

use crate::models::MonthKey;

/// Convert a `YYYY-MM-DD` date into the `MM/DD/YYYY` display form.
///
/// Anything that does not split into exactly three dash-separated parts is
/// returned unchanged, so a malformed date never breaks a chart label.
pub fn format_date(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();

    if parts.len() != 3 {
        return date.to_string();
    }

    format!("{}/{}/{}", parts[1], parts[2], parts[0])
}

/// Month grouping key of a date string: its first 7 characters (`YYYY-MM`)
pub fn month_key(date: &str) -> MonthKey {
    MonthKey::new(date.chars().take(7).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-07"), "03/07/2024");
        assert_eq!(format_date("1999-12-31"), "12/31/1999");
    }

    #[test]
    fn test_format_date_malformed_is_unchanged() {
        assert_eq!(format_date("2024/03/07"), "2024/03/07");
        assert_eq!(format_date("2024-03"), "2024-03");
        assert_eq!(format_date("2024-03-07-01"), "2024-03-07-01");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_month_key() {
        assert_eq!(month_key("2024-03-07").as_str(), "2024-03");
        assert_eq!(month_key("2024").as_str(), "2024");
    }

    #[test]
    fn test_month_key_counts_characters() {
        assert_eq!(month_key("2024年03月07日").as_str(), "2024年03");
        assert_eq!(month_key("2024年04月01日").as_str(), "2024年04");
    }
}
