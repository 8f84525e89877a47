//! Date formatting shared by the pages. Dates travel as ISO `YYYY-MM-DD`.

use chrono::{Datelike, NaiveDate, Utc};

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

pub fn format_opt_date(date: Option<NaiveDate>) -> String {
    date.map(|d| format_date(&d.to_string())).unwrap_or_default()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Value for `<input type="date">`
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parses `<input type="date">`; empty or malformed input yields `None`
pub fn from_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// `2025-10` -> `Oct 2025`
pub fn month_caption(key: &str) -> String {
    let parsed = key
        .split_once('-')
        .and_then(|(y, m)| Some((y.parse::<i32>().ok()?, m.parse::<u32>().ok()?)));
    match parsed {
        Some((year, month)) if (1..=12).contains(&month) => {
            format!("{} {}", &month_name(month)[..3], year)
        }
        _ => key.to_string(),
    }
}

pub fn current_month() -> (u32, i32) {
    let now = today();
    (now.month(), now.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_input_values() {
        let d = NaiveDate::from_ymd_opt(2025, 10, 7);
        assert_eq!(to_input_value(d), "2025-10-07");
        assert_eq!(from_input_value("2025-10-07"), d);
        assert_eq!(from_input_value(""), None);
        assert_eq!(to_input_value(None), "");
    }

    #[test]
    fn test_month_caption() {
        assert_eq!(month_caption("2025-10"), "Oct 2025");
        assert_eq!(month_caption("garbage"), "garbage");
        assert_eq!(month_name(13), "");
    }
}
