/// Utilities for dates in the registration forms
///
/// `<input type="date">` speaks `YYYY-MM-DD`; records from the backend are
/// shown as `DD/MM/YYYY`.
use chrono::NaiveDate;

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Value for an `<input type="date">`
pub fn input_date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parse the value of an `<input type="date">`; blank clears the date
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_input_date() {
        let date = NaiveDate::from_ymd_opt(2001, 2, 3);
        assert_eq!(input_date_value(date), "2001-02-03");
        assert_eq!(parse_input_date("2001-02-03"), date);
        assert_eq!(parse_input_date(""), None);
        assert_eq!(input_date_value(None), "");
    }
}
