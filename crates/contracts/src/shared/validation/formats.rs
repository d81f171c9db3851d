//! Format rules shared by every registration form
//!
//! Each check returns the message to show when the value is malformed.
//! Emptiness is not a format error: "required" is handled by the step table.

use super::error_map::ValidationErrorMap;
use chrono::{Datelike, NaiveDate};

pub const CNIC_LENGTH: usize = 13;
pub const MOBILE_LENGTH: usize = 11;

/// Strip the dashes a CNIC is usually written with ("35202-1234567-2")
pub fn normalize_cnic(value: &str) -> String {
    value.chars().filter(|c| *c != '-').collect()
}

/// Keep digits only and cap at 13; used while the user types
pub fn sanitize_cnic_input(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(CNIC_LENGTH)
        .collect()
}

/// National ID: exactly 13 digits, last digit even.
///
/// Checked on the raw value; dashes and padding are malformed here and only
/// stripped when a stored profile CNIC is turned into an identity key.
pub fn check_cnic(value: &str) -> Result<(), &'static str> {
    if value.len() != CNIC_LENGTH || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err("CNIC must be exactly 13 digits");
    }
    let last = value.as_bytes()[CNIC_LENGTH - 1] - b'0';
    if last % 2 != 0 {
        return Err("Last digit must be even");
    }
    Ok(())
}

/// Mobile number: "03" followed by exactly 9 digits
pub fn check_mobile(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.len() == MOBILE_LENGTH
        && value.starts_with("03")
        && value.chars().all(|c| c.is_ascii_digit())
    {
        Ok(())
    } else {
        Err("Mobile must be in format 03001234567")
    }
}

/// `local@domain.tld` shape; an empty value is accepted because email is optional
pub fn check_email(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    const INVALID: &str = "Please enter a valid email";

    if value.chars().any(char::is_whitespace) {
        return Err(INVALID);
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(INVALID);
    };
    if local.is_empty() {
        return Err(INVALID);
    }
    // a dot with at least one character on each side
    let has_dotted_domain = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if has_dotted_domain {
        Ok(())
    } else {
        Err(INVALID)
    }
}

/// Completed years between `dob` and `today`.
///
/// Calendar-year subtraction, minus one while the birthday is still ahead.
/// `None` for a birth date in the future.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> Option<u32> {
    if dob > today {
        return None;
    }
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}

pub fn check_age_range(age: u32, min: u32, max: u32) -> Result<(), String> {
    if age < min || age > max {
        Err(format!("Age must be between {} and {} years", min, max))
    } else {
        Ok(())
    }
}

/// Run `check` on a non-blank value and record its message under `field`
pub fn check_field<C>(errors: &mut ValidationErrorMap, field: &str, value: &str, check: C)
where
    C: Fn(&str) -> Result<(), &'static str>,
{
    if value.trim().is_empty() {
        return;
    }
    if let Err(message) = check(value) {
        errors.insert_if_absent(field, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cnic_accepts_even_last_digit() {
        assert!(check_cnic("3520212345672").is_ok());
        assert!(check_cnic("3520212345670").is_ok());
    }

    #[test]
    fn test_cnic_rejects_odd_last_digit() {
        assert_eq!(check_cnic("3520212345671"), Err("Last digit must be even"));
    }

    #[test]
    fn test_cnic_rejects_wrong_length_or_letters() {
        assert!(check_cnic("352021234567").is_err());
        assert!(check_cnic("35202123456780").is_err());
        assert!(check_cnic("35202123456a2").is_err());
        assert!(check_cnic("").is_err());
    }

    #[test]
    fn test_cnic_rejects_dashes_and_padding() {
        assert_eq!(check_cnic("35202-1234567-2"), Err("CNIC must be exactly 13 digits"));
        assert_eq!(check_cnic(" 3520212345672 "), Err("CNIC must be exactly 13 digits"));
        assert_eq!(check_cnic("3520212345672\n"), Err("CNIC must be exactly 13 digits"));
    }

    #[test]
    fn test_sanitize_cnic_input() {
        assert_eq!(sanitize_cnic_input("35202-1234567-28"), "3520212345672");
        assert_eq!(sanitize_cnic_input("abc12"), "12");
    }

    #[test]
    fn test_mobile_pattern() {
        assert!(check_mobile("03001234567").is_ok());
        assert!(check_mobile("0300123456").is_err());
        assert!(check_mobile("030012345678").is_err());
        assert!(check_mobile("04001234567").is_err());
        assert!(check_mobile("0300-123456").is_err());
        assert!(check_mobile("+923001234567").is_err());
    }

    #[test]
    fn test_email_optional_and_shape() {
        assert!(check_email("").is_ok());
        assert!(check_email("   ").is_ok());
        assert!(check_email("amna@example.pk").is_ok());
        assert!(check_email("amna@example").is_err());
        assert!(check_email("amna@.pk").is_err());
        assert!(check_email("@example.pk").is_err());
        assert!(check_email("am na@example.pk").is_err());
        assert!(check_email("a@b@c.pk").is_err());
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let dob = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        let before = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let on = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(age_on(dob, before), Some(23));
        assert_eq!(age_on(dob, on), Some(24));
    }

    #[test]
    fn test_age_future_dob() {
        let dob = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(age_on(dob, today), None);
    }

    #[test]
    fn test_check_field_skips_blank_and_keeps_required() {
        let mut errors = ValidationErrorMap::new();
        check_field(&mut errors, "cell_no", "", check_mobile);
        assert!(errors.is_empty());

        errors.insert("cnic_no", "CNIC is required");
        check_field(&mut errors, "cnic_no", "123", check_cnic);
        assert_eq!(errors.get("cnic_no"), Some("CNIC is required"));

        check_field(&mut errors, "cell_no", "0300", check_mobile);
        assert_eq!(errors.get("cell_no"), Some("Mobile must be in format 03001234567"));
    }

    #[test]
    fn test_age_range() {
        assert!(check_age_range(16, 16, 60).is_ok());
        assert!(check_age_range(60, 16, 60).is_ok());
        assert!(check_age_range(15, 16, 60).is_err());
        assert!(check_age_range(61, 16, 60).is_err());
    }
}
