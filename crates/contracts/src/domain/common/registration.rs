use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::options::{ChoiceOption, MaritalStatus};
use crate::shared::attachment::{AttachmentSlots, FileReference};
use crate::shared::multipart::MultipartPayload;
use crate::system::profile::UserProfile;

/// Multipart field carrying the client-generated idempotency token
pub const CLIENT_REQUEST_ID_FIELD: &str = "client_request_id";
pub const REGISTRATION_TYPE_FIELD: &str = "registration_type";

/// The registration programmes offered by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationKind {
    Beautician,
    DigitalSkills,
    Hospitality,
}

impl RegistrationKind {
    pub fn all() -> &'static [RegistrationKind] {
        &[
            RegistrationKind::Beautician,
            RegistrationKind::DigitalSkills,
            RegistrationKind::Hospitality,
        ]
    }

    /// Index in the same style as the aggregate folders ("a001")
    pub fn index(&self) -> &'static str {
        match self {
            RegistrationKind::Beautician => "a001",
            RegistrationKind::DigitalSkills => "a002",
            RegistrationKind::Hospitality => "a003",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RegistrationKind::Beautician => "Beautician Course Registration",
            RegistrationKind::DigitalSkills => "Digital Skills Registration",
            RegistrationKind::Hospitality => "Hospitality Course Registration",
        }
    }

    /// Value of the `registration_type` multipart field
    pub fn registration_type(&self) -> &'static str {
        match self {
            RegistrationKind::Beautician => "beautician_course",
            RegistrationKind::DigitalSkills => "digital_skills_course",
            RegistrationKind::Hospitality => "hospitality_course",
        }
    }

    pub fn submit_path(&self) -> &'static str {
        match self {
            RegistrationKind::Beautician => "/api/beautician-registrations",
            RegistrationKind::DigitalSkills => "/api/digital-skills-registrations",
            RegistrationKind::Hospitality => "/api/hospitality/register",
        }
    }

    /// Existence check / tracking lookup; `identity_key` must already be
    /// URL-safe
    pub fn check_path(&self, identity_key: &str) -> String {
        let prefix = match self {
            RegistrationKind::Beautician => "/api/check-registration/",
            RegistrationKind::DigitalSkills => "/api/check-registration-digital/",
            RegistrationKind::Hospitality => "/api/check-registration-hospitality/",
        };
        format!("{}{}", prefix, identity_key)
    }
}

/// A multi-step registration form
///
/// The step tables and slots come from `FormSchema`/`AttachmentSlots`;
/// this adds what the use cases need around them.
pub trait RegistrationForm: AttachmentSlots + Clone + Default + Send + Sync + 'static {
    const KIND: RegistrationKind;

    /// CNIC without dashes
    fn identity_key(&self) -> String;

    /// Seed blank fields from the stored profile. Never overwrites a value
    /// already present in the form.
    fn apply_profile(&mut self, profile: &UserProfile, today: NaiveDate);

    fn profile_snapshot(&self, updated_at: DateTime<Utc>) -> UserProfile;

    /// Sets the date of birth and the derived age
    fn set_date_of_birth(&mut self, dob: Option<NaiveDate>, today: NaiveDate);

    /// Every non-file field, blank ones included
    fn text_fields(&self) -> Vec<(&'static str, String)>;

    /// Every stored attachment with its multipart key
    fn file_parts(&self) -> Vec<(&'static str, FileReference)>;
}

/// Serialise a form for submission
pub fn build_payload<F: RegistrationForm>(form: &F, client_request_id: &str) -> MultipartPayload {
    let mut payload = MultipartPayload::new();
    for (name, value) in form.text_fields() {
        payload.text(name, value);
    }
    for (name, file) in form.file_parts() {
        payload.file(name, file);
    }
    payload.text(REGISTRATION_TYPE_FIELD, F::KIND.registration_type());
    payload.text(CLIENT_REQUEST_ID_FIELD, client_request_id);
    payload
}

/// Copy `value` into `target` only when the form field is still blank
pub(crate) fn seed(target: &mut String, value: &str) {
    if target.trim().is_empty() && !value.trim().is_empty() {
        *target = value.trim().to_string();
    }
}

pub(crate) fn date_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

pub(crate) fn number_text(value: Option<u32>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// Marital status is the one selector every form shares verbatim
pub(crate) fn marital_text(status: Option<MaritalStatus>) -> String {
    status.map(|s| s.value().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_keeps_existing_value() {
        let mut name = "Typed by user".to_string();
        seed(&mut name, "From profile");
        assert_eq!(name, "Typed by user");

        let mut empty = String::new();
        seed(&mut empty, " From profile ");
        assert_eq!(empty, "From profile");
    }

    #[test]
    fn test_parse_date_accepts_iso_datetime() {
        let expected = NaiveDate::from_ymd_opt(1999, 3, 5);
        assert_eq!(parse_date("1999-03-05"), expected);
        assert_eq!(parse_date("1999-03-05T00:00:00.000Z"), expected);
        assert_eq!(parse_date("05/03/1999"), None);
    }

    #[test]
    fn test_check_paths() {
        assert_eq!(
            RegistrationKind::Hospitality.check_path("3520212345672"),
            "/api/check-registration-hospitality/3520212345672"
        );
        assert_eq!(
            RegistrationKind::Beautician.check_path("1"),
            "/api/check-registration/1"
        );
    }
}
