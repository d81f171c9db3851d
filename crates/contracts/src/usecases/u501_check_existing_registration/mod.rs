pub mod checker;

pub use checker::{check_existing_registration, PrefillOutcome};

use crate::usecases::common::UseCaseMetadata;

pub struct CheckExistingRegistration;

impl UseCaseMetadata for CheckExistingRegistration {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "check_existing_registration"
    }

    fn display_name() -> &'static str {
        "Check existing registration"
    }

    fn description() -> &'static str {
        "Looks up the stored profile's CNIC before the form is shown and seeds the form from the profile"
    }
}
