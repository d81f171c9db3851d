pub mod coordinator;
pub mod outcome;

pub use coordinator::SubmissionCoordinator;
pub use outcome::{SubmitOutcome, FALLBACK_REJECTION_MESSAGE, SUBMIT_FAILED_MESSAGE};

use crate::usecases::common::UseCaseMetadata;

pub struct SubmitRegistration;

impl UseCaseMetadata for SubmitRegistration {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "submit_registration"
    }

    fn display_name() -> &'static str {
        "Submit registration"
    }
}
