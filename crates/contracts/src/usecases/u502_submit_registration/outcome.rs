use crate::domain::common::{ApiEnvelope, RegistrationRecord};
use crate::shared::validation::ValidationErrorMap;

/// Shown for network failures, timeouts and non-2xx responses
pub const SUBMIT_FAILED_MESSAGE: &str =
    "There was an error submitting your registration. Please try again.";

/// Shown for `{success:false}` with neither a message nor field errors
pub const FALLBACK_REJECTION_MESSAGE: &str = "Submission failed. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Stored by the backend; the profile snapshot has been written
    Accepted { record: RegistrationRecord },
    /// Local validation failed, nothing was sent
    Invalid(ValidationErrorMap),
    /// `{success:false}` from the backend
    Rejected {
        message: String,
        field_errors: ValidationErrorMap,
    },
    /// Network error, timeout or unexpected status
    Failed { message: String },
    /// A submission is already outstanding
    Busy,
}

impl SubmitOutcome {
    pub(crate) fn rejected(envelope: &ApiEnvelope) -> Self {
        let field_errors = envelope.field_errors();
        let message = envelope
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .or_else(|| field_errors.first_message().map(str::to_string))
            .unwrap_or_else(|| FALLBACK_REJECTION_MESSAGE.to_string());
        SubmitOutcome::Rejected {
            message,
            field_errors,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }

    /// Text for the notice shown after a non-accepted outcome
    pub fn notice(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Rejected { message, .. } | SubmitOutcome::Failed { message } => {
                Some(message.as_str())
            }
            SubmitOutcome::Invalid(_) => Some("Please fix the highlighted fields"),
            SubmitOutcome::Accepted { .. } | SubmitOutcome::Busy => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::common::api::fake::envelope;

    #[test]
    fn test_server_message_wins() {
        let outcome = SubmitOutcome::rejected(&envelope(
            r#"{"success":false,"message":"CNIC already registered","errors":{"cnic_no":["taken"]}}"#,
        ));
        let SubmitOutcome::Rejected { message, field_errors } = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(message, "CNIC already registered");
        assert_eq!(field_errors.get("cnic_no"), Some("taken"));
    }

    #[test]
    fn test_first_field_error_then_fallback() {
        let outcome = SubmitOutcome::rejected(&envelope(
            r#"{"success":false,"errors":{"cnic_no":["already registered"]}}"#,
        ));
        assert_eq!(outcome.notice(), Some("already registered"));

        let outcome = SubmitOutcome::rejected(&envelope(r#"{"success":false,"message":"  "}"#));
        assert_eq!(outcome.notice(), Some(FALLBACK_REJECTION_MESSAGE));
    }
}
