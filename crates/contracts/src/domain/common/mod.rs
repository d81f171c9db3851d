//! Types shared by every registration form

pub mod options;
pub mod record;
pub mod registration;

pub use options::ChoiceOption;
pub use record::{ApiEnvelope, RegistrationRecord};
pub use registration::{build_payload, RegistrationForm, RegistrationKind};
