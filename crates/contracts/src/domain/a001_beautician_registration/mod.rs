pub mod form;

pub use form::{BeauticianField, BeauticianForm, SessionTiming, TrainingPlace};
