pub mod form;
pub mod options;

pub use form::{HospitalityField, HospitalityForm};
pub use options::{Campus, ClassTiming, Course, SessionDays};
