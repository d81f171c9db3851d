pub mod form;

pub use form::{DigitalSkillsField, DigitalSkillsForm, MobileNetwork};
