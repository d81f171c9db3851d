//! Digital skills registration wizard

mod view;

pub use view::DigitalSkillsRegistration;
