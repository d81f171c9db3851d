pub mod a001_beautician_registration;
pub mod a002_digital_skills_registration;
pub mod a003_hospitality_registration;
pub mod common;
