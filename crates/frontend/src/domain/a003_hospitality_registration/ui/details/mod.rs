//! Hospitality (TDCP-ITHM) registration wizard

mod view;

pub use view::HospitalityRegistration;
