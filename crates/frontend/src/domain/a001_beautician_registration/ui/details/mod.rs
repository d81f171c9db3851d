//! Beautician course registration wizard
//!
//! State and commands live in the shared `RegistrationWizardVm`; this
//! module only lays out the three steps.

mod view;

pub use view::BeauticianRegistration;
