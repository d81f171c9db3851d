//! Multi-step registration form controller shared by the three programmes

pub mod components;
pub mod view_model;

pub use components::{ErrorBanner, StepIndicator, WizardNav, WizardShell};
pub use view_model::{choice_options, AttachmentBinding, FieldBinding, Phase, RegistrationWizardVm};
