//! Common types and traits for all UseCases

pub mod api;
pub mod usecase_metadata;

// Re-exports
pub use api::{ApiError, RegistrationApi};
pub use usecase_metadata::UseCaseMetadata;
