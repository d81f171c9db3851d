//! Field Validator: step tables, format rules and the error map

pub mod error_map;
pub mod formats;
pub mod schema;

pub use error_map::ValidationErrorMap;
pub use schema::{
    first_step_showing, first_step_with_errors, validate_all, validate_step, ConditionalRule,
    FieldValue, FormField, FormSchema, StepDefinition,
};
