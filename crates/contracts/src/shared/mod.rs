pub mod attachment;
pub mod config;
pub mod multipart;
pub mod validation;
pub mod wizard;
