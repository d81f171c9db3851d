pub mod api;
pub mod config;
pub mod pages;
pub mod profile;
