pub mod components;
pub mod date_utils;
pub mod file_picker;
pub mod icons;
pub mod json_viewer;
pub mod registration_wizard;
