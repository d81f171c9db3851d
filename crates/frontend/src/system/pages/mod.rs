pub mod home;
pub mod tracking;
