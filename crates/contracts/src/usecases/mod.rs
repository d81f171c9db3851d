pub mod common;
pub mod u501_check_existing_registration;
pub mod u502_submit_registration;
