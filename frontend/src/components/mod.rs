pub mod common_toast;
pub mod profile;
