// Re-export all API modules
pub mod bookings;
pub mod client;
pub mod profile;
pub mod utils;

pub use client::{HttpTutorApi, TutorApi};

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    let base_url = Config::api_base_url();
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        // Use absolute URL
        format!("{}{}", base_url, path)
    }
}
