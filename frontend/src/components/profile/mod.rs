pub mod booking_history;
pub mod profile_fields;
