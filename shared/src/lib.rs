pub mod models {
    pub mod booking;
    pub mod profile;
}

pub mod dto {
    pub mod booking;
    pub mod common;
    pub mod profile;
}

pub mod error;

// Re-export commonly used items
pub use error::{FetchError, FetchErrorKind, Resource, Result, SaveError, SharedError};

// Re-export models
pub use models::{
    booking::{AttendanceStatus, BookingRecord},
    profile::{ProfileField, ProfileRecord},
};

// Re-export DTOs
pub use dto::{
    booking::TutorBookingDto,
    common::ErrorResponse,
    profile::{TutorProfileDto, UpdateTutorProfileRequest},
};
