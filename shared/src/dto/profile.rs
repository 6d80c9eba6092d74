use serde::{Deserialize, Serialize};
use validator::Validate;

use super::common::null_as_empty;

/// Profile payload returned by `GET /profile/get`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TutorProfileDto {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    /// Free-text biography; older accounts never set one
    #[serde(default)]
    pub biography: Option<String>,
    /// Course identifiers the tutor teaches
    #[serde(default)]
    pub courses: Option<Vec<String>>,
}

/// Body for `POST /profile/update/tutor`.
///
/// The write-side field names differ from the read side (`name` is sent back
/// as `fullname`, `biography` as `profile`, `courses` as a single `subject`
/// string).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct UpdateTutorProfileRequest {
    pub fullname: String,
    pub profile: String,
    pub subject: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}
