use serde::{Deserialize, Serialize};

use super::common::{null_as_empty, optional_string_or_number, string_or_number};

/// One row of `GET /booking/getTutorBooking`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TutorBookingDto {
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub student_id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub course_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub feedback: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub end_time: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
}
