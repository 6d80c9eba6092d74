use serde::{Deserialize, Serialize};

use crate::dto::booking::TutorBookingDto;

/// Attendance outcome of a session. Only `Present` has meaning to this
/// screen; every other value is kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Other(String),
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Other(raw) => raw,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AttendanceStatus::Present)
    }
}

impl From<String> for AttendanceStatus {
    fn from(raw: String) -> Self {
        // Case-sensitive, as the backend emits it
        if raw == "Present" {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Other(raw)
        }
    }
}

/// One read-only history row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub session_id: Option<String>,
    pub student_id: String,
    pub course_id: String,
    pub feedback: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: AttendanceStatus,
}

impl From<TutorBookingDto> for BookingRecord {
    fn from(dto: TutorBookingDto) -> Self {
        Self {
            session_id: dto.session_id,
            student_id: dto.student_id,
            course_id: dto.course_id,
            feedback: dto.feedback,
            date: dto.date,
            start_time: dto.start_time,
            end_time: dto.end_time,
            status: AttendanceStatus::from(dto.status),
        }
    }
}
