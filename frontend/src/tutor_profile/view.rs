//! Read-only projection of [`TutorProfileState`] for rendering.

use tutor_shared::{BookingRecord, ProfileField};
use validator::Validate;

use super::state::TutorProfileState;

/// History table columns, as `(key, title)`.
pub const HISTORY_COLUMNS: [(&str, &str); 6] = [
    ("student_id", "Student ID"),
    ("subject", "Subject"),
    ("detail", "Detail"),
    ("date", "Date"),
    ("time", "Time"),
    ("status", "Status"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    pub field: ProfileField,
    pub label: &'static str,
    pub value: String,
    /// Render as an input bound to `SetField` rather than as text.
    pub as_input: bool,
    pub input_type: &'static str,
    pub invalid: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Negative,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRowView {
    pub key: String,
    pub student_id: String,
    pub subject: String,
    pub detail: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub status_tone: StatusTone,
}

impl HistoryRowView {
    fn project(index: usize, record: &BookingRecord) -> Self {
        Self {
            key: match &record.session_id {
                Some(id) => format!("{}-{}", index, id),
                None => index.to_string(),
            },
            student_id: record.student_id.clone(),
            subject: record.course_id.clone(),
            detail: record.feedback.clone(),
            date: record.date.clone(),
            time: format!("{} - {}", record.start_time, record.end_time),
            status: record.status.as_str().to_string(),
            status_tone: if record.status.is_present() {
                StatusTone::Positive
            } else {
                StatusTone::Negative
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    EditProfile,
    Save { busy: bool },
}

impl PrimaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::EditProfile => "Edit Profile",
            PrimaryAction::Save { busy: true } => "Saving...",
            PrimaryAction::Save { busy: false } => "Save",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorProfileView {
    pub fields: Vec<FieldView>,
    pub rows: Vec<HistoryRowView>,
    pub action: PrimaryAction,
    pub profile_loading: bool,
    pub history_loading: bool,
}

impl TutorProfileView {
    pub fn project(state: &TutorProfileState) -> Self {
        let editing = state.mode.is_editing();
        let record = state.profile.record();
        let email_invalid = editing && !record.email.is_empty() && email_is_invalid(state);

        let fields = ProfileField::ALL
            .into_iter()
            .map(|field| FieldView {
                field,
                label: field.label(),
                value: record.get(field).to_string(),
                as_input: editing && field.is_editable(),
                input_type: field.input_type(),
                invalid: field == ProfileField::Email && email_invalid,
            })
            .collect();

        let rows = state
            .history
            .bookings()
            .iter()
            .enumerate()
            .map(|(index, record)| HistoryRowView::project(index, record))
            .collect();

        let action = if editing {
            PrimaryAction::Save { busy: state.mode.is_saving() }
        } else {
            PrimaryAction::EditProfile
        };

        Self {
            fields,
            rows,
            action,
            profile_loading: !state.profile_loaded,
            history_loading: !state.history_loaded,
        }
    }
}

fn email_is_invalid(state: &TutorProfileState) -> bool {
    match state.profile.record().to_update_request().validate() {
        Ok(()) => false,
        Err(errors) => errors.field_errors().contains_key("email"),
    }
}
