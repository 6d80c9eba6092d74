use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dto::profile::{TutorProfileDto, UpdateTutorProfileRequest};
use crate::error::{Result, SharedError};

/// Local copy of the tutor's editable profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub full_name: String,
    /// Displayed as "Profile"
    pub biography: String,
    /// Course identifiers joined by single spaces. Regenerated on every
    /// fetch; there is no structured way to edit it.
    pub subject_list: String,
    pub email: String,
}

/// One key of [`ProfileRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileField {
    FullName,
    Biography,
    SubjectList,
    Email,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::FullName,
        ProfileField::Biography,
        ProfileField::SubjectList,
        ProfileField::Email,
    ];

    /// Input name, identical to the write-side wire name.
    pub fn input_name(self) -> &'static str {
        match self {
            ProfileField::FullName => "fullname",
            ProfileField::Biography => "profile",
            ProfileField::SubjectList => "subject",
            ProfileField::Email => "email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::FullName => "Name",
            ProfileField::Biography => "Profile",
            ProfileField::SubjectList => "Subject",
            ProfileField::Email => "Email",
        }
    }

    /// Subjects are server-managed.
    pub fn is_editable(self) -> bool {
        !matches!(self, ProfileField::SubjectList)
    }

    /// HTML input type used while editing.
    pub fn input_type(self) -> &'static str {
        match self {
            ProfileField::Email => "email",
            _ => "text",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_name())
    }
}

impl FromStr for ProfileField {
    type Err = SharedError;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        ProfileField::ALL
            .into_iter()
            .find(|field| field.input_name() == name)
            .ok_or_else(|| SharedError::UnknownField(name.to_string()))
    }
}

impl ProfileRecord {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::Biography => &self.biography,
            ProfileField::SubjectList => &self.subject_list,
            ProfileField::Email => &self.email,
        }
    }

    /// Returns a copy of the record with exactly one field replaced.
    pub fn with_field(&self, field: ProfileField, value: impl Into<String>) -> Result<Self> {
        let mut next = self.clone();
        let value = value.into();
        match field {
            ProfileField::FullName => next.full_name = value,
            ProfileField::Biography => next.biography = value,
            ProfileField::Email => next.email = value,
            ProfileField::SubjectList => {
                return Err(SharedError::ReadOnlyField(field.to_string()));
            }
        }
        Ok(next)
    }

    /// Maps the local shape onto the update endpoint's body.
    pub fn to_update_request(&self) -> UpdateTutorProfileRequest {
        UpdateTutorProfileRequest::from(self)
    }
}

impl From<TutorProfileDto> for ProfileRecord {
    fn from(dto: TutorProfileDto) -> Self {
        Self {
            full_name: dto.name,
            biography: dto.biography.unwrap_or_default(),
            subject_list: dto.courses.unwrap_or_default().join(" "),
            email: dto.email,
        }
    }
}

impl From<&ProfileRecord> for UpdateTutorProfileRequest {
    fn from(record: &ProfileRecord) -> Self {
        Self {
            fullname: record.full_name.clone(),
            profile: record.biography.clone(),
            subject: record.subject_list.clone(),
            email: record.email.clone(),
        }
    }
}
