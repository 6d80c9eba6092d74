use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// Server resource a fetch was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resource {
    Profile,
    Bookings,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Profile => write!(f, "profile"),
            Resource::Bookings => write!(f, "booking history"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FetchErrorKind {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {0}: {1}")]
    Status(u16, String),

    #[error("malformed response: {0}")]
    Decode(String),
}

/// Failure retrieving profile or booking data.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Failed to fetch {resource}: {kind}")]
pub struct FetchError {
    pub resource: Resource,
    pub kind: FetchErrorKind,
}

impl FetchError {
    pub fn network(resource: Resource, message: impl Into<String>) -> Self {
        Self { resource, kind: FetchErrorKind::Network(message.into()) }
    }

    pub fn status(resource: Resource, status: u16, message: impl Into<String>) -> Self {
        Self { resource, kind: FetchErrorKind::Status(status, message.into()) }
    }

    pub fn decode(resource: Resource, message: impl Into<String>) -> Self {
        Self { resource, kind: FetchErrorKind::Decode(message.into()) }
    }
}

/// Failure persisting profile updates.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SaveError {
    #[error("Failed to serialize profile update: {0}")]
    Serialize(String),

    #[error("Failed to send profile update: {0}")]
    Network(String),

    #[error("Profile update rejected (HTTP {0}): {1}")]
    Status(u16, String),
}

/// Local failures that never touch the network.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Profile fields can only be changed in editing mode")]
    EditingLocked,

    #[error("Field is read-only: {0}")]
    ReadOnlyField(String),

    #[error("Unknown profile field: {0}")]
    UnknownField(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
