use log::{debug, warn};
use tutor_shared::{FetchError, ProfileField, ProfileRecord, SaveError, SharedError};
use validator::Validate;

use super::mode::EditModeController;
use crate::api::TutorApi;

/// Authoritative local copy of the tutor's profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileStore {
    record: ProfileRecord,
}

impl ProfileStore {
    pub fn record(&self) -> &ProfileRecord {
        &self.record
    }

    /// Fetches the profile and maps it to the local shape. The caller applies
    /// the result with [`ProfileStore::replace`].
    pub async fn load<A: TutorApi + ?Sized>(api: &A) -> Result<ProfileRecord, FetchError> {
        let dto = api.fetch_profile().await?;
        Ok(ProfileRecord::from(dto))
    }

    /// Replaces the whole record.
    pub fn replace(&self, record: ProfileRecord) -> Self {
        Self { record }
    }

    /// Replaces exactly one field. Rejected outside editing mode.
    pub fn set_field(
        &self,
        mode: &EditModeController,
        field: ProfileField,
        value: impl Into<String>,
    ) -> Result<Self, SharedError> {
        if !mode.accepts_edits() {
            return Err(SharedError::EditingLocked);
        }
        let record = self.record.with_field(field, value)?;
        Ok(Self { record })
    }

    /// Checks the outgoing body without blocking the save.
    pub fn validate(&self) -> Result<(), SharedError> {
        self.record.to_update_request().validate()?;
        Ok(())
    }

    /// Pushes the full current record to the server. Nothing is merged back
    /// on success and nothing is rolled back on failure.
    pub async fn commit<A: TutorApi + ?Sized>(&self, api: &A) -> Result<(), SaveError> {
        if let Err(err) = self.validate() {
            // The backend is the judge; the save still goes out
            warn!("Saving profile anyway: {}", err);
        }
        let request = self.record.to_update_request();
        debug!("Committing profile for {}", request.email);
        api.update_profile(&request).await
    }
}
