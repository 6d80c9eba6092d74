use async_trait::async_trait;
use tutor_shared::{
    FetchError, SaveError, TutorBookingDto, TutorProfileDto, UpdateTutorProfileRequest,
};

use crate::api::{bookings, profile};

/// Backend operations the tutor profile screen depends on.
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait TutorApi {
    async fn fetch_profile(&self) -> Result<TutorProfileDto, FetchError>;

    async fn fetch_bookings(&self) -> Result<Vec<TutorBookingDto>, FetchError>;

    async fn update_profile(&self, request: &UpdateTutorProfileRequest) -> Result<(), SaveError>;
}

/// [`TutorApi`] over the session-authenticated HTTP endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HttpTutorApi;

#[async_trait(?Send)]
impl TutorApi for HttpTutorApi {
    async fn fetch_profile(&self) -> Result<TutorProfileDto, FetchError> {
        profile::get_profile().await
    }

    async fn fetch_bookings(&self) -> Result<Vec<TutorBookingDto>, FetchError> {
        bookings::get_tutor_bookings().await
    }

    async fn update_profile(&self, request: &UpdateTutorProfileRequest) -> Result<(), SaveError> {
        profile::update_tutor_profile(request).await
    }
}
