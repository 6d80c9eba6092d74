use log::debug;
use tutor_shared::{FetchError, Resource, TutorBookingDto};

use crate::api::api_url;
use crate::api::profile::status_error;
use crate::api::utils::credentialed_get;

/// Full booking history in one response; the backend does not paginate.
pub async fn get_tutor_bookings() -> Result<Vec<TutorBookingDto>, FetchError> {
    debug!("Fetching tutor booking history");

    let response = credentialed_get(&api_url("/booking/getTutorBooking"))
        .send()
        .await
        .map_err(|e| FetchError::network(Resource::Bookings, e.to_string()))?;

    if !response.ok() {
        return Err(status_error(Resource::Bookings, &response).await);
    }

    let bookings = response
        .json::<Vec<TutorBookingDto>>()
        .await
        .map_err(|e| FetchError::decode(Resource::Bookings, e.to_string()))?;

    debug!("Fetched {} bookings", bookings.len());
    Ok(bookings)
}
