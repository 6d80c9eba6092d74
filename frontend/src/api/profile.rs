use gloo_net::http::Response;
use log::debug;
use tutor_shared::{FetchError, Resource, SaveError, TutorProfileDto, UpdateTutorProfileRequest};

use crate::api::api_url;
use crate::api::utils::{credentialed_get, credentialed_post, error_message};

pub async fn get_profile() -> Result<TutorProfileDto, FetchError> {
    debug!("Fetching tutor profile");

    let response = credentialed_get(&api_url("/profile/get"))
        .send()
        .await
        .map_err(|e| FetchError::network(Resource::Profile, e.to_string()))?;

    if !response.ok() {
        return Err(status_error(Resource::Profile, &response).await);
    }

    let profile = response
        .json::<TutorProfileDto>()
        .await
        .map_err(|e| FetchError::decode(Resource::Profile, e.to_string()))?;

    debug!("Fetched profile for {}", profile.email);
    Ok(profile)
}

/// The response body is only logged; local state stays authoritative.
pub async fn update_tutor_profile(request: &UpdateTutorProfileRequest) -> Result<(), SaveError> {
    debug!("Updating tutor profile for {}", request.email);

    let response = credentialed_post(&api_url("/profile/update/tutor"))
        .json(request)
        .map_err(|e| SaveError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| SaveError::Network(e.to_string()))?;

    if !response.ok() {
        let message = error_message(&response).await;
        return Err(SaveError::Status(response.status(), message));
    }

    match response.text().await {
        Ok(body) => debug!("Profile update accepted: {}", body),
        Err(e) => debug!("Profile update accepted, body unreadable: {}", e),
    }
    Ok(())
}

pub(crate) async fn status_error(resource: Resource, response: &Response) -> FetchError {
    let message = error_message(response).await;
    FetchError::status(resource, response.status(), message)
}
