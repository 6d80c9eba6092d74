use gloo_net::http::{Request, RequestBuilder, Response};
use tutor_shared::ErrorResponse;
use web_sys::RequestCredentials;

/// Makes `req` carry the session cookie.
pub fn credentialed_request(req: RequestBuilder) -> RequestBuilder {
    req.credentials(RequestCredentials::Include)
}

/// Creates a GET request with the session cookie
pub fn credentialed_get(url: &str) -> RequestBuilder {
    credentialed_request(Request::get(url))
}

/// Creates a POST request with the session cookie
pub fn credentialed_post(url: &str) -> RequestBuilder {
    credentialed_request(Request::post(url))
}

/// Best-effort human readable reason for a non-2xx response.
pub async fn error_message(response: &Response) -> String {
    match response.text().await {
        Ok(body) => describe_error_body(&body, &response.status_text()),
        Err(_) => response.status_text(),
    }
}

fn describe_error_body(body: &str, status_text: &str) -> String {
    if let Ok(error) = serde_json::from_str::<ErrorResponse>(body) {
        return error.error;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status_text.to_string()
    } else {
        trimmed.to_string()
    }
}
