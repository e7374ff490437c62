//! HTTP helpers for the auth API: one configured base address, JSON bodies
//! and a consistent timeout and error-mapping policy. Non-2xx responses
//! surface the server's optional `message` field so forms can show it
//! verbatim; anything unreadable degrades to a sanitized fallback.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::to_string;
use web_sys::AbortController;

/// Fixed request deadline in milliseconds. The deadline belongs to the
/// transport; callers never pick their own.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum error-body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Error bodies carry an optional human-readable `message`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Posts JSON and expects a 2xx response with no meaningful body.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let response = send_post(path, body).await?;

    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

/// Posts JSON and decodes a 2xx JSON response body.
pub async fn post_json_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let response = send_post(path, body).await?;

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(error_from_response(response).await)
    }
}

async fn send_post<B: Serialize>(path: &str, body: &B) -> Result<Response, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

    send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Sends a request with an abort timeout so a silent server cannot leave the
/// UI stuck in a pending state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;

    request.send().await.map_err(map_request_error)
}

/// Maps transport failures into user-facing variants, detecting aborts from
/// the timeout above.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Turns a non-2xx response into `AppError::Http`, preferring the body's
/// `message` field over the raw body.
async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = extract_message(&body).unwrap_or_else(|| sanitize_body(&body));

    AppError::Http { status, message }
}

/// Pulls the optional `message` out of a JSON error body.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}

/// Builds a URL from the configured base address and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();

    join_url(&config.api_base_url, path)
}

fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Fallback for error bodies without a usable `message`: trim, truncate and
/// never return an empty string.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();

    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_message, join_url, sanitize_body, MAX_ERROR_CHARS};

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://localhost:5000", "/api/auth/login"),
            "http://localhost:5000/api/auth/login"
        );
        assert_eq!(
            join_url("http://localhost:5000/", "api/auth/login"),
            "http://localhost:5000/api/auth/login"
        );
        assert_eq!(join_url("  ", "/api/auth/login"), "/api/auth/login");
    }

    #[test]
    fn extract_message_reads_the_server_field() {
        assert_eq!(
            extract_message(r#"{"message":"Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
        assert_eq!(extract_message(r#"{"message":"   "}"#), None);
        assert_eq!(extract_message(r#"{"error":"nope"}"#), None);
        assert_eq!(extract_message("<html>502</html>"), None);
    }

    #[test]
    fn sanitize_body_trims_truncates_and_never_returns_empty() {
        assert_eq!(sanitize_body("   "), "Request failed.");
        assert_eq!(sanitize_body("  oops  "), "oops");

        let long = "x".repeat(MAX_ERROR_CHARS * 2);
        assert_eq!(sanitize_body(&long).chars().count(), MAX_ERROR_CHARS);
    }
}
