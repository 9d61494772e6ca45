use bytes::Bytes;
use http::StatusCode;
use serde::Deserialize;

/// The raw outcome of one API call: status code plus body text.
///
/// The Omniture API answers with JSON; this layer hands it over uninterpreted
/// except for the optional [`error`](ApiResponse::error) accessor. An HTTP
/// error status is a normal `ApiResponse`, never an `Err` — the API reports
/// most failures as a JSON payload on a 4xx/5xx.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code of the response.
    pub status: StatusCode,
    /// Response body decoded as UTF-8 text.
    pub body: String,
}

impl ApiResponse {
    pub(crate) fn from_http(resp: http::Response<Bytes>) -> Self {
        let (parts, body) = resp.into_parts();

        Self {
            status: parts.status,
            body: String::from_utf8_lossy(&body).into_owned(),
        }
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Try to read the body as an Omniture error payload.
    ///
    /// Returns `Some` only when the body is a JSON object carrying a string
    /// `error` field; any other body, JSON or not, yields `None`. A `None`
    /// is the explicit "this is not an error payload" outcome, not a parse
    /// failure.
    pub fn error(&self) -> Option<ApiError> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Error payload the Omniture API returns alongside 4xx/5xx statuses.
///
/// The possible `error` codes are listed in the Analytics 1.4 reporting
/// documentation ("report_not_ready", "invalid_report_id", ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable description, when the server provides one.
    #[serde(default)]
    pub error_description: Option<String>,
    /// Link to further documentation, when the server provides one.
    #[serde(default)]
    pub error_uri: Option<String>,
}
