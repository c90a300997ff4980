//! HTTP adapter for the back-office REST API.
//!
//! Every request carries the raw session token in `Authorization` and the
//! static tunnel-bypass header. List responses arrive in the
//! `{ data, paging }` envelope; single objects may come bare, so decoding
//! tries the envelope first and falls back to the plain body.
//!
//! Every request gets a timeout; a hung connection aborts instead of
//! pinning a spinner forever. GETs additionally retry once on transport
//! failure. Mutations are never retried: the backend's idempotency is
//! unknown, so POST/PUT/DELETE keep at-most-once semantics.

use contracts::paging::{Envelope, ListResult};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use web_sys::AbortController;

/// Header that skips the intermediary tunnel warning page.
pub(crate) const BYPASS_HEADER: (&str, &str) = ("ngrok-skip-browser-warning", "true");

const REQUEST_TIMEOUT_MS: u32 = 15_000;

#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// No response at all (connection refused, DNS, abort on timeout).
    Network(String),
    /// The server answered with a non-2xx status. `message` is the server's
    /// own explanation when the body carried one.
    Status { code: u16, message: Option<String> },
    /// 2xx, but the body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "Koneksi ke server gagal ({detail})"),
            ApiError::Status {
                message: Some(message),
                ..
            } => write!(f, "{message}"),
            ApiError::Status { code, message: _ } => {
                write!(f, "Permintaan gagal (HTTP {code})")
            }
            ApiError::Decode(detail) => write!(f, "Format respons tidak dikenali ({detail})"),
        }
    }
}

/// Query parameters of a listing request, serialized with `serde_qs`.
/// `filters` carries page-specific keys (`category_id`, `status`, ...).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListQuery {
    pub page: usize,
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<String>,
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: 10,
            search: None,
            start_at: None,
            end_at: None,
            filters: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

/// Explicit, injectable API client. Constructed once per session and handed
/// to pages via context; nothing reads the token ambiently.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Client pointed at the API server next to the current origin.
    pub fn from_window(token: &str) -> Self {
        Self::new(api_base(), token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    fn decorate(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Authorization", &self.token)
            .header(BYPASS_HEADER.0, BYPASS_HEADER.1)
    }

    /// One paginated page of `resource`.
    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &ListQuery,
    ) -> Result<ListResult<T>, ApiError> {
        let path = format!("{}?{}", resource, query.to_query_string());
        let body = self.get_text(&path).await?;
        let envelope: Envelope<Vec<T>> =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ListResult::from_envelope(envelope))
    }

    /// GET a single object (summary endpoints and the like).
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.get_text(path).await?;
        decode_payload(&body)
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let guard = AbortGuard::new()?;
        let request = self
            .decorate(Request::post(&self.url(path)))
            .abort_signal(Some(&guard.signal))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await.map(|_| ())
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let guard = AbortGuard::new()?;
        let request = self
            .decorate(Request::put(&self.url(path)))
            .abort_signal(Some(&guard.signal))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let guard = AbortGuard::new()?;
        let response = self
            .decorate(Request::delete(&self.url(path)))
            .abort_signal(Some(&guard.signal))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await.map(|_| ())
    }

    async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        // Idempotent read: one retry on transport failure.
        match self.get_text_once(path).await {
            Err(ApiError::Network(first)) => {
                log::debug!("GET {path} failed ({first}), retrying once");
                self.get_text_once(path).await
            }
            other => other,
        }
    }

    async fn get_text_once(&self, path: &str) -> Result<String, ApiError> {
        let guard = AbortGuard::new()?;
        let response = self
            .decorate(Request::get(&self.url(path)))
            .abort_signal(Some(&guard.signal))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;
        response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

/// Per-request timeout: aborts the fetch after [`REQUEST_TIMEOUT_MS`].
/// Dropping the guard (once the request settles) cancels the timer.
struct AbortGuard {
    signal: web_sys::AbortSignal,
    _abort_after: Timeout,
}

impl AbortGuard {
    fn new() -> Result<Self, ApiError> {
        let controller =
            AbortController::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
        let signal = controller.signal();
        Ok(Self {
            signal,
            _abort_after: Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort()),
        })
    }
}

/// Server message extraction for non-2xx bodies: `{ "message": "..." }`.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let code = response.status();
    let message = match response.text().await {
        Ok(body) => server_message(&body),
        Err(_) => None,
    };
    Err(ApiError::Status { code, message })
}

fn server_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

/// Envelope-or-bare decode for single objects.
pub(crate) fn decode_payload<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if let Ok(envelope) = serde_json::from_str::<Envelope<T>>(body) {
        return Ok(envelope.data);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// API server lives on port 3000 next to whatever origin served the app.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::reports::FinanceSummary;

    #[test]
    fn query_string_includes_only_set_fields() {
        let query = ListQuery::default();
        assert_eq!(query.to_query_string(), "page=1&size=10");

        let mut query = ListQuery {
            page: 2,
            size: 25,
            search: Some("kaos".to_string()),
            ..Default::default()
        };
        query
            .filters
            .insert("status".to_string(), "unpaid".to_string());
        assert_eq!(
            query.to_query_string(),
            "page=2&size=25&search=kaos&status=unpaid"
        );
    }

    #[test]
    fn query_string_carries_complete_date_range() {
        let query = ListQuery {
            start_at: Some("2025-01-01".to_string()),
            end_at: Some("2025-01-31".to_string()),
            ..Default::default()
        };
        assert_eq!(
            query.to_query_string(),
            "page=1&size=10&start_at=2025-01-01&end_at=2025-01-31"
        );
    }

    #[test]
    fn decode_accepts_enveloped_and_bare_bodies() {
        let enveloped = r#"{"data":{"revenue":100,"expense":40,"profit":60}}"#;
        let bare = r#"{"revenue":100,"expense":40,"profit":60}"#;
        let from_envelope: FinanceSummary = decode_payload(enveloped).unwrap();
        let from_bare: FinanceSummary = decode_payload(bare).unwrap();
        assert_eq!(from_envelope, from_bare);
        assert_eq!(from_bare.profit, 60);
    }

    #[test]
    fn decode_fails_fast_on_shape_mismatch() {
        let wrong = r#"{"data":"not an object"}"#;
        let result: Result<FinanceSummary, ApiError> = decode_payload(wrong);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn server_message_is_used_when_present() {
        assert_eq!(
            server_message(r#"{"message":"SKU sudah terpakai"}"#),
            Some("SKU sudah terpakai".to_string())
        );
        assert_eq!(server_message(r#"{"error":"x"}"#), None);
        assert_eq!(server_message("not json"), None);

        let error = ApiError::Status {
            code: 500,
            message: None,
        };
        assert_eq!(error.to_string(), "Permintaan gagal (HTTP 500)");
    }
}
