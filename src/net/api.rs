//! REST API helpers for the activities service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs returning a network error, since the
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so callers can surface a
//! transient message and keep the UI interactive; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::state::activities::ActivityMap;

/// Failure mode of an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response. `detail` is parsed best-effort from the JSON
    /// body; the server does not guarantee the field.
    #[error("server returned {status}")]
    Server { status: u16, detail: Option<String> },
    /// The response body was not the JSON shape we expected.
    #[error("invalid response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Text to show the user: the server's `detail` when present,
    /// otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// True for failures where no HTTP response settled (network or
    /// malformed body). These get a generic message and no hide timer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Parse(_))
    }
}

/// Percent-encoding set equivalent to JS `encodeURIComponent`:
/// everything except alphanumerics and `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

/// URL for `POST /activities/{name}/signup?email={email}`.
pub fn signup_url(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        encode(activity),
        encode(email)
    )
}

/// URL for `DELETE /activities/{name}/participants?email={email}`.
pub fn unregister_url(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/participants?email={}",
        encode(activity),
        encode(email)
    )
}

/// Success body of a mutation: `{ "message": ... }`.
#[cfg(feature = "csr")]
#[derive(serde::Deserialize)]
struct MessageBody {
    message: Option<String>,
}

/// Error body of a mutation: `{ "detail": ... }`, best-effort.
#[cfg(feature = "csr")]
#[derive(serde::Deserialize)]
struct DetailBody {
    detail: Option<String>,
}

/// Fetch the full activity map from `GET /activities`.
pub async fn fetch_activities() -> Result<ActivityMap, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/activities")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Server {
                status: resp.status(),
                detail: None,
            });
        }
        resp.json::<ActivityMap>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Sign `email` up for `activity`. Returns the server's success message
/// when it sent one.
pub async fn sign_up(activity: &str, email: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = signup_url(activity, email);
        mutate(gloo_net::http::Request::post(&url)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (activity, email);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Remove `email` from `activity`'s participant list. Returns the
/// server's success message when it sent one.
pub async fn unregister(activity: &str, email: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = unregister_url(activity, email);
        mutate(gloo_net::http::Request::delete(&url)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (activity, email);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Send a mutation request and decode the `{message}` / `{detail}`
/// bodies the service uses for success and error responses.
#[cfg(feature = "csr")]
async fn mutate(req: gloo_net::http::RequestBuilder) -> Result<Option<String>, ApiError> {
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if resp.ok() {
        let body: MessageBody = resp
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(body.message)
    } else {
        let detail = resp
            .json::<DetailBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        Err(ApiError::Server {
            status: resp.status(),
            detail,
        })
    }
}
