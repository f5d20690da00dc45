//! REST API helpers for the message-management endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: the HTTP client reports a transport error, since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. HTTP status codes are not
//! inspected: the server always answers with a JSON envelope whose `success`
//! flag decides between a payload and [`ApiError::Rejected`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, MessagePage, ToggleMaintainRequest};
#[cfg(feature = "hydrate")]
use super::types::{FilterResponse, ToggleMaintainResponse};

/// Server operations used by the message list controller. Enables fakes in tests.
#[async_trait::async_trait(?Send)]
pub trait MessagesApi {
    /// Fetch one filtered page; `query` is a pre-encoded query string.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport, decode, or application failure.
    async fn fetch_messages(&self, query: &str) -> Result<MessagePage, ApiError>;

    /// Flip a message's maintain flag. `token` only decorates the URL.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport, decode, or application failure.
    async fn toggle_maintain(&self, token: &str, request: &ToggleMaintainRequest) -> Result<(), ApiError>;
}

/// `gloo-net` backed implementation rooted at `base` (empty for same-origin).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpMessagesApi {
    base: String,
}

impl HttpMessagesApi {
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

fn filter_endpoint(base: &str, query: &str) -> String {
    format!("{base}/api/messages/filter?{query}")
}

fn toggle_endpoint(base: &str, token: &str) -> String {
    format!("{base}/api/messages/{token}/toggle_maintain")
}

#[async_trait::async_trait(?Send)]
impl MessagesApi for HttpMessagesApi {
    async fn fetch_messages(&self, query: &str) -> Result<MessagePage, ApiError> {
        let url = filter_endpoint(&self.base, query);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let body: FilterResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            body.into_page()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Transport(format!("{url}: not available outside the browser")))
        }
    }

    async fn toggle_maintain(&self, token: &str, request: &ToggleMaintainRequest) -> Result<(), ApiError> {
        let url = toggle_endpoint(&self.base, token);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .json(request)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let body: ToggleMaintainResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            body.into_result()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport(format!("{url}: not available outside the browser")))
        }
    }
}
