//! Wire DTOs for the message-management REST API.
//!
//! DESIGN
//! ======
//! The server emits loosely typed JSON (ids may be numbers or strings, the
//! maintain flag may be `"True"` or a boolean), so decoding is lenient and
//! normalizes everything into owned strings and plain booleans.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Errors produced by message API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, etc.).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not the expected JSON shape.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The server answered with `success: false`.
    #[error("server rejected request: {}", .0.as_deref().unwrap_or("no details"))]
    Rejected(Option<String>),
}

impl ApiError {
    /// True for failures where no usable response arrived.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }
}

/// A stored chat message as listed by `/api/messages/filter`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Server-side identifier, when the listing includes one.
    #[serde(default, deserialize_with = "deserialize_optional_string_like")]
    pub id: Option<String>,
    /// Author display name.
    #[serde(default)]
    pub user_name: String,
    /// Server-formatted timestamp, echoed back verbatim on toggle.
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, deserialize_with = "deserialize_string_like")]
    pub channel_id: String,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default, deserialize_with = "deserialize_string_like")]
    pub user_id: String,
    /// Message body text.
    #[serde(default)]
    pub message: String,
    /// Retention flag; the server encodes `true` as the string `"True"`.
    #[serde(default, deserialize_with = "deserialize_maintain_flag")]
    pub to_maintain: bool,
}

/// Page position returned alongside a message listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
}

/// Raw `/api/messages/filter` response envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct FilterResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Message>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A successfully fetched page of messages.
#[derive(Clone, Debug, PartialEq)]
pub struct MessagePage {
    pub messages: Vec<Message>,
    pub pagination: Option<Pagination>,
}

impl FilterResponse {
    /// Split the envelope into a page or an application-level rejection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false.
    pub fn into_page(self) -> Result<MessagePage, ApiError> {
        if self.success {
            Ok(MessagePage { messages: self.data, pagination: self.pagination })
        } else {
            Err(ApiError::Rejected(self.error))
        }
    }
}

/// JSON body of `POST /api/messages/{token}/toggle_maintain`.
///
/// The message identity travels here, not in the URL token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleMaintainRequest {
    pub timestamp: String,
    pub channel_id: String,
    pub user_id: String,
    pub message: String,
    pub to_maintain: bool,
}

/// Raw toggle response envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct ToggleMaintainResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ToggleMaintainResponse {
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.success { Ok(()) } else { Err(ApiError::Rejected(self.error)) }
    }
}

fn string_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<Option<String>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        serde_json::Value::Bool(b) => Ok(Some(b.to_string())),
        _ => Err(E::custom("expected string or number")),
    }
}

fn deserialize_string_like<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(string_from_value::<D::Error>(value)?.unwrap_or_default())
}

fn deserialize_optional_string_like<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    string_from_value::<D::Error>(value)
}

fn deserialize_maintain_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Bool(b) => Ok(b),
        serde_json::Value::String(s) => Ok(s == "True"),
        serde_json::Value::Null => Ok(false),
        serde_json::Value::Number(n) => Ok(n.as_i64() == Some(1)),
        _ => Err(D::Error::custom("expected maintain flag")),
    }
}
