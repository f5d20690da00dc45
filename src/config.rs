//! Client configuration read from `data-*` attributes on `<body>`.
//!
//! Recognized attributes (all optional):
//! - `data-api-base`: origin prefix for API calls, default same-origin
//! - `data-messages-path`: path of the messages view, default `/messages`
//! - `data-toast-ms`: toast lifetime, default 3000
//! - `data-loading-reset-ms`: submit-button reset delay, default 5000
//! - `data-refresh-interval-ms`: auto-refresh period, default 30000
//! - `data-auto-refresh`: `true`/`false`, default `true`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::auto_refresh::DEFAULT_REFRESH_INTERVAL_MS;
use crate::util::form_loading::DEFAULT_LOADING_RESET_MS;

pub const DEFAULT_MESSAGES_PATH: &str = "/messages";
pub const DEFAULT_TOAST_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid number for {key}: {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("invalid boolean for {key}: {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub messages_path: String,
    pub toast_ms: u32,
    pub loading_reset_ms: u32,
    pub refresh_interval_ms: u32,
    pub auto_refresh: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            messages_path: DEFAULT_MESSAGES_PATH.to_owned(),
            toast_ms: DEFAULT_TOAST_MS,
            loading_reset_ms: DEFAULT_LOADING_RESET_MS,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            auto_refresh: true,
        }
    }
}

impl ClientConfig {
    /// Build config from a `data-*` attribute lookup (keys without the prefix).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a numeric or boolean attribute does not parse.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            api_base: lookup("api-base").unwrap_or(defaults.api_base),
            messages_path: lookup("messages-path")
                .filter(|p| !p.is_empty())
                .unwrap_or(defaults.messages_path),
            toast_ms: parse_ms(&lookup, "toast-ms", defaults.toast_ms)?,
            loading_reset_ms: parse_ms(&lookup, "loading-reset-ms", defaults.loading_reset_ms)?,
            refresh_interval_ms: parse_ms(&lookup, "refresh-interval-ms", defaults.refresh_interval_ms)?,
            auto_refresh: parse_bool(&lookup, "auto-refresh", defaults.auto_refresh)?,
        })
    }

    /// Read config from the page `<body>`, falling back to defaults on error.
    #[cfg(feature = "hydrate")]
    pub fn from_page() -> Self {
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
        let lookup = |key: &str| body.as_ref().and_then(|b| b.get_attribute(&format!("data-{key}")));
        Self::from_attributes(lookup).unwrap_or_else(|err| {
            log::warn!("ignoring page config: {err}");
            Self::default()
        })
    }
}

fn parse_ms<F>(lookup: &F, key: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<u32>().map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        None => Ok(default),
        Some("true" | "1" | "on") => Ok(true),
        Some("false" | "0" | "off") => Ok(false),
        Some(other) => Err(ConfigError::InvalidBool { key, value: other.to_owned() }),
    }
}
