//! Shared types for the Codespawn form client.
//!
//! This crate is compiled both natively and for the browser, so it does no
//! network or file I/O:
//! - `CodespawnError` — unified error taxonomy
//! - `BackendConfig` — where the project backend lives and how long to wait
//! - wire types for the three backend endpoints
//! - `FormState` — the five fields of the form and how outcomes update them

mod form;
mod wire;

pub use form::*;
pub use wire::*;

use std::time::Duration;

/// Unified error type for all Codespawn crates.
#[derive(Debug, thiserror::Error)]
pub enum CodespawnError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Backend returned HTTP {status}: {detail}")]
    Backend { status: u16, detail: String },

    #[error("Unexpected response from backend: {0}")]
    InvalidResponse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodespawnError {
    /// The text worth showing in a log line: the backend's own detail when it
    /// sent one, the transport error otherwise.
    pub fn detail(&self) -> String {
        match self {
            CodespawnError::Backend { detail, .. } => detail.clone(),
            CodespawnError::Transport { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of the failed response, if the backend answered at all.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            CodespawnError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A convenience alias for `Result<T, CodespawnError>`.
pub type Result<T> = std::result::Result<T, CodespawnError>;

// ---------------------------------------------------------------------------
// BackendConfig
// ---------------------------------------------------------------------------

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const BACKEND_URL_ENV: &str = "CODESPAWN_BACKEND_URL";
pub const TIMEOUT_SECS_ENV: &str = "CODESPAWN_TIMEOUT_SECS";

/// Location of the project backend and the per-request timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `CODESPAWN_BACKEND_URL` and `CODESPAWN_TIMEOUT_SECS`, falling back
    /// to the defaults for whichever is unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(BACKEND_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        };

        if let Some(raw) = lookup(TIMEOUT_SECS_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                CodespawnError::Config(format!("{TIMEOUT_SECS_ENV} must be whole seconds, got '{raw}'"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        tracing::debug!(base_url = %config.base_url, timeout_secs = config.timeout.as_secs(), "backend config");
        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint path such as `/generate_project/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
