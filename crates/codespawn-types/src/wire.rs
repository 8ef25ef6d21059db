use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

pub const GENERATE_PROJECT_PATH: &str = "/generate_project/";
pub const OPEN_IN_CODESPACES_PATH: &str = "/open_in_codespaces/";
pub const OPEN_EXISTING_REPO_PATH: &str = "/open_existing_repo/";

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of `POST /generate_project/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateProjectRequest {
    pub prompt: String,
    pub project_name: String,
}

/// Query of `GET /open_in_codespaces/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenInCodespacesQuery {
    pub project_name: String,
}

/// Body of `POST /open_existing_repo/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenExistingRepoRequest {
    pub repo_url: String,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

// Missing or null fields decode as empty strings so a sparse payload renders
// nothing rather than failing the whole operation.

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateProjectResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub codespace_url: String,
}

/// Response of both "open" endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodespaceLink {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub codespace_url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a successful response body. An empty body (e.g. a 204) is the same
/// as `{}`.
pub fn decode_success<T: serde::de::DeserializeOwned>(body: &str) -> serde_json::Result<T> {
    if body.trim().is_empty() {
        serde_json::from_str("{}")
    } else {
        serde_json::from_str(body)
    }
}

/// Error envelope the backend attaches to 4xx/5xx responses.
///
/// `detail` is usually a string, but request-validation failures carry a list
/// of objects, so it is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub detail: serde_json::Value,
}

impl ErrorEnvelope {
    /// Extract a readable detail from an error response body. Bodies that are
    /// not the JSON envelope come back trimmed and verbatim.
    pub fn detail_from_body(body: &str) -> String {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => match envelope.detail {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            },
            Err(_) => body.trim().to_string(),
        }
    }
}
