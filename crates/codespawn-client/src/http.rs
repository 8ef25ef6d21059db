use async_trait::async_trait;
use serde::de::DeserializeOwned;

use codespawn_types::{
    decode_success, BackendConfig, CodespaceLink, CodespawnError, ErrorEnvelope, GenerateProjectRequest,
    GenerateProjectResponse, OpenExistingRepoRequest, OpenInCodespacesQuery, Result,
    GENERATE_PROJECT_PATH, OPEN_EXISTING_REPO_PATH, OPEN_IN_CODESPACES_PATH,
};

use crate::Backend;

// ---------------------------------------------------------------------------
// HttpBackend
// ---------------------------------------------------------------------------

/// `Backend` over HTTP. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CodespawnError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(BackendConfig::from_env()?)
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        tracing::debug!(%url, "backend request");

        let resp = request.send().await.map_err(|e| CodespawnError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| CodespawnError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(map_error(status, &body));
        }

        decode_success(&body).map_err(|e| {
            CodespawnError::InvalidResponse(format!("Failed to parse response JSON: {e}"))
        })
    }
}

fn map_error(status: reqwest::StatusCode, body: &str) -> CodespawnError {
    CodespawnError::Backend {
        status: status.as_u16(),
        detail: ErrorEnvelope::detail_from_body(body),
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn generate_project(
        &self,
        request: &GenerateProjectRequest,
    ) -> Result<GenerateProjectResponse> {
        let url = self.config.endpoint(GENERATE_PROJECT_PATH);
        let builder = self.client.post(&url).json(request);
        self.execute(url, builder).await
    }

    async fn open_in_codespaces(&self, query: &OpenInCodespacesQuery) -> Result<CodespaceLink> {
        let url = self.config.endpoint(OPEN_IN_CODESPACES_PATH);
        let builder = self.client.get(&url).query(query);
        self.execute(url, builder).await
    }

    async fn open_existing_repo(&self, request: &OpenExistingRepoRequest) -> Result<CodespaceLink> {
        let url = self.config.endpoint(OPEN_EXISTING_REPO_PATH);
        let builder = self.client.post(&url).json(request);
        self.execute(url, builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_error_extracts_detail() {
        let err = map_error(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"detail":"Project does not exist."}"#,
        );
        match err {
            CodespawnError::Backend { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail, "Project does not exist.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn map_error_keeps_plain_body() {
        let err = map_error(reqwest::StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "Backend returned HTTP 502: upstream down");
    }

    #[test]
    fn new_keeps_config() {
        let backend = HttpBackend::new(BackendConfig::new("http://127.0.0.1:9/")).unwrap();
        assert_eq!(backend.config().base_url(), "http://127.0.0.1:9");
    }
}
