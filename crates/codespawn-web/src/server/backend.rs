//! Server functions forwarding the form's three operations to the project
//! backend.
//!
//! The `HttpBackend` is provided as Leptos context by the server binary.

use leptos::prelude::*;
use leptos::server_fn::error::NoCustomError;

use codespawn_types::{CodespaceLink, GenerateProjectResponse};

#[cfg(feature = "ssr")]
fn backend() -> Result<codespawn_client::HttpBackend, ServerFnError<NoCustomError>> {
    use_context::<codespawn_client::HttpBackend>()
        .ok_or_else(|| ServerFnError::<NoCustomError>::ServerError("No backend client".into()))
}

#[cfg(feature = "ssr")]
fn to_server_error(e: codespawn_types::CodespawnError) -> ServerFnError<NoCustomError> {
    tracing::error!(status = ?e.http_status(), "backend call failed: {}", e.detail());
    ServerFnError::<NoCustomError>::ServerError(e.to_string())
}

#[server]
pub async fn generate_project(
    prompt: String,
    project_name: String,
) -> Result<GenerateProjectResponse, ServerFnError<NoCustomError>> {
    use codespawn_client::Backend;
    use codespawn_types::GenerateProjectRequest;

    tracing::info!(project = %project_name, "generate project");
    backend()?
        .generate_project(&GenerateProjectRequest {
            prompt,
            project_name,
        })
        .await
        .map_err(to_server_error)
}

#[server]
pub async fn open_in_codespaces(
    project_name: String,
) -> Result<CodespaceLink, ServerFnError<NoCustomError>> {
    use codespawn_client::Backend;
    use codespawn_types::OpenInCodespacesQuery;

    tracing::info!(project = %project_name, "open in codespaces");
    backend()?
        .open_in_codespaces(&OpenInCodespacesQuery { project_name })
        .await
        .map_err(to_server_error)
}

#[server]
pub async fn open_existing_repo(
    repo_url: String,
) -> Result<CodespaceLink, ServerFnError<NoCustomError>> {
    use codespawn_client::Backend;
    use codespawn_types::OpenExistingRepoRequest;

    tracing::info!(%repo_url, "open existing repo");
    backend()?
        .open_existing_repo(&OpenExistingRepoRequest { repo_url })
        .await
        .map_err(to_server_error)
}
