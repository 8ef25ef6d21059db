use async_trait::async_trait;

use codespawn_types::{
    CodespaceLink, FormState, GenerateProjectRequest, GenerateProjectResponse,
    OpenExistingRepoRequest, OpenInCodespacesQuery, Operation, Outcome, Result,
};

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

/// The three calls the project backend answers.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn generate_project(
        &self,
        request: &GenerateProjectRequest,
    ) -> Result<GenerateProjectResponse>;

    async fn open_in_codespaces(&self, query: &OpenInCodespacesQuery) -> Result<CodespaceLink>;

    async fn open_existing_repo(&self, request: &OpenExistingRepoRequest) -> Result<CodespaceLink>;
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Send the request for `op` built from the current inputs. Inputs go out
/// exactly as typed.
pub async fn dispatch<B: Backend + ?Sized>(
    backend: &B,
    op: Operation,
    inputs: &FormState,
) -> Result<Outcome> {
    tracing::info!(operation = ?op, "dispatching");
    match op {
        Operation::GenerateProject => {
            let request = GenerateProjectRequest {
                prompt: inputs.prompt.clone(),
                project_name: inputs.project_name.clone(),
            };
            let resp = backend.generate_project(&request).await?;
            Ok(Outcome::ProjectGenerated(resp))
        }
        Operation::OpenInCodespaces => {
            let query = OpenInCodespacesQuery {
                project_name: inputs.project_name.clone(),
            };
            let link = backend.open_in_codespaces(&query).await?;
            Ok(Outcome::CodespaceOpened(link))
        }
        Operation::OpenExistingRepo => {
            let request = OpenExistingRepoRequest {
                repo_url: inputs.repo_url.clone(),
            };
            let link = backend.open_existing_repo(&request).await?;
            Ok(Outcome::CodespaceOpened(link))
        }
    }
}

/// Collapse a dispatch result into something the form can apply, logging the
/// failure detail on the way.
pub fn settle(op: Operation, result: &Result<Outcome>) -> Outcome {
    match result {
        Ok(outcome) => outcome.clone(),
        Err(e) => {
            tracing::error!(status = ?e.http_status(), "{}: {}", op.log_label(), e.detail());
            Outcome::Failed(op)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
