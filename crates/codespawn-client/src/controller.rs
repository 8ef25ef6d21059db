use codespawn_types::{Field, FormState, Operation, Result};

use crate::{dispatch, settle, Backend};

/// A form bound to a backend.
///
/// Each operation reads the current inputs, calls the backend once and applies
/// the outcome. The returned `Result` only reports what happened; the state is
/// already updated either way (on failure with the operation's fallback
/// message).
pub struct FormController<B> {
    backend: B,
    state: FormState,
}

impl<B: Backend> FormController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: FormState::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.state.set_field(field, value);
    }

    pub async fn generate_project(&mut self) -> Result<()> {
        self.run(Operation::GenerateProject).await
    }

    pub async fn open_in_codespaces(&mut self) -> Result<()> {
        self.run(Operation::OpenInCodespaces).await
    }

    pub async fn open_existing_repo(&mut self) -> Result<()> {
        self.run(Operation::OpenExistingRepo).await
    }

    pub async fn run(&mut self, op: Operation) -> Result<()> {
        let result = dispatch(&self.backend, op, &self.state).await;
        self.state.apply(settle(op, &result));
        result.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use codespawn_types::{
        CodespaceLink, CodespawnError, GenerateProjectRequest, GenerateProjectResponse,
        OpenExistingRepoRequest, OpenInCodespacesQuery,
    };

    /// Succeeds or fails every call depending on `fail`.
    struct ScriptedBackend {
        fail: bool,
    }

    impl ScriptedBackend {
        fn error() -> CodespawnError {
            CodespawnError::Transport {
                url: "http://localhost:8000".into(),
                message: "connection refused".into(),
            }
        }
    }

    #[async_trait]
    impl Backend for ScriptedBackend {
        async fn generate_project(
            &self,
            request: &GenerateProjectRequest,
        ) -> Result<GenerateProjectResponse> {
            if self.fail {
                return Err(Self::error());
            }
            Ok(GenerateProjectResponse {
                message: "Project created successfully.".into(),
                codespace_url: format!("https://github.dev/octo/{}", request.project_name),
            })
        }

        async fn open_in_codespaces(&self, query: &OpenInCodespacesQuery) -> Result<CodespaceLink> {
            if self.fail {
                return Err(Self::error());
            }
            Ok(CodespaceLink {
                codespace_url: format!("https://github.dev/octo/{}", query.project_name),
            })
        }

        async fn open_existing_repo(
            &self,
            _request: &OpenExistingRepoRequest,
        ) -> Result<CodespaceLink> {
            if self.fail {
                return Err(Self::error());
            }
            Ok(CodespaceLink {
                codespace_url: "https://github.dev/rust-lang/rust".into(),
            })
        }
    }

    #[tokio::test]
    async fn generate_success_updates_message_and_link() {
        let mut form = FormController::new(ScriptedBackend { fail: false });
        form.set_field(Field::ProjectName, "todo");
        form.set_field(Field::Prompt, "a todo app");

        form.generate_project().await.unwrap();

        assert_eq!(form.state().message, "Project created successfully.");
        assert_eq!(form.state().codespace_url, "https://github.dev/octo/todo");
    }

    #[tokio::test]
    async fn open_success_leaves_message_alone() {
        let mut form = FormController::new(ScriptedBackend { fail: false });
        form.set_field(Field::ProjectName, "todo");
        form.generate_project().await.unwrap();
        form.set_field(Field::RepoUrl, "https://github.com/rust-lang/rust");

        form.open_existing_repo().await.unwrap();

        assert_eq!(form.state().message, "Project created successfully.");
        assert_eq!(form.state().codespace_url, "https://github.dev/rust-lang/rust");
    }

    #[tokio::test]
    async fn failures_show_fallback_per_operation() {
        let mut form = FormController::new(ScriptedBackend { fail: true });

        assert!(form.generate_project().await.is_err());
        assert_eq!(
            form.state().message,
            Operation::GenerateProject.fallback_message()
        );

        assert!(form.open_in_codespaces().await.is_err());
        assert_eq!(
            form.state().message,
            Operation::OpenInCodespaces.fallback_message()
        );

        assert!(form.open_existing_repo().await.is_err());
        assert_eq!(
            form.state().message,
            Operation::OpenExistingRepo.fallback_message()
        );
        assert_eq!(form.state().visible_link(), None);
    }

    #[tokio::test]
    async fn empty_inputs_are_sent_anyway() {
        let mut form = FormController::new(ScriptedBackend { fail: false });
        form.open_in_codespaces().await.unwrap();
        assert_eq!(form.state().codespace_url, "https://github.dev/octo/");
    }
}
