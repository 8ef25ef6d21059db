use crate::{CodespaceLink, GenerateProjectResponse};

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// The three things the form can ask the backend to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GenerateProject,
    OpenInCodespaces,
    OpenExistingRepo,
}

impl Operation {
    /// Message shown in place of the status whenever this operation fails,
    /// whatever the cause.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::GenerateProject => {
                "Error generating project. Please check the console for details."
            }
            Operation::OpenInCodespaces => {
                "Error opening in Codespaces. Please check the console for details."
            }
            Operation::OpenExistingRepo => {
                "Error opening existing repository. Please check the console for details."
            }
        }
    }

    /// Prefix used when logging a failure.
    pub fn log_label(self) -> &'static str {
        match self {
            Operation::GenerateProject => "Error generating project",
            Operation::OpenInCodespaces => "Error opening in Codespaces",
            Operation::OpenExistingRepo => "Error opening existing repository",
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// What came back from one operation, ready to be applied to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    ProjectGenerated(GenerateProjectResponse),
    CodespaceOpened(CodespaceLink),
    Failed(Operation),
}

// ---------------------------------------------------------------------------
// FormState
// ---------------------------------------------------------------------------

/// User-editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Prompt,
    ProjectName,
    RepoUrl,
}

/// Everything the form shows. Lives as long as the view that renders it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub prompt: String,
    pub project_name: String,
    pub repo_url: String,
    pub codespace_url: String,
    pub message: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value of one input, leaving every other field untouched.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Prompt => self.prompt = value,
            Field::ProjectName => self.project_name = value,
            Field::RepoUrl => self.repo_url = value,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Prompt => &self.prompt,
            Field::ProjectName => &self.project_name,
            Field::RepoUrl => &self.repo_url,
        }
    }

    /// Fold an operation's outcome into the state.
    ///
    /// Success overwrites unconditionally with the payload values. Failure only
    /// touches the status message; a link from an earlier success stays.
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::ProjectGenerated(resp) => {
                self.message = resp.message;
                self.codespace_url = resp.codespace_url;
            }
            Outcome::CodespaceOpened(link) => {
                self.codespace_url = link.codespace_url;
            }
            Outcome::Failed(op) => {
                self.message = op.fallback_message().to_string();
            }
        }
    }

    /// The status paragraph, if there is anything to show.
    pub fn visible_message(&self) -> Option<&str> {
        non_empty(&self.message)
    }

    /// The codespace link, if there is anything to show.
    pub fn visible_link(&self) -> Option<&str> {
        non_empty(&self.codespace_url)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState {
            prompt: "p".into(),
            project_name: "n".into(),
            repo_url: "r".into(),
            codespace_url: "https://github.dev/octo/old".into(),
            message: "old message".into(),
        }
    }

    #[test]
    fn new_state_is_empty_and_renders_nothing() {
        let state = FormState::new();
        assert_eq!(state, FormState::default());
        assert_eq!(state.visible_message(), None);
        assert_eq!(state.visible_link(), None);
    }

    #[test]
    fn set_field_touches_only_its_field() {
        for field in [Field::Prompt, Field::ProjectName, Field::RepoUrl] {
            let before = filled();
            let mut after = before.clone();
            after.set_field(field, "changed");

            assert_eq!(after.field(field), "changed");
            for other in [Field::Prompt, Field::ProjectName, Field::RepoUrl] {
                if other != field {
                    assert_eq!(after.field(other), before.field(other));
                }
            }
            assert_eq!(after.codespace_url, before.codespace_url);
            assert_eq!(after.message, before.message);
        }
    }

    #[test]
    fn project_generated_sets_message_and_link() {
        let mut state = filled();
        state.apply(Outcome::ProjectGenerated(GenerateProjectResponse {
            message: "Project created successfully.".into(),
            codespace_url: "https://github.dev/octo/todo".into(),
        }));
        assert_eq!(state.message, "Project created successfully.");
        assert_eq!(state.codespace_url, "https://github.dev/octo/todo");
        assert_eq!(state.project_name, "n");
    }

    #[test]
    fn project_generated_overwrites_with_empty_values() {
        let mut state = filled();
        state.apply(Outcome::ProjectGenerated(GenerateProjectResponse::default()));
        assert_eq!(state.visible_message(), None);
        assert_eq!(state.visible_link(), None);
    }

    #[test]
    fn codespace_opened_sets_only_link() {
        let mut state = filled();
        state.apply(Outcome::CodespaceOpened(CodespaceLink {
            codespace_url: "https://github.dev/octo/hello".into(),
        }));
        assert_eq!(state.codespace_url, "https://github.dev/octo/hello");
        assert_eq!(state.message, "old message");
    }

    #[test]
    fn failure_sets_fallback_and_keeps_link() {
        for op in [
            Operation::GenerateProject,
            Operation::OpenInCodespaces,
            Operation::OpenExistingRepo,
        ] {
            let mut state = filled();
            state.apply(Outcome::Failed(op));
            assert_eq!(state.message, op.fallback_message());
            assert_eq!(state.codespace_url, "https://github.dev/octo/old");
        }
    }

    #[test]
    fn fallback_messages_are_distinct() {
        let generate = Operation::GenerateProject.fallback_message();
        let open = Operation::OpenInCodespaces.fallback_message();
        let repo = Operation::OpenExistingRepo.fallback_message();
        assert_eq!(
            generate,
            "Error generating project. Please check the console for details."
        );
        assert_ne!(generate, open);
        assert_ne!(open, repo);
        assert!(repo.starts_with(Operation::OpenExistingRepo.log_label()));
    }

    #[test]
    fn later_outcome_wins() {
        let mut state = FormState::new();
        state.apply(Outcome::Failed(Operation::OpenInCodespaces));
        state.apply(Outcome::ProjectGenerated(GenerateProjectResponse {
            message: "Project already exists.".into(),
            codespace_url: "https://github.dev/octo/todo".into(),
        }));
        assert_eq!(state.visible_message(), Some("Project already exists."));
        assert_eq!(state.visible_link(), Some("https://github.dev/octo/todo"));
    }
}
