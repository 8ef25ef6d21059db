use leptos::prelude::*;

use codespawn_types::{Field, FormState, Operation, Outcome};

use super::apply_result;
use crate::server::backend::{generate_project, open_in_codespaces};

/// "Generate New Project": name, prompt, and the two project-scoped buttons.
#[component]
pub fn GenerateSection(form: RwSignal<FormState>) -> impl IntoView {
    let generate_action = Action::new(move |input: &(String, String)| {
        let (prompt, project_name) = input.clone();
        async move { generate_project(prompt, project_name).await }
    });

    let open_action = Action::new(move |project_name: &String| {
        let project_name = project_name.clone();
        async move { open_in_codespaces(project_name).await }
    });

    // Completions are applied in arrival order; overlapping clicks are not
    // sequenced.
    Effect::new(move || {
        if let Some(result) = generate_action.value().get() {
            apply_result(form, Operation::GenerateProject, result, Outcome::ProjectGenerated);
        }
    });

    Effect::new(move || {
        if let Some(result) = open_action.value().get() {
            apply_result(form, Operation::OpenInCodespaces, result, Outcome::CodespaceOpened);
        }
    });

    let on_generate = move |_| {
        let (prompt, project_name) =
            form.with_untracked(|f| (f.prompt.clone(), f.project_name.clone()));
        generate_action.dispatch((prompt, project_name));
    };

    let on_open = move |_| {
        let project_name = form.with_untracked(|f| f.project_name.clone());
        open_action.dispatch(project_name);
    };

    view! {
        <section class="form-section">
            <h2>"Generate New Project"</h2>
            <input
                type="text"
                class="form-input"
                placeholder="Enter project name"
                prop:value=move || form.with(|f| f.project_name.clone())
                on:input=move |ev| {
                    form.update(|f| f.set_field(Field::ProjectName, event_target_value(&ev)));
                }
            />
            <textarea
                class="form-input form-textarea"
                placeholder="Enter project prompt"
                rows="4"
                prop:value=move || form.with(|f| f.prompt.clone())
                on:input=move |ev| {
                    form.update(|f| f.set_field(Field::Prompt, event_target_value(&ev)));
                }
            />
            <br/>
            <button class="btn" on:click=on_generate>
                "Generate Project"
            </button>
            <button class="btn" on:click=on_open>
                "Open in Codespaces"
            </button>
        </section>
    }
}
