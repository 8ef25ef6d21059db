use leptos::prelude::*;

use codespawn_types::{Field, FormState, Operation, Outcome};

use super::apply_result;
use crate::server::backend::open_existing_repo;

#[component]
pub fn OpenRepoSection(form: RwSignal<FormState>) -> impl IntoView {
    let open_action = Action::new(move |repo_url: &String| {
        let repo_url = repo_url.clone();
        async move { open_existing_repo(repo_url).await }
    });

    Effect::new(move || {
        if let Some(result) = open_action.value().get() {
            apply_result(form, Operation::OpenExistingRepo, result, Outcome::CodespaceOpened);
        }
    });

    let on_open = move |_| {
        let repo_url = form.with_untracked(|f| f.repo_url.clone());
        open_action.dispatch(repo_url);
    };

    view! {
        <section class="form-section">
            <h2>"Open Existing Repository"</h2>
            <input
                type="text"
                class="form-input"
                placeholder="Enter GitHub repo URL"
                prop:value=move || form.with(|f| f.repo_url.clone())
                on:input=move |ev| {
                    form.update(|f| f.set_field(Field::RepoUrl, event_target_value(&ev)));
                }
            />
            <br/>
            <button class="btn" on:click=on_open>
                "Open Existing Repo in Codespaces"
            </button>
        </section>
    }
}
