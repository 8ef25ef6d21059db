use leptos::prelude::*;

use codespawn_types::FormState;

use crate::components::generate_section::GenerateSection;
use crate::components::open_repo_section::OpenRepoSection;
use crate::components::status_output::StatusOutput;

#[component]
pub fn HomePage() -> impl IntoView {
    let form = RwSignal::new(FormState::new());

    view! {
        <div class="home-page">
            <h1>"Generate and Open Project"</h1>
            <GenerateSection form=form/>
            <OpenRepoSection form=form/>
            <StatusOutput form=form/>
        </div>
    }
}
