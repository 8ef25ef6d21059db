use leptos::prelude::*;

use codespawn_types::FormState;

/// Status message and codespace link, each rendered only when set.
#[component]
pub fn StatusOutput(form: RwSignal<FormState>) -> impl IntoView {
    let message = move || form.with(|f| f.visible_message().map(str::to_string));
    let link = move || form.with(|f| f.visible_link().map(str::to_string));

    view! {
        {move || message().map(|text| view! { <p class="status-message">{text}</p> })}
        {move || link().map(|url| view! {
            <p class="codespace-link">
                <a href=url target="_blank" rel="noopener noreferrer">
                    "Open in GitHub Codespaces"
                </a>
            </p>
        })}
    }
}
