pub mod generate_section;
pub mod open_repo_section;
pub mod status_output;

use codespawn_types::{FormState, Operation, Outcome};
use leptos::prelude::*;

/// Fold a finished server call into the form, logging failures to the
/// browser console.
pub(crate) fn apply_result<T, E: std::fmt::Display>(
    form: RwSignal<FormState>,
    op: Operation,
    result: Result<T, E>,
    on_success: impl FnOnce(T) -> Outcome,
) {
    let outcome = match result {
        Ok(value) => on_success(value),
        Err(e) => {
            log_failure(op, &e.to_string());
            Outcome::Failed(op)
        }
    };
    form.update(|f| f.apply(outcome));
}

fn log_failure(op: Operation, detail: &str) {
    tracing::error!("{}: {}", op.log_label(), detail);

    #[cfg(feature = "hydrate")]
    web_sys::console::error_1(&format!("{}: {}", op.log_label(), detail).into());
}
