//! shared form controls: submit button with spinner, raw-json result panel

use leptos::prelude::*;

use shared::Phase;

#[component]
pub fn SubmitButton(
    phase: RwSignal<Phase>,
    idle_label: &'static str,
    busy_label: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="btn-primary"
            disabled=move || phase.get().is_busy()
        >
            {move || if phase.get().is_busy() {
                view! { <span class="spinner"></span> " " {busy_label} }.into_any()
            } else {
                view! { {idle_label} }.into_any()
            }}
        </button>
    }
}

/// dumps the submission outcome verbatim. success and error text share the
/// panel; errors always start with "Error: ".
#[component]
pub fn ResultPanel(
    result: RwSignal<Option<String>>,
    heading: &'static str,
) -> impl IntoView {
    view! {
        {move || result.get().map(|text| view! {
            <div class="result-panel">
                <h3>{heading}</h3>
                <pre>{text}</pre>
            </div>
        })}
    }
}
