//! Tab navigation component

use leptos::prelude::*;

use shared::Workflow;

use crate::store::FormStore;

#[component]
pub fn TabNav() -> impl IntoView {
    let store = expect_context::<FormStore>();

    view! {
        <nav class="tabs">
            <h2>"Content Tools"</h2>
            {Workflow::ALL.into_iter().map(|wf| view! {
                <button
                    class=move || if store.active.get() == wf { "tab active" } else { "tab" }
                    on:click=move |_| store.active.set(wf)
                >
                    <span class="tab-title">{wf.title()}</span>
                    <span class="tab-desc">{wf.description()}</span>
                </button>
            }).collect_view()}
        </nav>
    }
}
