//! Available tools panel
//!
//! the backend exposes a parameter-less listing of its tools. nothing in the
//! forms consumes it, so this panel just fetches on demand and dumps the raw
//! body the same way the result panels do.

use leptos::prelude::*;

use shared::render_outcome;

use crate::api;

#[component]
pub fn ToolsPanel() -> impl IntoView {
    let (listing, set_listing) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load = move |_| {
        set_loading.set(true);

        leptos::task::spawn_local(async move {
            let result = api::get_available_tools().await;
            set_listing.set(Some(render_outcome(&result)));
            set_loading.set(false);
        });
    };

    view! {
        <div class="tools-panel">
            <h2>"Available Tools"</h2>
            <button class="link-button" on:click=load disabled=move || loading.get()>
                {move || if loading.get() { "Loading..." } else { "Load tool listing" }}
            </button>
            {move || listing.get().map(|text| view! {
                <pre class="tools-listing">{text}</pre>
            })}
        </div>
    }
}
