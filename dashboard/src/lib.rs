//! ==============================================================================
//! lib.rs - AI Content Studio dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm single-page app for configuring and launching the seven
//!     content production workflows (market research, content planning,
//!     article writing, podcast production, video production, fact checking,
//!     and the master pipeline that chains them) against the rest backend.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - typed payloads posted to the backend via fetch
//!     - per-workflow form state held in a context store
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod store;

use components::{DashboardPage, Landing};
use store::FormStore;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

/// which top-level view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Dashboard,
}

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    // form state outlives tab switches and page navigation
    provide_context(FormStore::new());

    let page = RwSignal::new(Page::default());

    view! {
        <Title text="AI Content Studio" />

        <Show when=move || page.get() == Page::Landing>
            <Landing page=page />
        </Show>

        <Show when=move || page.get() == Page::Dashboard>
            <DashboardPage page=page />
        </Show>
    }
}
