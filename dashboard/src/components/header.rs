//! Header component

use leptos::prelude::*;

use crate::store::FormStore;
use crate::Page;

#[component]
pub fn Header(page: RwSignal<Page>) -> impl IntoView {
    let store = expect_context::<FormStore>();

    view! {
        <header class="header">
            <div class="header-left">
                <button class="link-button" on:click=move |_| page.set(Page::Landing)>
                    "← Back to Home"
                </button>
                <h1>"AI Content Studio"</h1>
            </div>
            {move || store.any_busy().then(|| view! {
                <span class="processing">
                    <span class="spinner"></span>
                    " Processing..."
                </span>
            })}
        </header>
    }
}
