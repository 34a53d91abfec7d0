//! Fact checking form

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use shared::VerificationLevel;

use crate::api;
use crate::components::{ResultPanel, SubmitButton};
use crate::store::{run_submit, FormStore};

#[component]
pub fn FactCheckingForm() -> impl IntoView {
    let state = expect_context::<FormStore>().fact_checking;

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        run_submit(state, |req| async move {
            api::submit_fact_checking(&req).await
        });
    };

    view! {
        <form class="workflow-form" on:submit=submit>
            <div class="field">
                <label>"Content to Verify"</label>
                <textarea
                    rows="8"
                    required
                    placeholder="Paste the content you want to fact-check here..."
                    prop:value=move || state.data.with(|d| d.content_to_verify.clone())
                    on:input=move |ev| {
                        state.data.update(|d| d.content_to_verify = event_target_value(&ev))
                    }
                ></textarea>
            </div>

            <div class="field">
                <label>"Verification Level"</label>
                <select on:change=move |ev| {
                    if let Some(level) = VerificationLevel::from_value(&event_target_value(&ev)) {
                        state.data.update(|d| d.verification_level = level);
                    }
                }>
                    {VerificationLevel::ALL.into_iter().map(|opt| view! {
                        <option
                            value=opt.as_str()
                            selected=move || state.data.with(|d| d.verification_level == opt)
                        >
                            {opt.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <p class="field-note">
                "Factual claims are extracted, verified against authoritative sources, "
                "and returned as a report with confidence scores and citations."
            </p>

            <SubmitButton
                phase=state.phase
                idle_label="Start Fact Check"
                busy_label="Verifying Content..."
            />
        </form>

        <ResultPanel result=state.result heading="Verification Results" />
    }
}
