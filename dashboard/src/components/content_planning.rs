//! Content planning form

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use shared::PublishingFrequency;

use crate::api;
use crate::components::{ResultPanel, SubmitButton};
use crate::store::{run_submit, FormStore};

#[component]
pub fn ContentPlanningForm() -> impl IntoView {
    let state = expect_context::<FormStore>().content_planning;

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        run_submit(state, |req| async move {
            api::submit_content_planning(&req).await
        });
    };

    view! {
        <form class="workflow-form" on:submit=submit>
            <div class="field">
                <label>"Research Summary"</label>
                <textarea
                    rows="4"
                    required
                    placeholder="Provide market research insights and findings"
                    prop:value=move || state.data.with(|d| d.research_summary.clone())
                    on:input=move |ev| {
                        state.data.update(|d| d.research_summary = event_target_value(&ev))
                    }
                ></textarea>
            </div>

            <div class="field">
                <label>"Content Goals"</label>
                <textarea
                    rows="3"
                    required
                    placeholder="Define your content marketing objectives"
                    prop:value=move || state.data.with(|d| d.content_goals.clone())
                    on:input=move |ev| {
                        state.data.update(|d| d.content_goals = event_target_value(&ev))
                    }
                ></textarea>
            </div>

            <div class="field">
                <label>"Brand Guidelines"</label>
                <textarea
                    rows="3"
                    required
                    placeholder="Describe your brand voice, style, and visual guidelines"
                    prop:value=move || state.data.with(|d| d.brand_guidelines.clone())
                    on:input=move |ev| {
                        state.data.update(|d| d.brand_guidelines = event_target_value(&ev))
                    }
                ></textarea>
            </div>

            <div class="field">
                <label>"Publishing Frequency"</label>
                <select on:change=move |ev| {
                    if let Some(freq) = PublishingFrequency::from_value(&event_target_value(&ev)) {
                        state.data.update(|d| d.publishing_frequency = freq);
                    }
                }>
                    {PublishingFrequency::ALL.into_iter().map(|opt| view! {
                        <option
                            value=opt.as_str()
                            selected=move || state.data.with(|d| d.publishing_frequency == opt)
                        >
                            {opt.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <SubmitButton
                phase=state.phase
                idle_label="Generate Content Strategy"
                busy_label="Creating Content Plan..."
            />
        </form>

        <ResultPanel result=state.result heading="Content Plan Results" />
    }
}
