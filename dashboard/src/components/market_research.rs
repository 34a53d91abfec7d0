//! Market research form

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use shared::{split_lines, ResearchDepth};

use crate::api;
use crate::components::{ResultPanel, SubmitButton};
use crate::store::{run_submit, FormStore};

#[component]
pub fn MarketResearchForm() -> impl IntoView {
    let state = expect_context::<FormStore>().market_research;

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        run_submit(state, |req| async move {
            api::submit_market_research(&req).await
        });
    };

    view! {
        <form class="workflow-form" on:submit=submit>
            <div class="field">
                <label>"Research Topic"</label>
                <input
                    type="text"
                    required
                    placeholder="e.g., AI in Healthcare"
                    prop:value=move || state.data.with(|d| d.topic.clone())
                    on:input=move |ev| state.data.update(|d| d.topic = event_target_value(&ev))
                />
            </div>

            <div class="field">
                <label>"Target Audience"</label>
                <textarea
                    rows="3"
                    required
                    placeholder="Describe your target audience demographics and interests"
                    prop:value=move || state.data.with(|d| d.target_audience.clone())
                    on:input=move |ev| {
                        state.data.update(|d| d.target_audience = event_target_value(&ev))
                    }
                ></textarea>
            </div>

            <div class="field">
                <label>"Competitor Domains (one per line)"</label>
                <textarea
                    rows="4"
                    placeholder="healthitnews.com\nmedicalfuturist.com"
                    prop:value=move || state.data.with(|d| d.competitor_domains.join("\n"))
                    on:input=move |ev| {
                        state
                            .data
                            .update(|d| d.competitor_domains = split_lines(&event_target_value(&ev)))
                    }
                ></textarea>
            </div>

            <div class="field">
                <label>"Research Depth"</label>
                <select on:change=move |ev| {
                    if let Some(depth) = ResearchDepth::from_value(&event_target_value(&ev)) {
                        state.data.update(|d| d.research_depth = depth);
                    }
                }>
                    {ResearchDepth::ALL.into_iter().map(|opt| view! {
                        <option
                            value=opt.as_str()
                            selected=move || state.data.with(|d| d.research_depth == opt)
                        >
                            {opt.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <SubmitButton
                phase=state.phase
                idle_label="Start Market Research"
                busy_label="Analyzing Market..."
            />
        </form>

        <ResultPanel result=state.result heading="Research Results" />
    }
}
