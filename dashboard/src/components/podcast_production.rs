//! Podcast production form

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use shared::HostStyle;

use crate::api;
use crate::components::{ResultPanel, SubmitButton};
use crate::store::{run_submit, FormStore};

#[component]
pub fn PodcastProductionForm() -> impl IntoView {
    let state = expect_context::<FormStore>().podcast_production;

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        run_submit(state, |req| async move {
            api::submit_podcast_production(&req).await
        });
    };

    view! {
        <form class="workflow-form" on:submit=submit>
            <div class="field">
                <label>"Episode Topic"</label>
                <input
                    type="text"
                    required
                    placeholder="Enter the main topic for your podcast episode"
                    prop:value=move || state.data.with(|d| d.episode_topic.clone())
                    on:input=move |ev| {
                        state.data.update(|d| d.episode_topic = event_target_value(&ev))
                    }
                />
            </div>

            <div class="field">
                <label>"Source Content"</label>
                <textarea
                    rows="4"
                    required
                    placeholder="Provide source material or research content for the episode"
                    prop:value=move || state.data.with(|d| d.source_content.clone())
                    on:input=move |ev| {
                        state.data.update(|d| d.source_content = event_target_value(&ev))
                    }
                ></textarea>
            </div>

            <div class="field">
                <label>"Target Duration (minutes)"</label>
                <input
                    type="number"
                    required
                    min="5"
                    max="120"
                    prop:value=move || state.data.with(|d| d.target_duration.to_string())
                    on:input=move |ev| {
                        let minutes = event_target_value(&ev).parse().unwrap_or(0);
                        state.data.update(|d| d.target_duration = minutes);
                    }
                />
            </div>

            <div class="field">
                <label>"Host Style"</label>
                <select on:change=move |ev| {
                    if let Some(style) = HostStyle::from_value(&event_target_value(&ev)) {
                        state.data.update(|d| d.host_style = style);
                    }
                }>
                    {HostStyle::ALL.into_iter().map(|opt| view! {
                        <option
                            value=opt.as_str()
                            selected=move || state.data.with(|d| d.host_style == opt)
                        >
                            {opt.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <div class="field">
                <label>"Episode Number"</label>
                <input
                    type="text"
                    required
                    placeholder="e.g., 001, S01E01"
                    prop:value=move || state.data.with(|d| d.episode_number.clone())
                    on:input=move |ev| {
                        state.data.update(|d| d.episode_number = event_target_value(&ev))
                    }
                />
            </div>

            <SubmitButton
                phase=state.phase
                idle_label="Generate Podcast Episode"
                busy_label="Producing Podcast..."
            />
        </form>

        <ResultPanel result=state.result heading="Podcast Results" />
    }
}
