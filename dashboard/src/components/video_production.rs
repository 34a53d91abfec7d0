//! Video production form

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use shared::{TargetPlatform, VideoLength, VideoStyle};

use crate::api;
use crate::components::{ResultPanel, SubmitButton};
use crate::store::{run_submit, FormStore};

#[component]
pub fn VideoProductionForm() -> impl IntoView {
    let state = expect_context::<FormStore>().video_production;

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        run_submit(state, |req| async move {
            api::submit_video_production(&req).await
        });
    };

    view! {
        <form class="workflow-form" on:submit=submit>
            <div class="field">
                <label>"Video Topic"</label>
                <input
                    type="text"
                    required
                    placeholder="Enter the main topic for your video"
                    prop:value=move || state.data.with(|d| d.video_topic.clone())
                    on:input=move |ev| {
                        state.data.update(|d| d.video_topic = event_target_value(&ev))
                    }
                />
            </div>

            <div class="field">
                <label>"Target Platform"</label>
                <select on:change=move |ev| {
                    if let Some(platform) = TargetPlatform::from_value(&event_target_value(&ev)) {
                        state.data.update(|d| d.target_platform = platform);
                    }
                }>
                    {TargetPlatform::ALL.into_iter().map(|opt| view! {
                        <option
                            value=opt.as_str()
                            selected=move || state.data.with(|d| d.target_platform == opt)
                        >
                            {opt.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <div class="field">
                <label>"Video Length"</label>
                <select on:change=move |ev| {
                    if let Some(length) = VideoLength::from_value(&event_target_value(&ev)) {
                        state.data.update(|d| d.video_length = length);
                    }
                }>
                    {VideoLength::ALL.into_iter().map(|opt| view! {
                        <option
                            value=opt.as_str()
                            selected=move || state.data.with(|d| d.video_length == opt)
                        >
                            {opt.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <div class="field">
                <label>"Video Style"</label>
                <select on:change=move |ev| {
                    if let Some(style) = VideoStyle::from_value(&event_target_value(&ev)) {
                        state.data.update(|d| d.video_style = style);
                    }
                }>
                    {VideoStyle::ALL.into_iter().map(|opt| view! {
                        <option
                            value=opt.as_str()
                            selected=move || state.data.with(|d| d.video_style == opt)
                        >
                            {opt.label()}
                        </option>
                    }).collect_view()}
                </select>
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

            <SubmitButton
                phase=state.phase
                idle_label="Generate Video Production Plan"
                busy_label="Creating Video Plan..."
            />
        </form>

        <ResultPanel result=state.result heading="Video Production Results" />
    }
}
