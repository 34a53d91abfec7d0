//! Master pipeline form: aggregates the whole production run in one request

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use shared::{toggle_membership, ApprovalLevel, CONTENT_FORMAT_OPTIONS, PLATFORM_OPTIONS};

use crate::api;
use crate::components::{ResultPanel, SubmitButton};
use crate::store::{run_submit, FormStore};

#[component]
pub fn MasterPipelineForm() -> impl IntoView {
    let state = expect_context::<FormStore>().master_pipeline;

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        run_submit(state, |req| async move {
            api::submit_master_pipeline(&req).await
        });
    };

    view! {
        <p class="field-note">
            "The master pipeline runs the complete production process: market research, "
            "content planning, creation across the selected formats, fact-checking, and "
            "multi-platform publishing."
        </p>

        <form class="workflow-form" on:submit=submit>
            <div class="field">
                <label>"Project Name"</label>
                <input
                    type="text"
                    required
                    placeholder="Enter a name for your content project"
                    prop:value=move || state.data.with(|d| d.project_name.clone())
                    on:input=move |ev| {
                        state.data.update(|d| d.project_name = event_target_value(&ev))
                    }
                />
            </div>

            <div class="field">
                <label>"Primary Topic"</label>
                <input
                    type="text"
                    required
                    placeholder="Main topic for content creation"
                    prop:value=move || state.data.with(|d| d.primary_topic.clone())
                    on:input=move |ev| {
                        state.data.update(|d| d.primary_topic = event_target_value(&ev))
                    }
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
                <label>"Content Formats"</label>
                <div class="checkbox-group">
                    {CONTENT_FORMAT_OPTIONS.into_iter().map(|(value, label)| view! {
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || {
                                    state.data.with(|d| {
                                        d.content_formats.iter().any(|f| f == value)
                                    })
                                }
                                on:change=move |_| {
                                    state.data.update(|d| {
                                        toggle_membership(&mut d.content_formats, value)
                                    })
                                }
                            />
                            {label}
                        </label>
                    }).collect_view()}
                </div>
            </div>

            <div class="field">
                <label>"Publishing Platforms"</label>
                <div class="checkbox-group">
                    {PLATFORM_OPTIONS.into_iter().map(|(value, label)| view! {
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || {
                                    state.data.with(|d| {
                                        d.publishing_platforms.iter().any(|p| p == value)
                                    })
                                }
                                on:change=move |_| {
                                    state.data.update(|d| {
                                        toggle_membership(&mut d.publishing_platforms, value)
                                    })
                                }
                            />
                            {label}
                        </label>
                    }).collect_view()}
                </div>
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
                <label>"Project Deadline"</label>
                <input
                    type="date"
                    required
                    prop:value=move || state.data.with(|d| d.project_deadline.clone())
                    on:input=move |ev| {
                        state.data.update(|d| d.project_deadline = event_target_value(&ev))
                    }
                />
            </div>

            <div class="field">
                <label>"Approval Level"</label>
                <select on:change=move |ev| {
                    if let Some(level) = ApprovalLevel::from_value(&event_target_value(&ev)) {
                        state.data.update(|d| d.approval_level = level);
                    }
                }>
                    {ApprovalLevel::ALL.into_iter().map(|opt| view! {
                        <option
                            value=opt.as_str()
                            selected=move || state.data.with(|d| d.approval_level == opt)
                        >
                            {opt.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <SubmitButton
                phase=state.phase
                idle_label="Launch Complete Pipeline"
                busy_label="Running Master Pipeline..."
            />
        </form>

        <ResultPanel result=state.result heading="Pipeline Results" />
    }
}
