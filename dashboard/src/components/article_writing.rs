//! Article writing form

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use shared::{split_lines, AudienceLevel};

use crate::api;
use crate::components::{ResultPanel, SubmitButton};
use crate::store::{run_submit, FormStore};

#[component]
pub fn ArticleWritingForm() -> impl IntoView {
    let state = expect_context::<FormStore>().article_writing;

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        run_submit(state, |req| async move {
            api::submit_article_writing(&req).await
        });
    };

    view! {
        <form class="workflow-form" on:submit=submit>
            <div class="field">
                <label>"Article Topic"</label>
                <input
                    type="text"
                    required
                    placeholder="Enter the main topic for your article"
                    prop:value=move || state.data.with(|d| d.topic.clone())
                    on:input=move |ev| state.data.update(|d| d.topic = event_target_value(&ev))
                />
            </div>

            <div class="field">
                <label>"Target Keywords (one per line)"</label>
                <textarea
                    rows="4"
                    required
                    placeholder="AI medical diagnosis\nartificial intelligence healthcare\nAI diagnostics"
                    prop:value=move || state.data.with(|d| d.target_keywords.join("\n"))
                    on:input=move |ev| {
                        state
                            .data
                            .update(|d| d.target_keywords = split_lines(&event_target_value(&ev)))
                    }
                ></textarea>
            </div>

            <div class="field">
                <label>"Word Count Target"</label>
                <input
                    type="number"
                    required
                    min="500"
                    max="5000"
                    prop:value=move || state.data.with(|d| d.word_count_target.to_string())
                    on:input=move |ev| {
                        // unparseable input becomes 0 and is caught by validation
                        let count = event_target_value(&ev).parse().unwrap_or(0);
                        state.data.update(|d| d.word_count_target = count);
                    }
                />
            </div>

            <div class="field">
                <label>"Audience Level"</label>
                <select on:change=move |ev| {
                    if let Some(level) = AudienceLevel::from_value(&event_target_value(&ev)) {
                        state.data.update(|d| d.audience_level = level);
                    }
                }>
                    {AudienceLevel::ALL.into_iter().map(|opt| view! {
                        <option
                            value=opt.as_str()
                            selected=move || state.data.with(|d| d.audience_level == opt)
                        >
                            {opt.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <div class="field">
                <label>"Content Angle"</label>
                <textarea
                    rows="3"
                    required
                    placeholder="Describe the unique angle or approach for this article"
                    prop:value=move || state.data.with(|d| d.content_angle.clone())
                    on:input=move |ev| {
                        state.data.update(|d| d.content_angle = event_target_value(&ev))
                    }
                ></textarea>
            </div>

            <SubmitButton
                phase=state.phase
                idle_label="Generate Article"
                busy_label="Writing Article..."
            />
        </form>

        <ResultPanel result=state.result heading="Article Results" />
    }
}
