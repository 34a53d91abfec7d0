//! Landing page: static marketing copy and the route into the dashboard

use leptos::prelude::*;

use crate::Page;

const FEATURES: [(&str, &str); 6] = [
    (
        "AI-Powered Research",
        "Market analysis, competitor tracking, and trend discovery before a word is written.",
    ),
    (
        "Content Creation",
        "Long-form articles planned, drafted, and optimized for your audience.",
    ),
    (
        "Podcast Production",
        "Full episodes from script to show notes in your host style.",
    ),
    (
        "Video Production",
        "Platform-aware video plans, from 60-second shorts to long-form explainers.",
    ),
    (
        "Multi-Platform Publishing",
        "One pipeline, every channel: blog, social, newsletter, and more.",
    ),
    (
        "Fact Checking",
        "Every claim verified against authoritative sources with citations.",
    ),
];

#[component]
pub fn Landing(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing-header">
                <span class="brand">"AI Content Studio"</span>
                <button class="btn-primary" on:click=move |_| page.set(Page::Dashboard)>
                    "Get Started"
                </button>
            </header>

            <section class="hero">
                <h1>
                    "Your Complete AI Content "
                    <span class="accent">"Production Pipeline"</span>
                </h1>
                <p>
                    "Research, plan, write, record, and publish - one configurable "
                    "pipeline takes an idea from market analysis to multi-platform "
                    "content, with fact checking built in."
                </p>
                <button class="btn-primary" on:click=move |_| page.set(Page::Dashboard)>
                    "Start Creating"
                </button>
            </section>

            <section class="features">
                <h2>"Everything you need to ship content"</h2>
                <div class="feature-grid">
                    {FEATURES.into_iter().map(|(title, blurb)| view! {
                        <div class="feature-card">
                            <h3>{title}</h3>
                            <p>{blurb}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <footer class="landing-footer">
                <p>"© 2025 AI Content Studio"</p>
            </footer>
        </div>
    }
}
