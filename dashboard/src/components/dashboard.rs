//! Dashboard page: sidebar navigation plus the active workflow form

use leptos::prelude::*;

use shared::Workflow;

use crate::components::{
    ArticleWritingForm, ContentPlanningForm, FactCheckingForm, Header, MarketResearchForm,
    MasterPipelineForm, PodcastProductionForm, TabNav, ToolsPanel, VideoProductionForm,
};
use crate::store::FormStore;
use crate::Page;

#[component]
pub fn DashboardPage(page: RwSignal<Page>) -> impl IntoView {
    let store = expect_context::<FormStore>();
    let active = store.active;

    view! {
        <Header page=page />
        <div class="dashboard">
            <aside class="sidebar">
                <TabNav />
                <ToolsPanel />
            </aside>

            <main class="workspace">
                <div class="card">
                    <div class="card-heading">
                        <h1>{move || active.get().title()}</h1>
                        <p>{move || active.get().description()}</p>
                    </div>

                    <Show when=move || active.get() == Workflow::MasterPipeline>
                        <MasterPipelineForm />
                    </Show>

                    <Show when=move || active.get() == Workflow::MarketResearch>
                        <MarketResearchForm />
                    </Show>

                    <Show when=move || active.get() == Workflow::ContentPlanning>
                        <ContentPlanningForm />
                    </Show>

                    <Show when=move || active.get() == Workflow::ArticleWriting>
                        <ArticleWritingForm />
                    </Show>

                    <Show when=move || active.get() == Workflow::PodcastProduction>
                        <PodcastProductionForm />
                    </Show>

                    <Show when=move || active.get() == Workflow::VideoProduction>
                        <VideoProductionForm />
                    </Show>

                    <Show when=move || active.get() == Workflow::FactChecking>
                        <FactCheckingForm />
                    </Show>
                </div>
            </main>
        </div>
    }
}
