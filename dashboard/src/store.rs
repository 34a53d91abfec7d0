//! ==============================================================================
//! store.rs - per-workflow form state, keyed by workflow
//! ==============================================================================
//!
//! purpose:
//!     holds every form's state in one store created at app startup and
//!     provided via context. tab switches unmount the form components, but
//!     their state lives here, so nothing is lost on navigation.
//!
//! design rationale:
//!     each form owns its own submission phase and result panel text.
//!     there is no process-wide "is processing" boolean: a request started
//!     in one tab can never toggle another tab's button.
//!
//! ==============================================================================

use std::future::Future;

use leptos::prelude::*;
use serde_json::Value;

use shared::{
    render_outcome, ArticleWritingRequest, ContentPlanningRequest, FactCheckingRequest,
    MarketResearchRequest, MasterPipelineRequest, Phase, PodcastProductionRequest,
    VideoProductionRequest, Workflow,
};

use crate::api::ApiError;

/// one form's slice of the store: payload, submission phase, result text
pub struct FormState<T: Send + Sync + 'static> {
    pub data: RwSignal<T>,
    pub phase: RwSignal<Phase>,
    pub result: RwSignal<Option<String>>,
}

// RwSignal is Copy, so FormState can be too regardless of T
impl<T: Send + Sync + 'static> Clone for FormState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FormState<T> {}

impl<T: Default + Send + Sync + 'static> FormState<T> {
    fn new() -> Self {
        Self {
            data: RwSignal::new(T::default()),
            phase: RwSignal::new(Phase::default()),
            result: RwSignal::new(None),
        }
    }
}

/// app-wide store: the active tab plus one `FormState` per workflow
#[derive(Clone, Copy)]
pub struct FormStore {
    pub active: RwSignal<Workflow>,
    pub market_research: FormState<MarketResearchRequest>,
    pub content_planning: FormState<ContentPlanningRequest>,
    pub article_writing: FormState<ArticleWritingRequest>,
    pub podcast_production: FormState<PodcastProductionRequest>,
    pub video_production: FormState<VideoProductionRequest>,
    pub fact_checking: FormState<FactCheckingRequest>,
    pub master_pipeline: FormState<MasterPipelineRequest>,
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Workflow::default()),
            market_research: FormState::new(),
            content_planning: FormState::new(),
            article_writing: FormState::new(),
            podcast_production: FormState::new(),
            video_production: FormState::new(),
            fact_checking: FormState::new(),
            master_pipeline: FormState::new(),
        }
    }

    /// true while any form has a request in flight; drives the header spinner
    pub fn any_busy(&self) -> bool {
        self.market_research.phase.get().is_busy()
            || self.content_planning.phase.get().is_busy()
            || self.article_writing.phase.get().is_busy()
            || self.podcast_production.phase.get().is_busy()
            || self.video_production.phase.get().is_busy()
            || self.fact_checking.phase.get().is_busy()
            || self.master_pipeline.phase.get().is_busy()
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

// ==============================================================================
// submission driver
// ==============================================================================

/// run one submission attempt for a form: flip its phase to in-flight, fire
/// the api call with a snapshot of the current payload, render the outcome
/// into its result panel, flip the phase back whatever happened.
pub fn run_submit<T, F, Fut>(state: FormState<T>, call: F)
where
    T: Clone + Send + Sync + 'static,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<Value, ApiError>> + 'static,
{
    state.phase.update(|p| *p = p.begin());

    let fut = call(state.data.get_untracked());
    leptos::task::spawn_local(async move {
        let result = fut.await;
        if let Err(err) = &result {
            web_sys::console::warn_1(&format!("submission failed: {err}").into());
        }
        state.result.set(Some(render_outcome(&result)));
        state.phase.update(|p| *p = p.finish());
    });
}
