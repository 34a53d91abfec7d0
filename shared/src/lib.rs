//! ==============================================================================
//! lib.rs - shared types for the ai content studio
//! ==============================================================================
//!
//! purpose:
//!     defines the request schemas for the seven content workflows, the
//!     option enums backing their select fields, and the small pieces of
//!     form logic (textarea splitting, checkbox toggling, submission phase,
//!     result rendering) that the dashboard binds to its views.
//!
//! relationships:
//!     - used by: dashboard (form state, api payloads, result panels)
//!
//! design rationale:
//!     everything here is plain data and pure functions, so the whole
//!     client contract stays testable on the host without a wasm runtime.
//!     the dashboard crate is only the leptos binding layer on top.
//!
//! ==============================================================================

mod options;
mod outcome;
mod requests;
mod submit;
mod text;
mod workflow;

pub use options::{
    ApprovalLevel, AudienceLevel, HostStyle, PublishingFrequency, ResearchDepth, TargetPlatform,
    VerificationLevel, VideoLength, VideoStyle,
};
pub use outcome::{render_error, render_outcome, render_success};
pub use requests::{
    ArticleWritingRequest, ContentPlanningRequest, FactCheckingRequest, MarketResearchRequest,
    MasterPipelineRequest, PodcastProductionRequest, ValidationError, VideoProductionRequest,
    CONTENT_FORMAT_OPTIONS, PLATFORM_OPTIONS,
};
pub use submit::Phase;
pub use text::{split_lines, toggle_membership};
pub use workflow::Workflow;
