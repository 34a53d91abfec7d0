//! ==============================================================================
//! api.rs - API client for the content generation backend
//! ==============================================================================
//!
//! purpose:
//!     one submission function per workflow, each a validated pass-through:
//!     serialize the typed payload, POST it to the workflow's endpoint, hand
//!     back the raw json body. the backend response schema is opaque here.
//!
//! configuration:
//!     the api base defaults to a local backend and can be overridden via
//!     localStorage so deployments can point the same bundle elsewhere.
//!
//! ==============================================================================

use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use shared::{
    ArticleWritingRequest, ContentPlanningRequest, FactCheckingRequest, MarketResearchRequest,
    MasterPipelineRequest, PodcastProductionRequest, ValidationError, VideoProductionRequest,
    Workflow,
};

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// localStorage key that overrides the compiled-in base url
pub const API_BASE_STORAGE_KEY: &str = "content_studio_api_base";

/// resolve the api base, trailing slash stripped
pub fn api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_BASE_STORAGE_KEY).ok().flatten());

    match stored {
        Some(base) if !base.trim().is_empty() => base.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}

// ==============================================================================
// errors
// ==============================================================================

/// everything that can go wrong between a submit click and a rendered result.
/// the kinds stay distinct here even though the result panel collapses them
/// all into one "Error: ..." line.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// payload rejected before any network traffic
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    /// transport-level failure (dns, refused connection, cors)
    #[error("request failed: {0}")]
    Http(String),
    /// backend answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),
    /// backend answered 2xx but the body was not json
    #[error("could not decode response: {0}")]
    Decode(String),
}

// ==============================================================================
// transport
// ==============================================================================

async fn post_json<T: Serialize>(workflow: Workflow, payload: &T) -> Result<Value, ApiError> {
    let url = format!("{}/{}", api_base(), workflow.path());
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Http(e.to_string()))?;

    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| ApiError::Http(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Http(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

// ==============================================================================
// submission functions, one per workflow
// ==============================================================================

pub async fn submit_market_research(req: &MarketResearchRequest) -> Result<Value, ApiError> {
    req.validate()?;
    post_json(Workflow::MarketResearch, req).await
}

pub async fn submit_content_planning(req: &ContentPlanningRequest) -> Result<Value, ApiError> {
    req.validate()?;
    post_json(Workflow::ContentPlanning, req).await
}

pub async fn submit_article_writing(req: &ArticleWritingRequest) -> Result<Value, ApiError> {
    req.validate()?;
    post_json(Workflow::ArticleWriting, req).await
}

pub async fn submit_podcast_production(req: &PodcastProductionRequest) -> Result<Value, ApiError> {
    req.validate()?;
    post_json(Workflow::PodcastProduction, req).await
}

pub async fn submit_video_production(req: &VideoProductionRequest) -> Result<Value, ApiError> {
    req.validate()?;
    post_json(Workflow::VideoProduction, req).await
}

pub async fn submit_fact_checking(req: &FactCheckingRequest) -> Result<Value, ApiError> {
    req.validate()?;
    post_json(Workflow::FactChecking, req).await
}

pub async fn submit_master_pipeline(req: &MasterPipelineRequest) -> Result<Value, ApiError> {
    req.validate()?;
    post_json(Workflow::MasterPipeline, req).await
}

/// list the tools the backend exposes. parameter-less GET, raw body returned.
pub async fn get_available_tools() -> Result<Value, ApiError> {
    let url = format!("{}/tools", api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Http(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
