//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod article_writing;
mod content_planning;
mod controls;
mod dashboard;
mod fact_checking;
mod header;
mod landing;
mod market_research;
mod master_pipeline;
mod podcast_production;
mod tabs;
mod tools;
mod video_production;

pub use article_writing::ArticleWritingForm;
pub use content_planning::ContentPlanningForm;
pub use controls::{ResultPanel, SubmitButton};
pub use dashboard::DashboardPage;
pub use fact_checking::FactCheckingForm;
pub use header::Header;
pub use landing::Landing;
pub use market_research::MarketResearchForm;
pub use master_pipeline::MasterPipelineForm;
pub use podcast_production::PodcastProductionForm;
pub use tabs::TabNav;
pub use tools::ToolsPanel;
pub use video_production::VideoProductionForm;
