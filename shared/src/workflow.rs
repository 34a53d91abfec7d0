//! ==============================================================================
//! workflow.rs - the seven content workflow identifiers
//! ==============================================================================

use serde::{Deserialize, Serialize};

/// one of the seven content production workflows the studio offers.
///
/// the variant order here is the sidebar order: the master pipeline comes
/// first and is the initial tab.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Workflow {
    MasterPipeline,
    MarketResearch,
    ContentPlanning,
    ArticleWriting,
    PodcastProduction,
    VideoProduction,
    FactChecking,
}

impl Workflow {
    /// sidebar order, master pipeline first
    pub const ALL: [Workflow; 7] = [
        Workflow::MasterPipeline,
        Workflow::MarketResearch,
        Workflow::ContentPlanning,
        Workflow::ArticleWriting,
        Workflow::PodcastProduction,
        Workflow::VideoProduction,
        Workflow::FactChecking,
    ];

    /// kebab-case path segment under the api prefix
    pub fn path(&self) -> &'static str {
        match self {
            Workflow::MasterPipeline => "master-pipeline",
            Workflow::MarketResearch => "market-research",
            Workflow::ContentPlanning => "content-planning",
            Workflow::ArticleWriting => "article-writing",
            Workflow::PodcastProduction => "podcast-production",
            Workflow::VideoProduction => "video-production",
            Workflow::FactChecking => "fact-checking",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Workflow::MasterPipeline => "Master Pipeline",
            Workflow::MarketResearch => "Market Research",
            Workflow::ContentPlanning => "Content Planning",
            Workflow::ArticleWriting => "Article Writing",
            Workflow::PodcastProduction => "Podcast Production",
            Workflow::VideoProduction => "Video Production",
            Workflow::FactChecking => "Fact Checking",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Workflow::MasterPipeline => "Complete content production pipeline",
            Workflow::MarketResearch => "Comprehensive market analysis and trends",
            Workflow::ContentPlanning => "Strategic content calendar and planning",
            Workflow::ArticleWriting => "AI-powered article creation and optimization",
            Workflow::PodcastProduction => "Complete podcast episode production",
            Workflow::VideoProduction => "Professional video content creation",
            Workflow::FactChecking => "Automated content verification and validation",
        }
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Workflow::MasterPipeline
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_kebab_case() {
        for wf in Workflow::ALL {
            let path = wf.path();
            assert!(!path.is_empty());
            assert!(path
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-'));
        }
    }

    #[test]
    fn test_initial_tab_is_master_pipeline() {
        assert_eq!(Workflow::default(), Workflow::MasterPipeline);
        assert_eq!(Workflow::ALL[0], Workflow::MasterPipeline);
    }

    #[test]
    fn test_serde_uses_path_segment() {
        let json = serde_json::to_string(&Workflow::MarketResearch).unwrap();
        assert_eq!(json, "\"market-research\"");
    }
}
