//! ==============================================================================
//! requests.rs - typed request payloads for the seven workflows
//! ==============================================================================
//!
//! purpose:
//!     one serde struct per workflow endpoint, with the exact field names the
//!     backend expects. `Default` carries the illustrative sample values each
//!     form starts with, and `validate` runs the boundary checks before a
//!     payload is allowed to reach the network layer.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::{
    ApprovalLevel, AudienceLevel, HostStyle, PublishingFrequency, ResearchDepth, TargetPlatform,
    VerificationLevel, VideoLength, VideoStyle,
};

/// structured reason a payload was rejected before transmission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },
    #[error("{field} must be a YYYY-MM-DD date, got \"{value}\"")]
    BadDate {
        field: &'static str,
        value: String,
    },
    #[error("{field} needs at least one selection")]
    NothingSelected { field: &'static str },
}

// ==============================================================================
// validation helpers
// ==============================================================================

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

fn require_range(
    field: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

fn require_some(field: &'static str, values: &[String]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::NothingSelected { field });
    }
    Ok(())
}

/// shape check only: four digit year, two digit month and day, dashes between
fn require_date(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let bad = || ValidationError::BadDate {
        field,
        value: value.to_string(),
    };
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(bad());
    }
    for (i, b) in bytes.iter().enumerate() {
        if i != 4 && i != 7 && !b.is_ascii_digit() {
            return Err(bad());
        }
    }
    let month: u32 = value[5..7].parse().map_err(|_| bad())?;
    let day: u32 = value[8..10].parse().map_err(|_| bad())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(bad());
    }
    Ok(())
}

// ==============================================================================
// market research
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketResearchRequest {
    pub topic: String,
    pub target_audience: String,
    /// one domain per textarea line, blank lines dropped
    pub competitor_domains: Vec<String>,
    pub research_depth: ResearchDepth,
}

impl Default for MarketResearchRequest {
    fn default() -> Self {
        Self {
            topic: "AI in Healthcare".into(),
            target_audience: "Healthcare professionals, hospital administrators, medical researchers"
                .into(),
            competitor_domains: vec!["healthitnews.com".into(), "medicalfuturist.com".into()],
            research_depth: ResearchDepth::default(),
        }
    }
}

impl MarketResearchRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("topic", &self.topic)?;
        require_text("target_audience", &self.target_audience)?;
        // competitor domains are optional
        Ok(())
    }
}

// ==============================================================================
// content planning
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentPlanningRequest {
    pub research_summary: String,
    pub content_goals: String,
    pub brand_guidelines: String,
    pub publishing_frequency: PublishingFrequency,
}

impl Default for ContentPlanningRequest {
    fn default() -> Self {
        Self {
            research_summary: "AI healthcare market research data showing growth trends and opportunities"
                .into(),
            content_goals: "Establish thought leadership in AI healthcare, drive engagement from healthcare professionals"
                .into(),
            brand_guidelines: "Professional yet approachable tone, evidence-based content".into(),
            publishing_frequency: PublishingFrequency::default(),
        }
    }
}

impl ContentPlanningRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("research_summary", &self.research_summary)?;
        require_text("content_goals", &self.content_goals)?;
        require_text("brand_guidelines", &self.brand_guidelines)?;
        Ok(())
    }
}

// ==============================================================================
// article writing
// ==============================================================================

pub const WORD_COUNT_MIN: u32 = 500;
pub const WORD_COUNT_MAX: u32 = 5000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleWritingRequest {
    pub topic: String,
    /// one keyword per textarea line, blank lines dropped
    pub target_keywords: Vec<String>,
    pub word_count_target: u32,
    pub audience_level: AudienceLevel,
    pub content_angle: String,
}

impl Default for ArticleWritingRequest {
    fn default() -> Self {
        Self {
            topic: "AI-Powered Medical Diagnosis: Transforming Healthcare in 2025".into(),
            target_keywords: vec![
                "AI medical diagnosis".into(),
                "artificial intelligence healthcare".into(),
                "AI diagnostics".into(),
            ],
            word_count_target: 1500,
            audience_level: AudienceLevel::default(),
            content_angle: "Practical implementation guide for healthcare professionals".into(),
        }
    }
}

impl ArticleWritingRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("topic", &self.topic)?;
        require_some("target_keywords", &self.target_keywords)?;
        require_range(
            "word_count_target",
            self.word_count_target,
            WORD_COUNT_MIN,
            WORD_COUNT_MAX,
        )?;
        require_text("content_angle", &self.content_angle)?;
        Ok(())
    }
}

// ==============================================================================
// podcast production
// ==============================================================================

pub const DURATION_MIN: u32 = 5;
pub const DURATION_MAX: u32 = 120;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PodcastProductionRequest {
    pub episode_topic: String,
    pub source_content: String,
    /// minutes
    pub target_duration: u32,
    pub host_style: HostStyle,
    pub episode_number: String,
}

impl Default for PodcastProductionRequest {
    fn default() -> Self {
        Self {
            episode_topic: "AI in Healthcare: The Future of Medical Diagnosis".into(),
            source_content: "AI is revolutionizing healthcare by improving diagnostic accuracy and reducing medical errors..."
                .into(),
            target_duration: 25,
            host_style: HostStyle::default(),
            episode_number: "001".into(),
        }
    }
}

impl PodcastProductionRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("episode_topic", &self.episode_topic)?;
        require_text("source_content", &self.source_content)?;
        require_range(
            "target_duration",
            self.target_duration,
            DURATION_MIN,
            DURATION_MAX,
        )?;
        require_text("episode_number", &self.episode_number)?;
        Ok(())
    }
}

// ==============================================================================
// video production
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoProductionRequest {
    pub video_topic: String,
    pub target_platform: TargetPlatform,
    pub video_length: VideoLength,
    pub video_style: VideoStyle,
    pub brand_guidelines: String,
}

impl Default for VideoProductionRequest {
    fn default() -> Self {
        Self {
            video_topic: "AI-Powered Medical Diagnosis Explained".into(),
            target_platform: TargetPlatform::default(),
            video_length: VideoLength::default(),
            video_style: VideoStyle::default(),
            brand_guidelines: "Professional blue theme, modern fonts, clean graphics".into(),
        }
    }
}

impl VideoProductionRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("video_topic", &self.video_topic)?;
        require_text("brand_guidelines", &self.brand_guidelines)?;
        Ok(())
    }
}

// ==============================================================================
// fact checking
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactCheckingRequest {
    pub content_to_verify: String,
    pub verification_level: VerificationLevel,
}

impl Default for FactCheckingRequest {
    fn default() -> Self {
        Self {
            content_to_verify: "AI in healthcare is projected to reach $613.81 billion by 2034, growing at a CAGR of 37%.\n\
Currently, 100% of healthcare systems use AI for clinical documentation.\n\
Studies show that 46% of patients use AI symptom checkers for mental health concerns.\n\
The FDA has approved over 1250 AI-based medical devices as of 2024."
                .into(),
            verification_level: VerificationLevel::default(),
        }
    }
}

impl FactCheckingRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("content_to_verify", &self.content_to_verify)?;
        Ok(())
    }
}

// ==============================================================================
// master pipeline
// ==============================================================================

/// checkbox group options: (wire value, label)
pub const CONTENT_FORMAT_OPTIONS: [(&str, &str); 6] = [
    ("article", "Articles & Blog Posts"),
    ("podcast", "Podcast Episodes"),
    ("video", "Video Content"),
    ("social_media", "Social Media Posts"),
    ("newsletter", "Email Newsletters"),
    ("infographic", "Infographics"),
];

pub const PLATFORM_OPTIONS: [(&str, &str); 8] = [
    ("wordpress", "WordPress"),
    ("youtube", "YouTube"),
    ("linkedin", "LinkedIn"),
    ("twitter", "Twitter/X"),
    ("instagram", "Instagram"),
    ("facebook", "Facebook"),
    ("tiktok", "TikTok"),
    ("medium", "Medium"),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MasterPipelineRequest {
    pub project_name: String,
    pub primary_topic: String,
    pub target_audience: String,
    /// multi-select, membership toggled by checkbox
    pub content_formats: Vec<String>,
    pub publishing_platforms: Vec<String>,
    pub brand_guidelines: String,
    /// YYYY-MM-DD
    pub project_deadline: String,
    pub approval_level: ApprovalLevel,
}

impl Default for MasterPipelineRequest {
    fn default() -> Self {
        Self {
            project_name: "AI Marketing Guide 2025".into(),
            primary_topic: "AI-powered content marketing strategies".into(),
            target_audience: "Digital marketers and business owners aged 25-45".into(),
            content_formats: vec![
                "article".into(),
                "podcast".into(),
                "video".into(),
                "social_media".into(),
            ],
            publishing_platforms: vec![
                "wordpress".into(),
                "youtube".into(),
                "linkedin".into(),
                "twitter".into(),
            ],
            brand_guidelines: "Professional, approachable, data-driven tone with blue/white color scheme"
                .into(),
            project_deadline: "2025-09-01".into(),
            approval_level: ApprovalLevel::default(),
        }
    }
}

impl MasterPipelineRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("project_name", &self.project_name)?;
        require_text("primary_topic", &self.primary_topic)?;
        require_text("target_audience", &self.target_audience)?;
        require_some("content_formats", &self.content_formats)?;
        require_some("publishing_platforms", &self.publishing_platforms)?;
        require_text("brand_guidelines", &self.brand_guidelines)?;
        require_date("project_deadline", &self.project_deadline)?;
        Ok(())
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn field_names(value: &Value) -> Vec<String> {
        value
            .as_object()
            .expect("payload must be a json object")
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn test_market_research_wire_fields() {
        let json = serde_json::to_value(MarketResearchRequest::default()).unwrap();
        let mut fields = field_names(&json);
        fields.sort();
        assert_eq!(
            fields,
            vec![
                "competitor_domains",
                "research_depth",
                "target_audience",
                "topic"
            ]
        );
        assert_eq!(json["research_depth"], "comprehensive");
        assert_eq!(json["competitor_domains"][0], "healthitnews.com");
    }

    #[test]
    fn test_content_planning_wire_fields() {
        let json = serde_json::to_value(ContentPlanningRequest::default()).unwrap();
        assert_eq!(json["publishing_frequency"], "3x per week");
        assert!(json["research_summary"].as_str().unwrap().contains("AI healthcare"));
    }

    #[test]
    fn test_article_writing_wire_fields() {
        let json = serde_json::to_value(ArticleWritingRequest::default()).unwrap();
        assert_eq!(json["word_count_target"], 1500);
        assert_eq!(json["audience_level"], "intermediate");
        assert_eq!(json["target_keywords"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_podcast_wire_fields() {
        let json = serde_json::to_value(PodcastProductionRequest::default()).unwrap();
        assert_eq!(json["target_duration"], 25);
        assert_eq!(json["host_style"], "conversational");
        assert_eq!(json["episode_number"], "001");
    }

    #[test]
    fn test_video_wire_fields() {
        let json = serde_json::to_value(VideoProductionRequest::default()).unwrap();
        assert_eq!(json["target_platform"], "youtube");
        assert_eq!(json["video_length"], "8-10 minutes");
        assert_eq!(json["video_style"], "educational");
    }

    #[test]
    fn test_fact_checking_wire_fields() {
        let json = serde_json::to_value(FactCheckingRequest::default()).unwrap();
        assert_eq!(json["verification_level"], "thorough");
        assert!(json["content_to_verify"].as_str().unwrap().contains("FDA"));
    }

    #[test]
    fn test_master_pipeline_wire_fields() {
        let json = serde_json::to_value(MasterPipelineRequest::default()).unwrap();
        assert_eq!(json["approval_level"], "medium");
        assert_eq!(json["project_deadline"], "2025-09-01");
        assert_eq!(json["content_formats"].as_array().unwrap().len(), 4);
        assert_eq!(json["publishing_platforms"][0], "wordpress");
    }

    #[test]
    fn test_defaults_pass_validation() {
        assert!(MarketResearchRequest::default().validate().is_ok());
        assert!(ContentPlanningRequest::default().validate().is_ok());
        assert!(ArticleWritingRequest::default().validate().is_ok());
        assert!(PodcastProductionRequest::default().validate().is_ok());
        assert!(VideoProductionRequest::default().validate().is_ok());
        assert!(FactCheckingRequest::default().validate().is_ok());
        assert!(MasterPipelineRequest::default().validate().is_ok());
    }

    #[test]
    fn test_empty_required_field_rejected() {
        let req = MarketResearchRequest {
            topic: "   ".into(),
            ..Default::default()
        };
        assert_eq!(
            req.validate(),
            Err(ValidationError::Empty { field: "topic" })
        );
    }

    #[test]
    fn test_word_count_bounds() {
        let mut req = ArticleWritingRequest::default();
        req.word_count_target = 499;
        assert!(matches!(
            req.validate(),
            Err(ValidationError::OutOfRange { field: "word_count_target", .. })
        ));
        req.word_count_target = 500;
        assert!(req.validate().is_ok());
        req.word_count_target = 5000;
        assert!(req.validate().is_ok());
        req.word_count_target = 5001;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_duration_bounds() {
        let mut req = PodcastProductionRequest::default();
        req.target_duration = 4;
        assert!(req.validate().is_err());
        req.target_duration = 120;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_deadline_shape() {
        let mut req = MasterPipelineRequest::default();
        req.project_deadline = "2025-9-1".into();
        assert!(matches!(
            req.validate(),
            Err(ValidationError::BadDate { field: "project_deadline", .. })
        ));
        req.project_deadline = "2025-13-01".into();
        assert!(req.validate().is_err());
        req.project_deadline = "2026-01-31".into();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_multi_select_rejected() {
        let req = MasterPipelineRequest {
            content_formats: vec![],
            ..Default::default()
        };
        assert_eq!(
            req.validate(),
            Err(ValidationError::NothingSelected {
                field: "content_formats"
            })
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::Empty { field: "topic" };
        assert_eq!(err.to_string(), "topic must not be empty");
    }
}
