//! ==============================================================================
//! options.rs - option enums backing the form select fields
//! ==============================================================================
//!
//! each enum serializes to the exact wire string the backend expects
//! (including the odd ones like "3x per week" and the bucketed video
//! lengths). `as_str` mirrors the serde rename so `<select>` bindings can
//! round-trip values, and `label` is the human text shown in the option.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

// ==============================================================================
// market research
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResearchDepth {
    Basic,
    Comprehensive,
    Advanced,
}

impl ResearchDepth {
    pub const ALL: [ResearchDepth; 3] = [
        ResearchDepth::Basic,
        ResearchDepth::Comprehensive,
        ResearchDepth::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResearchDepth::Basic => "basic",
            ResearchDepth::Comprehensive => "comprehensive",
            ResearchDepth::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResearchDepth::Basic => "Basic",
            ResearchDepth::Comprehensive => "Comprehensive",
            ResearchDepth::Advanced => "Advanced",
        }
    }

    pub fn from_value(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

impl Default for ResearchDepth {
    fn default() -> Self {
        ResearchDepth::Comprehensive
    }
}

// ==============================================================================
// content planning
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PublishingFrequency {
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "3x per week")]
    ThreePerWeek,
    #[serde(rename = "2x per week")]
    TwoPerWeek,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "bi-weekly")]
    BiWeekly,
}

impl PublishingFrequency {
    pub const ALL: [PublishingFrequency; 5] = [
        PublishingFrequency::Daily,
        PublishingFrequency::ThreePerWeek,
        PublishingFrequency::TwoPerWeek,
        PublishingFrequency::Weekly,
        PublishingFrequency::BiWeekly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PublishingFrequency::Daily => "daily",
            PublishingFrequency::ThreePerWeek => "3x per week",
            PublishingFrequency::TwoPerWeek => "2x per week",
            PublishingFrequency::Weekly => "weekly",
            PublishingFrequency::BiWeekly => "bi-weekly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PublishingFrequency::Daily => "Daily",
            PublishingFrequency::ThreePerWeek => "3x per week",
            PublishingFrequency::TwoPerWeek => "2x per week",
            PublishingFrequency::Weekly => "Weekly",
            PublishingFrequency::BiWeekly => "Bi-weekly",
        }
    }

    pub fn from_value(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

impl Default for PublishingFrequency {
    fn default() -> Self {
        PublishingFrequency::ThreePerWeek
    }
}

// ==============================================================================
// article writing
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AudienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl AudienceLevel {
    pub const ALL: [AudienceLevel; 3] = [
        AudienceLevel::Beginner,
        AudienceLevel::Intermediate,
        AudienceLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AudienceLevel::Beginner => "beginner",
            AudienceLevel::Intermediate => "intermediate",
            AudienceLevel::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AudienceLevel::Beginner => "Beginner",
            AudienceLevel::Intermediate => "Intermediate",
            AudienceLevel::Advanced => "Advanced",
        }
    }

    pub fn from_value(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

impl Default for AudienceLevel {
    fn default() -> Self {
        AudienceLevel::Intermediate
    }
}

// ==============================================================================
// podcast production
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HostStyle {
    Conversational,
    Professional,
    Energetic,
    Educational,
}

impl HostStyle {
    pub const ALL: [HostStyle; 4] = [
        HostStyle::Conversational,
        HostStyle::Professional,
        HostStyle::Energetic,
        HostStyle::Educational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HostStyle::Conversational => "conversational",
            HostStyle::Professional => "professional",
            HostStyle::Energetic => "energetic",
            HostStyle::Educational => "educational",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HostStyle::Conversational => "Conversational",
            HostStyle::Professional => "Professional",
            HostStyle::Energetic => "Energetic",
            HostStyle::Educational => "Educational",
        }
    }

    pub fn from_value(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

impl Default for HostStyle {
    fn default() -> Self {
        HostStyle::Conversational
    }
}

// ==============================================================================
// video production
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TargetPlatform {
    Youtube,
    Tiktok,
    Instagram,
    Linkedin,
    Twitter,
}

impl TargetPlatform {
    pub const ALL: [TargetPlatform; 5] = [
        TargetPlatform::Youtube,
        TargetPlatform::Tiktok,
        TargetPlatform::Instagram,
        TargetPlatform::Linkedin,
        TargetPlatform::Twitter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetPlatform::Youtube => "youtube",
            TargetPlatform::Tiktok => "tiktok",
            TargetPlatform::Instagram => "instagram",
            TargetPlatform::Linkedin => "linkedin",
            TargetPlatform::Twitter => "twitter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TargetPlatform::Youtube => "YouTube",
            TargetPlatform::Tiktok => "TikTok",
            TargetPlatform::Instagram => "Instagram",
            TargetPlatform::Linkedin => "LinkedIn",
            TargetPlatform::Twitter => "Twitter",
        }
    }

    pub fn from_value(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

impl Default for TargetPlatform {
    fn default() -> Self {
        TargetPlatform::Youtube
    }
}

/// bucketed length ranges, sent as the literal range string
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VideoLength {
    #[serde(rename = "30-60 seconds")]
    Seconds30To60,
    #[serde(rename = "1-3 minutes")]
    Minutes1To3,
    #[serde(rename = "3-5 minutes")]
    Minutes3To5,
    #[serde(rename = "5-8 minutes")]
    Minutes5To8,
    #[serde(rename = "8-10 minutes")]
    Minutes8To10,
    #[serde(rename = "10-15 minutes")]
    Minutes10To15,
    #[serde(rename = "15+ minutes")]
    Minutes15Plus,
}

impl VideoLength {
    pub const ALL: [VideoLength; 7] = [
        VideoLength::Seconds30To60,
        VideoLength::Minutes1To3,
        VideoLength::Minutes3To5,
        VideoLength::Minutes5To8,
        VideoLength::Minutes8To10,
        VideoLength::Minutes10To15,
        VideoLength::Minutes15Plus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoLength::Seconds30To60 => "30-60 seconds",
            VideoLength::Minutes1To3 => "1-3 minutes",
            VideoLength::Minutes3To5 => "3-5 minutes",
            VideoLength::Minutes5To8 => "5-8 minutes",
            VideoLength::Minutes8To10 => "8-10 minutes",
            VideoLength::Minutes10To15 => "10-15 minutes",
            VideoLength::Minutes15Plus => "15+ minutes",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }

    pub fn from_value(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

impl Default for VideoLength {
    fn default() -> Self {
        VideoLength::Minutes8To10
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VideoStyle {
    Educational,
    Entertainment,
    Tutorial,
    Documentary,
    Promotional,
}

impl VideoStyle {
    pub const ALL: [VideoStyle; 5] = [
        VideoStyle::Educational,
        VideoStyle::Entertainment,
        VideoStyle::Tutorial,
        VideoStyle::Documentary,
        VideoStyle::Promotional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStyle::Educational => "educational",
            VideoStyle::Entertainment => "entertainment",
            VideoStyle::Tutorial => "tutorial",
            VideoStyle::Documentary => "documentary",
            VideoStyle::Promotional => "promotional",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VideoStyle::Educational => "Educational",
            VideoStyle::Entertainment => "Entertainment",
            VideoStyle::Tutorial => "Tutorial",
            VideoStyle::Documentary => "Documentary",
            VideoStyle::Promotional => "Promotional",
        }
    }

    pub fn from_value(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

impl Default for VideoStyle {
    fn default() -> Self {
        VideoStyle::Educational
    }
}

// ==============================================================================
// fact checking
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerificationLevel {
    Basic,
    Thorough,
    Comprehensive,
}

impl VerificationLevel {
    pub const ALL: [VerificationLevel; 3] = [
        VerificationLevel::Basic,
        VerificationLevel::Thorough,
        VerificationLevel::Comprehensive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationLevel::Basic => "basic",
            VerificationLevel::Thorough => "thorough",
            VerificationLevel::Comprehensive => "comprehensive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VerificationLevel::Basic => "Basic",
            VerificationLevel::Thorough => "Thorough",
            VerificationLevel::Comprehensive => "Comprehensive",
        }
    }

    pub fn from_value(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

impl Default for VerificationLevel {
    fn default() -> Self {
        VerificationLevel::Thorough
    }
}

// ==============================================================================
// master pipeline
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalLevel {
    Low,
    Medium,
    High,
}

impl ApprovalLevel {
    pub const ALL: [ApprovalLevel; 3] = [
        ApprovalLevel::Low,
        ApprovalLevel::Medium,
        ApprovalLevel::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalLevel::Low => "low",
            ApprovalLevel::Medium => "medium",
            ApprovalLevel::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApprovalLevel::Low => "Low - Minimal human oversight",
            ApprovalLevel::Medium => "Medium - Standard review process",
            ApprovalLevel::High => "High - Extensive human review",
        }
    }

    pub fn from_value(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

impl Default for ApprovalLevel {
    fn default() -> Self {
        ApprovalLevel::Medium
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_depth_wire_string() {
        let json = serde_json::to_string(&ResearchDepth::Comprehensive).unwrap();
        assert_eq!(json, "\"comprehensive\"");
        assert_eq!(ResearchDepth::from_value("advanced"), Some(ResearchDepth::Advanced));
        assert_eq!(ResearchDepth::from_value("deep"), None);
    }

    #[test]
    fn test_publishing_frequency_keeps_spaces() {
        let json = serde_json::to_string(&PublishingFrequency::ThreePerWeek).unwrap();
        assert_eq!(json, "\"3x per week\"");
        assert_eq!(
            PublishingFrequency::from_value("bi-weekly"),
            Some(PublishingFrequency::BiWeekly)
        );
    }

    #[test]
    fn test_video_length_buckets() {
        let json = serde_json::to_string(&VideoLength::Minutes15Plus).unwrap();
        assert_eq!(json, "\"15+ minutes\"");
        assert_eq!(VideoLength::default(), VideoLength::Minutes8To10);
    }

    #[test]
    fn test_serde_matches_as_str() {
        // every select binding relies on serde and as_str agreeing
        for depth in ResearchDepth::ALL {
            let json = serde_json::to_string(&depth).unwrap();
            assert_eq!(json, format!("\"{}\"", depth.as_str()));
        }
        for freq in PublishingFrequency::ALL {
            let json = serde_json::to_string(&freq).unwrap();
            assert_eq!(json, format!("\"{}\"", freq.as_str()));
        }
        for length in VideoLength::ALL {
            let json = serde_json::to_string(&length).unwrap();
            assert_eq!(json, format!("\"{}\"", length.as_str()));
        }
        for level in ApprovalLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
    }

    #[test]
    fn test_defaults_match_original_forms() {
        assert_eq!(ResearchDepth::default(), ResearchDepth::Comprehensive);
        assert_eq!(PublishingFrequency::default(), PublishingFrequency::ThreePerWeek);
        assert_eq!(AudienceLevel::default(), AudienceLevel::Intermediate);
        assert_eq!(HostStyle::default(), HostStyle::Conversational);
        assert_eq!(TargetPlatform::default(), TargetPlatform::Youtube);
        assert_eq!(VideoStyle::default(), VideoStyle::Educational);
        assert_eq!(VerificationLevel::default(), VerificationLevel::Thorough);
        assert_eq!(ApprovalLevel::default(), ApprovalLevel::Medium);
    }
}
