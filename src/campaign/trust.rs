//! Campaign trust scoring
//!
//! Flags crowdfunding descriptions that promise returns no farm can
//! guarantee. Each suspicious phrase found adds 25 points of risk.

use serde::{Deserialize, Serialize};

use crate::suitability::DisplayTone;

/// Phrases that raise a campaign's risk score (matched case-insensitively)
pub const SUSPICIOUS_PHRASES: &[&str] = &[
    "guaranteed",
    "risk free",
    "100% profit",
    "double money",
    "instant return",
];

pub const POINTS_PER_PHRASE: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrustLabel {
    #[serde(rename = "High Trust")]
    HighTrust,
    #[serde(rename = "Moderate Risk")]
    ModerateRisk,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl TrustLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => TrustLabel::HighTrust,
            1..=25 => TrustLabel::ModerateRisk,
            _ => TrustLabel::HighRisk,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            TrustLabel::HighTrust => "High Trust",
            TrustLabel::ModerateRisk => "Moderate Risk",
            TrustLabel::HighRisk => "High Risk",
        }
    }

    pub fn tone(&self) -> DisplayTone {
        match self {
            TrustLabel::HighTrust => DisplayTone::Success,
            TrustLabel::ModerateRisk => DisplayTone::Warning,
            TrustLabel::HighRisk => DisplayTone::Danger,
        }
    }
}

/// Risk derived from a campaign description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignTrustAssessment {
    /// Multiple of 25, 0-100
    pub risk_score: u8,
    pub label: TrustLabel,
    pub tone: DisplayTone,
    pub matched_phrases: Vec<String>,
}

/// Score a description. Each phrase counts once however often it appears.
pub fn score_description(description: &str) -> CampaignTrustAssessment {
    let text = description.to_lowercase();
    let matched_phrases: Vec<String> = SUSPICIOUS_PHRASES
        .iter()
        .filter(|phrase| text.contains(*phrase))
        .map(|phrase| phrase.to_string())
        .collect();

    let raw = POINTS_PER_PHRASE.saturating_mul(matched_phrases.len() as u32);
    let risk_score = raw.min(100) as u8;
    let label = TrustLabel::from_score(risk_score);

    CampaignTrustAssessment {
        risk_score,
        label,
        tone: label.tone(),
        matched_phrases,
    }
}
