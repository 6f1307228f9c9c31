//! Suitability Assessment
//!
//! Output structures for the suitability scorer and the functions that build
//! them from a crop profile, the farmer's field input and (optionally) live
//! weather.

use serde::{Deserialize, Serialize};

use super::composite::{
    composite_score, nutrient_sub_score, soil_only_score, soil_sub_score, water_sub_score,
    weighted_breakdown, SubScores, WeightedBreakdown,
};
use super::matching::{match_nutrient, match_soil};
use super::temperature::TemperatureRange;
use crate::crops::CropProfile;
use crate::weather::WeatherSnapshot;

/// Display colour tag shared by all three-tier labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTone {
    Success,
    Warning,
    Danger,
}

impl DisplayTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayTone::Success => "success",
            DisplayTone::Warning => "warning",
            DisplayTone::Danger => "danger",
        }
    }
}

/// Three-tier label for a suitability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    /// Score 75 and above
    Good,
    /// Score 50-74
    Moderate,
    /// Score below 50
    Risk,
}

impl RiskLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            75..=u8::MAX => RiskLabel::Good,
            50..=74 => RiskLabel::Moderate,
            _ => RiskLabel::Risk,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            RiskLabel::Good => "Good",
            RiskLabel::Moderate => "Moderate",
            RiskLabel::Risk => "Risk",
        }
    }

    pub fn tone(&self) -> DisplayTone {
        match self {
            RiskLabel::Good => DisplayTone::Success,
            RiskLabel::Moderate => DisplayTone::Warning,
            RiskLabel::Risk => DisplayTone::Danger,
        }
    }
}

/// What the farmer reports about their field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInput {
    /// Soil type, e.g. "Loamy"
    pub soil_type: String,

    /// Nitrogen level, e.g. "Medium"
    pub nitrogen_level: String,
}

/// Full four-factor assessment
#[derive(Debug, Clone, Serialize)]
pub struct SuitabilityAssessment {
    pub crop: String,
    pub soil_matched: bool,
    pub nutrient_matched: bool,

    /// Temperature the weather score was computed from (°C)
    pub temperature_c: f64,
    pub optimal_range: TemperatureRange,

    /// Temperature score, same as `sub_scores.weather`
    pub weather_score: u8,
    pub sub_scores: SubScores,
    pub breakdown: WeightedBreakdown,
    pub total_score: u8,
    pub label: RiskLabel,
    pub tone: DisplayTone,

    /// Live conditions, absent when a manual temperature was used
    pub weather: Option<WeatherSnapshot>,
}

/// Two-factor assessment without weather
#[derive(Debug, Clone, Serialize)]
pub struct SoilAssessment {
    pub crop: String,
    pub soil_matched: bool,
    pub nutrient_matched: bool,
    pub score: u8,
    pub label: RiskLabel,
    pub tone: DisplayTone,
}

// ============================================================================
// Builders
// ============================================================================

/// Assess a crop against live weather
pub fn assess(crop: &CropProfile, field: &FieldInput, weather: &WeatherSnapshot) -> SuitabilityAssessment {
    build(crop, field, weather.temperature_c, Some(weather))
}

/// Assess a crop from a manually entered temperature; water uses the static fallback
pub fn assess_with_temperature(crop: &CropProfile, field: &FieldInput, temperature_c: f64) -> SuitabilityAssessment {
    build(crop, field, temperature_c, None)
}

/// Soil and nutrient only, 50/50 split
pub fn assess_soil_only(crop: &CropProfile, field: &FieldInput) -> SoilAssessment {
    let soil_matched = match_soil(&field.soil_type, &crop.soil_types);
    let nutrient_matched = match_nutrient(&field.nitrogen_level, crop.nitrogen());
    let score = soil_only_score(soil_matched, nutrient_matched);
    let label = RiskLabel::from_score(score);

    SoilAssessment {
        crop: crop.name.clone(),
        soil_matched,
        nutrient_matched,
        score,
        label,
        tone: label.tone(),
    }
}

fn build(
    crop: &CropProfile,
    field: &FieldInput,
    temperature_c: f64,
    weather: Option<&WeatherSnapshot>,
) -> SuitabilityAssessment {
    let soil_matched = match_soil(&field.soil_type, &crop.soil_types);
    let nutrient_matched = match_nutrient(&field.nitrogen_level, crop.nitrogen());
    let weather_score = crop.optimal_temp.score(temperature_c);

    let sub_scores = SubScores {
        weather: weather_score,
        soil: soil_sub_score(soil_matched),
        nutrient: nutrient_sub_score(nutrient_matched),
        water: water_sub_score(weather),
    };
    let total_score = composite_score(&sub_scores);
    let label = RiskLabel::from_score(total_score);

    tracing::debug!(
        crop = %crop.name,
        total_score,
        label = label.display_text(),
        "suitability assessed"
    );

    SuitabilityAssessment {
        crop: crop.name.clone(),
        soil_matched,
        nutrient_matched,
        temperature_c,
        optimal_range: crop.optimal_temp,
        weather_score,
        sub_scores,
        breakdown: weighted_breakdown(&sub_scores),
        total_score,
        label,
        tone: label.tone(),
        weather: weather.cloned(),
    }
}
