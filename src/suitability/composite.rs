//! Weighted composite score
//!
//! Four sub-scores (weather, soil, nutrient, water) are combined with fixed
//! weights into a 0-100 total. The constants are part of the observable
//! scoring output and must not be retuned.

use serde::{Deserialize, Serialize};

use crate::weather::WeatherSnapshot;

// ============================================================================
// Constants
// ============================================================================

pub const WEATHER_WEIGHT: f64 = 0.40;
pub const SOIL_WEIGHT: f64 = 0.30;
pub const NUTRIENT_WEIGHT: f64 = 0.20;
pub const WATER_WEIGHT: f64 = 0.10;

pub const MATCHED_SCORE: u8 = 100;
pub const SOIL_MISMATCH_SCORE: u8 = 30;
pub const NUTRIENT_MISMATCH_SCORE: u8 = 40;

/// Water score when it is raining or humid
pub const WATER_WET_SCORE: u8 = 90;
/// Water score when dry
pub const WATER_DRY_SCORE: u8 = 50;
/// Water score when no live weather is available
pub const WATER_STATIC_SCORE: u8 = 80;
/// Humidity (%) at or above which water is considered available
pub const HUMIDITY_THRESHOLD: u8 = 60;

/// Points per matched factor on the soil-only path
pub const SOIL_ONLY_POINTS: u8 = 50;

// ============================================================================
// Sub-scores
// ============================================================================

/// The four inputs to the composite score, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub weather: u8,
    pub soil: u8,
    pub nutrient: u8,
    pub water: u8,
}

/// Each sub-score multiplied by its weight and rounded, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedBreakdown {
    pub weather: u8,
    pub soil: u8,
    pub nutrient: u8,
    pub water: u8,
}

pub fn soil_sub_score(matched: bool) -> u8 {
    if matched { MATCHED_SCORE } else { SOIL_MISMATCH_SCORE }
}

pub fn nutrient_sub_score(matched: bool) -> u8 {
    if matched { MATCHED_SCORE } else { NUTRIENT_MISMATCH_SCORE }
}

/// Water availability from live weather; fixed fallback when there is none
pub fn water_sub_score(weather: Option<&WeatherSnapshot>) -> u8 {
    match weather {
        Some(w) if w.has_precipitation() || w.humidity_pct >= HUMIDITY_THRESHOLD => WATER_WET_SCORE,
        Some(_) => WATER_DRY_SCORE,
        None => WATER_STATIC_SCORE,
    }
}

// ============================================================================
// Aggregation
// ============================================================================

fn weighted_sum(sub: &SubScores) -> f64 {
    WEATHER_WEIGHT * f64::from(sub.weather.min(100))
        + SOIL_WEIGHT * f64::from(sub.soil.min(100))
        + NUTRIENT_WEIGHT * f64::from(sub.nutrient.min(100))
        + WATER_WEIGHT * f64::from(sub.water.min(100))
}

fn to_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Weighted total, rounded and clamped to [0, 100]
pub fn composite_score(sub: &SubScores) -> u8 {
    to_percent(weighted_sum(sub))
}

pub fn weighted_breakdown(sub: &SubScores) -> WeightedBreakdown {
    WeightedBreakdown {
        weather: to_percent(WEATHER_WEIGHT * f64::from(sub.weather.min(100))),
        soil: to_percent(SOIL_WEIGHT * f64::from(sub.soil.min(100))),
        nutrient: to_percent(NUTRIENT_WEIGHT * f64::from(sub.nutrient.min(100))),
        water: to_percent(WATER_WEIGHT * f64::from(sub.water.min(100))),
    }
}

/// Two-factor score used when soil is checked without weather: 0, 50 or 100
pub fn soil_only_score(soil_matched: bool, nutrient_matched: bool) -> u8 {
    let mut score = 0;
    if soil_matched {
        score += SOIL_ONLY_POINTS;
    }
    if nutrient_matched {
        score += SOIL_ONLY_POINTS;
    }
    score
}
