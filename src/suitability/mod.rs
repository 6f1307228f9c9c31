//! Crop Suitability Scoring
//!
//! Compares a farmer's field (soil type, nitrogen level) and current weather
//! against a crop profile and produces a 0-100 score with a three-tier risk
//! label.
//!
//! ## Architecture
//! - `temperature.rs` - Optimal range parsing and temperature score
//! - `matching.rs` - Exact soil and nutrient matching
//! - `composite.rs` - Sub-scores, fixed weights, weighted total
//! - `assessment.rs` - Output structs, labels, and the assess entry points
//!
//! Everything here is pure: no I/O, no shared state, no error paths.

pub mod temperature;
pub mod matching;
pub mod composite;
pub mod assessment;

// Re-export public API
pub use temperature::{temperature_score, TemperatureRange, DEFAULT_RANGE};
pub use matching::{match_nutrient, match_soil};
pub use composite::{composite_score, soil_only_score, weighted_breakdown, SubScores, WeightedBreakdown};
pub use assessment::{
    assess,
    assess_soil_only,
    assess_with_temperature,
    DisplayTone,
    FieldInput,
    RiskLabel,
    SoilAssessment,
    SuitabilityAssessment,
};
