//! AgroVision
//!
//! Crop suitability and identification service for Nepali farmers.
//!
//! - `crops/`: JSON crop knowledge base and growth simulator
//! - `suitability/`: Temperature, soil and nutrient scoring with risk labels
//! - `weather/`: Current-conditions snapshot and weather API client
//! - `identify/`: Classifier seam and label remapping for crop photos
//! - `campaign/`: Crowdfunding ledger and description trust scoring
//! - `api_server`: Axum JSON API (`api` feature)

pub mod error;
pub mod crops;
pub mod suitability;
pub mod weather;
pub mod identify;
pub mod campaign;

#[cfg(feature = "api")]
pub mod config;
#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use crops::{CropDatabase, CropProfile, GrowthTimeline};
pub use suitability::{
    assess, assess_soil_only, assess_with_temperature, FieldInput, RiskLabel, SuitabilityAssessment,
};
pub use weather::WeatherSnapshot;
pub use identify::{CropIdentificationResult, CropIdentifier, ImageClassifier, LabelScore};
pub use campaign::{score_description, CampaignLedger, TrustLabel};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
#[cfg(feature = "api")]
pub use config::AppConfig;
