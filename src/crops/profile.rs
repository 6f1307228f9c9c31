//! Crop profiles
//!
//! `CropRecord` mirrors one entry of `crop_data.json`; `CropProfile` is the
//! same data with the temperature range parsed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::growth::GrowthStage;
use crate::suitability::matching::NITROGEN;
use crate::suitability::TemperatureRange;

/// One crop as stored in the JSON knowledge base
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    /// Acceptable soil types
    #[serde(default)]
    pub soil: Vec<String>,

    /// Nutrient name -> qualitative level ("Low", "Medium", "High")
    #[serde(default)]
    pub nutrients: BTreeMap<String, String>,

    /// Free-text optimal range, e.g. "20-30°C"
    #[serde(default)]
    pub optimal_temp: String,

    /// Growth stages for the simulator, in order
    #[serde(default)]
    pub stages: Vec<GrowthStage>,
}

/// Reference data for one crop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropProfile {
    pub name: String,
    pub soil_types: Vec<String>,
    pub nutrients: BTreeMap<String, String>,

    /// Range as written in the database
    pub optimal_temp_text: String,

    /// Parsed range, [`crate::suitability::DEFAULT_RANGE`] if unreadable
    pub optimal_temp: TemperatureRange,

    pub stages: Vec<GrowthStage>,
}

impl CropProfile {
    pub fn from_record(name: &str, record: CropRecord) -> Self {
        let optimal_temp = TemperatureRange::parse(&record.optimal_temp);
        Self {
            name: name.to_string(),
            soil_types: record.soil,
            nutrients: record.nutrients,
            optimal_temp_text: record.optimal_temp,
            optimal_temp,
            stages: record.stages,
        }
    }

    /// Required Nitrogen level, the only nutrient the scorer checks
    pub fn nitrogen(&self) -> Option<&str> {
        self.nutrients.get(NITROGEN).map(String::as_str)
    }
}
