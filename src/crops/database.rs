//! Crop knowledge base
//!
//! Loads `crop_data.json` (an object keyed by crop name) into typed profiles
//! with O(1) lookup by name.

use std::collections::BTreeMap;
use std::path::Path;

use rustc_hash::FxHashMap;

use super::profile::{CropProfile, CropRecord};
use crate::error::CropDataError;

/// Read-only crop reference data
#[derive(Debug, Clone, Default)]
pub struct CropDatabase {
    profiles: FxHashMap<String, CropProfile>,
    /// Crop names, sorted
    names: Vec<String>,
}

impl CropDatabase {
    /// Load from a JSON file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CropDataError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CropDataError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let db = Self::from_json_str(&contents)?;
        tracing::info!("Loaded {} crop profiles from {}", db.len(), path.display());
        Ok(db)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CropDataError> {
        let records: BTreeMap<String, CropRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: BTreeMap<String, CropRecord>) -> Self {
        let names: Vec<String> = records.keys().cloned().collect();
        let profiles = records
            .into_iter()
            .map(|(name, record)| {
                let profile = CropProfile::from_record(&name, record);
                (name, profile)
            })
            .collect();

        Self { profiles, names }
    }

    /// Look up a crop by exact name
    pub fn get(&self, name: &str) -> Option<&CropProfile> {
        self.profiles.get(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
