//! Growth Simulator
//!
//! Lays a crop's growth stages end to end and answers "where is the crop on
//! day N".

use serde::{Deserialize, Serialize};

use super::profile::CropProfile;

/// One stage as stored in the crop database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthStage {
    pub name: String,
    /// Stage length in days
    pub days: u32,
}

/// A stage placed on the timeline. Days are 0-based, `end_day` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineStage {
    pub name: String,
    pub start_day: u32,
    pub end_day: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrowthTimeline {
    pub crop: String,
    pub stages: Vec<TimelineStage>,
}

/// Where the crop is on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrowthSnapshot {
    pub day: u32,
    pub stage: String,
    pub stage_index: usize,
    /// Share of the full season elapsed, 0-100
    pub progress_pct: u8,
}

impl GrowthTimeline {
    pub fn from_profile(profile: &CropProfile) -> Self {
        let mut start_day = 0u32;
        let stages = profile
            .stages
            .iter()
            .filter(|s| s.days > 0)
            .map(|s| {
                let end_day = start_day.saturating_add(s.days);
                let stage = TimelineStage {
                    name: s.name.clone(),
                    start_day,
                    end_day,
                };
                start_day = end_day;
                stage
            })
            .collect();

        Self {
            crop: profile.name.clone(),
            stages,
        }
    }

    pub fn total_days(&self) -> u32 {
        self.stages.last().map(|s| s.end_day).unwrap_or(0)
    }

    /// Stage active on `day`. Days past harvest report the final stage at 100%.
    /// Returns `None` for a crop with no stages.
    pub fn snapshot(&self, day: u32) -> Option<GrowthSnapshot> {
        let total = self.total_days();
        if total == 0 {
            return None;
        }

        let stage_index = self
            .stages
            .iter()
            .position(|s| day < s.end_day)
            .unwrap_or(self.stages.len() - 1);

        let progress = (f64::from(day.min(total)) / f64::from(total) * 100.0).round();

        Some(GrowthSnapshot {
            day,
            stage: self.stages[stage_index].name.clone(),
            stage_index,
            progress_pct: progress.clamp(0.0, 100.0) as u8,
        })
    }
}
