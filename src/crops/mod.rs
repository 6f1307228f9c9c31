//! Crop knowledge base and growth simulator

pub mod profile;
pub mod database;
pub mod growth;

pub use profile::{CropProfile, CropRecord};
pub use database::CropDatabase;
pub use growth::{GrowthSnapshot, GrowthStage, GrowthTimeline, TimelineStage};
