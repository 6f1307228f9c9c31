//! Crop photo identification
//!
//! ## Architecture
//! - `labels.rs` - Crop vocabulary, plant hint words, ordered label rules
//! - `remap.rs` - Classifier output -> identification result (pure)
//! - `classifier.rs` - `ImageClassifier` trait and `CropIdentifier`
//! - `remote.rs` - HTTP-backed classifier (`api` feature)

pub mod labels;
pub mod remap;
pub mod classifier;

#[cfg(feature = "api")]
pub mod remote;

pub use labels::{scientific_name, NepalCrop};
pub use remap::{crop_suggestions, looks_like_plant, remap, CropIdentificationResult, LabelScore};
pub use classifier::{CropIdentifier, ImageClassifier, MAX_IMAGE_BYTES};

#[cfg(feature = "api")]
pub use remote::RemoteClassifier;
