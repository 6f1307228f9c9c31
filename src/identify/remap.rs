//! Label remapping
//!
//! Turns a classifier's ranked `(label, probability)` list into a
//! crop identification: plant-likelihood flag, up to three suggestions,
//! chosen crop and confidence.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::labels::{
    NepalCrop, FALLBACK_SUGGESTIONS, LABEL_RULES, MAX_SUGGESTIONS, PLANT_HINTS,
    PLANT_HINT_MIN_PROBABILITY, UNKNOWN,
};

/// One classifier prediction, probability in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub probability: f64,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, probability: f64) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropIdentificationResult {
    /// Chosen crop, or "Unknown" when the image does not look like a plant
    pub crop: String,
    pub scientific: String,
    /// Top-1 probability as a percentage, whatever crop was chosen
    pub confidence: u8,
    /// Top-1 classifier label, underscores shown as spaces
    pub raw_label: String,
    pub is_plant: bool,
    pub suggestions: Vec<String>,
}

/// True if any sufficiently likely label contains a plant hint word
pub fn looks_like_plant(top: &[LabelScore]) -> bool {
    top.iter().any(|p| {
        let key = p.label.to_lowercase().replace('_', " ");
        p.probability >= PLANT_HINT_MIN_PROBABILITY && PLANT_HINTS.iter().any(|h| key.contains(h))
    })
}

/// Rank crops by summed probability of matching labels.
/// Ties keep declaration order; falls back to Rice, Maize, Wheat.
pub fn crop_suggestions(top: &[LabelScore]) -> Vec<NepalCrop> {
    let mut scores: SmallVec<[(NepalCrop, f64); 5]> =
        NepalCrop::ALL.iter().map(|&c| (c, 0.0)).collect();

    for p in top {
        let key = p.label.to_lowercase();
        for (pattern, crop) in LABEL_RULES {
            if key.contains(pattern) {
                scores[crop.index()].1 += p.probability;
            }
        }
    }

    // stable sort keeps declaration order among equal scores
    scores.sort_by(|a, b| b.1.total_cmp(&a.1));

    let ranked: Vec<NepalCrop> = scores
        .into_iter()
        .filter(|(_, score)| *score > 0.0)
        .take(MAX_SUGGESTIONS)
        .map(|(crop, _)| crop)
        .collect();

    if ranked.is_empty() {
        FALLBACK_SUGGESTIONS.to_vec()
    } else {
        ranked
    }
}

/// Build the identification result from ranked classifier output
pub fn remap(top: &[LabelScore]) -> CropIdentificationResult {
    let (raw_label, best_prob) = top
        .first()
        .map(|p| (p.label.replace('_', " "), p.probability))
        .unwrap_or_default();

    let is_plant = looks_like_plant(top);
    let suggestions = crop_suggestions(top);

    let chosen = if is_plant {
        suggestions.first().copied()
    } else {
        None
    };

    let confidence = if best_prob.is_finite() {
        (best_prob * 100.0).round().clamp(0.0, 100.0) as u8
    } else {
        0
    };

    CropIdentificationResult {
        crop: chosen.map(|c| c.name()).unwrap_or(UNKNOWN).to_string(),
        scientific: chosen.map(|c| c.scientific_name()).unwrap_or(UNKNOWN).to_string(),
        confidence,
        raw_label,
        is_plant,
        suggestions: suggestions.iter().map(|c| c.name().to_string()).collect(),
    }
}
