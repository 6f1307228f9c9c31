//! Crop vocabulary and label rules
//!
//! Lookup tables that turn generic image-classifier labels (ImageNet style,
//! e.g. "ear", "corn", "mashed_potato") into the crops this service knows.

use serde::{Deserialize, Serialize};

/// Crops the identifier can name, in declaration order.
/// The order breaks ties when ranking suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NepalCrop {
    Rice,
    Wheat,
    Maize,
    Potato,
    Tomato,
}

impl NepalCrop {
    pub const ALL: [NepalCrop; 5] = [
        NepalCrop::Rice,
        NepalCrop::Wheat,
        NepalCrop::Maize,
        NepalCrop::Potato,
        NepalCrop::Tomato,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NepalCrop::Rice => "Rice",
            NepalCrop::Wheat => "Wheat",
            NepalCrop::Maize => "Maize",
            NepalCrop::Potato => "Potato",
            NepalCrop::Tomato => "Tomato",
        }
    }

    pub fn scientific_name(&self) -> &'static str {
        match self {
            NepalCrop::Rice => "Oryza sativa",
            NepalCrop::Wheat => "Triticum aestivum",
            NepalCrop::Maize => "Zea mays",
            NepalCrop::Potato => "Solanum tuberosum",
            NepalCrop::Tomato => "Solanum lycopersicum",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Position in declaration order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Name used when no crop is chosen
pub const UNKNOWN: &str = "Unknown";

/// Scientific name for a crop name; "Unknown" for anything unrecognised
pub fn scientific_name(crop: &str) -> &'static str {
    NepalCrop::from_name(crop)
        .map(|c| c.scientific_name())
        .unwrap_or(UNKNOWN)
}

/// Words that suggest a label depicts a plant
pub const PLANT_HINTS: &[&str] = &[
    "plant", "leaf", "flora", "flower", "tree", "corn", "maize",
    "wheat", "rice", "grass", "mushroom", "vegetable", "fruit",
    "tomato", "potato", "cucumber", "pepper", "banana",
];

/// Minimum probability for a label to count towards the plant check
pub const PLANT_HINT_MIN_PROBABILITY: f64 = 0.10;

/// Label substring -> crop. Evaluated top to bottom; every matching rule
/// contributes, so a label can feed several rules (e.g. "corncob" hits both
/// "corn" and "corncob").
pub const LABEL_RULES: &[(&str, NepalCrop)] = &[
    ("corn", NepalCrop::Maize),
    ("maize", NepalCrop::Maize),
    ("ear", NepalCrop::Maize),
    ("corncob", NepalCrop::Maize),
    ("wheat", NepalCrop::Wheat),
    ("grain", NepalCrop::Wheat),
    ("rice", NepalCrop::Rice),
    ("paddy", NepalCrop::Rice),
    ("potato", NepalCrop::Potato),
    ("mashed_potato", NepalCrop::Potato),
    ("tomato", NepalCrop::Tomato),
];

/// Suggestions when no label maps to a crop
pub const FALLBACK_SUGGESTIONS: [NepalCrop; 3] = [NepalCrop::Rice, NepalCrop::Maize, NepalCrop::Wheat];

/// Maximum number of suggestions returned
pub const MAX_SUGGESTIONS: usize = 3;
