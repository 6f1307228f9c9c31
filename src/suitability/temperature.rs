//! Temperature Suitability
//!
//! Scores a current temperature against a crop's optimal range, and parses
//! the free-text ranges stored in the crop database ("20-30°C", "15 – 25 C").

use serde::{Deserialize, Serialize};

/// Points lost per degree outside the optimal range
pub const PENALTY_PER_DEGREE: f64 = 8.0;

/// Range substituted for anything the parser cannot read
pub const DEFAULT_RANGE: TemperatureRange = TemperatureRange { min: 0.0, max: 50.0 };

/// Optimal growing temperature range in °C. Always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

impl TemperatureRange {
    /// Parse a range string from the crop database.
    ///
    /// Never fails: empty, single-value, non-numeric or inverted ranges
    /// all resolve to [`DEFAULT_RANGE`].
    pub fn parse(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or(DEFAULT_RANGE)
    }

    fn try_parse(raw: &str) -> Option<Self> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let compact = compact
            .strip_suffix("°C")
            .or_else(|| compact.strip_suffix('C'))
            .or_else(|| compact.strip_suffix('°'))
            .unwrap_or(compact.as_str())
            .replace('–', "-");

        let parts: Vec<&str> = compact.split('-').collect();
        if parts.len() != 2 {
            return None;
        }

        let min: f64 = parts[0].parse().ok()?;
        let max: f64 = parts[1].parse().ok()?;
        if !min.is_finite() || !max.is_finite() || min > max {
            return None;
        }

        Some(Self { min, max })
    }

    pub fn contains(&self, temp: f64) -> bool {
        self.min <= temp && temp <= self.max
    }

    /// Degrees to the nearer bound (0 inside the range)
    pub fn distance_from(&self, temp: f64) -> f64 {
        if temp < self.min {
            self.min - temp
        } else if temp > self.max {
            temp - self.max
        } else {
            0.0
        }
    }

    /// Score a temperature against this range (see [`temperature_score`])
    pub fn score(&self, temp: f64) -> u8 {
        temperature_score(temp, self.min, self.max)
    }
}

impl Default for TemperatureRange {
    fn default() -> Self {
        DEFAULT_RANGE
    }
}

/// Score `current` against `[ideal_min, ideal_max]`.
///
/// 100 inside the range; outside it, 8 points are lost per degree of distance
/// to the nearer bound, clamped to [0, 100].
pub fn temperature_score(current: f64, ideal_min: f64, ideal_max: f64) -> u8 {
    if ideal_min <= current && current <= ideal_max {
        return 100;
    }

    let distance = if current < ideal_min {
        ideal_min - current
    } else {
        current - ideal_max
    };

    let score = 100.0 - distance * PENALTY_PER_DEGREE;
    if score.is_nan() {
        return 0;
    }
    score.clamp(0.0, 100.0).round() as u8
}
