//! Weather
//!
//! Current-conditions snapshot used by the suitability scorer, plus the HTTP
//! client that fetches it (behind the `api` feature).

#[cfg(feature = "api")]
pub mod client;

#[cfg(feature = "api")]
pub use client::WeatherClient;

use serde::{Deserialize, Serialize};

/// Current conditions for one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// City name as resolved by the weather provider
    pub city: String,

    /// Air temperature (°C)
    pub temperature_c: f64,

    /// Short description, e.g. "light rain"
    pub condition: String,

    /// Relative humidity (%)
    pub humidity_pct: u8,

    /// Rain volume over the last hour (mm), absent when dry
    pub rain_1h_mm: Option<f64>,
}

impl WeatherSnapshot {
    pub fn has_precipitation(&self) -> bool {
        self.rain_1h_mm.is_some_and(|mm| mm > 0.0)
    }
}
