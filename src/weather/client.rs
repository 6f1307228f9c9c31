//! Weather API client
//!
//! Minimal client for the OpenWeatherMap "current weather" endpoint. One
//! request per call, no retries.

use std::time::Duration;

use serde::Deserialize;

use super::WeatherSnapshot;
use crate::error::WeatherError;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Fetch current conditions for `city` (metric units)
    pub async fn current(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: CurrentWeatherResponse = resp.json().await?;
        let snapshot = body.into_snapshot(city)?;
        tracing::debug!(
            city = %snapshot.city,
            temperature_c = snapshot.temperature_c,
            humidity = snapshot.humidity_pct,
            "Fetched current weather"
        );
        Ok(snapshot)
    }
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    #[serde(default)]
    name: Option<String>,
    main: Option<MainBlock>,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    #[serde(default)]
    rain: Option<RainBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct RainBlock {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

impl CurrentWeatherResponse {
    fn into_snapshot(self, requested_city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let main = self.main.ok_or(WeatherError::MissingField("main"))?;
        let temperature_c = main.temp.ok_or(WeatherError::MissingField("main.temp"))?;
        let humidity = main.humidity.ok_or(WeatherError::MissingField("main.humidity"))?;

        let city = self
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| requested_city.to_string());
        let condition = self
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .unwrap_or_default();

        Ok(WeatherSnapshot {
            city,
            temperature_c,
            condition,
            humidity_pct: humidity.round().clamp(0.0, 100.0) as u8,
            rain_1h_mm: self.rain.and_then(|r| r.one_hour),
        })
    }
}
