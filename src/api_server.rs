// Axum API server
//
// JSON endpoints over the crop knowledge base, the suitability scorer,
// photo identification and the campaign ledger.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::campaign::{CampaignLedger, NewCampaign, NewInvestment};
use crate::config::AppConfig;
use crate::crops::{CropDatabase, CropProfile, GrowthTimeline};
use crate::error::{ClassifierError, LedgerError, ValidationError};
use crate::identify::{CropIdentificationResult, CropIdentifier, RemoteClassifier, MAX_IMAGE_BYTES};
use crate::suitability::{
    assess, assess_soil_only, assess_with_temperature, FieldInput, SoilAssessment, SuitabilityAssessment,
};
use crate::weather::{WeatherClient, WeatherSnapshot};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub crops: Arc<CropDatabase>,
    pub weather: Arc<WeatherClient>,
    /// Current conditions per city, 5 min TTL
    pub weather_cache: Cache<String, WeatherSnapshot>,
    pub identifier: CropIdentifier,
    pub campaigns: CampaignLedger,
}

impl AppState {
    /// Build state from configuration: load crops, construct the HTTP clients
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        use anyhow::Context;

        tracing::info!("Loading crop knowledge base...");
        let crops = CropDatabase::load(&config.crop_data_path)
            .with_context(|| format!("loading crop data from {}", config.crop_data_path))?;

        tracing::info!("Initializing weather client...");
        let weather = WeatherClient::new(&config.weather_base_url, &config.weather_api_key)
            .context("building weather client")?;

        tracing::info!("Initializing classifier client ({})...", config.classifier_url);
        let classifier = RemoteClassifier::new(&config.classifier_url)
            .context("building classifier client")?;
        let identifier = CropIdentifier::new(Arc::new(classifier)).with_top_n(config.classifier_top_n);

        Ok(Self::from_parts(crops, weather, identifier))
    }

    pub fn from_parts(crops: CropDatabase, weather: WeatherClient, identifier: CropIdentifier) -> Self {
        let weather_cache = Cache::builder()
            .max_capacity(1_000)
            .time_to_live(Duration::from_secs(300))
            .build();

        Self {
            crops: Arc::new(crops),
            weather: Arc::new(weather),
            weather_cache,
            identifier,
            campaigns: CampaignLedger::new(),
        }
    }

    fn crop(&self, name: &str) -> Result<&CropProfile, AppError> {
        self.crops
            .get(name)
            .ok_or_else(|| AppError::NotFound("Crop data not found for this crop.".to_string()))
    }

    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, AppError> {
        let key = city.trim().to_lowercase();
        if let Some(hit) = self.weather_cache.get(&key).await {
            return Ok(hit);
        }

        match self.weather.current(city.trim()).await {
            Ok(snapshot) => {
                self.weather_cache.insert(key, snapshot.clone()).await;
                Ok(snapshot)
            }
            Err(e) => {
                tracing::warn!("Weather lookup for '{}' failed: {}", city, e);
                Err(AppError::Weather)
            }
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Crop knowledge base + growth simulator
        .route("/api/crops", get(list_crops))
        .route("/api/crops/:name", get(get_crop))
        .route("/api/crops/:name/growth", get(get_growth))

        // Suitability scoring
        .route("/api/suitability/:name", post(score_suitability))
        .route("/api/suitability/:name/soil", post(score_soil_only))

        // Photo identification (raw image bytes)
        .route(
            "/api/identify",
            post(identify_crop).layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES)),
        )

        // Crowdfunding
        .route("/api/campaigns", get(list_campaigns).post(create_campaign))
        .route("/api/campaigns/:id", get(get_campaign))
        .route("/api/campaigns/:id/invest", post(invest_in_campaign))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_crops(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "rows": state.crops.len(),
        "data": state.crops.names(),
    }))
}

async fn get_crop(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CropProfile>, AppError> {
    Ok(Json(state.crop(&name)?.clone()))
}

async fn get_growth(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<GrowthQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let crop = state.crop(&name)?;
    let timeline = GrowthTimeline::from_profile(crop);
    let snapshot = query.day.and_then(|day| timeline.snapshot(day));

    Ok(Json(serde_json::json!({
        "crop": crop.name,
        "total_days": timeline.total_days(),
        "stages": timeline.stages,
        "snapshot": snapshot,
    })))
}

async fn score_suitability(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<SuitabilityRequest>,
) -> Result<Json<SuitabilityAssessment>, AppError> {
    let crop = state.crop(&name)?;
    let field = FieldInput {
        soil_type: request.soil_type,
        nitrogen_level: request.nitrogen_level,
    };

    let assessment = match (request.city.as_deref().map(str::trim), request.temperature_c) {
        (Some(city), _) if !city.is_empty() => {
            let weather = state.current_weather(city).await?;
            assess(crop, &field, &weather)
        }
        (_, Some(temp)) if temp.is_finite() => assess_with_temperature(crop, &field, temp),
        _ => {
            return Err(AppError::BadRequest(
                "Please enter a city or a current temperature.".to_string(),
            ))
        }
    };

    Ok(Json(assessment))
}

async fn score_soil_only(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(field): Json<FieldInput>,
) -> Result<Json<SoilAssessment>, AppError> {
    let crop = state.crop(&name)?;
    Ok(Json(assess_soil_only(crop, &field)))
}

async fn identify_crop(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CropIdentificationResult>, AppError> {
    // Bodies over the limit are cut off while buffering
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(format!(
                "Image is too large (limit {} bytes).",
                MAX_IMAGE_BYTES
            ))
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    })?;

    let result = state.identifier.identify(&body).await?;
    Ok(Json(result))
}

async fn list_campaigns(State(state): State<AppState>) -> Json<serde_json::Value> {
    let campaigns = state.campaigns.list();
    let data: Vec<serde_json::Value> = campaigns.iter().map(campaign_json).collect();
    Json(serde_json::json!({
        "rows": data.len(),
        "data": data,
    }))
}

async fn create_campaign(
    State(state): State<AppState>,
    Json(request): Json<NewCampaign>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let campaign = state.campaigns.create(request)?;
    Ok((StatusCode::CREATED, Json(campaign_json(&campaign))))
}

async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let campaign = state
        .campaigns
        .get(id)
        .ok_or(LedgerError::NotFound)?;
    Ok(Json(campaign_json(&campaign)))
}

async fn invest_in_campaign(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<NewInvestment>,
) -> Result<Json<serde_json::Value>, AppError> {
    let campaign = state.campaigns.invest(id, request)?;
    Ok(Json(campaign_json(&campaign)))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(serde::Deserialize, Debug)]
struct GrowthQuery {
    day: Option<u32>,
}

#[derive(serde::Deserialize, Debug)]
struct SuitabilityRequest {
    soil_type: String,
    nitrogen_level: String,
    /// Fetch live weather for this city
    city: Option<String>,
    /// Used when no city is given
    temperature_c: Option<f64>,
}

fn campaign_json(campaign: &crate::campaign::Campaign) -> serde_json::Value {
    serde_json::json!({
        "id": campaign.id,
        "title": campaign.title,
        "description": campaign.description,
        "target_amount": campaign.target_amount,
        "duration_days": campaign.duration_days,
        "created_at": campaign.created_at.to_rfc3339(),
        "trust": campaign.trust,
        "raised": campaign.raised(),
        "funded_percent": campaign.funded_percent(),
        "investments": campaign.investments,
    })
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    PayloadTooLarge(String),
    /// Weather provider failed; details are logged, not returned
    Weather,
    Upstream(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Invalid(invalid) => invalid.into(),
            not_found @ LedgerError::NotFound => AppError::NotFound(not_found.to_string()),
        }
    }
}

impl From<ClassifierError> for AppError {
    fn from(err: ClassifierError) -> Self {
        match err {
            ClassifierError::EmptyImage => AppError::BadRequest(err.to_string()),
            ClassifierError::ImageTooLarge { .. } => AppError::PayloadTooLarge(err.to_string()),
            other => {
                tracing::warn!("Classifier failed: {}", other);
                AppError::Upstream("classifier error".to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            AppError::Weather => (StatusCode::BAD_GATEWAY, "weather API error".to_string()),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
