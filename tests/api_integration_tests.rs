// API Integration Tests
//
// Drives the axum router end to end with the bundled crop data, a fixed
// classifier and a weather client pointed at a closed port or a local stub.
// Run with: cargo test --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use std::sync::Arc;

    use agrovision::error::ClassifierError;
    use agrovision::identify::MAX_IMAGE_BYTES;
    use agrovision::weather::WeatherClient;
    use agrovision::{create_router, AppState, CropDatabase, CropIdentifier, ImageClassifier, LabelScore};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        routing::get as get_route,
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    struct FixedClassifier(Vec<LabelScore>);

    #[async_trait]
    impl ImageClassifier for FixedClassifier {
        async fn classify(&self, _image: &[u8], _top_n: usize) -> Result<Vec<LabelScore>, ClassifierError> {
            Ok(self.0.clone())
        }
    }

    // Helper: Create test app with the bundled crop data
    fn create_test_app() -> axum::Router {
        // nothing listens on port 9, so every weather call fails fast
        create_test_app_with_weather("http://127.0.0.1:9/data/2.5/weather")
    }

    fn create_test_app_with_weather(weather_url: &str) -> axum::Router {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/crop_data.json");
        let crops = CropDatabase::load(path).expect("bundled crop data");

        let weather = WeatherClient::new(weather_url, "test-key").expect("weather client");

        let classifier = FixedClassifier(vec![
            LabelScore::new("ear", 0.48),
            LabelScore::new("corn", 0.31),
            LabelScore::new("hay", 0.06),
        ]);
        let identifier = CropIdentifier::new(Arc::new(classifier));

        create_router(AppState::from_parts(crops, weather, identifier))
    }

    // Helper: Serve a stub weather API on an ephemeral port
    async fn spawn_weather_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/data/2.5/weather")
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // =========================================================================
    // Section 1: Health + Crops
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = create_test_app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_list_crops() {
        let response = create_test_app().oneshot(get("/api/crops")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["rows"], 5);
        let names: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        // alphabetical
        assert_eq!(names, vec!["Maize", "Potato", "Rice", "Tomato", "Wheat"]);
    }

    #[tokio::test]
    async fn test_get_crop_and_unknown_crop() {
        let app = create_test_app();

        let response = app.clone().oneshot(get("/api/crops/Tomato")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["optimal_temp"]["min"], 20.0);
        assert_eq!(body["optimal_temp"]["max"], 30.0);

        let response = app.oneshot(get("/api/crops/Barley")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_response(response).await;
        assert_eq!(body["error"], "Crop data not found for this crop.");
    }

    #[tokio::test]
    async fn test_growth_timeline() {
        let response = create_test_app()
            .oneshot(get("/api/crops/Maize/growth?day=60"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["total_days"], 120);
        assert_eq!(body["stages"].as_array().unwrap().len(), 5);
        assert_eq!(body["snapshot"]["stage"], "Tasseling");
        assert_eq!(body["snapshot"]["progress_pct"], 50);
    }

    // =========================================================================
    // Section 2: Suitability
    // =========================================================================

    #[tokio::test]
    async fn test_suitability_manual_temperature() {
        let request = post_json(
            "/api/suitability/Tomato",
            serde_json::json!({
                "soil_type": "Clay",
                "nitrogen_level": "High",
                "temperature_c": 35.0
            }),
        );
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        // 0.4*60 + 0.3*30 + 0.2*40 + 0.1*80 = 49
        assert_eq!(body["weather_score"], 60);
        assert_eq!(body["sub_scores"]["water"], 80);
        assert_eq!(body["total_score"], 49);
        assert_eq!(body["label"], "Risk");
        assert_eq!(body["tone"], "danger");
        assert_eq!(body["breakdown"]["weather"], 24);
        assert!(body["weather"].is_null());
    }

    #[tokio::test]
    async fn test_suitability_weather_failure_has_no_score() {
        let request = post_json(
            "/api/suitability/Rice",
            serde_json::json!({
                "soil_type": "Clay",
                "nitrogen_level": "High",
                "city": "Kathmandu"
            }),
        );
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = json_response(response).await;
        assert_eq!(body["error"], "weather API error");
        assert!(body.get("total_score").is_none());
    }

    #[tokio::test]
    async fn test_suitability_weather_api_rejection() {
        let stub = Router::new().route(
            "/data/2.5/weather",
            get_route(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(serde_json::json!({"cod": 401, "message": "Invalid API key."})),
                )
            }),
        );
        let weather_url = spawn_weather_stub(stub).await;

        let request = post_json(
            "/api/suitability/Maize",
            serde_json::json!({
                "soil_type": "Loamy",
                "nitrogen_level": "High",
                "city": "Pokhara"
            }),
        );
        let response = create_test_app_with_weather(&weather_url)
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = json_response(response).await;
        assert_eq!(body["error"], "weather API error");
        assert!(body.get("total_score").is_none());
    }

    #[tokio::test]
    async fn test_suitability_requires_city_or_temperature() {
        let request = post_json(
            "/api/suitability/Rice",
            serde_json::json!({"soil_type": "Clay", "nitrogen_level": "High", "city": "  "}),
        );
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_crop_short_circuits_before_weather() {
        let request = post_json(
            "/api/suitability/Barley",
            serde_json::json!({"soil_type": "Clay", "nitrogen_level": "High", "city": "Pokhara"}),
        );
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_soil_only() {
        let request = post_json(
            "/api/suitability/Potato/soil",
            serde_json::json!({"soil_type": "Sandy Loam", "nitrogen_level": "High"}),
        );
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["soil_matched"], true);
        assert_eq!(body["nutrient_matched"], false);
        assert_eq!(body["score"], 50);
        assert_eq!(body["label"], "Moderate");
        assert_eq!(body["tone"], "warning");
    }

    // =========================================================================
    // Section 3: Identification
    // =========================================================================

    #[tokio::test]
    async fn test_identify_image() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/identify")
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(Body::from(vec![0xFFu8, 0xD8, 0xFF, 0xE0]))
            .unwrap();
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["crop"], "Maize");
        assert_eq!(body["scientific"], "Zea mays");
        assert_eq!(body["confidence"], 48);
        assert_eq!(body["raw_label"], "ear");
        assert_eq!(body["is_plant"], true);
    }

    #[tokio::test]
    async fn test_identify_empty_body() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/identify")
            .body(Body::empty())
            .unwrap();
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_response(response).await;
        assert_eq!(body["error"], "Please choose an image file.");
    }

    #[tokio::test]
    async fn test_identify_oversized_body_is_json() {
        let app = create_test_app();

        for size in [MAX_IMAGE_BYTES + 1, MAX_IMAGE_BYTES * 2 + 1024] {
            let request = Request::builder()
                .method(Method::POST)
                .uri("/api/identify")
                .header(header::CONTENT_TYPE, "application/octet-stream")
                .body(Body::from(vec![0u8; size]))
                .unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

            let body = json_response(response).await;
            let message = body["error"].as_str().unwrap();
            assert!(message.starts_with("Image is too large"), "{message}");
        }
    }

    // =========================================================================
    // Section 4: Campaigns
    // =========================================================================

    #[tokio::test]
    async fn test_campaign_lifecycle() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/campaigns",
                serde_json::json!({
                    "title": "Drip irrigation for Kavre",
                    "description": "Guaranteed 100% profit, risk free",
                    "target_amount": "20000",
                    "duration_days": "60"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_response(response).await;
        assert_eq!(created["trust"]["risk_score"], 75);
        assert_eq!(created["trust"]["label"], "High Risk");
        let id = created["id"].as_u64().unwrap();

        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/campaigns/{id}/invest"),
                serde_json::json!({"investor": "Sita", "amount": "5000"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = json_response(response).await;
        assert_eq!(updated["funded_percent"], 25);
        assert_eq!(updated["trust"]["risk_score"], 75);

        let response = app.oneshot(get("/api/campaigns")).await.unwrap();
        let listing = json_response(response).await;
        assert_eq!(listing["rows"], 1);
    }

    #[tokio::test]
    async fn test_campaign_validation_messages() {
        let app = create_test_app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/campaigns",
                serde_json::json!({
                    "title": "Seed bank",
                    "target_amount": "lots",
                    "duration_days": "30"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_response(response).await;
        assert_eq!(body["error"], "Target amount must be a positive number.");

        let response = app
            .oneshot(post_json(
                "/api/campaigns/42/invest",
                serde_json::json!({"investor": "Ram", "amount": "100"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_response(response).await;
        assert_eq!(body["error"], "Campaign not found.");
    }
}
