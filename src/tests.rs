// Handler-level integration tests against the full router
use crate::application::dashboard_service::DashboardService;
use crate::application::prediction_service::PredictionService;
use crate::application::session_store::SessionStore;
use crate::application::weather_repository::WeatherRepository;
use crate::build_router;
use crate::domain::weather::{DailyWeather, GeoPoint};
use crate::infrastructure::config::{CoordinateSettings, RegionsConfig};
use crate::presentation::app_state::AppState;
use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;

struct StubRepository {
    result: Result<DailyWeather, String>,
}

#[async_trait]
impl WeatherRepository for StubRepository {
    async fn fetch_daily(
        &self,
        _point: GeoPoint,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> anyhow::Result<DailyWeather> {
        match &self.result {
            Ok(data) => Ok(data.clone()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}

fn three_days() -> DailyWeather {
    DailyWeather {
        temperature: vec![30.0, 32.0, 28.0],
        precipitation: vec![10.0, 5.0, 0.0],
        humidity: vec![40.0, 50.0, 60.0],
    }
}

fn setup_server(result: Result<DailyWeather, String>) -> TestServer {
    let regions = RegionsConfig {
        default: CoordinateSettings {
            latitude: 20.0,
            longitude: 78.0,
        },
        regions: HashMap::new(),
    };
    let predictions = PredictionService::new(Arc::new(StubRepository { result }), regions);
    let state = Arc::new(AppState {
        sessions: SessionStore::new(),
        dashboard: DashboardService::new(predictions),
    });
    TestServer::new(build_router(state)).unwrap()
}

async fn create_session(server: &TestServer) -> String {
    let response = server.post("/sessions").await;
    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    body["session_id"].as_str().unwrap().to_string()
}

async fn set_three_day_range(server: &TestServer, id: &str) {
    let response = server
        .put(&format!("/sessions/{id}/params"))
        .json(&serde_json::json!({
            "start_date": "2024-01-01",
            "end_date": "2024-01-03"
        }))
        .await;
    response.assert_status_ok();
}

async fn refresh_and_render(server: &TestServer, id: &str) -> serde_json::Value {
    let refresh = server.post(&format!("/sessions/{id}/refresh")).await;
    refresh.assert_status_ok();
    let dashboard = server.get(&format!("/sessions/{id}/dashboard")).await;
    dashboard.assert_status_ok();
    dashboard.json()
}

#[tokio::test]
async fn test_health_check() {
    let server = setup_server(Ok(three_days()));
    let response = server.get("/healthz").await;
    response.assert_status_ok();
    response.assert_text("ok");
}

#[tokio::test]
async fn test_session_params_round_trip() {
    let server = setup_server(Ok(three_days()));
    let id = create_session(&server).await;

    let response = server
        .put(&format!("/sessions/{id}/params"))
        .json(&serde_json::json!({
            "start_date": "2024-01-01",
            "end_date": "2024-01-03",
            "region": "USA",
            "model_choice": "LSTM"
        }))
        .await;
    response.assert_status_ok();

    let params: serde_json::Value = server
        .get(&format!("/sessions/{id}/params"))
        .await
        .json();
    assert_eq!(params["start_date"], "2024-01-01");
    assert_eq!(params["end_date"], "2024-01-03");
    assert_eq!(params["region"], "USA");
    assert_eq!(params["model_choice"], "LSTM");
}

#[tokio::test]
async fn test_unknown_region_label_is_rejected() {
    let server = setup_server(Ok(three_days()));
    let id = create_session(&server).await;

    let response = server
        .put(&format!("/sessions/{id}/params"))
        .json(&serde_json::json!({"region": "Atlantis"}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let server = setup_server(Ok(three_days()));
    let response = server
        .get("/sessions/00000000-0000-0000-0000-000000000000/params")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_prompts_before_any_refresh() {
    let server = setup_server(Ok(three_days()));
    let id = create_session(&server).await;

    let view: serde_json::Value = server
        .get(&format!("/sessions/{id}/dashboard"))
        .await
        .json();
    assert_eq!(view["kind"], "prompt");
    assert!(view["message"].as_str().unwrap().contains("refresh"));
}

#[tokio::test]
async fn test_refresh_and_render_full_flow() {
    let server = setup_server(Ok(three_days()));
    let id = create_session(&server).await;
    set_three_day_range(&server, &id).await;

    let view = refresh_and_render(&server, &id).await;

    assert_eq!(view["kind"], "dashboard");
    let points = view["map"]["points"].as_array().unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0]["color"], 0.0);
    assert_eq!(points[2]["color"], 1.0);

    let series = view["chart"]["series"].as_array().unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series[0]["name"], "ndvi");
    assert_eq!(series[0]["values"].as_array().unwrap().len(), 30);
    assert!(view["chart"]["title"]
        .as_str()
        .unwrap()
        .starts_with("Time-Series at Lat "));
}

#[tokio::test]
async fn test_failed_fetch_reports_error_and_keeps_session_usable() {
    let server = setup_server(Err("HTTP 500 from upstream".to_string()));
    let id = create_session(&server).await;
    set_three_day_range(&server, &id).await;

    let view = refresh_and_render(&server, &id).await;

    assert_eq!(view["kind"], "prompt");
    assert!(view["last_error"]
        .as_str()
        .unwrap()
        .contains("HTTP 500 from upstream"));

    // The session is still there and still accepts parameter changes.
    let response = server
        .put(&format!("/sessions/{id}/params"))
        .json(&serde_json::json!({"region": "India"}))
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_length_mismatch_surfaces_descriptive_error() {
    let server = setup_server(Ok(DailyWeather {
        temperature: vec![30.0, 32.0],
        precipitation: vec![10.0, 5.0],
        humidity: vec![40.0, 50.0],
    }));
    let id = create_session(&server).await;
    set_three_day_range(&server, &id).await;

    let view = refresh_and_render(&server, &id).await;

    assert_eq!(view["kind"], "prompt");
    let error = view["last_error"].as_str().unwrap();
    assert!(error.contains("expected 3"), "got: {error}");
}

#[tokio::test]
async fn test_export_before_fetch_is_not_found() {
    let server = setup_server(Ok(three_days()));
    let id = create_session(&server).await;

    let response = server.get(&format!("/sessions/{id}/export")).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_export_csv_contents() {
    let server = setup_server(Ok(three_days()));
    let id = create_session(&server).await;
    set_three_day_range(&server, &id).await;
    refresh_and_render(&server, &id).await;

    let response = server.get(&format!("/sessions/{id}/export")).await;
    response.assert_status_ok();

    let headers = response.headers();
    assert_eq!(headers.get("content-type").unwrap(), "text/csv");
    assert_eq!(
        headers.get("content-disposition").unwrap(),
        "attachment; filename=\"climate_predictions.csv\""
    );

    let body = response.text();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "date,temperature,precipitation,humidity,drought_risk,fire_risk,lat,lon"
    );
}

#[tokio::test]
async fn test_save_is_a_stub_acknowledgment() {
    let server = setup_server(Ok(three_days()));
    let id = create_session(&server).await;
    set_three_day_range(&server, &id).await;
    refresh_and_render(&server, &id).await;

    let response = server.post(&format!("/sessions/{id}/save")).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "saved");
    assert!(body["message"].as_str().unwrap().contains("simulation"));

    // Saving persists nothing: a fresh server knows nothing about the session.
    let other = setup_server(Ok(three_days()));
    let missing = other.get(&format!("/sessions/{id}/dashboard")).await;
    missing.assert_status(StatusCode::NOT_FOUND);
}
