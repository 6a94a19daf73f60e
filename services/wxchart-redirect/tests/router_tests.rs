//! End-to-end routing tests against in-memory upstreams.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::{DateTime, Utc};
use tower::ServiceExt;

use test_utils::{assert_redirect, sample_manifest_json, utc};
use wxchart_common::{ChartError, ChartResult, Manifest};
use wxchart_redirect::clock::FixedClock;
use wxchart_redirect::config::RedirectConfig;
use wxchart_redirect::router::create_router;
use wxchart_redirect::state::AppState;
use wxchart_redirect::upstream::{ChartProbe, ManifestSource};

const CHART_BASE: &str = "http://charts.test/data";
const PNG_BASE: &str = "http://manifest.test/png/";

enum FakeManifest {
    Body(String),
    Status(u16, &'static str),
}

#[async_trait]
impl ManifestSource for FakeManifest {
    async fn fetch_manifest(&self) -> ChartResult<Manifest> {
        match self {
            FakeManifest::Body(body) => Manifest::from_json(body),
            FakeManifest::Status(status, body) => Err(ChartError::UpstreamUnavailable {
                status: *status,
                body: body.to_string(),
            }),
        }
    }
}

/// Records every probed URL; answers `true` only for `existing`.
#[derive(Default)]
struct RecordingProbe {
    existing: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl RecordingProbe {
    fn with_existing(urls: &[&str]) -> Self {
        Self {
            existing: urls.iter().map(|u| u.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChartProbe for RecordingProbe {
    async fn exists(&self, url: &str) -> bool {
        self.calls.lock().unwrap().push(url.to_string());
        self.existing.iter().any(|u| u == url)
    }
}

fn config() -> RedirectConfig {
    RedirectConfig {
        chart_base: CHART_BASE.to_string(),
        manifest_png_base: PNG_BASE.to_string(),
        ..Default::default()
    }
}

fn latest() -> DateTime<Utc> {
    utc(2023, 6, 15, 9, 0)
}

fn app_with(manifest: FakeManifest, probe: Arc<RecordingProbe>, now: DateTime<Utc>) -> Router {
    let state = AppState::with_upstream(
        config(),
        Arc::new(manifest),
        probe,
        Arc::new(FixedClock(now)),
    );
    create_router(Arc::new(state))
}

fn app() -> (Router, Arc<RecordingProbe>) {
    let probe = Arc::new(RecordingProbe::default());
    let app = app_with(
        FakeManifest::Body(sample_manifest_json(latest())),
        probe.clone(),
        utc(2023, 6, 15, 10, 0),
    );
    (app, probe)
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_greeting() {
    let (app, _) = app();
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.starts_with("Hello, from wxchart-redirect v"));
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app();
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "wxchart-redirect");
}

#[tokio::test]
async fn test_metrics_disabled_is_not_found() {
    let (app, _) = app();
    let response = get(app, "/metrics").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_forecast_redirect() {
    let (app, probe) = app();
    let response = get(app, "/jma/weather-map/forecast/SPAS/24.png").await;

    assert_redirect!(
        response,
        "http://manifest.test/png/fcst_SPAS_COLOR_ft24_20230615090000_ja.png"
    );
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "max-age=60"
    );
    assert!(probe.calls().is_empty());
}

#[tokio::test]
async fn test_forecast_short_route_mono_asia() {
    let (app, _) = app();
    let response = get(app.clone(), "/jma/weather-map/forecast/48.png").await;
    assert_redirect!(
        response,
        "http://manifest.test/png/fcst_SPAS_COLOR_ft48_20230615090000_ja.png"
    );

    let response = get(app, "/jma/weather-map/forecast/ASAS/48.png?color=mono").await;
    assert_redirect!(
        response,
        "http://manifest.test/png/fcst_ASAS_MONO_ft48_20230615090000_ja.png"
    );
}

#[tokio::test]
async fn test_forecast_bad_horizon() {
    let (app, _) = app();
    let response = get(app, "/jma/weather-map/forecast/SPAS/36.png").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_text(response).await;
    assert!(body.contains("\"24\""));
    assert!(body.contains("\"48\""));
}

#[tokio::test]
async fn test_today_redirect_from_manifest() {
    let (app, probe) = app();
    let response = get(app, "/jma/weather-map/archives/SPAS/today.png").await;

    assert_redirect!(
        response,
        "http://charts.test/data/wxchart/quick/202306/SPAS_COLOR_202306150900.png"
    );
    assert!(probe.calls().is_empty());
}

#[tokio::test]
async fn test_today_svg_and_pdf() {
    let (app, _) = app();
    let response = get(app.clone(), "/jma/weather-map/archives/ASAS/today.svg").await;
    assert_redirect!(
        response,
        "http://charts.test/data/wxchart/quick/202306/ASAS_COLOR_202306150600.svgz"
    );

    let response = get(app, "/jma/weather-map/archives/today.pdf?color=monochrome").await;
    assert_redirect!(
        response,
        "http://charts.test/data/wxchart/quick/202306/SPAS_MONO_202306150900.pdf"
    );
}

#[tokio::test]
async fn test_days_ago_probes_back_from_same_time() {
    let hit = "http://charts.test/data/wxchart/quick/202306/SPAS_COLOR_202306130600.png";
    let probe = Arc::new(RecordingProbe::with_existing(&[hit]));
    let app = app_with(
        FakeManifest::Status(500, "manifest must not be read"),
        probe.clone(),
        utc(2023, 6, 15, 10, 0),
    );

    let response = get(app, "/jma/weather-map/archives/SPAS/2daysago.png").await;

    assert_redirect!(response, hit);
    assert_eq!(
        probe.calls(),
        vec![
            "http://charts.test/data/wxchart/quick/202306/SPAS_COLOR_202306130900.png".to_string(),
            hit.to_string(),
        ]
    );
}

#[tokio::test]
async fn test_yesterday_exhausted_is_not_found() {
    let (app, probe) = app();
    let response = get(app, "/jma/weather-map/archives/ASAS/yesterday.png").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_text(response).await,
        "Could not find the latest weather map"
    );
    let calls = probe.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls[0].ends_with("ASAS_COLOR_202306140600.png"));
    assert!(calls[1].ends_with("ASAS_COLOR_202306140000.png"));
    assert!(calls[2].ends_with("ASAS_COLOR_202306131800.png"));
}

#[tokio::test]
async fn test_days_ago_reaching_earliest_date_is_not_found() {
    let probe = Arc::new(RecordingProbe::default());
    let app = app_with(
        FakeManifest::Status(500, "manifest must not be read"),
        probe.clone(),
        utc(2023, 6, 15, 1, 0),
    );

    let response = get(app, "/jma/weather-map/archives/ASAS/96484815daysago.png").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(probe.calls().len(), 1);
}

#[tokio::test]
async fn test_unknown_area() {
    let (app, _) = app();
    let response = get(app, "/jma/weather-map/archives/XYZZY/today.png").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_text(response).await;
    assert!(body.contains("ASAS"));
    assert!(body.contains("SPAS"));
}

#[tokio::test]
async fn test_pdf_rejected_for_past_days() {
    let (app, probe) = app();
    let response = get(app, "/jma/weather-map/archives/SPAS/yesterday.pdf").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("svgz"));
    assert!(probe.calls().is_empty());
}

#[tokio::test]
async fn test_bad_selector() {
    let (app, _) = app();
    let response = get(app, "/jma/weather-map/archives/SPAS/tomorrow.png").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("daysago"));
}

#[tokio::test]
async fn test_bad_color() {
    let (app, _) = app();
    let response = get(app, "/jma/weather-map/archives/SPAS/today.png?color=sepia").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_manifest_error_status_passes_through() {
    let probe = Arc::new(RecordingProbe::default());
    let app = app_with(
        FakeManifest::Status(503, "maintenance"),
        probe,
        utc(2023, 6, 15, 10, 0),
    );

    let response = get(app, "/jma/weather-map/forecast/SPAS/24.png").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_text(response).await, "maintenance");
}

#[tokio::test]
async fn test_manifest_entry_without_timestamp() {
    let body = serde_json::json!({
        "near": { "now": ["latest.png"], "ft24": [], "ft48": [] },
        "near_monochrome": { "now": [], "ft24": [], "ft48": [] },
        "asia": { "now": [], "ft24": [], "ft48": [] },
        "asia_monochrome": { "now": [], "ft24": [], "ft48": [] },
    })
    .to_string();
    let probe = Arc::new(RecordingProbe::default());
    let app = app_with(FakeManifest::Body(body), probe, utc(2023, 6, 15, 10, 0));

    let response = get(app, "/jma/weather-map/archives/SPAS/today.png").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_unmatched_path() {
    let (app, _) = app();
    let response = get(app, "/jma/weather-map/somewhere/else/entirely").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "unvalid URL pattern");
}
