// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use region_locator::config::Config;
use region_locator::routes::create_router;
use region_locator::services::{GeocodeClient, RegionLocator};
use region_locator::AppState;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

pub const FIXTURE_PATH: &str = "tests/fixtures/regions.geojson";

/// API key the mock VWorld server accepts.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-vworld-key";

/// Load the fixture boundaries.
#[allow(dead_code)]
pub fn fixture_locator() -> RegionLocator {
    RegionLocator::load_from_file(FIXTURE_PATH).expect("Failed to load fixture boundaries")
}

fn build_app(config: Config, locator: Option<RegionLocator>) -> (Router, Arc<AppState>) {
    let geocoder = GeocodeClient::new(
        config.vworld_base_url.clone(),
        config.vworld_api_key.clone(),
        config.geocode_timeout,
    );

    let state = Arc::new(AppState {
        config,
        locator,
        geocoder,
    });

    (create_router(state.clone()), state)
}

/// Create a test app around the given locator (`None` = data unavailable).
/// The geocoder has no API key, so no request leaves the process.
#[allow(dead_code)]
pub fn create_test_app_with(locator: Option<RegionLocator>) -> (Router, Arc<AppState>) {
    build_app(Config::test_default(), locator)
}

/// Create a test app with the fixture boundaries loaded.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with(Some(fixture_locator()))
}

/// Create a test app whose geocoder talks to the mock server at `base_url`.
#[allow(dead_code)]
pub fn create_geocoding_test_app(locator: Option<RegionLocator>, base_url: String) -> Router {
    let config = Config {
        vworld_base_url: base_url,
        vworld_api_key: Some(TEST_API_KEY.to_string()),
        ..Config::test_default()
    };
    build_app(config, locator).0
}

/// Canned VWorld `getcoord` responses, keyed by address.
async fn mock_vworld(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("key").map(String::as_str) != Some(TEST_API_KEY) {
        return (StatusCode::UNAUTHORIZED, "unknown key").into_response();
    }
    if params.get("request").map(String::as_str) != Some("getcoord") {
        return (StatusCode::BAD_REQUEST, "unsupported request").into_response();
    }

    let point = |x: &str, y: &str| {
        json!({
            "response": {
                "status": "OK",
                "result": { "crs": "EPSG:4326", "point": { "x": x, "y": y } }
            }
        })
    };

    let body = match params.get("address").map(String::as_str).unwrap_or_default() {
        // Inside the Daejeon fixture region
        "대전광역시 유성구 엑스포로 325" => point("127.3845", "36.3736"),
        // Inside the envelope, outside every fixture region
        "제주특별자치도 제주시 문연로 6" => point("126.4983", "33.4890"),
        // Outside the envelope
        "東京都千代田区" => point("139.6917", "35.6895"),
        "없는 주소" => json!({ "response": { "status": "NOT_FOUND" } }),
        "upstream failure" => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "service down").into_response();
        }
        _ => json!({
            "response": { "status": "ERROR", "error": { "text": "unexpected address" } }
        }),
    };
    Json(body).into_response()
}

/// Start the mock VWorld server on an ephemeral port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_mock_vworld() -> String {
    let app = Router::new().route("/req/address", get(mock_vworld));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock VWorld server");
    let addr = listener.local_addr().expect("mock server address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock VWorld server failed");
    });
    format!("http://{}", addr)
}
