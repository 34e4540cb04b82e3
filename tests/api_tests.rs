// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP API tests against the fixture boundaries. Geocoding goes to a mock
//! VWorld server on localhost.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

mod common;

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health_reports_region_count() {
    let (app, _) = common::create_test_app();
    let (status, json) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["regions"], 3);
}

#[tokio::test]
async fn test_health_without_data() {
    let (app, _) = common::create_test_app_with(None);
    let (status, json) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["regions"].is_null());
}

#[tokio::test]
async fn test_locate_found() {
    let (app, _) = common::create_test_app();
    let (status, json) = get_json(app, "/api/regions/locate?lng=127.3845&lat=36.3736").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["province"], "대전광역시");
    assert_eq!(json["district"], "대전광역시 유성구");
    assert_eq!(json["subDistrict"], "대전광역시 유성구 신성동");
    assert_eq!(json["admCode"], "2503064");
    assert_eq!(json["bounds"][0][0], 127.35);
}

#[tokio::test]
async fn test_locate_not_found() {
    let (app, _) = common::create_test_app();
    // Inside the envelope (Jeju) but not in any fixture region
    let (status, json) = get_json(app, "/api/regions/locate?lng=126.5&lat=33.4").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn test_locate_data_unavailable_is_distinct() {
    let (app, _) = common::create_test_app_with(None);
    let (status, json) = get_json(app, "/api/regions/locate?lng=127.3845&lat=36.3736").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "data_unavailable");
}

#[tokio::test]
async fn test_locate_outside_envelope_rejected() {
    let (app, _) = common::create_test_app();
    // Transposed lat/lng for Daejeon
    let (status, json) = get_json(app, "/api/regions/locate?lng=36.3736&lat=127.3845").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "bad_request");
}

#[tokio::test]
async fn test_locate_invalid_params() {
    for uri in [
        "/api/regions/locate",
        "/api/regions/locate?lng=127.0",
        "/api/regions/locate?lng=abc&lat=36.0",
        "/api/regions/locate?lng=NaN&lat=36.0",
    ] {
        let (app, _) = common::create_test_app();
        let (status, json) = get_json(app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json["error"], "bad_request", "{uri}");
    }
}

#[tokio::test]
async fn test_geocode_missing_address() {
    let (app, _) = common::create_test_app();
    let (status, json) = get_json(app, "/api/geocode?address=%20%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "bad_request");
}

#[tokio::test]
async fn test_geocode_address_too_long() {
    let (app, _) = common::create_test_app();
    let long_address = "a".repeat(201);
    let (status, _) = get_json(app, &format!("/api/geocode?address={}", long_address)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_geocode_without_api_key() {
    let (app, _) = common::create_test_app();
    let (status, json) = get_json(
        app,
        "/api/geocode?address=%EB%8C%80%EC%A0%84%EA%B4%91%EC%97%AD%EC%8B%9C",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "configuration_error");
}

fn geocode_uri(address: &str) -> String {
    let url = reqwest::Url::parse_with_params("http://localhost/api/geocode", &[("address", address)])
        .expect("valid url");
    format!("{}?{}", url.path(), url.query().unwrap_or_default())
}

#[tokio::test]
async fn test_geocode_found_region() {
    let base_url = common::spawn_mock_vworld().await;
    let app = common::create_geocoding_test_app(Some(common::fixture_locator()), base_url);

    let (status, json) = get_json(app, &geocode_uri("대전광역시 유성구 엑스포로 325")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["longitude"], 127.3845);
    assert_eq!(json["latitude"], 36.3736);
    assert_eq!(json["regionStatus"], "found");
    assert_eq!(json["region"]["province"], "대전광역시");
    assert_eq!(json["region"]["admCode"], "2503064");
}

#[tokio::test]
async fn test_geocode_region_outcomes_are_distinct() {
    let base_url = common::spawn_mock_vworld().await;
    let jeju = geocode_uri("제주특별자치도 제주시 문연로 6");

    let loaded = common::create_geocoding_test_app(Some(common::fixture_locator()), base_url.clone());
    let (status, not_found) = get_json(loaded, &jeju).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(not_found["regionStatus"], "not_found");
    assert!(not_found["region"].is_null());

    let unloaded = common::create_geocoding_test_app(None, base_url.clone());
    let (status, unavailable) = get_json(unloaded, &jeju).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unavailable["regionStatus"], "data_unavailable");
    assert!(unavailable["region"].is_null());

    assert_ne!(not_found, unavailable);
    assert_eq!(not_found["longitude"], unavailable["longitude"]);

    let loaded = common::create_geocoding_test_app(Some(common::fixture_locator()), base_url);
    let (status, outside) = get_json(loaded, &geocode_uri("東京都千代田区")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outside["regionStatus"], "out_of_area");
    assert!(outside["region"].is_null());
}

#[tokio::test]
async fn test_geocode_address_not_found() {
    let base_url = common::spawn_mock_vworld().await;
    let app = common::create_geocoding_test_app(Some(common::fixture_locator()), base_url);

    let (status, json) = get_json(app, &geocode_uri("없는 주소")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn test_geocode_upstream_failures() {
    let base_url = common::spawn_mock_vworld().await;

    for address in ["upstream failure", "unexpected"] {
        let app = common::create_geocoding_test_app(Some(common::fixture_locator()), base_url.clone());
        let (status, json) = get_json(app, &geocode_uri(address)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY, "{address}");
        assert_eq!(json["error"], "geocoder_error", "{address}");
    }
}
