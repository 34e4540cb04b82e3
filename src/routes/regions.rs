// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reverse geocoding: coordinate to administrative region.

use crate::error::{AppError, Result};
use crate::models::{LngLat, RegionInfo, KOREA_ENVELOPE};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/regions/locate", get(locate_region))
}

#[derive(Deserialize)]
struct LocateQuery {
    lng: Option<String>,
    lat: Option<String>,
}

fn parse_axis(raw: Option<&str>, name: &str) -> Result<f64> {
    let raw = raw.ok_or_else(|| AppError::BadRequest(format!("Missing '{}' parameter", name)))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid '{}' parameter: must be a number", name)))
}

/// Parse and validate a query point: finite, and inside the Korean envelope.
fn parse_point(lng: Option<&str>, lat: Option<&str>) -> Result<LngLat> {
    let point = LngLat::new(parse_axis(lng, "lng")?, parse_axis(lat, "lat")?)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if !KOREA_ENVELOPE.contains(point) {
        return Err(AppError::BadRequest(
            "Coordinate is outside the supported area (lng 124..132, lat 33..39)".to_string(),
        ));
    }
    Ok(point)
}

/// Find the administrative region containing a coordinate.
async fn locate_region(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LocateQuery>,
) -> Result<Json<RegionInfo>> {
    let point = parse_point(params.lng.as_deref(), params.lat.as_deref())?;
    let locator = state.locator()?;

    tracing::debug!(lng = point.lng.0, lat = point.lat.0, "Locating region");

    locator.locate_info(point).map(Json).ok_or_else(|| {
        AppError::NotFound(format!(
            "No region contains ({}, {})",
            point.lng.0, point.lat.0
        ))
    })
}
