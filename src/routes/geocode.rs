// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Address search: forward geocoding chained into region lookup.

use crate::error::{AppError, Result};
use crate::models::{RegionInfo, KOREA_ENVELOPE};
use crate::services::GeocodeOutcome;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MAX_ADDRESS_LEN: usize = 200;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/geocode", get(geocode_address))
}

#[derive(Deserialize)]
struct GeocodeQuery {
    address: Option<String>,
}

/// Why a geocoded point does or does not carry a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionStatus {
    Found,
    NotFound,
    OutOfArea,
    DataUnavailable,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResponse {
    pub longitude: f64,
    pub latitude: f64,
    pub region_status: RegionStatus,
    /// Present only when `region_status` is `Found`
    pub region: Option<RegionInfo>,
}

/// Resolve an address to a coordinate and the region containing it.
async fn geocode_address(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GeocodeQuery>,
) -> Result<Json<GeocodeResponse>> {
    let address = params
        .address
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing 'address' parameter".to_string()))?;

    if address.chars().count() > MAX_ADDRESS_LEN {
        return Err(AppError::BadRequest(format!(
            "Address longer than {} characters",
            MAX_ADDRESS_LEN
        )));
    }

    let point = match state.geocoder.geocode(address).await? {
        GeocodeOutcome::Found(point) => point,
        GeocodeOutcome::NotFound => {
            return Err(AppError::NotFound(format!("Address not found: {}", address)));
        }
    };

    let (region_status, region) = if !KOREA_ENVELOPE.contains(point) {
        tracing::debug!(lng = point.lng.0, lat = point.lat.0, "Geocoded point outside envelope");
        (RegionStatus::OutOfArea, None)
    } else {
        match state.locator() {
            Ok(locator) => match locator.locate_info(point) {
                Some(info) => (RegionStatus::Found, Some(info)),
                None => (RegionStatus::NotFound, None),
            },
            Err(_) => {
                tracing::warn!("Region data unavailable, returning coordinate only");
                (RegionStatus::DataUnavailable, None)
            }
        }
    };

    Ok(Json(GeocodeResponse {
        longitude: point.lng.0,
        latitude: point.lat.0,
        region_status,
        region,
    }))
}
