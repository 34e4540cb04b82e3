// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! VWorld address geocoding client.
//!
//! Resolves a road-name address to a WGS84 coordinate. The locator is then
//! run on the result by the route handler.

use crate::error::AppError;
use crate::models::LngLat;
use serde::Deserialize;
use std::time::Duration;

/// Result of a forward geocoding lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeOutcome {
    Found(LngLat),
    NotFound,
}

/// VWorld address API client.
#[derive(Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeocodeClient {
    /// Create a client. Without an API key every lookup fails with a
    /// configuration error.
    pub fn new(base_url: String, api_key: Option<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Look up the coordinate of a road-name address.
    pub async fn geocode(&self, address: &str) -> Result<GeocodeOutcome, AppError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Configuration("VWorld API key is not configured".to_string())
        })?;

        tracing::info!(address, "Geocoding address");

        let url = format!("{}/req/address", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("service", "address"),
                ("request", "getcoord"),
                ("version", "2.0"),
                ("crs", "epsg:4326"),
                ("address", address),
                ("refine", "true"),
                ("simple", "false"),
                ("format", "json"),
                ("type", "road"),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(|e| AppError::Geocoder(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Geocoder(format!("HTTP {}: {}", status, body)));
        }

        let body: VworldResponse = response
            .json()
            .await
            .map_err(|e| AppError::Geocoder(format!("JSON parse error: {}", e)))?;

        let outcome = body.into_outcome()?;
        tracing::debug!(address, outcome = ?outcome, "Geocoding finished");
        Ok(outcome)
    }
}

/// Top-level VWorld response envelope.
#[derive(Debug, Deserialize)]
pub struct VworldResponse {
    pub response: VworldBody,
}

#[derive(Debug, Deserialize)]
pub struct VworldBody {
    pub status: String,
    pub result: Option<VworldResult>,
    pub error: Option<VworldError>,
}

#[derive(Debug, Deserialize)]
pub struct VworldResult {
    pub point: VworldPoint,
}

/// VWorld returns coordinates as strings; numbers are accepted too.
#[derive(Debug, Deserialize)]
pub struct VworldPoint {
    pub x: serde_json::Value,
    pub y: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct VworldError {
    pub text: Option<String>,
}

impl VworldResponse {
    /// Interpret the envelope. `x` is longitude, `y` is latitude under EPSG:4326.
    pub fn into_outcome(self) -> Result<GeocodeOutcome, AppError> {
        match self.response.status.as_str() {
            "OK" => {
                let point = self
                    .response
                    .result
                    .ok_or_else(|| AppError::Geocoder("OK response without result".to_string()))?
                    .point;
                let lng = parse_axis(&point.x, "x")?;
                let lat = parse_axis(&point.y, "y")?;
                let coord = LngLat::new(lng, lat).map_err(|e| AppError::Geocoder(e.to_string()))?;
                Ok(GeocodeOutcome::Found(coord))
            }
            "NOT_FOUND" => Ok(GeocodeOutcome::NotFound),
            other => {
                let text = self
                    .response
                    .error
                    .and_then(|e| e.text)
                    .unwrap_or_else(|| format!("status {}", other));
                Err(AppError::Geocoder(text))
            }
        }
    }
}

fn parse_axis(value: &serde_json::Value, name: &str) -> Result<f64, AppError> {
    let parsed = match value {
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed.ok_or_else(|| AppError::Geocoder(format!("Invalid point.{} in response", name)))
}
