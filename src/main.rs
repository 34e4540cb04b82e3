// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Region-Locator API Server
//!
//! Answers reverse geocoding queries against the Korean administrative
//! boundary dataset and proxies forward geocoding to VWorld.

use region_locator::{
    config::Config,
    services::{GeocodeClient, RegionLocator},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Region-Locator API");

    // Load region boundaries. A failed load keeps the server up and answers
    // lookups with "data unavailable".
    tracing::info!(path = %config.boundaries_path.display(), "Loading region boundaries");
    let locator = match RegionLocator::load_from_file(&config.boundaries_path) {
        Ok(locator) => {
            tracing::info!(count = locator.len(), "Region boundaries loaded");
            Some(locator)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load region boundaries");
            None
        }
    };

    let geocoder = GeocodeClient::new(
        config.vworld_base_url.clone(),
        config.vworld_api_key.clone(),
        config.geocode_timeout,
    );
    if !geocoder.has_api_key() {
        tracing::warn!("VWORLD_API_KEY not set, address search is disabled");
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        locator,
        geocoder,
    });

    // Build router
    let app = region_locator::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("region_locator=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
