// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Region-Locator: reverse geocoding against Korean administrative boundaries
//!
//! This crate loads the HangJeongDong boundary dataset once at startup and
//! answers "which region contains this point" queries over HTTP, optionally
//! chained after a forward geocoding lookup.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use error::AppError;
use services::{GeocodeClient, RegionLocator};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// `None` when the boundary dataset failed to load.
    pub locator: Option<RegionLocator>,
    pub geocoder: GeocodeClient,
}

impl AppState {
    /// The loaded locator, or `DataUnavailable` if loading failed at startup.
    pub fn locator(&self) -> Result<&RegionLocator, AppError> {
        self.locator.as_ref().ok_or(AppError::DataUnavailable)
    }
}
