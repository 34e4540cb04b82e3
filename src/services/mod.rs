// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod geocode;
pub mod locator;

pub use geocode::{GeocodeClient, GeocodeOutcome};
pub use locator::{LocatorError, RegionLocator};
