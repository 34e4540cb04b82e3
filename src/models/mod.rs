// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod coord;
pub mod region;

pub use coord::{Envelope, Latitude, LngLat, Longitude, KOREA_ENVELOPE};
pub use region::{RegionFeature, RegionGeometry, RegionInfo, Ring};
