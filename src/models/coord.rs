// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Axis-typed coordinates.
//!
//! The boundary dataset and the locator use GeoJSON `[longitude, latitude]`
//! order, while most map widgets take `[latitude, longitude]`. Each axis gets
//! its own type so the two orders can only be produced explicitly.

/// Longitude in degrees (x axis).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Longitude(pub f64);

/// Latitude in degrees (y axis).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Latitude(pub f64);

/// A query point in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLat {
    pub lng: Longitude,
    pub lat: Latitude,
}

impl LngLat {
    /// Build a point from raw floats, rejecting NaN and infinities.
    pub fn new(lng: f64, lat: f64) -> Result<Self, CoordError> {
        if !lng.is_finite() {
            return Err(CoordError::NonFinite("longitude"));
        }
        if !lat.is_finite() {
            return Err(CoordError::NonFinite("latitude"));
        }
        Ok(Self {
            lng: Longitude(lng),
            lat: Latitude(lat),
        })
    }

    /// GeoJSON order, `[lng, lat]`.
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng.0, self.lat.0]
    }

    /// Map-library order, `[lat, lng]`.
    pub fn to_lat_lng(self) -> [f64; 2] {
        [self.lat.0, self.lng.0]
    }
}

impl From<LngLat> for geo::Coord<f64> {
    fn from(point: LngLat) -> Self {
        geo::Coord {
            x: point.lng.0,
            y: point.lat.0,
        }
    }
}

/// Axis-aligned lng/lat envelope, inclusive on all sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Envelope {
    pub fn contains(&self, point: LngLat) -> bool {
        (self.min_lng..=self.max_lng).contains(&point.lng.0)
            && (self.min_lat..=self.max_lat).contains(&point.lat.0)
    }
}

/// Plausible domain for queries against the Korean boundary dataset.
pub const KOREA_ENVELOPE: Envelope = Envelope {
    min_lng: 124.0,
    max_lng: 132.0,
    min_lat: 33.0,
    max_lat: 39.0,
};

#[derive(Debug, thiserror::Error)]
pub enum CoordError {
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}
