// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Boundary loading and point-in-region lookup.

use crate::models::region::{RegionFeature, RegionGeometry, RegionInfo, Ring};
use crate::models::LngLat;
use geo::Coord;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Immutable collection of administrative regions, queried by point.
#[derive(Debug, Default, Clone)]
pub struct RegionLocator {
    features: Vec<RegionFeature>,
}

impl RegionLocator {
    /// Load regions from a GeoJSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LocatorError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| LocatorError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load regions from a GeoJSON string.
    ///
    /// Only invalid JSON fails the load. A missing `features` array yields an
    /// empty locator, and individual features that cannot be converted are
    /// skipped with a warning.
    pub fn load_from_json(json_data: &str) -> Result<Self, LocatorError> {
        let mut root: Value = serde_json::from_str(json_data)
            .map_err(|e| LocatorError::ParseError(e.to_string()))?;

        let Some(Value::Array(raw_features)) = root.get_mut("features").map(Value::take) else {
            tracing::warn!("GeoJSON has no features array, no regions loaded");
            return Ok(Self::default());
        };

        let mut features = Vec::with_capacity(raw_features.len());
        let mut skipped = 0usize;

        for (index, raw) in raw_features.into_iter().enumerate() {
            match Self::convert_feature(raw) {
                Ok(feature) => features.push(feature),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(index, error = %e, "Skipping malformed feature");
                }
            }
        }

        tracing::info!(count = features.len(), skipped, "Loaded regions");
        Ok(Self { features })
    }

    /// Build a locator from already-converted features, keeping their order.
    pub fn from_features(features: Vec<RegionFeature>) -> Self {
        Self { features }
    }

    fn convert_feature(raw: Value) -> Result<RegionFeature, LocatorError> {
        let feature = geojson::Feature::try_from(raw)
            .map_err(|e| LocatorError::ParseError(e.to_string()))?;

        let geometry = feature.geometry.ok_or(LocatorError::MissingGeometry)?;
        let geometry = Self::convert_geometry(geometry.value)?;

        let metadata = feature
            .properties
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                Value::Number(n) => Some((key, n.to_string())),
                _ => None,
            })
            .collect::<BTreeMap<_, _>>();

        Ok(RegionFeature::new(metadata, geometry))
    }

    /// Convert GeoJSON geometry to outer rings only.
    fn convert_geometry(value: geojson::Value) -> Result<RegionGeometry, LocatorError> {
        match value {
            geojson::Value::Polygon(rings) => Ok(RegionGeometry::Polygon(Self::outer_ring(&rings)?)),
            geojson::Value::MultiPolygon(polygons) => polygons
                .iter()
                .map(|rings| Self::outer_ring(rings))
                .collect::<Result<Vec<_>, _>>()
                .map(RegionGeometry::MultiPolygon),
            _ => Err(LocatorError::UnsupportedGeometry),
        }
    }

    fn outer_ring(rings: &[Vec<geojson::Position>]) -> Result<Ring, LocatorError> {
        let Some(outer) = rings.first() else {
            return Ok(Ring(Vec::new()));
        };
        outer
            .iter()
            .map(|position| match position.as_slice() {
                [x, y, ..] => Ok(Coord { x: *x, y: *y }),
                _ => Err(LocatorError::InvalidPosition),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Ring)
    }

    /// Get the loaded regions, in dataset order.
    pub fn features(&self) -> &[RegionFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Find the first region, in dataset order, whose geometry contains the point.
    ///
    /// Overlapping regions are resolved by order alone.
    pub fn locate(&self, point: LngLat) -> Option<&RegionFeature> {
        self.features.iter().find(|f| f.contains(point))
    }

    /// Like [`locate`](Self::locate), returning the caller-facing summary.
    pub fn locate_info(&self, point: LngLat) -> Option<RegionInfo> {
        self.locate(point).map(RegionFeature::info)
    }
}

/// Errors from region loading.
#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse GeoJSON: {0}")]
    ParseError(String),

    #[error("Feature has no geometry")]
    MissingGeometry,

    #[error("Unsupported geometry type (expected Polygon or MultiPolygon)")]
    UnsupportedGeometry,

    #[error("Position has fewer than two coordinates")]
    InvalidPosition,
}
