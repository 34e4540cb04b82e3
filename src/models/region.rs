// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Administrative region model and ring containment.

use super::coord::LngLat;
use geo::{Coord, Rect};
use serde::Serialize;
use std::collections::BTreeMap;

/// Property holding the province (시도) name.
pub const PROVINCE_KEY: &str = "sidonm";
/// Property holding the district (시군구) name.
pub const DISTRICT_KEY: &str = "sggnm";
/// Property holding the sub-district (읍면동) name.
pub const SUB_DISTRICT_KEY: &str = "adm_nm";
/// Property holding the administrative code.
pub const ADM_CODE_KEY: &str = "adm_cd";

/// An outer boundary ring in `(lng, lat)` order.
///
/// The ring is implicitly closed; a repeated closing vertex is allowed but
/// not required.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring(pub Vec<Coord<f64>>);

impl Ring {
    /// Even-odd ray-casting test against this ring.
    ///
    /// Points exactly on an edge or vertex resolve according to floating
    /// point rounding. The result is deterministic for identical input but
    /// has no canonical answer.
    pub fn contains(&self, point: Coord<f64>) -> bool {
        let vertices = &self.0;
        let n = vertices.len();
        if n < 3 {
            return false;
        }

        let (px, py) = (point.x, point.y);
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = (vertices[i].x, vertices[i].y);
            let (xj, yj) = (vertices[j].x, vertices[j].y);

            if (yi > py) != (yj > py) {
                let x_cross = (xj - xi) * (py - yi) / (yj - yi) + xi;
                if px < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

/// Region geometry: only outer rings are kept, holes are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionGeometry {
    Polygon(Ring),
    MultiPolygon(Vec<Ring>),
}

impl RegionGeometry {
    /// Outer rings in document order.
    pub fn rings(&self) -> &[Ring] {
        match self {
            RegionGeometry::Polygon(ring) => std::slice::from_ref(ring),
            RegionGeometry::MultiPolygon(rings) => rings,
        }
    }

    /// True if any outer ring contains the point. Stops at the first match.
    pub fn contains(&self, point: Coord<f64>) -> bool {
        self.rings().iter().any(|ring| ring.contains(point))
    }

    /// Bounding rectangle over all outer rings, `None` if every ring is empty.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        let mut coords = self.rings().iter().flat_map(|ring| ring.0.iter());
        let first = *coords.next()?;
        let (min, max) = coords.fold((first, first), |(min, max), c| {
            (
                Coord {
                    x: min.x.min(c.x),
                    y: min.y.min(c.y),
                },
                Coord {
                    x: max.x.max(c.x),
                    y: max.y.max(c.y),
                },
            )
        });
        Some(Rect::new(min, max))
    }
}

/// One administrative region from the boundary dataset.
#[derive(Debug, Clone)]
pub struct RegionFeature {
    /// String-valued feature properties (`sidonm`, `sggnm`, `adm_nm`, `adm_cd`, ...)
    pub metadata: BTreeMap<String, String>,
    pub geometry: RegionGeometry,
    /// Cached bounds of `geometry`
    pub bounds: Option<Rect<f64>>,
}

impl RegionFeature {
    pub fn new(metadata: BTreeMap<String, String>, geometry: RegionGeometry) -> Self {
        let bounds = geometry.bounding_rect();
        Self {
            metadata,
            geometry,
            bounds,
        }
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Full containment test, with a bounds pre-check before ring traversal.
    pub fn contains(&self, point: LngLat) -> bool {
        let coord: Coord<f64> = point.into();
        match self.bounds {
            Some(rect) if !rect_contains(&rect, coord) => false,
            Some(_) => self.geometry.contains(coord),
            None => false,
        }
    }

    /// Summary record for callers.
    pub fn info(&self) -> RegionInfo {
        let field = |key: &str| self.property(key).unwrap_or_default().to_string();
        RegionInfo {
            province: field(PROVINCE_KEY),
            district: field(DISTRICT_KEY),
            sub_district: field(SUB_DISTRICT_KEY),
            adm_code: field(ADM_CODE_KEY),
            bounds: self
                .bounds
                .map(|r| [[r.min().x, r.min().y], [r.max().x, r.max().y]]),
        }
    }
}

fn rect_contains(rect: &Rect<f64>, c: Coord<f64>) -> bool {
    c.x >= rect.min().x && c.x <= rect.max().x && c.y >= rect.min().y && c.y <= rect.max().y
}

/// Region metadata returned by lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionInfo {
    pub province: String,
    pub district: String,
    pub sub_district: String,
    pub adm_code: String,
    /// `[[west, south], [east, north]]`, in `[lng, lat]` order
    pub bounds: Option<[[f64; 2]; 2]>,
}
