//! The `Fence` trait and the concrete `NamedLocation` catalog record.
//!
//! Matching is generic over [`Fence`] so applications can run their own
//! catalog types through the engine and get them back in the results with
//! every field intact.  [`NamedLocation`] is the batteries-included record
//! matching the JSON shape the consuming application exchanges.

use crate::geo::GeoPoint;

/// A circular region on the Earth's surface.
///
/// Anything exposing a center and a radius can be matched; all identifying
/// attributes beyond these two are opaque to the engine and pass through
/// to [`Match`](crate::Match) results unchanged.
pub trait Fence {
    /// Center of the circular region.
    fn center(&self) -> GeoPoint;

    /// Radius in metres.  Expected non-negative; a negative radius is not an
    /// error, it is a region that can never contain a point.
    fn radius_m(&self) -> f64;

    /// `true` iff `point` lies within the region.  The boundary is inclusive:
    /// a point exactly at the radius counts as inside.
    #[inline]
    fn contains(&self, point: GeoPoint) -> bool {
        point.distance_m(self.center()) <= self.radius_m()
    }
}

/// A named circular geofence, as supplied by the calling application.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedLocation {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "latitude"))]
    pub lat: f64,
    #[cfg_attr(feature = "serde", serde(rename = "longitude"))]
    pub lon: f64,
    #[cfg_attr(feature = "serde", serde(rename = "radiusMeters"))]
    pub radius_m: f64,
}

impl NamedLocation {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, radius_m: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            radius_m,
        }
    }
}

impl Fence for NamedLocation {
    #[inline]
    fn center(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    #[inline]
    fn radius_m(&self) -> f64 {
        self.radius_m
    }
}
