//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Catalogs here are small (tens
//! of entries, scanned linearly), so there is no memory pressure to justify
//! single precision, and the distance-label formatting distinguishes
//! sub-metre boundaries.

/// Mean Earth radius in metres, the sphere the haversine formula runs on.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic coordinate in degrees.
///
/// No range is enforced: latitude outside [-90, 90] or longitude outside
/// [-180, 180] still produces a real number from [`distance_m`], just not a
/// geographically meaningful one.  Range discipline belongs to the caller.
///
/// [`distance_m`]: GeoPoint::distance_m
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric up to floating-point rounding, zero for identical points,
    /// never negative, never NaN for finite inputs.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // a is bounded to [0, 1] mathematically, but rounding can push 1 - a
        // marginally below zero, and sqrt of that is NaN.
        let c = 2.0 * a.sqrt().atan2((1.0 - a).max(0.0).sqrt());
        EARTH_RADIUS_M * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
