//! Geofence matching and ranking.
//!
//! Both functions are linear scans over the caller's catalog — no spatial
//! index.  Catalogs are user-curated lists of named places, small enough
//! that the scan plus a sort of the matching subset is the whole cost model.

use crate::fence::Fence;
use crate::geo::GeoPoint;

/// A matched fence together with the distance from the query point to its
/// center, in metres.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match<T> {
    pub location: T,
    #[cfg_attr(feature = "serde", serde(rename = "distance"))]
    pub distance_m: f64,
}

/// All fences containing `query`, closest center first.
///
/// The boundary is inclusive, consistent with [`Fence::contains`].  The sort
/// is stable, so equidistant matches keep their catalog order.  An empty
/// catalog or no containing fence yields an empty `Vec`.
pub fn find_matches<T: Fence + Clone>(query: GeoPoint, fences: &[T]) -> Vec<Match<T>> {
    let mut matches: Vec<Match<T>> = fences
        .iter()
        .filter_map(|fence| {
            let distance_m = query.distance_m(fence.center());
            (distance_m <= fence.radius_m()).then(|| Match {
                location: fence.clone(),
                distance_m,
            })
        })
        .collect();

    matches.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
    matches
}

/// The single most specific fence containing `query`, or `None`.
///
/// Smallest radius wins: a 10 m desk fence beats a 100 m building fence even
/// when the building's center is closer.  Equal radii fall back to smallest
/// distance; an exact double tie keeps catalog order (stable sort).
pub fn find_best_match<T: Fence + Clone>(query: GeoPoint, fences: &[T]) -> Option<Match<T>> {
    let mut matches = find_matches(query, fences);
    matches.sort_by(|a, b| {
        a.location
            .radius_m()
            .total_cmp(&b.location.radius_m())
            .then(a.distance_m.total_cmp(&b.distance_m))
    });
    matches.into_iter().next()
}
