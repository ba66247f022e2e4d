//! `geofence-core` — haversine distance and circular geofence matching.
//!
//! A stateless set of pure functions: the caller supplies a position and a
//! catalog of named circular regions, the engine says which regions contain
//! the position, ranked by distance, plus a single "best" (most specific)
//! match.  No I/O, no shared state, safe to call from any number of threads.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, haversine distance, `EARTH_RADIUS_M`       |
//! | [`fence`]    | `Fence` trait, `NamedLocation`                         |
//! | [`matching`] | `Match<T>`, `find_matches`, `find_best_match`          |
//! | [`format`]   | `format_distance`, `RADIUS_OPTIONS`                    |
//! | [`catalog`]  | JSON catalog loading (feature = `"json"` only)         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.         |
//! | `json`  | Enables the [`catalog`] module (implies `serde`).           |
//!
//! # Ranking
//!
//! [`find_matches`] orders by distance, closest first.  [`find_best_match`]
//! instead prefers the *smallest radius* among containing regions — a small
//! region is a more specific identification than a large one that happens to
//! be centered nearby — and only breaks radius ties by distance.

pub mod fence;
pub mod format;
pub mod geo;
pub mod matching;

#[cfg(feature = "json")]
pub mod catalog;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use fence::{Fence, NamedLocation};
pub use format::{format_distance, RadiusOption, RADIUS_OPTIONS};
pub use geo::{GeoPoint, EARTH_RADIUS_M};
pub use matching::{find_best_match, find_matches, Match};

#[cfg(feature = "json")]
pub use catalog::{CatalogError, CatalogResult};
