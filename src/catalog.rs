//! JSON catalog loading (feature = `"json"` only).
//!
//! The consuming application stores its named-location catalog as a JSON
//! array:
//!
//! ```json
//! [
//!   { "name": "Home",   "latitude": 59.33, "longitude": 18.06, "radiusMeters": 100 },
//!   { "name": "Office", "latitude": 59.34, "longitude": 18.07, "radiusMeters": 50 }
//! ]
//! ```
//!
//! Values are deserialized as-is: radius and coordinate ranges are not
//! validated here, matching the engine's totality policy.

use std::io::Read;

use thiserror::Error;

use crate::fence::NamedLocation;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Parse a catalog from a JSON string.
pub fn from_json(json: &str) -> CatalogResult<Vec<NamedLocation>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a catalog from any reader (file, network body, …).
pub fn from_reader<R: Read>(reader: R) -> CatalogResult<Vec<NamedLocation>> {
    Ok(serde_json::from_reader(reader)?)
}
