//! Display-formatting helpers for distances and radii.
//!
//! These are output contracts for UI strings, not computation: the label
//! text and rounding rules are fixed.

/// Format a distance in metres for display.
///
/// Below 1 km the value is rounded to the nearest metre (`"42 m"`); from
/// 1 km up it is shown with one decimal (`"1.5 km"`).  The threshold check
/// runs on the raw value, so `999.6` rounds up within the metre branch and
/// formats as `"1000 m"`, not `"1.0 km"`.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{} m", meters.round() as i64)
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

/// One entry of the fixed radius picker shown when creating a geofence.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiusOption {
    pub meters: f64,
    pub label: &'static str,
}

/// The radius choices offered by the UI, ascending.
pub const RADIUS_OPTIONS: [RadiusOption; 6] = [
    RadiusOption { meters: 25.0,   label: "25 m (small room)" },
    RadiusOption { meters: 50.0,   label: "50 m (building)" },
    RadiusOption { meters: 100.0,  label: "100 m (city block)" },
    RadiusOption { meters: 250.0,  label: "250 m (neighborhood)" },
    RadiusOption { meters: 500.0,  label: "500 m (large area)" },
    RadiusOption { meters: 1000.0, label: "1 km (district)" },
];
