use fortuna_core::{maps_search_url, Coordinate};
use serde::Deserialize;

/// One raw result object as returned by the Nominatim search endpoint.
///
/// Only the fields the conversion needs are kept: the place identifier, the
/// comma-delimited display name (most specific part first) and the
/// coordinate, which the provider serializes as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub place_id: Option<u64>,
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

/// A nearby place, ready for display.
///
/// Ephemeral: results live only in the last-search view. Adding one to the
/// wheel copies its `name` into the option set; the rest stays behind.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceResult {
    pub id: String,
    pub name: String,
    pub distance_label: String,
    pub address: String,
    pub coord: Coordinate,
}

impl PlaceResult {
    /// Map-viewer deep link for this place, openable in an external browser.
    pub fn maps_url(&self) -> String {
        maps_search_url(self.coord)
    }
}
