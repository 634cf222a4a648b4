use fortuna_core::{format_distance, haversine_distance, Coordinate};

use crate::error::SearchError;
use crate::types::{PlaceResult, RawPlace};

/// Converts a raw provider result into a display-ready `PlaceResult`.
///
/// The short name is the text before the first comma of the display name;
/// the address is the remainder with the leading separator stripped. The
/// distance label is the great-circle distance from `origin`.
pub fn place_from_raw(
    raw: &RawPlace,
    index: usize,
    origin: Coordinate,
) -> Result<PlaceResult, SearchError> {
    let id = match raw.place_id {
        Some(place_id) => place_id.to_string(),
        None => format!("osm-{index}"),
    };

    let lat = parse_coordinate(&raw.lat, &id)?;
    let lng = parse_coordinate(&raw.lon, &id)?;
    let coord = Coordinate { lat, lng };

    let name = raw
        .display_name
        .split(',')
        .next()
        .unwrap_or(&raw.display_name)
        .trim()
        .to_string();
    let address = raw
        .display_name
        .strip_prefix(&name)
        .map(|rest| rest.strip_prefix(", ").unwrap_or(rest).to_string())
        .unwrap_or_else(|| raw.display_name.clone());

    let distance_label = format_distance(haversine_distance(origin, coord));

    Ok(PlaceResult {
        id,
        name,
        distance_label,
        address,
        coord,
    })
}

fn parse_coordinate(value: &str, id: &str) -> Result<f64, SearchError> {
    value.parse().map_err(|_| SearchError::InvalidCoordinate {
        id: id.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(display_name: &str, lat: &str, lon: &str) -> RawPlace {
        RawPlace {
            place_id: Some(42),
            display_name: display_name.to_string(),
            lat: lat.to_string(),
            lon: lon.to_string(),
        }
    }

    const TAIPEI: Coordinate = Coordinate { lat: 25.033964, lng: 121.564468 };

    #[test]
    fn test_name_is_text_before_first_comma() {
        let place =
            place_from_raw(&raw("一蘭拉麵, 信義路, 臺北市, 臺灣", "25.0334", "121.5645"), 0, TAIPEI)
                .unwrap();
        assert_eq!(place.name, "一蘭拉麵");
        assert_eq!(place.address, "信義路, 臺北市, 臺灣");
    }

    #[test]
    fn test_single_segment_display_name() {
        let place = place_from_raw(&raw("地標", "25.0334", "121.5645"), 0, TAIPEI).unwrap();
        assert_eq!(place.name, "地標");
        assert_eq!(place.address, "");
    }

    #[test]
    fn test_distance_label_close_by() {
        // The origin itself is zero meters away.
        let place = place_from_raw(&raw("here, there", "25.033964", "121.564468"), 0, TAIPEI)
            .unwrap();
        assert_eq!(place.distance_label, "0 m");
    }

    #[test]
    fn test_distance_label_kilometers() {
        // Roughly 0.01 degrees of longitude away: about 1.1 km.
        let place = place_from_raw(&raw("far, away", "25.033964", "121.574468"), 0, TAIPEI)
            .unwrap();
        assert_eq!(place.distance_label, "1.0 km");
    }

    #[test]
    fn test_missing_place_id_falls_back_to_index() {
        let mut r = raw("x, y", "25.0", "121.5");
        r.place_id = None;
        let place = place_from_raw(&r, 7, TAIPEI).unwrap();
        assert_eq!(place.id, "osm-7");
    }

    #[test]
    fn test_unparseable_coordinate_is_an_error() {
        let err = place_from_raw(&raw("x, y", "not-a-number", "121.5"), 0, TAIPEI).unwrap_err();
        match err {
            SearchError::InvalidCoordinate { id, value } => {
                assert_eq!(id, "42");
                assert_eq!(value, "not-a-number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
