use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, as used by the haversine formula.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Angular half-width of the nearby-search bounding box, in degrees.
///
/// One degree of latitude is roughly 111 km, so 0.045° approximates a 5 km
/// radius at mid-latitudes. The offset is not adjusted for latitude, so the
/// effective radius shrinks toward the poles; accepted limitation.
pub const NEARBY_OFFSET_DEG: f64 = 0.045;

/// A WGS84 coordinate. `lat` in [-90, 90], `lng` in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Rectangular lat/lng region used to constrain a nearby search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    /// Box extending `offset` degrees on each side of `origin`.
    pub fn around(origin: Coordinate, offset: f64) -> Self {
        Self {
            left: origin.lng - offset,
            top: origin.lat - offset,
            right: origin.lng + offset,
            bottom: origin.lat + offset,
        }
    }

    /// Renders the box as a `left,top,right,bottom` query value.
    pub fn viewbox(&self) -> String {
        format!("{},{},{},{}", self.left, self.top, self.right, self.bottom)
    }
}

/// Great-circle distance between two coordinates in meters.
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lng - a.lng).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Formats a distance for display: whole meters up to 1 km, kilometers with
/// one decimal beyond.
pub fn format_distance(meters: f64) -> String {
    if meters > 1000.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{} m", meters.round() as i64)
    }
}

/// Map-viewer deep link for a coordinate, openable in an external browser.
pub fn maps_search_url(coord: Coordinate) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        coord.lat, coord.lng
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_of_identical_points_is_zero() {
        let p = Coordinate { lat: 25.0, lng: 121.5 };
        assert_eq!(haversine_distance(p, p), 0.0);
        assert_eq!(format_distance(haversine_distance(p, p)), "0 m");
    }

    #[test]
    fn haversine_along_the_equator() {
        let a = Coordinate { lat: 0.0, lng: 0.0 };
        let b = Coordinate { lat: 0.0, lng: 0.01 };
        let d = haversine_distance(a, b);
        // 0.01° of longitude at the equator is a bit over 1.1 km.
        assert!(d > 1100.0 && d < 1125.0, "got {d}");
        assert_eq!(format_distance(d), "1.1 km");
    }

    #[test]
    fn format_distance_units() {
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(432.4), "432 m");
        assert_eq!(format_distance(432.6), "433 m");
        // Exactly 1 km still renders in meters; the kilometer branch is
        // strictly greater-than.
        assert_eq!(format_distance(1000.0), "1000 m");
        assert_eq!(format_distance(1100.0), "1.1 km");
        assert_eq!(format_distance(12_340.0), "12.3 km");
    }

    #[test]
    fn bounding_box_around_origin() {
        // A power-of-two offset keeps the arithmetic exact for the string
        // comparison below.
        let origin = Coordinate { lat: 25.0, lng: 121.0 };
        let bbox = BoundingBox::around(origin, 0.5);
        assert_eq!(bbox.viewbox(), "120.5,24.5,121.5,25.5");
    }

    #[test]
    fn nearby_offset_approximates_five_kilometers() {
        let origin = Coordinate { lat: 25.0, lng: 121.5 };
        let bbox = BoundingBox::around(origin, NEARBY_OFFSET_DEG);
        assert!((bbox.right - origin.lng - 0.045).abs() < 1e-12);
        assert!((origin.lat - bbox.top - 0.045).abs() < 1e-12);

        // 0.045 degrees of latitude is close to 5 km.
        let north = Coordinate { lat: origin.lat + NEARBY_OFFSET_DEG, lng: origin.lng };
        let d = haversine_distance(origin, north);
        assert!((4900.0..5100.0).contains(&d), "got {d}");
    }

    #[test]
    fn maps_url_embeds_the_coordinate() {
        let url = maps_search_url(Coordinate { lat: 25.033964, lng: 121.564468 });
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=25.033964,121.564468"
        );
    }
}
