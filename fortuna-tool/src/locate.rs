use std::time::Duration;

use fortuna_core::Coordinate;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Position used when the device location cannot be determined: Taipei 101.
/// Keeps the nearby search usable after a location failure.
pub const FALLBACK_COORDINATE: Coordinate = Coordinate {
    lat: 25.033964,
    lng: 121.564468,
};

/// Upper bound on a single device location query.
pub const LOCATE_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_LOOKUP_URL: &str = "http://ip-api.com/json";

#[derive(Debug, Clone, Error)]
pub enum LocateError {
    #[error("location permission denied")]
    Denied,

    #[error("location query timed out")]
    Timeout,

    #[error("position unavailable")]
    Unavailable,
}

/// Outcome of a location resolution.
///
/// A failure is reported as a warning next to the fallback coordinate, never
/// as a propagated fault; the caller always gets a usable position.
#[derive(Debug, Clone)]
pub struct LocateOutcome {
    pub coordinate: Coordinate,
    pub warning: Option<LocateError>,
}

#[derive(Debug, Clone)]
enum PositionSource {
    /// One-shot IP-geolocation lookup. Response contract: a JSON object with
    /// `status` ("success" or "fail") and `lat`/`lon` as decimal degrees.
    GeoIp { url: String },
    /// Position pinned in configuration; always succeeds.
    Fixed(Coordinate),
}

/// Resolves the user's current position once and caches it until an explicit
/// re-locate.
pub struct GeoLocator {
    http: reqwest::Client,
    source: PositionSource,
    cached: Option<Coordinate>,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    status: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

impl GeoLocator {
    pub fn new() -> Self {
        Self::with_lookup_url(DEFAULT_LOOKUP_URL)
    }

    pub fn with_lookup_url(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            source: PositionSource::GeoIp { url: url.into() },
            cached: None,
        }
    }

    /// Locator pinned to a fixed position (the configured home coordinate).
    pub fn fixed(coord: Coordinate) -> Self {
        Self {
            http: reqwest::Client::new(),
            source: PositionSource::Fixed(coord),
            cached: None,
        }
    }

    /// Resolves the current position, reusing the cached value when present.
    ///
    /// On failure the fallback coordinate is returned and cached, with the
    /// error attached as a non-fatal warning.
    pub async fn resolve(&mut self) -> LocateOutcome {
        if let Some(coordinate) = self.cached {
            return LocateOutcome {
                coordinate,
                warning: None,
            };
        }

        let outcome = match self.query().await {
            Ok(coordinate) => {
                debug!(lat = coordinate.lat, lng = coordinate.lng, "Located device");
                LocateOutcome {
                    coordinate,
                    warning: None,
                }
            }
            Err(error) => {
                warn!(%error, "Device location failed, using fallback position");
                LocateOutcome {
                    coordinate: FALLBACK_COORDINATE,
                    warning: Some(error),
                }
            }
        };
        self.cached = Some(outcome.coordinate);
        outcome
    }

    /// Drops the cached position and queries the device again. This is the
    /// only way a cached coordinate gets overwritten.
    pub async fn relocate(&mut self) -> LocateOutcome {
        self.cached = None;
        self.resolve().await
    }

    async fn query(&self) -> Result<Coordinate, LocateError> {
        match &self.source {
            PositionSource::Fixed(coord) => Ok(*coord),
            PositionSource::GeoIp { url } => {
                let response = tokio::time::timeout(LOCATE_TIMEOUT, self.http.get(url).send())
                    .await
                    .map_err(|_| LocateError::Timeout)?
                    .map_err(|_| LocateError::Unavailable)?;

                if response.status() == reqwest::StatusCode::FORBIDDEN {
                    return Err(LocateError::Denied);
                }
                if !response.status().is_success() {
                    return Err(LocateError::Unavailable);
                }

                let body: LookupResponse = response
                    .json()
                    .await
                    .map_err(|_| LocateError::Unavailable)?;
                if body.status != "success" {
                    return Err(LocateError::Unavailable);
                }

                Ok(Coordinate {
                    lat: body.lat,
                    lng: body.lon,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_source_resolves_without_warning() {
        let home = Coordinate { lat: 24.15, lng: 120.66 };
        let mut locator = GeoLocator::fixed(home);

        let outcome = locator.resolve().await;
        assert_eq!(outcome.coordinate, home);
        assert!(outcome.warning.is_none());
    }

    #[tokio::test]
    async fn unreachable_source_falls_back_with_warning() {
        let mut locator = GeoLocator::with_lookup_url("http://127.0.0.1:9");

        let outcome = locator.resolve().await;
        assert_eq!(outcome.coordinate, FALLBACK_COORDINATE);
        assert!(matches!(outcome.warning, Some(LocateError::Unavailable)));
    }

    #[tokio::test]
    async fn fallback_is_cached_until_relocate() {
        let mut locator = GeoLocator::with_lookup_url("http://127.0.0.1:9");

        let first = locator.resolve().await;
        assert!(first.warning.is_some());

        // The cached fallback is reused without re-querying the device, so
        // no new warning is raised.
        let second = locator.resolve().await;
        assert_eq!(second.coordinate, FALLBACK_COORDINATE);
        assert!(second.warning.is_none());

        // An explicit re-locate queries again and fails again.
        let third = locator.relocate().await;
        assert!(third.warning.is_some());
    }

    #[test]
    fn timeout_does_not_exceed_ten_seconds() {
        assert!(LOCATE_TIMEOUT <= Duration::from_secs(10));
    }
}
