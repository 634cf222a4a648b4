//! Nominatim search client for the fortuna decision wheel.
//!
//! This crate wraps the OpenStreetMap Nominatim search endpoint into a typed
//! nearby-place search: a keyword plus an origin coordinate produce an
//! ordered list of places annotated with great-circle distance labels.
//!
//! # Example
//!
//! ```ignore
//! use fortuna_core::Coordinate;
//! use fortuna_nominatim::NominatimClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = NominatimClient::new("fortuna/0.1 (you@example.com)");
//!     let origin = Coordinate { lat: 25.033964, lng: 121.564468 };
//!
//!     let places = client.search("ramen", origin).await.unwrap();
//!     for place in places {
//!         println!("{} ({}) {}", place.name, place.distance_label, place.address);
//!     }
//! }
//! ```

mod client;
mod convert;
mod error;
mod types;

pub use client::{NominatimClient, DEFAULT_LANGUAGE, RESULT_LIMIT};
pub use convert::place_from_raw;
pub use error::SearchError;
pub use types::{PlaceResult, RawPlace};
