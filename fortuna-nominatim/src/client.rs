use fortuna_core::{BoundingBox, Coordinate, NEARBY_OFFSET_DEG};
use tracing::{debug, instrument};

use crate::convert::place_from_raw;
use crate::error::SearchError;
use crate::types::{PlaceResult, RawPlace};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Result language hint sent with every search.
pub const DEFAULT_LANGUAGE: &str = "zh-TW";

/// Maximum number of results requested from the provider.
pub const RESULT_LIMIT: u32 = 10;

/// Client for the Nominatim search API.
///
/// The client is stateless; issuing one search at a time is the caller's
/// contract (the UI disables re-submission while a request is pending).
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
    language: String,
}

impl NominatimClient {
    /// Creates a new client. Nominatim's usage policy requires an
    /// identifying user agent.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self::with_base_url(user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client against a custom base URL.
    pub fn with_base_url(user_agent: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(user_agent.into())
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Overrides the result language hint.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Searches for places matching `keyword` near `origin`.
    ///
    /// The search is bounded to a fixed-offset box around the origin and
    /// capped at `RESULT_LIMIT` results. Results keep the provider's order
    /// and are annotated with distance labels from `origin`. Any transport
    /// or provider failure yields an error and no partial results.
    #[instrument(skip(self), fields(keyword = %keyword))]
    pub async fn search(
        &self,
        keyword: &str,
        origin: Coordinate,
    ) -> Result<Vec<PlaceResult>, SearchError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(SearchError::EmptyKeyword);
        }

        let viewbox = BoundingBox::around(origin, NEARBY_OFFSET_DEG).viewbox();
        let limit = RESULT_LIMIT.to_string();

        debug!("Sending search request to Nominatim");

        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("format", "json"),
                ("q", keyword),
                ("viewbox", viewbox.as_str()),
                ("bounded", "1"),
                ("limit", limit.as_str()),
                ("accept-language", self.language.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Api {
                status: status.as_u16(),
            });
        }

        let raw: Vec<RawPlace> = response.json().await?;

        debug!(results = raw.len(), "Received search response");

        raw.iter()
            .enumerate()
            .map(|(index, place)| place_from_raw(place, index, origin))
            .collect()
    }
}
