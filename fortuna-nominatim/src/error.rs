use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search failed: provider returned status {status}")]
    Api { status: u16 },

    #[error("empty search keyword")]
    EmptyKeyword,

    #[error("unparseable coordinate in result {id}: {value}")]
    InvalidCoordinate { id: String, value: String },
}
