use thiserror::Error;

#[derive(Debug, Error)]
pub enum FortunaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Search error: {0}")]
    Search(#[from] fortuna_nominatim::SearchError),
}
