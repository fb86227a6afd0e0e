use thiserror::Error;

/// Failure to obtain page text from the retrieval collaborator.
///
/// Never fatal for a batch: callers degrade the affected listing to the data
/// they already have.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("page not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("empty page body from {url}")]
    EmptyBody { url: String },
}
