// src/error.rs
// =============================================================================
// Error types for the crawler library.
//
// Very little is allowed to fail here: a dead page or a dead link is data, not
// an error. What remains is setting up the crawler (CrawlError) and the page
// fetch result that the crawl turns into the START record (FetchFailure).
// =============================================================================

use thiserror::Error;

/// Errors from building a `Crawler`
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid crawl configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Why the page being scanned could not be fetched
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// The server answered with a status >= 400
    #[error("page returned HTTP {0}")]
    Status(u16),

    /// DNS failure, refused connection, TLS failure, timeout or a broken body
    #[error("page could not be fetched: {0}")]
    Transport(#[source] reqwest::Error),
}

impl FetchFailure {
    /// Status code recorded for this failure (0 for transport failures)
    pub fn status(&self) -> u16 {
        match self {
            FetchFailure::Status(code) => *code,
            FetchFailure::Transport(_) => crate::report::TRANSPORT_FAILURE,
        }
    }
}
