use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the endpoint failed (no connectivity, timeout) or the
    /// body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returns a non-success status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The body is not JSON or does not have the `{"id", "quote", "status"}`
    /// shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// The source reached a state it should never be in. (e.g. a mock source
    /// with no results left)
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

/// Coarse classification of a [`QuoteError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteErrorKind {
    /// Transport failure or non-success status.
    Network,
    /// The body could not be decoded into a quote.
    Decode,
    Other,
}

impl QuoteError {
    #[must_use]
    pub fn kind(&self) -> QuoteErrorKind {
        match self {
            Self::Transport(_) | Self::StatusCode(..) => QuoteErrorKind::Network,
            Self::Decode(_) => QuoteErrorKind::Decode,
            Self::InvalidInput(_) | Self::Invariant(..) => QuoteErrorKind::Other,
        }
    }
}

pub type QuoteResult<T> = Result<T, QuoteError>;
