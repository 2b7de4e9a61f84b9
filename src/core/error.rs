use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// A fetch call returns exactly one of success-with-value or one of these
/// variants; expected provider misbehavior is carried as a value and never
/// escapes the fetch boundary as a panic.
#[derive(Debug, Error)]
pub enum AvError {
    /// The requested indicator name is not part of the recognized catalog.
    /// Detected before any network call is made.
    #[error("unknown indicator type: '{0}'")]
    UnknownIndicator(String),

    /// The provider reported that the symbol does not exist.
    #[error("the symbol '{0}' cannot be found")]
    SymbolNotFound(String),

    /// The provider signalled that the per-minute call quota was exceeded.
    /// Callers should back off and retry later; the crate itself never retries.
    #[error("API call frequency exceeded, wait and try again later")]
    RateLimited,

    /// The provider response parsed, but an expected field or shape was missing.
    #[error("unexpected response structure: {0}")]
    MalformedResponse(String),

    /// A transport-level failure: DNS, timeout, connection reset, or a
    /// non-2xx status without a recognized provider error marker.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Any other unexpected fault, caught at the fetch boundary so the
    /// caller's contract stays uniform.
    #[error("internal error: {0}")]
    Internal(String),

    /// A provided URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// No API key was configured and `RAPIDAPI_KEY` is unset.
    #[error("missing API key: pass AvClientBuilder::api_key or set RAPIDAPI_KEY")]
    MissingApiKey,
}
