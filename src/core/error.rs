use std::fmt;

use thiserror::Error;

/// The upstream data providers this crate talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Symbol search and company overview (`SYMBOL_SEARCH`, `OVERVIEW`).
    AlphaVantage,
    /// Peer listing (`/stock/peers`).
    Finnhub,
}

impl Provider {
    /// Human-readable provider name, as shown in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AlphaVantage => "Alpha Vantage",
            Self::Finnhub => "Finnhub",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse classification of a [`MetricsError`], used by callers to decide how
/// to present a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required API key was not supplied.
    MissingCredential,
    /// Network, transport, HTTP status or provider-reported failure.
    ProviderUnavailable,
    /// Symbol search returned no candidates.
    NoMatchFound,
    /// The overview for an already chosen symbol could not be fetched.
    FetchFailed,
    /// Malformed input or payload that does not fit the other classes.
    Internal,
}

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// An error occurred during an HTTP request (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON of the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The provider rejected the call because of its request quota.
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that was throttled.
        url: String,
    },

    /// The provider answered successfully but reported an error in the payload.
    #[error("{provider} error: {message}")]
    Api {
        /// Which provider reported the error.
        provider: Provider,
        /// The message returned by the provider.
        message: String,
    },

    /// The data received was in an unexpected format.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A required API key was empty or missing.
    #[error("missing {provider} API key")]
    MissingCredential {
        /// Provider whose key is missing.
        provider: Provider,
    },

    /// Symbol search produced no candidates for the query.
    #[error(
        "no symbol matches for {query:?}; try a different name or add the exchange (e.g. 'TCS NSE')"
    )]
    NoMatchFound {
        /// The free-text query that was searched.
        query: String,
    },

    /// Fetching fundamentals for a chosen symbol failed.
    #[error("overview fetch for {symbol} failed: {source}")]
    FetchFailed {
        /// The symbol that was being fetched.
        symbol: String,
        /// The underlying failure.
        #[source]
        source: Box<MetricsError>,
    },
}

impl MetricsError {
    /// Classifies this error into the crate's error taxonomy.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential { .. } => ErrorKind::MissingCredential,
            Self::Http(_) | Self::Status { .. } | Self::RateLimited { .. } | Self::Api { .. } => {
                ErrorKind::ProviderUnavailable
            }
            Self::NoMatchFound { .. } => ErrorKind::NoMatchFound,
            Self::FetchFailed { .. } => ErrorKind::FetchFailed,
            Self::Url(_) | Self::Json(_) | Self::Data(_) => ErrorKind::Internal,
        }
    }

    /// Whether this error should be shown as a warning rather than a failure.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self.kind(), ErrorKind::NoMatchFound)
    }

    pub(crate) fn fetch_failed(symbol: &str, source: Self) -> Self {
        Self::FetchFailed {
            symbol: symbol.to_string(),
            source: Box::new(source),
        }
    }
}
