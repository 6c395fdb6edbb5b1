//! Centralized constants for default endpoints, UA and timeouts.

use std::time::Duration;

/// Identifies this crate to the providers.
pub(crate) const USER_AGENT: &str = concat!("equity-metrics/", env!("CARGO_PKG_VERSION"));

/// Alpha Vantage query endpoint (`function=` selects the operation).
pub(crate) const DEFAULT_BASE_ALPHA_VANTAGE: &str = "https://www.alphavantage.co/query";

/// Finnhub company peers endpoint.
pub(crate) const DEFAULT_BASE_FINNHUB_PEERS: &str = "https://finnhub.io/api/v1/stock/peers";

/// Every provider call is abandoned after this long.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
