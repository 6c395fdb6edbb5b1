//! Per-request configuration passed explicitly into every lookup.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::core::MetricsError;

/// Environment variable holding the Alpha Vantage key.
pub const ALPHAVANTAGE_API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";
/// Environment variable holding the Finnhub token.
pub const FINNHUB_API_KEY_ENV: &str = "FINNHUB_API_KEY";

/// Peers averaged for the sector P/E unless overridden.
pub const DEFAULT_MAX_PEERS: usize = 6;
/// Pause before each peer overview call; the Alpha Vantage free tier allows ~5 calls/minute.
pub const DEFAULT_PEER_DELAY: Duration = Duration::from_secs(12);

/// Exchange hint picked by the user.
///
/// Accepted for parity with the input form; [`ExchangeHint::apply`] returns the
/// symbol unchanged because `SYMBOL_SEARCH` already yields exchange-qualified symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangeHint {
    #[default]
    Auto,
    India,
    Us,
    Other,
}

impl ExchangeHint {
    /// Adjusts a resolved symbol for this hint. Currently a passthrough.
    #[must_use]
    pub fn apply(self, symbol: &str) -> String {
        symbol.to_string()
    }
}

impl FromStr for ExchangeHint {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "india" | "in" | "nse" | "bse" | "india (nse/bse)" => Ok(Self::India),
            "us" | "usa" => Ok(Self::Us),
            "other" => Ok(Self::Other),
            other => Err(MetricsError::Data(format!("unknown exchange hint: {other}"))),
        }
    }
}

impl fmt::Display for ExchangeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "Auto",
            Self::India => "India (NSE/BSE)",
            Self::Us => "US",
            Self::Other => "Other",
        })
    }
}

/// Credentials and switches for one lookup.
///
/// Blank keys are stored as `None`, so "not supplied" and "supplied empty"
/// behave the same everywhere.
#[derive(Clone, PartialEq, Eq)]
pub struct LookupConfig {
    alpha_vantage_key: Option<String>,
    finnhub_key: Option<String>,
    compute_sector_pe: bool,
    exchange_hint: ExchangeHint,
    max_peers: usize,
    peer_delay: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            alpha_vantage_key: None,
            finnhub_key: None,
            compute_sector_pe: false,
            exchange_hint: ExchangeHint::Auto,
            max_peers: DEFAULT_MAX_PEERS,
            peer_delay: DEFAULT_PEER_DELAY,
        }
    }
}

// Keys stay out of logs.
impl fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupConfig")
            .field("alpha_vantage_key", &self.alpha_vantage_key.as_ref().map(|_| "***"))
            .field("finnhub_key", &self.finnhub_key.as_ref().map(|_| "***"))
            .field("compute_sector_pe", &self.compute_sector_pe)
            .field("exchange_hint", &self.exchange_hint)
            .field("max_peers", &self.max_peers)
            .field("peer_delay", &self.peer_delay)
            .finish()
    }
}

impl LookupConfig {
    /// Creates a configuration with the given Alpha Vantage key and defaults otherwise.
    pub fn new(alpha_vantage_key: impl Into<String>) -> Self {
        Self {
            alpha_vantage_key: non_blank(alpha_vantage_key.into()),
            ..Self::default()
        }
    }

    /// Reads `ALPHAVANTAGE_API_KEY` and `FINNHUB_API_KEY` from the environment.
    ///
    /// Missing variables leave the corresponding key unset; nothing fails here.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            alpha_vantage_key: std::env::var(ALPHAVANTAGE_API_KEY_ENV).ok().and_then(non_blank),
            finnhub_key: std::env::var(FINNHUB_API_KEY_ENV).ok().and_then(non_blank),
            ..Self::default()
        }
    }

    /// Sets the Alpha Vantage key.
    #[must_use]
    pub fn alpha_vantage_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_vantage_key = non_blank(key.into());
        self
    }

    /// Sets the Finnhub token used for peer listing.
    #[must_use]
    pub fn finnhub_key(mut self, key: impl Into<String>) -> Self {
        self.finnhub_key = non_blank(key.into());
        self
    }

    /// Enables or disables the peer-based sector P/E estimate.
    #[must_use]
    pub const fn compute_sector_pe(mut self, yes: bool) -> Self {
        self.compute_sector_pe = yes;
        self
    }

    #[must_use]
    pub const fn exchange_hint(mut self, hint: ExchangeHint) -> Self {
        self.exchange_hint = hint;
        self
    }

    /// Caps how many peers are averaged.
    #[must_use]
    pub const fn max_peers(mut self, n: usize) -> Self {
        self.max_peers = n;
        self
    }

    /// Sets the fixed pause issued before every peer overview call.
    #[must_use]
    pub const fn peer_delay(mut self, delay: Duration) -> Self {
        self.peer_delay = delay;
        self
    }

    /* -------- accessors -------- */

    #[must_use]
    pub fn alpha_vantage(&self) -> Option<&str> {
        self.alpha_vantage_key.as_deref()
    }

    #[must_use]
    pub fn finnhub(&self) -> Option<&str> {
        self.finnhub_key.as_deref()
    }

    #[must_use]
    pub const fn sector_pe_enabled(&self) -> bool {
        self.compute_sector_pe
    }

    #[must_use]
    pub const fn hint(&self) -> ExchangeHint {
        self.exchange_hint
    }

    #[must_use]
    pub const fn peer_limit(&self) -> usize {
        self.max_peers
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.peer_delay
    }
}

fn non_blank(s: String) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(t.to_string()) }
}
