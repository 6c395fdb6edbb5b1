use std::fmt;

use serde::{Deserialize, Serialize};

/// One ticker proposed by symbol search for a free-text company name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolCandidate {
    /// Exchange-qualified ticker, e.g. `BAJFINANCE.BSE`.
    pub symbol: String,
    /// Company or instrument name.
    pub display_name: String,
    /// Listing region, e.g. `India/Bombay`.
    pub region: String,
    /// Trading currency, e.g. `INR`.
    pub currency: String,
    /// Instrument type (`Equity`, `ETF`, ...), when reported.
    pub kind: Option<String>,
    pub market_open: Option<String>,
    pub market_close: Option<String>,
    pub timezone: Option<String>,
    /// Provider relevance score in `0.0..=1.0`, when reported.
    pub match_score: Option<f64>,
}

impl fmt::Display for SymbolCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} — {} [{} | {}]",
            self.symbol, self.display_name, self.region, self.currency
        )
    }
}
