use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Valuation ratios for one symbol, as reported by the `OVERVIEW` endpoint.
///
/// Every ratio is `None` when the provider omitted it or sent a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsSnapshot {
    pub company_name: String,
    pub symbol: String,
    /// Price/earnings (`PERatio`).
    pub pe_ratio: Option<f64>,
    /// Price/book (`PriceToBookRatio`).
    pub price_to_book: Option<f64>,
    /// Dividend yield as a fraction (`DividendYield`, `0.0051` = 0.51 %).
    pub dividend_yield: Option<f64>,
    /// Trailing return on equity as a fraction (`ReturnOnEquityTTM`).
    pub return_on_equity: Option<f64>,
    /// The full payload the ratios were read from.
    #[serde(default)]
    pub raw: Map<String, Value>,
}

impl FundamentalsSnapshot {
    /// An all-absent snapshot, used when the overview could not be fetched.
    pub fn unavailable(company_name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            symbol: symbol.into(),
            pe_ratio: None,
            price_to_book: None,
            dividend_yield: None,
            return_on_equity: None,
            raw: Map::new(),
        }
    }

    /// Keys present in the raw payload, sorted.
    #[must_use]
    pub fn raw_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.raw.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// True when none of the four ratios is available.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pe_ratio.is_none()
            && self.price_to_book.is_none()
            && self.dividend_yield.is_none()
            && self.return_on_equity.is_none()
    }
}
