mod model;

pub use model::FundamentalsSnapshot;

use serde_json::Value;

use crate::core::client::require_credential;
use crate::core::conversions::{safe_numeric, text_field};
use crate::core::{MetricsClient, MetricsError, Provider};

/* Alpha Vantage OVERVIEW field names */
const FIELD_NAME: &str = "Name";
const FIELD_PE: &str = "PERatio";
const FIELD_PB: &str = "PriceToBookRatio";
const FIELD_DIVIDEND_YIELD: &str = "DividendYield";
const FIELD_ROE: &str = "ReturnOnEquityTTM";

/// Builds a snapshot from a decoded `OVERVIEW` payload.
///
/// Each ratio is coerced on its own, so a missing or malformed field never
/// affects the others. A missing `Name` falls back to the symbol.
///
/// # Errors
///
/// Returns [`MetricsError::Data`] if the payload is not a JSON object.
pub fn snapshot_from_overview(
    symbol: &str,
    payload: Value,
) -> Result<FundamentalsSnapshot, MetricsError> {
    let Value::Object(raw) = payload else {
        return Err(MetricsError::Data("OVERVIEW payload is not an object".into()));
    };

    let company_name = text_field(raw.get(FIELD_NAME)).unwrap_or_else(|| symbol.to_string());
    let pe_ratio = safe_numeric(raw.get(FIELD_PE));
    let price_to_book = safe_numeric(raw.get(FIELD_PB));
    let dividend_yield = safe_numeric(raw.get(FIELD_DIVIDEND_YIELD));
    let return_on_equity = safe_numeric(raw.get(FIELD_ROE));

    Ok(FundamentalsSnapshot {
        company_name,
        symbol: symbol.to_string(),
        pe_ratio,
        price_to_book,
        dividend_yield,
        return_on_equity,
        raw,
    })
}

pub(crate) async fn fetch_overview_raw(
    client: &MetricsClient,
    symbol: &str,
    key: &str,
) -> Result<Value, MetricsError> {
    let mut url = client.base_alpha_vantage().clone();
    url.query_pairs_mut()
        .append_pair("function", "OVERVIEW")
        .append_pair("symbol", symbol)
        .append_pair("apikey", key);

    let body = client.get_text(url.clone()).await?;
    let value: Value = serde_json::from_str(&body)?;
    MetricsClient::check_alpha_vantage(&url, &value)?;
    Ok(value)
}

/// Fetches the valuation ratios for an exact symbol.
///
/// The symbol is sent as given; normally it comes from
/// [`resolve_candidates`](crate::search::resolve_candidates).
///
/// # Errors
///
/// Returns [`MetricsError::MissingCredential`] for an empty key. Every other
/// failure (transport, status, JSON, provider message) is wrapped in
/// [`MetricsError::FetchFailed`] so callers can fall back to
/// [`FundamentalsSnapshot::unavailable`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client, credential), err))]
pub async fn fetch_snapshot(
    client: &MetricsClient,
    symbol: &str,
    credential: &str,
) -> Result<FundamentalsSnapshot, MetricsError> {
    let key = require_credential(Provider::AlphaVantage, credential)?;

    let payload = fetch_overview_raw(client, symbol, key)
        .await
        .map_err(|e| MetricsError::fetch_failed(symbol, e))?;

    snapshot_from_overview(symbol, payload).map_err(|e| MetricsError::fetch_failed(symbol, e))
}
