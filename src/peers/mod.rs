//! Comparable-company listing from the Finnhub peers endpoint.

use serde_json::Value;

use crate::core::client::require_credential;
use crate::core::{MetricsClient, MetricsError, Provider};

fn parse_peers_body(body: &str) -> Result<Vec<String>, MetricsError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(body)? {
        // non-string entries are dropped
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                _ => None,
            })
            .collect()),
        Value::Object(obj) if obj.contains_key("error") => Err(MetricsError::Api {
            provider: Provider::Finnhub,
            message: obj
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }),
        other => Err(MetricsError::Data(format!(
            "peers payload is not a list: {other}"
        ))),
    }
}

/// Lists ticker symbols Finnhub considers comparable to `symbol`, in provider order.
///
/// The list may include `symbol` itself; callers filter it.
///
/// # Errors
///
/// Returns [`MetricsError::MissingCredential`] for an empty token, or a
/// provider error if the request or decoding fails.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client, token), err))]
pub async fn fetch_peers(
    client: &MetricsClient,
    symbol: &str,
    token: &str,
) -> Result<Vec<String>, MetricsError> {
    let token = require_credential(Provider::Finnhub, token)?;

    let mut url = client.base_finnhub_peers().clone();
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("token", token);

    let body = client.get_text(url).await?;
    parse_peers_body(&body)
}
