mod model;
mod wire;

pub use model::SymbolCandidate;

use url::Url;

use crate::core::client::require_credential;
use crate::core::conversions::parse_numeric_str;
use crate::core::{MetricsClient, MetricsError, Provider};
use wire::{SymbolSearchEnvelope, SymbolSearchMatch};

/// Most candidates ever surfaced for one query.
pub const MAX_CANDIDATES: usize = 5;

fn parse_search_body(
    url: &Url,
    body: &str,
    limit: usize,
) -> Result<Vec<SymbolCandidate>, MetricsError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    MetricsClient::check_alpha_vantage(url, &value)?;
    let env: SymbolSearchEnvelope = serde_json::from_value(value)?;

    Ok(env
        .best_matches
        .unwrap_or_default()
        .into_iter()
        .take(limit)
        .map(candidate_from_wire)
        .collect())
}

fn candidate_from_wire(m: SymbolSearchMatch) -> SymbolCandidate {
    SymbolCandidate {
        symbol: m.symbol.unwrap_or_default().trim().to_string(),
        display_name: m.name.unwrap_or_default(),
        region: m.region.unwrap_or_default(),
        currency: m.currency.unwrap_or_default(),
        kind: m.kind,
        market_open: m.market_open,
        market_close: m.market_close,
        timezone: m.timezone,
        match_score: m.match_score.as_deref().and_then(parse_numeric_str),
    }
}

/* ---------------- Public API ---------------- */

/// Resolves a free-text company name into at most five ticker candidates,
/// best match first.
///
/// An empty vector means the provider knows no match; deciding what to tell
/// the user is left to the caller.
///
/// # Errors
///
/// Returns [`MetricsError::MissingCredential`] for an empty key (before any
/// request), and a provider error if the request fails, the status is not
/// successful, or Alpha Vantage reports an error or quota note.
pub async fn resolve_candidates(
    client: &MetricsClient,
    query: &str,
    credential: &str,
) -> Result<Vec<SymbolCandidate>, MetricsError> {
    SearchBuilder::new(client, query).fetch(credential).await
}

/// A builder for `SYMBOL_SEARCH` requests.
#[derive(Debug)]
pub struct SearchBuilder {
    client: MetricsClient,
    query: String,
    limit: usize,
}

impl SearchBuilder {
    /// Creates a new `SearchBuilder` for a given search query.
    pub fn new(client: &MetricsClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            limit: MAX_CANDIDATES,
        }
    }

    /// Sets how many candidates to keep, clamped to `1..=5`.
    #[must_use]
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = n.clamp(1, MAX_CANDIDATES);
        self
    }

    /// Executes the search request.
    ///
    /// The query text is sent as-is.
    ///
    /// # Errors
    ///
    /// See [`resolve_candidates`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, credential), err, fields(query = %self.query))
    )]
    pub async fn fetch(self, credential: &str) -> Result<Vec<SymbolCandidate>, MetricsError> {
        let key = require_credential(Provider::AlphaVantage, credential)?;

        let mut url = self.client.base_alpha_vantage().clone();
        url.query_pairs_mut()
            .append_pair("function", "SYMBOL_SEARCH")
            .append_pair("keywords", &self.query)
            .append_pair("apikey", key);

        let body = self.client.get_text(url.clone()).await?;
        let candidates = parse_search_body(&url, &body, self.limit)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(count = candidates.len(), "symbol search complete");

        Ok(candidates)
    }
}
