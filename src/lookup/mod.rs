//! End-to-end flow: company name → candidates → ratios → optional sector P/E.
//!
//! Credential and search problems stop the flow. Overview and peer problems
//! only blank the affected values and are listed in
//! [`MetricsReport::warnings`].

mod report;

pub use report::MetricsReport;

use chrono::Utc;

use crate::config::LookupConfig;
use crate::core::client::require_credential;
use crate::core::{MetricsClient, MetricsError, Provider};
use crate::overview::{FundamentalsSnapshot, fetch_snapshot};
use crate::search::{SymbolCandidate, resolve_candidates};
use crate::sector::{SectorPeBuilder, SectorPeEstimate};

/// Runs lookups for one request's configuration.
#[derive(Debug, Clone)]
pub struct Lookup {
    client: MetricsClient,
    config: LookupConfig,
}

impl Lookup {
    pub fn new(client: &MetricsClient, config: LookupConfig) -> Self {
        Self {
            client: client.clone(),
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &LookupConfig {
        &self.config
    }

    fn alpha_vantage_key(&self) -> Result<&str, MetricsError> {
        require_credential(Provider::AlphaVantage, self.config.alpha_vantage().unwrap_or_default())
    }

    /// Resolves `query` into up to five candidates for the user to pick from.
    ///
    /// # Errors
    ///
    /// [`MetricsError::MissingCredential`] without an Alpha Vantage key,
    /// [`MetricsError::NoMatchFound`] when the provider has no match, or the
    /// provider error that stopped the search.
    pub async fn candidates(&self, query: &str) -> Result<Vec<SymbolCandidate>, MetricsError> {
        let key = self.alpha_vantage_key()?;
        let found = resolve_candidates(&self.client, query, key).await?;
        if found.is_empty() {
            return Err(MetricsError::NoMatchFound {
                query: query.to_string(),
            });
        }
        Ok(found)
    }

    /// Fetches ratios (and the sector estimate, when enabled) for a chosen symbol.
    ///
    /// A failed overview yields an all-`NA` snapshot plus a warning rather
    /// than an error.
    ///
    /// # Errors
    ///
    /// Only [`MetricsError::MissingCredential`] without an Alpha Vantage key.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn report(&self, symbol: &str) -> Result<MetricsReport, MetricsError> {
        let key = self.alpha_vantage_key()?;
        let symbol = self.config.hint().apply(symbol);
        let mut warnings = Vec::new();

        let snapshot = match fetch_snapshot(&self.client, &symbol, key).await {
            Ok(s) => s,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "overview unavailable; reporting NA");
                warnings.push(e.to_string());
                FundamentalsSnapshot::unavailable(symbol.clone(), symbol.clone())
            }
        };

        let sector_pe = if self.config.sector_pe_enabled() {
            SectorPeBuilder::new(&self.client, symbol.clone())
                .max_peers(self.config.peer_limit())
                .delay(self.config.delay())
                .estimate(key, self.config.finnhub().unwrap_or_default())
                .await
        } else {
            SectorPeEstimate::empty()
        };
        warnings.extend(sector_pe.warnings.iter().cloned());

        Ok(MetricsReport {
            symbol,
            provider: Provider::AlphaVantage.name().to_string(),
            fetched_at: Utc::now(),
            snapshot,
            sector_pe,
            warnings,
        })
    }

    /// Resolves `query`, takes the best match and reports on it.
    ///
    /// # Errors
    ///
    /// Same as [`Lookup::candidates`] and [`Lookup::report`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn run(&self, query: &str) -> Result<MetricsReport, MetricsError> {
        let candidates = self.candidates(query).await?;
        let best = &candidates[0];
        self.report(&best.symbol).await
    }
}
