mod model;

pub use model::{PeerPe, SectorPeEstimate};

use std::time::Duration;

use crate::config::{DEFAULT_MAX_PEERS, DEFAULT_PEER_DELAY};
use crate::core::MetricsClient;
use crate::overview::fetch_snapshot;
use crate::peers::fetch_peers;

/// Approximates the sector P/E of `symbol` as the mean P/E of its peers.
///
/// Shorthand for [`SectorPeBuilder`] with explicit limits. Never fails: missing
/// credentials give [`SectorPeEstimate::empty`], and provider failures end up in
/// [`SectorPeEstimate::warnings`].
pub async fn estimate_sector_pe(
    client: &MetricsClient,
    symbol: &str,
    av_credential: &str,
    peer_credential: &str,
    max_peers: usize,
    inter_request_delay: Duration,
) -> SectorPeEstimate {
    SectorPeBuilder::new(client, symbol)
        .max_peers(max_peers)
        .delay(inter_request_delay)
        .estimate(av_credential, peer_credential)
        .await
}

/// A builder for the peer-average sector P/E.
///
/// Peer overviews are fetched one at a time with a fixed pause before each
/// call, which keeps a burst under the Alpha Vantage free-tier quota.
#[derive(Debug)]
pub struct SectorPeBuilder {
    client: MetricsClient,
    symbol: String,
    max_peers: usize,
    delay: Duration,
}

impl SectorPeBuilder {
    /// Creates a builder with the default limits (6 peers, 12 s between calls).
    pub fn new(client: &MetricsClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            max_peers: DEFAULT_MAX_PEERS,
            delay: DEFAULT_PEER_DELAY,
        }
    }

    /// Caps how many peers are fetched.
    #[must_use]
    pub const fn max_peers(mut self, n: usize) -> Self {
        self.max_peers = n;
        self
    }

    /// Sets the fixed pause issued before each peer overview call.
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fetches the peer list and averages the strictly positive peer P/E values.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            skip(self, av_credential, peer_credential),
            fields(symbol = %self.symbol)
        )
    )]
    pub async fn estimate(self, av_credential: &str, peer_credential: &str) -> SectorPeEstimate {
        if av_credential.trim().is_empty() || peer_credential.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("sector P/E skipped: credential missing");
            return SectorPeEstimate::empty();
        }

        let peers = match fetch_peers(&self.client, &self.symbol, peer_credential).await {
            Ok(p) => select_peers(&self.symbol, p, self.max_peers),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "peer list unavailable");
                return SectorPeEstimate::from_peers(
                    Vec::new(),
                    vec![format!("Peer-based Sector PE failed: {e}")],
                );
            }
        };

        let mut used = Vec::with_capacity(peers.len());
        let mut warnings = Vec::new();

        for peer in peers {
            #[cfg(feature = "tracing")]
            tracing::debug!(peer = %peer, delay = ?self.delay, "throttling before peer fetch");
            tokio::time::sleep(self.delay).await;

            match fetch_snapshot(&self.client, &peer, av_credential).await {
                Ok(snap) => match snap.pe_ratio {
                    Some(pe) if pe > 0.0 => used.push(PeerPe {
                        symbol: peer,
                        pe_ratio: pe,
                    }),
                    _ => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(peer = %peer, "peer has no positive P/E");
                    }
                },
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(peer = %peer, error = %e, "skipping peer");
                    warnings.push(format!("{peer}: {e}"));
                }
            }
        }

        SectorPeEstimate::from_peers(used, warnings)
    }
}

/// Drops the subject itself (case-insensitive) and keeps the first `max_peers` entries.
fn select_peers(subject: &str, peers: Vec<String>, max_peers: usize) -> Vec<String> {
    peers
        .into_iter()
        .filter(|p| !p.eq_ignore_ascii_case(subject))
        .take(max_peers)
        .collect()
}
