use serde::{Deserialize, Serialize};

/// One peer whose P/E went into the sector average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerPe {
    pub symbol: String,
    pub pe_ratio: f64,
}

/// Approximate sector P/E: the unweighted mean P/E of peer companies.
///
/// `value` is `None` whenever the estimate was disabled, lacked credentials,
/// found no peers, or no peer had a strictly positive P/E.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorPeEstimate {
    pub value: Option<f64>,
    /// Peers actually averaged, in the order they were fetched.
    pub contributing_peers: Vec<PeerPe>,
    /// Non-fatal problems met along the way (peer list or single peer failures).
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl SectorPeEstimate {
    /// An estimate with no value, no contributors and no warnings.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds an estimate from the peers that yielded a usable P/E.
    #[must_use]
    pub fn from_peers(contributing_peers: Vec<PeerPe>, warnings: Vec<String>) -> Self {
        let value = running_mean(contributing_peers.iter().map(|p| p.pe_ratio));
        Self {
            value,
            contributing_peers,
            warnings,
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.value.is_some()
    }
}

/// Incremental mean; stays finite where a plain sum of large values would overflow.
fn running_mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut mean = None;
    for (i, x) in values.enumerate() {
        let m = mean.unwrap_or(0.0);
        mean = Some(m + (x - m) / (i + 1) as f64);
    }
    mean.filter(|v: &f64| v.is_finite())
}
