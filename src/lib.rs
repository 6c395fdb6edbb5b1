//! equity-metrics: company name → ticker → valuation ratios.
//!
//! Resolves a free-text company name through Alpha Vantage `SYMBOL_SEARCH`,
//! reads P/E, P/B, dividend yield and ROE from `OVERVIEW`, and can approximate
//! a sector P/E as the mean P/E of peers listed by Finnhub.
//!
//! ```no_run
//! # use equity_metrics::{Lookup, LookupConfig, MetricsClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MetricsClient::default();
//! let config = LookupConfig::from_env().compute_sector_pe(true);
//! let report = Lookup::new(&client, config).run("Bajaj Finance").await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod lookup;
pub mod overview;
pub mod peers;
pub mod search;
pub mod sector;

pub use config::{ExchangeHint, LookupConfig};
pub use crate::core::{ErrorKind, MetricsClient, MetricsClientBuilder, MetricsError, Provider};
pub use lookup::{Lookup, MetricsReport};
pub use overview::{FundamentalsSnapshot, fetch_snapshot};
pub use peers::fetch_peers;
pub use search::{SearchBuilder, SymbolCandidate, resolve_candidates};
pub use sector::{PeerPe, SectorPeBuilder, SectorPeEstimate, estimate_sector_pe};
