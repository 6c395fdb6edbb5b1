use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::overview::FundamentalsSnapshot;
use crate::sector::SectorPeEstimate;

/// Everything one lookup produced, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Symbol the ratios were fetched for (after the exchange hint).
    pub symbol: String,
    /// Provider the ratios came from.
    pub provider: String,
    pub fetched_at: DateTime<Utc>,
    pub snapshot: FundamentalsSnapshot,
    pub sector_pe: SectorPeEstimate,
    /// Degradations the user should see (failed overview, skipped peers, ...).
    pub warnings: Vec<String>,
}

fn ratio(v: Option<f64>) -> String {
    v.map_or_else(|| "NA".to_string(), |x| format!("{x:.2}"))
}

fn percent(v: Option<f64>) -> String {
    v.map_or_else(|| "NA".to_string(), |x| format!("{:.2}%", x * 100.0))
}

impl MetricsReport {
    /// Renders the audit section: raw payload keys, peers used, symbol/provider/time.
    #[must_use]
    pub fn trace(&self) -> String {
        let mut out = String::new();
        out.push_str("Debug / Trace\n");
        out.push_str(&format!(
            "  Symbol: {} | Provider: {} | Fetched: {}\n",
            self.symbol,
            self.provider,
            self.fetched_at.to_rfc3339()
        ));
        let keys = self.snapshot.raw_keys();
        if keys.is_empty() {
            out.push_str("  OVERVIEW raw keys: (none)\n");
        } else {
            out.push_str(&format!("  OVERVIEW raw keys: {}\n", keys.join(", ")));
        }
        if !self.sector_pe.contributing_peers.is_empty() {
            out.push_str("  Peer PEs used for Sector PE approx:\n");
            for p in &self.sector_pe.contributing_peers {
                out.push_str(&format!("  - {}: {:.2}\n", p.symbol, p.pe_ratio));
            }
        }
        out
    }
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.snapshot;
        writeln!(f, "Company: {}", s.company_name)?;
        writeln!(f, "Symbol:  {}", self.symbol)?;
        writeln!(f, "P/E (PERatio):         {}", ratio(s.pe_ratio))?;
        writeln!(f, "P/B (PriceToBook):     {}", ratio(s.price_to_book))?;
        writeln!(f, "Dividend Yield:        {}", percent(s.dividend_yield))?;
        writeln!(f, "ROE (TTM):             {}", percent(s.return_on_equity))?;
        write!(f, "Sector PE (approx):    {}", ratio(self.sector_pe.value))?;
        for w in &self.warnings {
            write!(f, "\nwarning: {w}")?;
        }
        Ok(())
    }
}
