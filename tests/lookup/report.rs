use chrono::{TimeZone, Utc};
use equity_metrics::{FundamentalsSnapshot, MetricsReport, PeerPe, SectorPeEstimate};
use serde_json::json;

fn sample_report() -> MetricsReport {
    let mut snapshot = FundamentalsSnapshot::unavailable("Bajaj Finance Limited", "BAJFINANCE.BSE");
    snapshot.pe_ratio = Some(29.854);
    snapshot.price_to_book = Some(5.6);
    snapshot.return_on_equity = Some(0.192);
    snapshot.raw.insert("PERatio".into(), json!("29.854"));
    snapshot.raw.insert("Name".into(), json!("Bajaj Finance Limited"));

    MetricsReport {
        symbol: "BAJFINANCE.BSE".into(),
        provider: "Alpha Vantage".into(),
        fetched_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap(),
        snapshot,
        sector_pe: SectorPeEstimate::from_peers(
            vec![
                PeerPe {
                    symbol: "BAJAJFINSV.BSE".into(),
                    pe_ratio: 31.0,
                },
                PeerPe {
                    symbol: "SHRIRAMFIN.BSE".into(),
                    pe_ratio: 13.0,
                },
            ],
            Vec::new(),
        ),
        warnings: Vec::new(),
    }
}

#[test]
fn card_formats_ratios_percentages_and_na() {
    let text = sample_report().to_string();

    assert!(text.contains("Company: Bajaj Finance Limited"));
    assert!(text.contains("P/E (PERatio):         29.85"));
    assert!(text.contains("P/B (PriceToBook):     5.60"));
    assert!(text.contains("Dividend Yield:        NA"));
    assert!(text.contains("ROE (TTM):             19.20%"));
    assert!(text.contains("Sector PE (approx):    22.00"));
    assert!(!text.contains("warning:"));
}

#[test]
fn card_lists_warnings() {
    let mut report = sample_report();
    report.warnings.push("BAD: HTTP error".into());

    assert!(report.to_string().ends_with("warning: BAD: HTTP error"));
}

#[test]
fn trace_shows_sorted_raw_keys_and_peers() {
    let trace = sample_report().trace();

    assert!(trace.contains(
        "Symbol: BAJFINANCE.BSE | Provider: Alpha Vantage | Fetched: 2024-05-01T10:30:00+00:00"
    ));
    assert!(trace.contains("OVERVIEW raw keys: Name, PERatio"));
    assert!(trace.contains("- BAJAJFINSV.BSE: 31.00"));
    assert!(trace.contains("- SHRIRAMFIN.BSE: 13.00"));
}
