use std::time::Duration;

use equity_metrics::{ErrorKind, Lookup, LookupConfig, MetricsError};
use httpmock::Method::GET;

use crate::common::{
    AV_KEY, AV_PATH, FINNHUB_KEY, PEERS_PATH, client_for, fixture, mock_overview, mock_search,
    setup_server,
};

#[tokio::test]
async fn missing_alpha_vantage_key_stops_everything() {
    let server = setup_server();
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("{}");
    });
    let client = client_for(&server);
    let lookup = Lookup::new(&client, LookupConfig::default());

    let err = lookup.candidates("Bajaj Finance").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingCredential);

    let err = lookup.report("BAJFINANCE.BSE").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingCredential);

    any.assert_hits(0);
}

#[tokio::test]
async fn no_match_is_reported_as_warning() {
    let server = setup_server();
    mock_search(&server, "qwertyuiop", r#"{"bestMatches": []}"#.to_string());
    let client = client_for(&server);

    let err = Lookup::new(&client, LookupConfig::new(AV_KEY))
        .run("qwertyuiop")
        .await
        .unwrap_err();

    assert!(matches!(err, MetricsError::NoMatchFound { ref query } if query == "qwertyuiop"));
    assert!(err.is_warning());
}

#[tokio::test]
async fn search_failure_stops_the_lookup() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET)
            .path(AV_PATH)
            .query_param("function", "SYMBOL_SEARCH");
        then.status(502).body("bad gateway");
    });
    let client = client_for(&server);

    let err = Lookup::new(&client, LookupConfig::new(AV_KEY))
        .run("Bajaj Finance")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ProviderUnavailable);
    assert!(!err.is_warning());
}

#[tokio::test]
async fn overview_failure_degrades_to_na_snapshot_with_warning() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET)
            .path(AV_PATH)
            .query_param("function", "OVERVIEW");
        then.status(500).body("down");
    });
    let client = client_for(&server);

    let report = Lookup::new(&client, LookupConfig::new(AV_KEY))
        .report("BAJFINANCE.BSE")
        .await
        .unwrap();

    assert!(report.snapshot.is_empty());
    assert_eq!(report.snapshot.symbol, "BAJFINANCE.BSE");
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("BAJFINANCE.BSE"));
}

#[tokio::test]
async fn peer_list_failure_keeps_primary_snapshot() {
    let server = setup_server();
    mock_overview(&server, "BAJFINANCE.BSE", fixture("overview_BAJFINANCE.BSE.json"));
    server.mock(|when, then| {
        when.method(GET).path(PEERS_PATH);
        then.status(500).body("");
    });
    let client = client_for(&server);

    let config = LookupConfig::new(AV_KEY)
        .finnhub_key(FINNHUB_KEY)
        .compute_sector_pe(true)
        .peer_delay(Duration::ZERO);
    let report = Lookup::new(&client, config)
        .report("BAJFINANCE.BSE")
        .await
        .unwrap();

    assert_eq!(report.snapshot.pe_ratio, Some(29.85));
    assert_eq!(report.sector_pe.value, None);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("Peer-based Sector PE failed"));
}
