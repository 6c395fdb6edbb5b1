use std::time::{Duration, Instant};

use equity_metrics::{PeerPe, SectorPeBuilder, SectorPeEstimate, estimate_sector_pe, fetch_peers};

use crate::common::{
    AV_KEY, FINNHUB_KEY, client_for, mock_overview_pe, mock_peers, setup_server,
};

#[tokio::test]
async fn averages_only_strictly_positive_peer_pe() {
    let server = setup_server();
    mock_peers(&server, "SUBJ", &["AAA", "BBB", "CCC", "DDD"]);
    mock_overview_pe(&server, "AAA", "10.0");
    mock_overview_pe(&server, "BBB", "-5.0");
    mock_overview_pe(&server, "CCC", "0.0");
    mock_overview_pe(&server, "DDD", "20.0");
    let client = client_for(&server);

    let est = estimate_sector_pe(&client, "SUBJ", AV_KEY, FINNHUB_KEY, 6, Duration::ZERO).await;

    assert_eq!(est.value, Some(15.0));
    assert_eq!(est.contributing_peers.len(), 2);
    assert_eq!(est.contributing_peers[0].symbol, "AAA");
    assert_eq!(est.contributing_peers[0].pe_ratio, 10.0);
    assert_eq!(est.contributing_peers[1].symbol, "DDD");
    assert_eq!(est.contributing_peers[1].pe_ratio, 20.0);
    assert!(est.warnings.is_empty());
}

#[tokio::test]
async fn subject_is_filtered_case_insensitively_and_list_truncated() {
    let server = setup_server();
    mock_peers(&server, "AAPL", &["aapl", "MSFT", "GOOGL", "AAPL", "META"]);
    let msft = mock_overview_pe(&server, "MSFT", "30");
    let googl = mock_overview_pe(&server, "GOOGL", "20");
    let meta = mock_overview_pe(&server, "META", "25");
    let client = client_for(&server);

    let est = SectorPeBuilder::new(&client, "AAPL")
        .max_peers(2)
        .delay(Duration::ZERO)
        .estimate(AV_KEY, FINNHUB_KEY)
        .await;

    msft.assert_hits(1);
    googl.assert_hits(1);
    meta.assert_hits(0);
    assert_eq!(est.value, Some(25.0));
    let used: Vec<&str> = est.contributing_peers.iter().map(|p| p.symbol.as_str()).collect();
    assert_eq!(used, ["MSFT", "GOOGL"]);
}

#[tokio::test]
async fn waits_before_every_peer_call() {
    let server = setup_server();
    mock_peers(&server, "SUBJ", &["AAA", "BBB"]);
    mock_overview_pe(&server, "AAA", "12");
    mock_overview_pe(&server, "BBB", "18");
    let client = client_for(&server);

    let started = Instant::now();
    let est = SectorPeBuilder::new(&client, "SUBJ")
        .delay(Duration::from_millis(150))
        .estimate(AV_KEY, FINNHUB_KEY)
        .await;

    assert!(started.elapsed() >= Duration::from_millis(300));
    assert_eq!(est.value, Some(15.0));
}

#[tokio::test]
async fn no_peers_gives_absent_estimate() {
    let server = setup_server();
    mock_peers(&server, "SOLO", &[]);
    let client = client_for(&server);

    let est = estimate_sector_pe(&client, "SOLO", AV_KEY, FINNHUB_KEY, 6, Duration::ZERO).await;

    assert_eq!(est.value, None);
    assert!(est.contributing_peers.is_empty());
    assert!(!est.is_available());
}

#[tokio::test]
async fn only_unusable_peers_gives_absent_estimate() {
    let server = setup_server();
    mock_peers(&server, "SUBJ", &["AAA", "BBB"]);
    mock_overview_pe(&server, "AAA", "None");
    mock_overview_pe(&server, "BBB", "-3");
    let client = client_for(&server);

    let est = estimate_sector_pe(&client, "SUBJ", AV_KEY, FINNHUB_KEY, 6, Duration::ZERO).await;

    assert_eq!(est.value, None);
    assert!(est.contributing_peers.is_empty());
}

#[tokio::test]
async fn fetch_peers_returns_provider_order() {
    let server = setup_server();
    mock_peers(&server, "AAPL", &["AAPL", "DELL", "HPQ"]);
    let client = client_for(&server);

    let peers = fetch_peers(&client, "AAPL", FINNHUB_KEY).await.unwrap();

    assert_eq!(peers, ["AAPL", "DELL", "HPQ"]);
}

#[tokio::test]
async fn huge_peer_pe_values_average_to_a_finite_value() {
    let server = setup_server();
    mock_peers(&server, "SUBJ", &["AAA", "BBB"]);
    mock_overview_pe(&server, "AAA", "1e308");
    mock_overview_pe(&server, "BBB", "1e308");
    let client = client_for(&server);

    let est = estimate_sector_pe(&client, "SUBJ", AV_KEY, FINNHUB_KEY, 6, Duration::ZERO).await;

    assert_eq!(est.contributing_peers.len(), 2);
    assert_eq!(est.value, Some(1e308));
}

#[test]
fn mean_of_mixed_magnitudes_stays_finite() {
    let peers = vec![
        PeerPe {
            symbol: "AAA".into(),
            pe_ratio: f64::MAX,
        },
        PeerPe {
            symbol: "BBB".into(),
            pe_ratio: f64::MAX,
        },
        PeerPe {
            symbol: "CCC".into(),
            pe_ratio: 1.0,
        },
    ];

    let est = SectorPeEstimate::from_peers(peers, Vec::new());

    assert!(est.value.is_some_and(f64::is_finite), "{:?}", est.value);
}
