use equity_metrics::{ErrorKind, MetricsError, Provider, resolve_candidates};
use httpmock::Method::GET;

use crate::common::{AV_KEY, AV_PATH, client_for, mock_search, setup_server};

#[tokio::test]
async fn search_with_blank_key_fails_fast_without_request() {
    let server = setup_server();
    let mock = mock_search(&server, "Bajaj Finance", "{}".to_string());
    let client = client_for(&server);

    let err = resolve_candidates(&client, "Bajaj Finance", "  ")
        .await
        .unwrap_err();

    mock.assert_hits(0);
    assert!(matches!(
        err,
        MetricsError::MissingCredential {
            provider: Provider::AlphaVantage
        }
    ));
    assert_eq!(err.kind(), ErrorKind::MissingCredential);
}

#[tokio::test]
async fn search_http_500_is_provider_unavailable() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(AV_PATH);
        then.status(500).body("oops");
    });
    let client = client_for(&server);

    let err = resolve_candidates(&client, "Bajaj Finance", AV_KEY)
        .await
        .unwrap_err();

    // no retry
    mock.assert_hits(1);
    match &err {
        MetricsError::Status { status, url } => {
            assert_eq!(*status, 500);
            assert!(url.contains(AV_PATH));
            assert!(!url.contains(AV_KEY), "credential leaked into error: {url}");
        }
        other => panic!("expected Status, got {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::ProviderUnavailable);
}

#[tokio::test]
async fn search_http_429_maps_to_rate_limited() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path(AV_PATH);
        then.status(429).body("{}");
    });
    let client = client_for(&server);

    let err = resolve_candidates(&client, "Bajaj Finance", AV_KEY)
        .await
        .unwrap_err();

    assert!(matches!(err, MetricsError::RateLimited { .. }), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::ProviderUnavailable);
}

#[tokio::test]
async fn search_quota_note_maps_to_rate_limited() {
    let server = setup_server();
    mock_search(
        &server,
        "Bajaj Finance",
        r#"{"Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."}"#
            .to_string(),
    );
    let client = client_for(&server);

    let err = resolve_candidates(&client, "Bajaj Finance", AV_KEY)
        .await
        .unwrap_err();

    assert!(matches!(err, MetricsError::RateLimited { .. }), "{err:?}");
}

#[tokio::test]
async fn search_error_message_maps_to_api_error() {
    let server = setup_server();
    mock_search(
        &server,
        "Bajaj Finance",
        r#"{"Error Message": "Invalid API call."}"#.to_string(),
    );
    let client = client_for(&server);

    let err = resolve_candidates(&client, "Bajaj Finance", AV_KEY)
        .await
        .unwrap_err();

    match &err {
        MetricsError::Api { provider, message } => {
            assert_eq!(*provider, Provider::AlphaVantage);
            assert_eq!(message, "Invalid API call.");
        }
        other => panic!("expected Api, got {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::ProviderUnavailable);
}

#[tokio::test]
async fn search_unreachable_host_is_provider_unavailable() {
    let client = equity_metrics::MetricsClient::builder()
        .alpha_vantage_base(url::Url::parse("http://127.0.0.1:9/query").unwrap())
        .timeout(std::time::Duration::from_secs(2))
        .build()
        .unwrap();

    let err = resolve_candidates(&client, "Bajaj Finance", AV_KEY)
        .await
        .unwrap_err();

    assert!(matches!(err, MetricsError::Http(_)), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::ProviderUnavailable);
    assert!(!err.to_string().contains(AV_KEY), "{err}");
}
