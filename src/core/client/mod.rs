//! Public client surface + builder.
//! Defaults for endpoints, UA and timeout live in `constants`.

mod constants;

use crate::core::{MetricsError, Provider};
use constants::{
    DEFAULT_BASE_ALPHA_VANTAGE, DEFAULT_BASE_FINNHUB_PEERS, DEFAULT_TIMEOUT, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client shared by every operation in this crate.
///
/// The client holds no credentials; API keys travel with each request via
/// [`LookupConfig`](crate::LookupConfig) or explicit arguments. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct MetricsClient {
    http: Client,
    base_alpha_vantage: Url,
    base_finnhub_peers: Url,
    timeout: Duration,
}

impl Default for MetricsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl MetricsClient {
    /// Create a new builder.
    pub fn builder() -> MetricsClientBuilder {
        MetricsClientBuilder::default()
    }

    /// Per-request timeout applied to every provider call.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn base_alpha_vantage(&self) -> &Url {
        &self.base_alpha_vantage
    }
    pub(crate) fn base_finnhub_peers(&self) -> &Url {
        &self.base_finnhub_peers
    }

    /// Sends a GET for `url` and returns the body of a successful response.
    ///
    /// Non-success statuses are mapped to [`MetricsError::RateLimited`] (429)
    /// or [`MetricsError::Status`]. No retry is attempted. Transport errors
    /// drop the request URL, which carries the API key.
    pub(crate) async fn get_text(&self, url: Url) -> Result<String, MetricsError> {
        let resp = self
            .http
            .get(url.clone())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| MetricsError::Http(e.without_url()))?;

        if !resp.status().is_success() {
            let code = resp.status().as_u16();
            let url_s = redact(&url);
            return Err(match code {
                429 => MetricsError::RateLimited { url: url_s },
                _ => MetricsError::Status {
                    status: code,
                    url: url_s,
                },
            });
        }

        resp.text()
            .await
            .map_err(|e| MetricsError::Http(e.without_url()))
    }

    /// Alpha Vantage reports most failures as HTTP 200 with a marker key.
    pub(crate) fn check_alpha_vantage(
        url: &Url,
        body: &serde_json::Value,
    ) -> Result<(), MetricsError> {
        if let Some(msg) = body.get("Error Message") {
            return Err(MetricsError::Api {
                provider: Provider::AlphaVantage,
                message: msg.as_str().unwrap_or_default().to_string(),
            });
        }
        if body.get("Note").is_some() || body.get("Information").is_some() {
            return Err(MetricsError::RateLimited { url: redact(url) });
        }
        Ok(())
    }
}

/// Strips credential query parameters so URLs can be shown in errors and logs.
pub(crate) fn redact(url: &Url) -> String {
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" || k == "token" {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    if pairs.is_empty() {
        return out.to_string();
    }
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out.to_string()
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct MetricsClientBuilder {
    user_agent: Option<String>,
    base_alpha_vantage: Option<Url>,
    base_finnhub_peers: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl MetricsClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the Alpha Vantage query endpoint (e.g., `https://www.alphavantage.co/query`).
    #[must_use]
    pub fn alpha_vantage_base(mut self, url: Url) -> Self {
        self.base_alpha_vantage = Some(url);
        self
    }

    /// Override the Finnhub peers endpoint (e.g., `https://finnhub.io/api/v1/stock/peers`).
    #[must_use]
    pub fn finnhub_peers_base(mut self, url: Url) -> Self {
        self.base_finnhub_peers = Some(url);
        self
    }

    /// Set the overall per-request timeout. Default: 20 seconds.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default endpoint fails to parse or the underlying
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<MetricsClient, MetricsError> {
        let base_alpha_vantage = match self.base_alpha_vantage {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_ALPHA_VANTAGE)?,
        };
        let base_finnhub_peers = match self.base_finnhub_peers {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_FINNHUB_PEERS)?,
        };

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(timeout);

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(MetricsClient {
            http: httpb.build()?,
            base_alpha_vantage,
            base_finnhub_peers,
            timeout,
        })
    }
}

/// Rejects an empty credential before any request is made.
pub(crate) fn require_credential(provider: Provider, key: &str) -> Result<&str, MetricsError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(MetricsError::MissingCredential { provider });
    }
    Ok(key)
}
