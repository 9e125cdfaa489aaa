//! The HTTP client for the remote scoring service.

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::GateConfig;
use crate::score::ScoreResponse;
use trustgate_core::{EvmAddress, TrustResult};

/// Fixed User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("trustgate/", env!("CARGO_PKG_VERSION"));

/// Client error taxonomy.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),
    /// Connection-level or transport failure.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response from the scoring service.
    #[error("http status {status} body={body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// Response body failed to decode.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Client for the remote trust-scoring service.
///
/// Performs a single `GET {api_url}/api/v1/score/{address}?chain={chain}` per
/// call. Deliberately no retry, no backoff, no timeout: error recovery is the
/// caller's policy (the gate fails closed, the action and provider degrade to
/// a fixed message).
#[derive(Clone)]
pub struct TrustClient {
    config: GateConfig,
    http: reqwest::Client,
}

impl TrustClient {
    /// Create a new client from validated configuration.
    pub fn new(config: GateConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build http client: {e}")))?;
        Ok(Self { config, http })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// The configured minimum score threshold.
    pub fn min_score(&self) -> f64 {
        self.config.min_score
    }

    /// Fetch the trust score for one address.
    pub async fn fetch_score(&self, address: &EvmAddress) -> Result<TrustResult, ClientError> {
        let url = self.score_url(address);
        debug!(%address, chain = %self.config.chain, url = %url, "fetching trust score");

        let mut request = self
            .http
            .get(&url)
            .query(&[("chain", self.config.chain.as_str())]);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!(%address, status = status.as_u16(), body = %body, "scoring service returned non-success status");
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ScoreResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))?;

        let result = parsed.into_result(self.config.min_score);
        debug!(%address, score = result.score.value(), risk = %result.risk, safe = result.safe, "trust score decoded");
        Ok(result)
    }

    fn score_url(&self, address: &EvmAddress) -> String {
        let base = self.config.api_url.trim_end_matches('/');
        format!("{base}/api/v1/score/{address}")
    }
}

impl std::fmt::Debug for TrustClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Omit the credential from debug output
        f.debug_struct("TrustClient")
            .field("api_url", &self.config.api_url)
            .field("chain", &self.config.chain)
            .field("min_score", &self.config.min_score)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ADDR: &str = "0x1234567890abcdef1234567890abcdef12345678";

    fn address() -> EvmAddress {
        ADDR.parse().unwrap()
    }

    fn score_body(score: f64, risk: &str) -> serde_json::Value {
        serde_json::json!({
            "address": ADDR,
            "score": score,
            "risk": risk,
            "type": "EOA",
            "flags": []
        })
    }

    #[tokio::test]
    async fn fetch_score_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/score/{ADDR}")))
            .and(query_param("chain", "eth"))
            .respond_with(ResponseTemplate::new(200).set_body_json(score_body(7.5, "LOW")))
            .expect(1)
            .mount(&server)
            .await;

        let client = TrustClient::new(GateConfig::for_test(server.uri())).unwrap();
        let result = client.fetch_score(&address()).await.unwrap();
        assert_eq!(result.score.value(), 7.5);
        assert_eq!(result.risk, "LOW");
        assert_eq!(result.entity, "EOA");
        assert!(result.safe);
    }

    #[tokio::test]
    async fn sends_bearer_header_when_key_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/score/{ADDR}")))
            .and(header("authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(score_body(6.0, "LOW")))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = GateConfig::for_test(server.uri());
        config.api_key = Some("sk-test".to_string());
        let client = TrustClient::new(config).unwrap();
        client.fetch_score(&address()).await.unwrap();
    }

    #[tokio::test]
    async fn sends_fixed_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/score/{ADDR}")))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(score_body(6.0, "LOW")))
            .expect(1)
            .mount(&server)
            .await;

        let client = TrustClient::new(GateConfig::for_test(server.uri())).unwrap();
        client.fetch_score(&address()).await.unwrap();
    }

    #[tokio::test]
    async fn below_threshold_is_not_safe() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/score/{ADDR}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(score_body(2.5, "CRITICAL")))
            .mount(&server)
            .await;

        let client = TrustClient::new(GateConfig::for_test(server.uri())).unwrap();
        let result = client.fetch_score(&address()).await.unwrap();
        assert!(!result.safe);
        assert_eq!(result.risk, "CRITICAL");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error_and_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/score/{ADDR}")))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .expect(1)
            .mount(&server)
            .await;

        let client = TrustClient::new(GateConfig::for_test(server.uri())).unwrap();
        let result = client.fetch_score(&address()).await;
        match result {
            Err(ClientError::HttpStatus { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected HttpStatus error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn invalid_json_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/score/{ADDR}")))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&server)
            .await;

        let client = TrustClient::new(GateConfig::for_test(server.uri())).unwrap();
        let result = client.fetch_score(&address()).await;
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn out_of_range_score_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/score/{ADDR}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(score_body(12.0, "LOW")))
            .mount(&server)
            .await;

        let client = TrustClient::new(GateConfig::for_test(server.uri())).unwrap();
        let result = client.fetch_score(&address()).await;
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        // Nothing listens on port 1
        let client = TrustClient::new(GateConfig::for_test("http://127.0.0.1:1")).unwrap();
        let result = client.fetch_score(&address()).await;
        assert!(matches!(result, Err(ClientError::Network(_))));
    }

    #[tokio::test]
    async fn custom_chain_is_passed_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/score/{ADDR}")))
            .and(query_param("chain", "bsc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(score_body(5.0, "MEDIUM")))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = GateConfig::for_test(server.uri());
        config.chain = "bsc".to_string();
        let client = TrustClient::new(config).unwrap();
        client.fetch_score(&address()).await.unwrap();
    }

    #[test]
    fn rejects_invalid_config() {
        let result = TrustClient::new(GateConfig::for_test(""));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }
}
