//! Integration tests for the request/response pipeline.
//!
//! Every test runs against a local wiremock server, so the suite needs no
//! credentials and exercises exactly the wire contract: status
//! classification, success/error decoding, option composition on the
//! outgoing query string, and dial bootstrap behavior.
//!
//! Run with: cargo test --test client_tests

use std::sync::Once;

use async_trait::async_trait;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use robinhood_rs::auth::{Session, Token, TokenSource};
use robinhood_rs::{ClientConfig, Error, RequestOption, Result, RobinhoodClient};

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// A token source that hands out a fixed token without any exchange.
struct StaticTokenSource;

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn token(&self) -> Result<Token> {
        Ok(Token::new("test-token"))
    }
}

/// Build a client pointed at the mock server with a static session token.
fn mock_client(server: &MockServer) -> RobinhoodClient {
    init_logging();
    let session = Session::from_token(Token::new("test-token"));
    let config = ClientConfig::default().with_base_url(server.uri());
    RobinhoodClient::with_session(session, config).expect("client should build")
}

mod dispatch_tests {
    use super::*;

    #[tokio::test]
    async fn success_populates_typed_destination() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/accounts/5QR12345/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "account_number": "5QR12345",
                "buying_power": "2203.8800",
                "created_at": "2020-01-01T00:00:00Z",
                "url": "https://api.robinhood.com/accounts/5QR12345/"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let account = client.accounts().get("5QR12345").await.unwrap();
        assert_eq!(account.account_number, "5QR12345");
        assert_eq!(account.buying_power, "2203.8800");
        assert!(account.meta.created_at.is_some());
    }

    #[tokio::test]
    async fn bearer_token_is_attached() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/watchlists/"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"results": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let watchlists = client.watchlists().list().await.unwrap();
        assert!(watchlists.is_empty());
    }

    #[tokio::test]
    async fn api_error_carries_every_diagnostic_key() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/quotes/NOPE/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "detail": "invalid symbol",
                "code": 1001,
                "fields": {"symbol": ["unknown"]}
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let err = client.quotes().get("NOPE").await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("detail"), "message: {message}");
        assert!(message.contains("invalid symbol"), "message: {message}");
        assert!(message.contains("code"), "message: {message}");
        assert!(message.contains("fields"), "message: {message}");

        let map = err.api_errors().expect("should be an API error");
        assert_eq!(map.len(), 3);
    }

    #[tokio::test]
    async fn undecodable_error_body_preserves_status_and_text() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/quotes/SPY/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let err = client.quotes().get("SPY").await.unwrap_err();

        assert!(matches!(err, Error::BadResponse { .. }));
        let message = err.to_string();
        assert!(message.contains("500"), "message: {message}");
        assert!(message.contains("not json"), "message: {message}");
    }

    #[tokio::test]
    async fn non_object_error_body_is_bad_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/quotes/SPY/"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(serde_json::json!(["denied"])),
            )
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let err = client.quotes().get("SPY").await.unwrap_err();
        assert!(matches!(err, Error::BadResponse { .. }));
    }

    #[tokio::test]
    async fn mismatched_success_body_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/accounts/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"results": "not a list"})),
            )
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let err = client.accounts().list().await.unwrap_err();
        assert!(matches!(err, Error::Json(_)), "got: {err:?}");
    }

    #[tokio::test]
    async fn one_request_per_dispatch_no_retries() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/portfolios/"))
            .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
                "detail": "service unavailable"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        assert!(client.portfolios().list().await.is_err());
        // Mock expectation of exactly one request is verified on drop.
    }
}

mod option_tests {
    use super::*;

    #[tokio::test]
    async fn historicals_use_default_query_options() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/marketdata/historicals/d57904fb/"))
            .and(query_param("interval", "5minute"))
            .and(query_param("span", "day"))
            .and(query_param("bounds", "trading"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "symbol": "OKTA",
                "interval": "5minute",
                "span": "day",
                "bounds": "trading",
                "historicals": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let historical = client.historicals().get("d57904fb").await.unwrap();
        assert_eq!(historical.symbol, "OKTA");
        assert_eq!(historical.interval, "5minute");
    }

    #[tokio::test]
    async fn caller_options_override_historicals_defaults() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/marketdata/historicals/d57904fb/"))
            .and(query_param("interval", "5minute"))
            .and(query_param("span", "week"))
            .and(query_param("bounds", "trading"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "symbol": "OKTA",
                "span": "week",
                "historicals": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let historical = client
            .historicals()
            .get_with_options("d57904fb", vec![RequestOption::query("span", "week")])
            .await
            .unwrap();
        assert_eq!(historical.span, "week");
    }

    #[tokio::test]
    async fn quotes_many_joins_symbols_into_one_parameter() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/quotes/"))
            .and(query_param("symbols", "AAPL,MSFT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    {"symbol": "AAPL", "last_trade_price": "150.00"},
                    {"symbol": "MSFT", "last_trade_price": "300.00"}
                ]
            })))
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let quotes = client.quotes().get_many(&["AAPL", "MSFT"]).await.unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].symbol, "AAPL");
    }

    #[tokio::test]
    async fn failing_option_surfaces_before_any_request() {
        let server = MockServer::start().await;
        // No mocks mounted: a dispatched request would 404 into BadResponse.

        let client = mock_client(&server);
        let err = client
            .historicals()
            .get_with_options(
                "d57904fb",
                vec![RequestOption::header("x-trace", "bad\nvalue")],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)), "got: {err:?}");
    }
}

mod bootstrap_tests {
    use super::*;

    #[tokio::test]
    async fn dial_caches_first_account_as_primary() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/accounts/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    {"account_number": "5QR12345", "buying_power": "100.00"},
                    {"account_number": "5QR67890", "buying_power": "200.00"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig::default().with_base_url(server.uri());
        let client = RobinhoodClient::dial_with_config(StaticTokenSource, config)
            .await
            .unwrap();

        let primary = client.primary_account().expect("primary should be cached");
        assert_eq!(primary.account_number, "5QR12345");
    }

    #[tokio::test]
    async fn dial_with_empty_listing_succeeds_without_primary() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/accounts/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"results": []})),
            )
            .mount(&server)
            .await;

        let config = ClientConfig::default().with_base_url(server.uri());
        let client = RobinhoodClient::dial_with_config(StaticTokenSource, config)
            .await
            .unwrap();

        assert!(client.primary_account().is_none());
    }

    #[tokio::test]
    async fn failed_listing_still_yields_a_usable_client() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/accounts/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/quotes/SPY/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "symbol": "SPY",
                "last_trade_price": "430.00"
            })))
            .mount(&server)
            .await;

        let config = ClientConfig::default().with_base_url(server.uri());
        let err = RobinhoodClient::dial_with_config(StaticTokenSource, config)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Bootstrap { .. }));

        // The constructed client is recoverable and fully functional.
        let client = err.into_client().expect("client should be recoverable");
        assert!(client.primary_account().is_none());

        let quote = client.quotes().get("SPY").await.unwrap();
        assert_eq!(quote.last_trade_price, "430.00");
    }

    #[tokio::test]
    async fn failing_token_source_is_fatal_to_construction() {
        struct FailingSource;

        #[async_trait]
        impl TokenSource for FailingSource {
            async fn token(&self) -> Result<Token> {
                Err(Error::Authentication("bad credentials".to_string()))
            }
        }

        let err = RobinhoodClient::dial(FailingSource).await.unwrap_err();
        assert!(err.is_auth_error());
    }
}

mod auth_tests {
    use super::*;
    use robinhood_rs::auth::OAuthTokenSource;

    #[tokio::test]
    async fn oauth_source_exchanges_credentials_for_a_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth2/token/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "exchanged-token",
                "token_type": "Bearer",
                "expires_in": 86400
            })))
            .expect(1)
            .mount(&server)
            .await;

        let source = OAuthTokenSource::new("user", "pass")
            .with_endpoint(format!("{}/oauth2/token/", server.uri()));
        let token = source.token().await.unwrap();
        assert!(token.expires_at().is_some());
    }

    #[tokio::test]
    async fn oauth_source_surfaces_exchange_failures() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth2/token/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "invalid_grant"
            })))
            .mount(&server)
            .await;

        let source = OAuthTokenSource::new("user", "wrong")
            .with_endpoint(format!("{}/oauth2/token/", server.uri()));
        let err = source.token().await.unwrap_err();
        assert!(err.is_auth_error());
        assert!(err.to_string().contains("invalid_grant"));
    }
}
