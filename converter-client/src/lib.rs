//! # Converter Client
//!
//! A typed Rust client for the remote currency conversion API
//! (`GET /convert?from=..&to=..&amount=..`).

use std::time::Duration;

use async_trait::async_trait;
use converter_types::{
    ConversionError, ConversionRequest, ConversionResponse, ConversionService, ConvertQuery,
    CurrencyCode,
};
use reqwest::Client;

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "apikey";

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Successful response carried no result")]
    MissingResult,
}

impl From<ClientError> for ConversionError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => ConversionError::Unavailable(e.to_string()),
            ClientError::Api { status, message } => ConversionError::Status { status, message },
            ClientError::Json(e) => ConversionError::Malformed(e.to_string()),
            ClientError::MissingResult => {
                ConversionError::Malformed("successful response carried no result".into())
            }
        }
    }
}

/// Conversion API client.
#[derive(Clone)]
pub struct ConvertClient {
    base_url: String,
    api_key: Option<String>,
    http: Client,
}

impl ConvertClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            http: Client::new(),
        }
    }

    /// Sets the API key sent with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Rebuilds the underlying HTTP client with a whole-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ClientError> {
        self.http = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Converts `amount` from one currency to another.
    ///
    /// Returns the parsed body for any 2xx answer, including `success: false`.
    pub async fn convert(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
        amount: f64,
    ) -> Result<ConversionResponse, ClientError> {
        let query = ConvertQuery { from, to, amount };
        let mut req = self
            .http
            .get(format!("{}/convert", self.base_url))
            .query(&query);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }
        let resp = req.send().await?;
        let body: ConversionResponse = self.handle_response(resp).await?;

        if body.success && body.result.is_none() {
            return Err(ClientError::MissingResult);
        }
        Ok(body)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .or_else(|| v.get("message"))
                        .and_then(|e| e.as_str())
                        .map(String::from)
                })
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ConversionService for ConvertClient {
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResponse, ConversionError> {
        ConvertClient::convert(self, request.from(), request.to(), request.amount())
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "conversion request failed");
                e.into()
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    use axum::{
        Json, Router,
        extract::{Query, State},
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::get,
    };
    use tokio::net::TcpListener;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorded {
        queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
        api_keys: Arc<Mutex<Vec<Option<String>>>>,
    }

    /// Serves `router` on an ephemeral local port and returns its base URL.
    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn recording_server(body: serde_json::Value) -> (String, Recorded) {
        let recorded = Recorded::default();
        let router = Router::new()
            .route(
                "/convert",
                get(
                    move |State(rec): State<Recorded>,
                          headers: HeaderMap,
                          Query(q): Query<HashMap<String, String>>| {
                        let body = body.clone();
                        async move {
                            rec.queries.lock().unwrap().push(q);
                            rec.api_keys.lock().unwrap().push(
                                headers
                                    .get(API_KEY_HEADER)
                                    .and_then(|v| v.to_str().ok())
                                    .map(String::from),
                            );
                            Json(body)
                        }
                    },
                ),
            )
            .with_state(recorded.clone());
        (serve(router).await, recorded)
    }

    #[test]
    fn test_client_creation() {
        let client = ConvertClient::new("https://api.example.com/currency_data");
        assert_eq!(client.base_url(), "https://api.example.com/currency_data");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = ConvertClient::new("https://api.example.com/currency_data/");
        assert_eq!(client.base_url(), "https://api.example.com/currency_data");
    }

    #[test]
    fn test_client_with_api_key() {
        let client = ConvertClient::new("http://localhost:3000").with_api_key("test-key");
        assert_eq!(client.api_key, Some("test-key".to_string()));
    }

    #[tokio::test]
    async fn test_convert_sends_query_and_api_key() {
        let (base_url, recorded) =
            recording_server(serde_json::json!({"success": true, "result": 1550000.0})).await;
        let client = ConvertClient::new(base_url).with_api_key("secret");

        let resp = client
            .convert(CurrencyCode::USD, CurrencyCode::IDR, 100.0)
            .await
            .unwrap();
        assert_eq!(resp, ConversionResponse::converted(1550000.0));

        let queries = recorded.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0]["from"], "USD");
        assert_eq!(queries[0]["to"], "IDR");
        assert_eq!(queries[0]["amount"].parse::<f64>().unwrap(), 100.0);
        assert_eq!(
            recorded.api_keys.lock().unwrap()[0].as_deref(),
            Some("secret")
        );
    }

    #[tokio::test]
    async fn test_fractional_amount_uses_dot_separator() {
        let (base_url, recorded) =
            recording_server(serde_json::json!({"success": true, "result": 10.5})).await;
        let client = ConvertClient::new(base_url);

        client
            .convert(CurrencyCode::EUR, CurrencyCode::GBP, 12.25)
            .await
            .unwrap();

        let queries = recorded.queries.lock().unwrap();
        assert_eq!(queries[0]["amount"], "12.25");
        assert_eq!(recorded.api_keys.lock().unwrap()[0], None);
    }

    #[tokio::test]
    async fn test_unsuccessful_body_is_returned() {
        let (base_url, _) =
            recording_server(serde_json::json!({"success": false, "result": 0})).await;
        let client = ConvertClient::new(base_url);

        let resp = client
            .convert(CurrencyCode::USD, CurrencyCode::JPY, 1.0)
            .await
            .unwrap();
        assert!(!resp.success);
    }

    #[tokio::test]
    async fn test_success_without_result_is_malformed() {
        let (base_url, _) = recording_server(serde_json::json!({"success": true})).await;
        let client = ConvertClient::new(base_url);

        let err = client
            .convert(CurrencyCode::USD, CurrencyCode::JPY, 1.0)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingResult));
        assert!(matches!(
            ConversionError::from(err),
            ConversionError::Malformed(_)
        ));
    }

    #[tokio::test]
    async fn test_non_json_body_is_json_error() {
        let router = Router::new().route("/convert", get(|| async { "<html>oops</html>" }));
        let client = ConvertClient::new(serve(router).await);

        let err = client
            .convert(CurrencyCode::USD, CurrencyCode::EUR, 1.0)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));
    }

    #[tokio::test]
    async fn test_error_status_extracts_message() {
        let router = Router::new().route(
            "/convert",
            get(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({"message": "Invalid authentication credentials"})),
                )
                    .into_response()
            }),
        );
        let client = ConvertClient::new(serve(router).await);

        let err = client
            .convert(CurrencyCode::USD, CurrencyCode::EUR, 1.0)
            .await
            .unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid authentication credentials");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_maps_to_unavailable() {
        // Bind then drop to obtain a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ConvertClient::new(format!("http://{addr}"));
        let req = ConversionRequest::new(CurrencyCode::USD, CurrencyCode::IDR, "100").unwrap();
        let err = ConversionService::convert(&client, &req).await.unwrap_err();
        assert!(matches!(err, ConversionError::Unavailable(_)));
    }
}
