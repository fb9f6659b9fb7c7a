//! # HTTP client with bearer-token interception
//!
//! [`ApiClient`] wraps [`reqwest::Client`] for JSON request/response cycles
//! against the backend. It holds the bearer token in a shared slot; once a
//! token is installed, every outgoing request carries an
//! `Authorization: Bearer <token>` header. The session layer is the only
//! writer of the slot.
//!
//! Non-success responses are decoded as FastAPI-style `{"detail": ...}`
//! bodies and classified through [`ApiError::from_status`].

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            base_url: config.base_url,
            http: reqwest::Client::new(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Install or remove the bearer token attached to every request.
    pub fn set_token(&self, token: Option<&str>) {
        *self.token.write().unwrap() = token.map(str::to_string);
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(self.http.get(self.url(path)))
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(self.http.post(self.url(path)).json(body))
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(response).await
    }

    /// POST where the caller only cares about success, not the body.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.post(self.url(path)).json(body))
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await.map(|_| ())
    }

    /// Body-less POST, used by `/auth/logout` and `/auth/refresh`.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(self.http.post(self.url(path)))
            .send()
            .await
            .map_err(transport_error)?;
        decode_json(response).await
    }

    pub async fn post_empty_unit(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.post(self.url(path)))
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await.map(|_| ())
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(format!("request failed: {err}"))
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(classify_response(status.as_u16(), &body))
}

async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response
        .json()
        .await
        .map_err(|err| ApiError::Network(format!("invalid response body: {err}")))
}

/// Turn a non-success status plus raw body into an [`ApiError`], pulling the
/// human-readable message out of a `{"detail": ...}` envelope when present.
fn classify_response(status: u16, body: &str) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: Option<serde_json::Value>,
    }

    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .map(|value| match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        })
        .unwrap_or_else(|| body.to_string());

    ApiError::from_status(status, detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string_is_extracted() {
        let err = classify_response(401, r#"{"detail":"Incorrect email or password"}"#);
        assert_eq!(err, ApiError::Auth("Incorrect email or password".into()));
    }

    #[test]
    fn test_structured_detail_is_stringified() {
        // FastAPI validation errors carry a list in `detail`
        let err = classify_response(422, r#"{"detail":[{"loc":["body","password"]}]}"#);
        match err {
            ApiError::Validation(msg) => assert!(msg.contains("password")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_body_is_kept_verbatim() {
        let err = classify_response(503, "upstream unavailable");
        assert!(matches!(err, ApiError::Network(msg) if msg.contains("upstream unavailable")));
    }

    #[test]
    fn test_token_slot_roundtrip() {
        let client = ApiClient::new(ApiConfig::default());
        assert_eq!(client.token(), None);
        client.set_token(Some("tok"));
        assert_eq!(client.token(), Some("tok".to_string()));
        client.set_token(None);
        assert_eq!(client.token(), None);
    }
}
