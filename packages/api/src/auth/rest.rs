//! REST implementation of [`AuthBackend`] over [`ApiClient`].

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::UserInfo;

use super::backend::{AuthBackend, Credentials, LoginResponse, SignupRequest, TokenResponse};

/// The production backend: `/auth/*` over HTTP with bearer tokens.
#[derive(Clone, Debug)]
pub struct RestBackend {
    client: ApiClient,
}

impl RestBackend {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The underlying client, shared with the feature-level fetchers so the
    /// same token interceptor covers every request.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl AuthBackend for RestBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.client.post_json("/auth/login", credentials).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.client.post_unit("/auth/signup", request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.client.post_empty_unit("/auth/logout").await
    }

    async fn current_user(&self) -> Result<UserInfo, ApiError> {
        self.client.get_json("/auth/me").await
    }

    async fn refresh(&self) -> Result<TokenResponse, ApiError> {
        self.client.post_empty("/auth/refresh").await
    }

    fn install_token(&self, token: Option<&str>) {
        self.client.set_token(token);
    }
}
