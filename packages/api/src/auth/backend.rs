//! The `/auth/*` contract as a trait, so the session lifecycle can be
//! exercised against a stub in tests and against REST in the apps.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::UserInfo;

/// Login form payload.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup form payload. The backend answers 201 with no useful body; the
/// caller follows up with a login using the same credentials.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl SignupRequest {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// `POST /auth/login` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub user: UserInfo,
}

/// `POST /auth/refresh` response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Async interface over the authentication endpoints.
pub trait AuthBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn current_user(&self) -> Result<UserInfo, ApiError>;
    async fn refresh(&self) -> Result<TokenResponse, ApiError>;

    /// Install or remove the bearer token used by subsequent calls.
    fn install_token(&self, token: Option<&str>);
}
