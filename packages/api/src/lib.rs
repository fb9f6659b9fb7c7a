//! # API crate — REST client and session lifecycle for Weaversong
//!
//! Every Weaversong frontend talks to the same backend through this crate.
//! It owns the typed REST surface, the error taxonomy, and the session state
//! machine that the UI layer renders.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | `AuthBackend` trait + REST implementation, [`SessionManager`](auth::SessionManager) session lifecycle |
//! | [`client`] | [`ApiClient`]: JSON-over-HTTP wrapper that attaches the bearer token to every request |
//! | [`config`] | [`ApiConfig`]: backend base URL, same-origin by default |
//! | [`error`] | [`ApiError`]: auth / validation / network taxonomy |
//! | [`models`] | [`UserInfo`] and [`UserRole`] as they cross the REST boundary |
//!
//! The backend itself (FastAPI-style REST services for the Helpboard,
//! CityPulse, ClarifAI and pedestrian-analytics apps) is an external
//! collaborator; only the `/auth/*` contract is typed here.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{UserInfo, UserRole};
