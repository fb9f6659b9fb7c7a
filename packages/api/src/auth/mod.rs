//! Authentication: the backend seam and the session lifecycle built on it.

mod backend;
mod rest;
pub mod session;

pub use backend::{AuthBackend, Credentials, LoginResponse, SignupRequest, TokenResponse};
pub use rest::RestBackend;
pub use session::{SessionManager, SessionPhase, SessionState};
