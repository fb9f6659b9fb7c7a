//! Error taxonomy for backend calls.
//!
//! Three buckets, matching what callers can actually do about a failure:
//! show it inline ([`Auth`](ApiError::Auth), [`Validation`](ApiError::Validation))
//! or treat the request as never having reached the server
//! ([`Network`](ApiError::Network)). Session restoration collapses all three
//! into "invalid session", so no finer distinction is carried.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Rejected credentials or an expired/invalid token (401/403).
    #[error("{0}")]
    Auth(String),
    /// Malformed payload or server-side field errors (400/422).
    #[error("{0}")]
    Validation(String),
    /// The request failed in transit, or the server answered outside the
    /// contract. Callers treat both the same way.
    #[error("{0}")]
    Network(String),
}

impl ApiError {
    /// Classify a non-success HTTP status together with the server's
    /// `detail` message.
    pub fn from_status(status: u16, detail: String) -> Self {
        match status {
            401 | 403 => ApiError::Auth(detail),
            400 | 422 => ApiError::Validation(detail),
            _ => ApiError::Network(format!("server returned status {status}: {detail}")),
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(
            ApiError::from_status(401, "Incorrect email or password".into()),
            ApiError::Auth("Incorrect email or password".into())
        );
        assert!(matches!(ApiError::from_status(403, "".into()), ApiError::Auth(_)));
        assert!(matches!(
            ApiError::from_status(422, "password too short".into()),
            ApiError::Validation(_)
        ));
        assert!(matches!(ApiError::from_status(400, "".into()), ApiError::Validation(_)));
        assert!(matches!(ApiError::from_status(500, "".into()), ApiError::Network(_)));
        assert!(matches!(ApiError::from_status(502, "".into()), ApiError::Network(_)));
    }

    #[test]
    fn test_display_is_the_detail() {
        let err = ApiError::Auth("Incorrect email or password".into());
        assert_eq!(err.to_string(), "Incorrect email or password");
    }
}
