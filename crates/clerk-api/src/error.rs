//! Clerk client error types.

use thiserror::Error;

/// Errors that can occur when calling the Clerk Backend API.
#[derive(Debug, Error)]
pub enum ClerkError {
    /// The client could not be constructed (missing secret key, unusable transport).
    #[error("{0}")]
    Configuration(String),

    /// The API answered with a non-success status, or no answer arrived at all.
    ///
    /// `status` is 0 for transport failures (DNS, refused connection, timeout).
    #[error("[{status}] {message}")]
    Api {
        /// HTTP status code, or 0 when the request never got a response.
        status: u16,
        /// Human readable message from the error envelope or the raw body.
        message: String,
        /// Field-level details, in the order the API returned them.
        errors: Vec<String>,
    },

    /// The caller asked for something the API contract forbids; nothing was sent.
    #[error("{0}")]
    Validation(String),
}

impl ClerkError {
    pub(crate) fn missing_secret_key() -> Self {
        Self::Configuration(
            "CLERK_SECRET_KEY environment variable is not set. \
             Set it to your Clerk secret key (starts with sk_)."
                .to_string(),
        )
    }

    pub(crate) fn network(err: &reqwest::Error) -> Self {
        Self::Api {
            status: 0,
            message: format!("Network error: {err}"),
            errors: Vec::new(),
        }
    }
}
