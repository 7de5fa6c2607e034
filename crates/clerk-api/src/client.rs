use std::borrow::Cow;

use clerk_config::ClerkConfig;
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;

use crate::error::ClerkError;
use crate::http::into_json;
use crate::query::Query;
use crate::updates::Patch;

const USER_AGENT: &str = concat!("clerk-admin/", env!("CARGO_PKG_VERSION"));

/// Authenticated client for the Clerk Backend API.
///
/// Holds the secret key and base URL; every call is one independent request.
pub struct ClerkClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl std::fmt::Debug for ClerkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClerkClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ClerkClient {
    /// Create a client for `base_url` authenticated with `secret_key`.
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Configuration`] if the key is blank or the HTTP
    /// transport cannot be built.
    pub fn new(
        secret_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ClerkError> {
        let secret_key = secret_key.into().trim().to_string();
        if secret_key.is_empty() {
            return Err(ClerkError::missing_secret_key());
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClerkError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            secret_key,
        })
    }

    /// Create a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Configuration`] if `config.secret_key` is not set.
    pub fn from_config(config: &ClerkConfig) -> Result<Self, ClerkError> {
        Self::resolve(None, config)
    }

    /// Prefer an explicitly supplied key, falling back to the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Configuration`] if neither source has a key.
    pub fn resolve(explicit: Option<&str>, config: &ClerkConfig) -> Result<Self, ClerkError> {
        let key = match explicit.filter(|key| !key.trim().is_empty()) {
            Some(key) => key,
            None if config.is_configured() => config.secret_key.as_str(),
            None => return Err(ClerkError::missing_secret_key()),
        };
        Self::new(key, config.api_url.as_str())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `path`, with the encoded query appended when non-empty.
    #[must_use]
    pub fn url(&self, path: &str, query: Option<&Query>) -> String {
        let mut url = format!("{}{path}", self.base_url);
        if let Some(encoded) = query.and_then(Query::encode) {
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }

    /// Send one request and return the parsed JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ClerkError::Api`] for non-2xx responses (status, message and
    /// details from the error envelope) and for transport failures (status 0).
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&Query>,
    ) -> Result<Value, ClerkError> {
        let url = self.url(path, query);
        tracing::debug!(%method, path, has_body = body.is_some(), "clerk request");

        let mut builder = self
            .http
            .request(method, &url)
            .bearer_auth(&self.secret_key)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            builder = builder.body(body.to_string());
        }

        let resp = builder.send().await.map_err(|e| {
            tracing::debug!(%e, "clerk request failed before a response");
            ClerkError::network(&e)
        })?;
        into_json(resp).await
    }

    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn get(&self, path: &str, query: Option<&Query>) -> Result<Value, ClerkError> {
        self.request(Method::GET, path, None, query).await
    }

    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn post(
        &self,
        path: &str,
        body: Option<&Value>,
        query: Option<&Query>,
    ) -> Result<Value, ClerkError> {
        self.request(Method::POST, path, body, query).await
    }

    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Value, ClerkError> {
        self.request(Method::PATCH, path, body, None).await
    }

    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn delete(&self, path: &str) -> Result<Value, ClerkError> {
        self.request(Method::DELETE, path, None, None).await
    }
}

/// Validate a required identifier and percent-encode it for use in a path.
pub(crate) fn path_segment<'a>(field: &str, value: &'a str) -> Result<Cow<'a, str>, ClerkError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ClerkError::Validation(format!("{field} must not be empty")));
    }
    Ok(urlencoding::encode(value))
}

/// Require a non-blank string argument that travels in the body; returns it trimmed.
pub(crate) fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, ClerkError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ClerkError::Validation(format!("{field} must not be empty")));
    }
    Ok(value)
}

/// Serialize a request structure into a JSON body.
pub(crate) fn to_body<T: Serialize>(value: &T) -> Result<Value, ClerkError> {
    serde_json::to_value(value)
        .map_err(|e| ClerkError::Validation(format!("failed to encode request body: {e}")))
}

/// Serialize a partial update, refusing to send one with no fields.
pub(crate) fn patch_body<T: Patch>(update: &T) -> Result<Value, ClerkError> {
    if update.is_empty() {
        return Err(ClerkError::Validation(T::EMPTY_MESSAGE.to_string()));
    }
    to_body(update)
}
