// Forum backend HTTP client built on reqwest.
//
// One `reqwest::Client` is configured per `ForumClient`: the base URL and a
// static `Authorization` default header are captured from the config at
// construction time. The logical operations live in the `forums` and `posts`
// modules; this module owns construction and the request plumbing.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised while constructing a `ForumClient`. Request-path failures
/// are not wrapped; operations return `reqwest::Result` directly.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("bearer token contains characters not allowed in an HTTP header")]
    InvalidToken,

    #[error("failed to build HTTP transport: {0}")]
    Transport(#[from] reqwest::Error),
}

// ---------------------------------------------------------------------------
// ForumClient
// ---------------------------------------------------------------------------

/// HTTP client for the forum backend.
///
/// Cheap to clone and safe for concurrent use: the inner `reqwest::Client`
/// is a shared handle holding no per-call state. The bearer token is read
/// from the config exactly once, here; later changes to the source config
/// are not picked up by an already-built client.
#[derive(Debug, Clone)]
pub struct ForumClient {
    http: reqwest::Client,
    base_url: String,
}

impl ForumClient {
    /// Build a client from the given config.
    ///
    /// When a token is configured, `Authorization: Bearer <token>` is
    /// installed as a default header on this client's own transport (never
    /// on any process-wide default), so every request issued through it
    /// carries the credential. With no token, no header is attached.
    pub fn from_config(config: &Config) -> Result<Self, BuildError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = config.token() {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| BuildError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// The base URL this client was built with (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -- Request plumbing shared by the operation modules --
    //
    // Pass-throughs by design: no retries, no timeouts beyond reqwest's
    // defaults, and errors (connect failures, non-2xx statuses, malformed
    // JSON) surface as the transport's own `reqwest::Error`.

    pub(crate) async fn get_json<T>(&self, path: &str) -> reqwest::Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        self.http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> reqwest::Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        self.http
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub(crate) async fn post_json_no_content<B>(&self, path: &str, body: &B) -> reqwest::Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        self.http
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub(crate) async fn delete_json<B>(&self, path: &str, body: &B) -> reqwest::Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "DELETE");
        self.http
            .delete(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
