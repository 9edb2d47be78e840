//! Shared HTTP client for the upstream API.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{AppError, Result};

/// Thin wrapper over a pooled `reqwest::Client` carrying the API base URL.
///
/// Cloning is cheap (the underlying connection pool is reference-counted)
/// and safe: all concurrent fetches share one pool, nothing is mutated.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Http` if the underlying client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Http(format!("failed to build http client: {err}")))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// URL of the primary people resource for `id`.
    #[must_use]
    pub fn people_url(&self, id: u32) -> String {
        format!("{}/people/{id}", self.base_url)
    }

    /// GET `url` and return status plus raw body without a status check.
    ///
    /// The primary endpoint signals not-found through a sentinel body on a
    /// 404, so the caller inspects the status itself.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Http` on a network error or timeout.
    pub async fn get_text(&self, url: &str) -> Result<(StatusCode, String)> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    /// GET `url` and decode a JSON body, treating any non-2xx as a failure.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Http` on a network error or non-2xx status, and
    /// `AppError::Parse` if the body does not decode as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("invalid body from {url}: {err}")))
    }
}
