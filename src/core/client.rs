//! Public client surface + builder.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::cache::SnapshotCache;
use crate::core::clock::{Clock, SystemClock};
use crate::core::error::AvError;
use crate::fundamentals::Fundamental;
use crate::price::PriceQuote;

/// Alpha Vantage query endpoint as fronted by RapidAPI.
pub(crate) const DEFAULT_BASE_URL: &str = "https://alpha-vantage.p.rapidapi.com/query";

/// Environment variable consulted when no API key is passed to the builder.
const ENV_API_KEY: &str = "RAPIDAPI_KEY";

/// Handle to the market-data provider.
///
/// Holds the HTTP client, the resolved API key, the process-wide
/// [`SnapshotCache`], and the [`Clock`] used for trading-calendar decisions.
/// Cloning is cheap; clones share the same cache and clock.
#[derive(Debug, Clone)]
pub struct AvClient {
    http: Client,
    base_url: Url,
    api_key: String,
    api_host: String,
    cache: Arc<SnapshotCache>,
    clock: Arc<dyn Clock>,
}

impl AvClient {
    /// Create a new builder.
    pub fn builder() -> AvClientBuilder {
        AvClientBuilder::default()
    }

    /// Build a client with default settings and the key from `RAPIDAPI_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`AvError::MissingApiKey`] if the variable is unset or empty.
    pub fn from_env() -> Result<Self, AvError> {
        Self::builder().build()
    }

    /// Fetch a fundamental indicator value for a symbol.
    ///
    /// See [`crate::fundamentals::fetch`] for the caching and error contract.
    ///
    /// # Errors
    ///
    /// Returns an [`AvError`] classifying the failure; expected provider
    /// misbehavior (unknown symbol, quota exhaustion, missing fields) is
    /// mapped to its own variant.
    pub async fn fundamental(&self, symbol: &str, indicator: &str) -> Result<Fundamental, AvError> {
        crate::fundamentals::fetch(self, symbol, indicator).await
    }

    /// Fetch the latest traded price for a symbol. Never served from cache.
    ///
    /// # Errors
    ///
    /// Returns an [`AvError`] classifying the failure.
    pub async fn price(&self, symbol: &str) -> Result<PriceQuote, AvError> {
        crate::price::fetch(self, symbol).await
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
    pub(crate) fn api_host(&self) -> &str {
        &self.api_host
    }
    pub(crate) fn cache(&self) -> &SnapshotCache {
        &self.cache
    }
    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct AvClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    clock: Option<Arc<dyn Clock>>,
}

impl AvClientBuilder {
    /// Set the RapidAPI key. If unset, `RAPIDAPI_KEY` is read at build time.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the provider query endpoint (useful for tests).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global per-request timeout. Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the system clock (useful for tests).
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the client, resolving the API key and base URL once.
    ///
    /// # Errors
    ///
    /// Returns [`AvError::MissingApiKey`] if no key is available, or
    /// [`AvError::Url`] / [`AvError::Network`] if the base URL or HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<AvClient, AvError> {
        let api_key = match self.api_key {
            Some(key) => key,
            None => env::var(ENV_API_KEY).unwrap_or_default(),
        };
        if api_key.is_empty() {
            return Err(AvError::MissingApiKey);
        }

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let api_host = base_url
            .host_str()
            .ok_or(AvError::Url(url::ParseError::EmptyHost))?
            .to_string();

        let mut httpb = Client::builder();
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        Ok(AvClient {
            http,
            base_url,
            api_key,
            api_host,
            cache: Arc::new(SnapshotCache::new()),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        })
    }
}
