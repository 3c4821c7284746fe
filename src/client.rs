//! The DooTask client and its request plumbing.
//!
//! One client owns one blocking HTTP session (connection reuse, default
//! headers, a uniform per-request timeout) and the in-memory cache for the
//! current-user lookup. Every public operation is synchronous and blocks the
//! calling thread until the transport completes or times out.

use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::cache::UserInfoCache;
use crate::encoding;
use crate::error::DooTaskError;
use crate::response;

const DEFAULT_SERVER: &str = "http://nginx";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

/// Synchronous client for the DooTask HTTP API.
///
/// Construct with [`DooTaskClient::new`] for defaults or
/// [`DooTaskClient::builder`] to override the server address, timeout, or
/// cache time-to-live. Endpoint methods live in `impl` blocks under `api/`,
/// grouped by domain.
pub struct DooTaskClient {
    token: SecretString,
    server: String,
    http: HttpClient,
    pub(crate) cache: UserInfoCache,
    pub(crate) cache_ttl: Duration,
}

impl std::fmt::Debug for DooTaskClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DooTaskClient")
            .field("server", &self.server)
            .field("cache_ttl", &self.cache_ttl)
            .finish_non_exhaustive()
    }
}

impl DooTaskClient {
    /// Create a client for the default in-cluster server address.
    pub fn new(token: impl Into<String>) -> Result<Self, DooTaskError> {
        Self::builder(token).build()
    }

    /// Start building a client with non-default settings.
    pub fn builder(token: impl Into<String>) -> DooTaskClientBuilder {
        DooTaskClientBuilder::new(token)
    }

    /// Cache key for the current-user entry. Incorporates the token but not
    /// the server address; two clients for different servers sharing a token
    /// would collide (kept as-is, see DESIGN.md).
    pub(crate) fn user_cache_key(&self) -> String {
        format!("user_info_{}", self.token.expose_secret())
    }

    /// Drop every cached entry.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Number of live-or-expired entries currently held.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    // ----------------------------------------------------------------------
    // Request plumbing
    // ----------------------------------------------------------------------

    /// Dispatch one request and return the validated envelope payload.
    ///
    /// GET/DELETE encode `payload` into the query string; POST/PUT/PATCH send
    /// it as a JSON body. Any other verb is a programming error.
    pub(crate) fn send(
        &self,
        method: Method,
        api: &str,
        payload: Option<Map<String, Value>>,
        headers: Option<HeaderMap>,
    ) -> Result<Option<Value>, DooTaskError> {
        let base = format!("{}{api}", self.server);

        let query_verb = method == Method::GET || method == Method::DELETE;
        let body_verb = method == Method::POST || method == Method::PUT || method == Method::PATCH;
        if !query_verb && !body_verb {
            return Err(DooTaskError::UnsupportedMethod(method.to_string()));
        }

        let url = match (&payload, query_verb) {
            (Some(params), true) => encoding::append_query(&base, params),
            _ => base,
        };

        debug!(method = %method, url = %url, "dispatching request");

        let mut request = self.http.request(method, url.as_str());
        if let Some(extra) = headers {
            request = request.headers(extra);
        }
        if body_verb {
            if let Some(body) = &payload {
                request = request.json(body);
            }
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(DooTaskError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                body: response.text().unwrap_or_default(),
            });
        }

        let body = response.text()?;
        response::decode_envelope(&body)
    }

    /// GET returning a typed payload.
    pub(crate) fn get<P, T>(&self, api: &str, params: &P) -> Result<T, DooTaskError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let data = self.send(Method::GET, api, Some(encoding::to_object(params)), None)?;
        response::from_payload(api, data)
    }

    /// GET whose payload the caller does not consume.
    pub(crate) fn get_unit<P>(&self, api: &str, params: &P) -> Result<(), DooTaskError>
    where
        P: Serialize + ?Sized,
    {
        self.send(Method::GET, api, Some(encoding::to_object(params)), None)
            .map(|_| ())
    }

    /// GET with request-scoped extra headers.
    pub(crate) fn get_with_headers<P, T>(
        &self,
        api: &str,
        params: &P,
        headers: HeaderMap,
    ) -> Result<T, DooTaskError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let data = self.send(
            Method::GET,
            api,
            Some(encoding::to_object(params)),
            Some(headers),
        )?;
        response::from_payload(api, data)
    }

    /// POST returning a typed payload.
    pub(crate) fn post<P, T>(&self, api: &str, body: &P) -> Result<T, DooTaskError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let data = self.send(Method::POST, api, Some(encoding::to_object(body)), None)?;
        response::from_payload(api, data)
    }

    /// POST whose payload the caller does not consume.
    pub(crate) fn post_unit<P>(&self, api: &str, body: &P) -> Result<(), DooTaskError>
    where
        P: Serialize + ?Sized,
    {
        self.send(Method::POST, api, Some(encoding::to_object(body)), None)
            .map(|_| ())
    }
}

/// Builder for [`DooTaskClient`].
#[derive(Debug)]
pub struct DooTaskClientBuilder {
    token: String,
    server: String,
    timeout: Duration,
    cache_ttl: Duration,
    user_agent: Option<String>,
}

impl DooTaskClientBuilder {
    fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            server: DEFAULT_SERVER.to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
            user_agent: None,
        }
    }

    /// Base server address, e.g. `https://dootask.example.com`. A trailing
    /// slash is stripped so endpoint paths concatenate cleanly.
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into();
        self
    }

    /// Uniform per-request timeout. Applies to every call; there is no
    /// per-call override.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Time-to-live for the current-user cache entry.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<DooTaskClient, DooTaskError> {
        let token = SecretString::from(self.token);

        let mut headers = HeaderMap::new();
        headers.insert(
            "Token",
            HeaderValue::from_str(token.expose_secret())
                .map_err(|e| DooTaskError::Configuration(format!("invalid token: {e}")))?,
        );
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("dootask-rs/{}", env!("CARGO_PKG_VERSION")));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&user_agent)
                .map_err(|e| DooTaskError::Configuration(format!("invalid user agent: {e}")))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()?;

        Ok(DooTaskClient {
            token,
            server: self.server.trim_end_matches('/').to_string(),
            http,
            cache: UserInfoCache::new(),
            cache_ttl: self.cache_ttl,
        })
    }
}
