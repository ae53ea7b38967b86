//! throwaway.cloud async client implementation.

use crate::{Error, LookupOptions, LookupResult, Result};
use hyper::ext::ReasonPhrase;
use log::{debug, trace};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use std::time::Duration;
use url::Url;

/// Base URL of the throwaway.cloud v2 API.
pub const BASE_URL: &str = "https://throwaway.cloud/api/v2/";

/// Value of the `User-Agent` header sent with every request.
pub const USER_AGENT_VALUE: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Characters escaped in the subject: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const SUBJECT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Async client for the throwaway.cloud lookup API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom settings
/// like proxies, TLS behavior, a request timeout, or another base URL.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    proxy: Option<String>,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client with default settings.
    ///
    /// No request is made until [`Client::lookup`] is called.
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// The base URL subjects are appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Look up an email address or domain.
    ///
    /// # Arguments
    /// * `subject` - The email address or domain to check
    /// * `options` - Extra request headers (`User-Agent` is always replaced)
    ///
    /// # Returns
    /// The decoded JSON body of the API response
    ///
    /// # Errors
    /// * [`Error::MissingSubject`] if `subject` is empty, before any I/O
    /// * [`Error::Request`] if the request fails in transit
    /// * [`Error::Status`] if the API answers with a non-2xx status
    /// * [`Error::Json`] if the body is not JSON, or is JSON but not an object
    ///
    /// # Examples
    /// ```no_run
    /// # use throwaway_lookup::{Client, LookupOptions};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), throwaway_lookup::Error> {
    /// let client = Client::new()?;
    /// let result = client.lookup("mailinator.com", &LookupOptions::default()).await?;
    /// println!("disposable: {:?}", result.is_disposable());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn lookup(&self, subject: &str, options: &LookupOptions) -> Result<LookupResult> {
        if subject.is_empty() {
            return Err(Error::MissingSubject);
        }

        let url = self.endpoint(subject);
        let headers = Self::headers(options)?;

        debug!("Sending lookup to {}", url.host_str().unwrap_or_default());

        let response = self.http.get(url).headers(headers).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Lookup failed with status {status}");
            let reason = response.extensions().get::<ReasonPhrase>();
            return Err(Error::from_status(status, reason));
        }

        let body = response.bytes().await?;
        trace!("Lookup returned {} bytes", body.len());

        serde_json::from_slice(&body).map_err(Into::into)
    }

    /// Build the request URL for a subject.
    ///
    /// The subject is percent-encoded as a single path segment, escaping
    /// every character except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
    pub fn endpoint(&self, subject: &str) -> Url {
        let encoded = utf8_percent_encode(subject, SUBJECT);
        let path = format!("{}/{encoded}", self.base_url.path().trim_end_matches('/'));

        let mut url = self.base_url.clone();
        url.set_path(&path);
        url
    }

    /// Merge caller headers, then force the identification header.
    fn headers(options: &LookupOptions) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(options.headers.len() + 1);
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            let value = HeaderValue::from_str(value)?;
            headers.insert(name, value);
        }
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        Ok(headers)
    }
}

/// Builder for configuring a throwaway.cloud client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    timeout: Option<Duration>,
    base_url: String,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - No proxy
    /// - `danger_accept_invalid_certs = false`
    /// - No request timeout
    /// - [`BASE_URL`]
    pub fn new() -> Self {
        Self {
            proxy: None,
            danger_accept_invalid_certs: false,
            timeout: None,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080" or "socks5://127.0.0.1:1080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Bound each request to `timeout`, covering connect through body read.
    ///
    /// Without this a stalled connection blocks the lookup indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the API base URL.
    ///
    /// Useful for testing or for talking to a mirror of the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the client. Performs no network I/O.
    ///
    /// # Examples
    /// ```no_run
    /// # use std::time::Duration;
    /// # use throwaway_lookup::Client;
    /// # fn main() -> Result<(), throwaway_lookup::Error> {
    /// let client = Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let base_url = Url::parse(&self.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::CannotBeBase(base_url));
        }

        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(self.danger_accept_invalid_certs);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build()?;

        Ok(Client {
            http,
            base_url,
            proxy: self.proxy,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
