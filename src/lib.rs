//! # throwaway.cloud Lookup Client
//! Asynchronous wrapper around the [throwaway.cloud](https://throwaway.cloud/) disposable email detection API: hand it an email address or a domain and get back the API's verdict via [`lookup`] or a configured [`Client`].
//!
//! ## Audience and uses
//! For Rust services that want to screen sign-ups, contact forms, or imports for throwaway addresses without maintaining their own blocklist. One subject per call; the API decides what counts as disposable.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. No timeout is applied unless one is set with [`ClientBuilder::timeout`].
//!
//! ## Out of scope
//! No retries, rate limiting, caching, batching, or offline detection. Response fields other than `success` and `isDisposable` are passed through untouched in [`LookupResult`].
//!
//! ## Errors
//! An empty subject fails with [`Error::MissingSubject`] before any I/O. Transport failures surface as [`Error::Request`], non-2xx statuses as [`Error::Status`] (`API error: <status> <reason>`), and undecodable bodies as [`Error::Json`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Logging
//! Requests and failed statuses are recorded through the `log` facade at `debug`/`trace` level. Nothing is printed unless the application installs a logger.
//!
//! ## Example
//! ```no_run
//! use throwaway_lookup::{lookup, LookupOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), throwaway_lookup::Error> {
//!     let result = lookup("mailinator.com", &LookupOptions::default()).await?;
//!     if result.is_disposable() == Some(true) {
//!         println!("Rejected: disposable address");
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod models;

use std::sync::OnceLock;

pub use client::{BASE_URL, Client, ClientBuilder, USER_AGENT_VALUE as USER_AGENT};
pub use error::Error;
pub use models::{LookupOptions, LookupResult};

/// Result type alias for lookup operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Look up an email address or domain with the default client.
///
/// The default client is built on first use and shared by later calls, so
/// connections are reused. See [`Client::lookup`] for the error cases.
///
/// # Examples
/// ```no_run
/// # use throwaway_lookup::{lookup, LookupOptions};
/// # #[tokio::main]
/// # async fn main() -> Result<(), throwaway_lookup::Error> {
/// let options = LookupOptions::new().header("X-Request-Id", "42");
/// let result = lookup("user@example.com", &options).await?;
/// println!("{:?}", result.fields());
/// # Ok(())
/// # }
/// ```
pub async fn lookup(subject: &str, options: &LookupOptions) -> Result<LookupResult> {
    if subject.is_empty() {
        return Err(Error::MissingSubject);
    }
    default_client()?.lookup(subject, options).await
}

fn default_client() -> Result<&'static Client> {
    static DEFAULT: OnceLock<Client> = OnceLock::new();

    if let Some(client) = DEFAULT.get() {
        return Ok(client);
    }
    let client = Client::new()?;
    Ok(DEFAULT.get_or_init(|| client))
}
