//! HTTP retrieval.
//!
//! [`Fetch`] is the seam between the pipeline and the network: the pipeline
//! only ever sees a [`RawPage`], so tests can substitute an in-memory source.
//! [`HttpFetcher`] performs one plain GET per call, with no retry, no cache,
//! and the transport's default timeout.

use crate::models::RawPage;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, instrument, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Something that can turn a URL into a [`RawPage`].
///
/// Implementations never fail: a missing body on the returned page is the
/// failure signal, and the caller must check for it.
pub trait Fetch {
    /// Perform one GET.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL to retrieve
    ///
    /// # Returns
    ///
    /// A [`RawPage`] carrying the body on a 2xx response. On any other
    /// status the body is `None` and `status` holds the observed code; on a
    /// transport failure `status` is
    /// [`TRANSPORT_FAILURE_STATUS`](crate::error::TRANSPORT_FAILURE_STATUS).
    async fn fetch(&self, url: &str) -> RawPage;
}

/// [`Fetch`] over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> RawPage {
        let t0 = Instant::now();
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Request failed before a response arrived");
                return RawPage::transport_failure(url);
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Server returned a non-success status");
            return RawPage {
                url: url.to_string(),
                status: status.as_u16(),
                body: None,
            };
        }

        match response.bytes().await {
            Ok(bytes) => {
                debug!(
                    status = status.as_u16(),
                    bytes = bytes.len(),
                    elapsed = ?t0.elapsed(),
                    "Fetched page"
                );
                RawPage {
                    url: url.to_string(),
                    status: status.as_u16(),
                    body: Some(bytes.to_vec()),
                }
            }
            Err(e) => {
                warn!(error = %e, "Response body could not be read");
                RawPage::transport_failure(url)
            }
        }
    }
}
