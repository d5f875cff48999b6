// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! HTTP fetching and document parsing
//!
//! Pages are fetched as streams. A stream is released as soon as it is
//! dropped, so callers that fetch in a loop hold at most one open body.

use std::io::Read;

use attohttpc::header::USER_AGENT;
use scraper::Html;
use tracing::debug;
use url::Url;

use crate::error::{FetchError, ParseError};

/// Source of page bodies
pub trait Fetch {
    /// Request `url` and return its body as a stream
    ///
    /// # Errors
    /// Returns [`FetchError`] if the URL is malformed or the request fails
    fn fetch(&self, url: &str) -> Result<Box<dyn Read>, FetchError>;
}

/// Blocking HTTP fetcher
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    insecure: bool,
}

impl HttpFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept invalid TLS certificates
    #[must_use]
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Box<dyn Read>, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        debug!("GET {parsed}");

        let response = attohttpc::get(parsed.as_str())
            .header(
                USER_AGENT,
                format!("bedrock-versions/{}", env!("CARGO_PKG_VERSION")),
            )
            .danger_accept_invalid_certs(self.insecure)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        // Any status is accepted; the body is passed on regardless.
        let (status, _headers, body) = response.split();
        if !status.is_success() {
            debug!("{url} returned status {status}");
        }

        Ok(Box::new(body))
    }
}

/// Drain a body stream and parse it as an HTML document
///
/// # Errors
/// Returns [`ParseError`] if the stream cannot be read or is not valid UTF-8
pub fn read_document(mut reader: impl Read) -> Result<Html, ParseError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)?;
    Ok(Html::parse_document(&text))
}

/// Drain a body stream and parse it, replacing invalid UTF-8
///
/// # Errors
/// Returns [`ParseError::Read`] if the stream cannot be read
pub fn read_document_lossy(mut reader: impl Read) -> Result<Html, ParseError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(Html::parse_document(&String::from_utf8_lossy(&bytes)))
}
