// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Error types for fetching, parsing and scraping

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// A URL could not be requested
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: attohttpc::Error,
    },
}

/// A fetched body could not be turned into a document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read body: {0}")]
    Read(#[from] io::Error),

    #[error("body is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// Failure of a whole version scrape
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to parse {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: ParseError,
    },

    #[error("failed to find released bedrock versions")]
    NoVersionsFound,
}

/// Failure to load a published version list
#[derive(Debug, Error)]
pub enum PublishedError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to read published list: {0}")]
    Read(#[from] io::Error),

    #[error("invalid published list: {0}")]
    Json(#[from] serde_json::Error),
}
