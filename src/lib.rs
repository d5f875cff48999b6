// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Bedrock Server Versions Library
//!
//! This library discovers released Minecraft Bedrock Edition server versions by
//! crawling the wiki's version history, and provides the version ordering and
//! the published list format used by the `bedrock-versions` CLI.

pub mod config;
pub mod error;
pub mod fetch;
pub mod report;
pub mod scrape;
pub mod version;
pub mod walk;

// Re-export commonly used items at the crate root for convenience
pub use config::{DEFAULT_PUBLISHED_URL, DetailFetchPolicy, ScrapeConfig, WIKI_ORIGIN};
pub use error::{FetchError, ParseError, PublishedError, ScrapeError};
pub use fetch::{Fetch, HttpFetcher, read_document, read_document_lossy};
pub use report::{PublishedList, VersionReport, fetch_published};
pub use scrape::{Scraper, get_versions};
pub use version::{compare_versions, sort_versions, version_less};
