// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Version scraping from the Bedrock Edition version history
//!
//! The index page is searched for version history tables, every detail page
//! linked from those tables is fetched, and the build tokens found on the
//! detail pages are collected into a sorted, duplicate-free list.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::{DetailFetchPolicy, ScrapeConfig};
use crate::error::ScrapeError;
use crate::fetch::{Fetch, HttpFetcher, read_document, read_document_lossy};
use crate::version::sort_versions;
use crate::walk::{find_version_links, find_version_tables, find_version_tokens};

/// Crawler for released server versions
pub struct Scraper<F> {
    config: ScrapeConfig,
    fetcher: F,
}

impl<F: Fetch> Scraper<F> {
    #[must_use]
    pub fn new(config: ScrapeConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Collect the detail page URLs linked from the index page
    ///
    /// URLs appear in document order and are not deduplicated.
    ///
    /// # Errors
    /// Returns error if the index page cannot be fetched or parsed
    pub fn candidate_urls(&self) -> Result<Vec<String>, ScrapeError> {
        let index_url = self.config.index_url();
        let body = self.fetcher.fetch(&index_url)?;
        // Only a failed read is fatal here; stray bytes in the index are replaced.
        let document = read_document_lossy(body).map_err(|source| ScrapeError::Parse {
            url: index_url.clone(),
            source,
        })?;

        let tables = find_version_tables(&document, &self.config.table_marker);
        debug!("Found {} version history tables", tables.len());

        let mut urls = Vec::new();
        for table in tables {
            urls.extend(find_version_links(table, &self.config));
        }

        debug!("Found {} candidate detail pages", urls.len());
        Ok(urls)
    }

    /// Scrape all released versions, sorted ascending
    ///
    /// # Errors
    /// Returns [`ScrapeError::Fetch`] or [`ScrapeError::Parse`] if the index
    /// page fails, [`ScrapeError::Fetch`] if a detail page cannot be fetched
    /// under [`DetailFetchPolicy::Abort`], and [`ScrapeError::NoVersionsFound`]
    /// if no version token was found.
    pub fn get_versions(&self) -> Result<Vec<String>, ScrapeError> {
        let mut found = HashSet::new();

        for url in self.candidate_urls()? {
            if let Some(version) = self.config.link_version(&url) {
                debug!("Fetching detail page for {version}");
            }

            let body = match self.fetcher.fetch(&url) {
                Ok(body) => body,
                Err(e) => match self.config.detail_fetch_policy {
                    DetailFetchPolicy::Abort => return Err(e.into()),
                    DetailFetchPolicy::Skip => {
                        warn!("Skipping {url}: {e}");
                        continue;
                    }
                },
            };

            // The body is dropped at the end of this iteration.
            match read_document(body) {
                Ok(document) => {
                    let matches = find_version_tokens(&document, &self.config, &mut found);
                    debug!("Found {matches} version tokens on {url}");
                }
                Err(e) => warn!("Skipping unparsable page {url}: {e}"),
            }
        }

        let mut versions: Vec<String> = found.into_iter().collect();
        if versions.is_empty() {
            return Err(ScrapeError::NoVersionsFound);
        }

        sort_versions(&mut versions);
        Ok(versions)
    }
}

/// Scrape released versions from the public wiki with default settings
///
/// # Errors
/// Returns error if the scrape fails or finds no versions
pub fn get_versions() -> Result<Vec<String>, ScrapeError> {
    Scraper::new(ScrapeConfig::default(), HttpFetcher::new()).get_versions()
}
