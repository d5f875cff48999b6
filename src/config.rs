// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Scrape configuration and URL building for the Bedrock wiki
//!
//! This module holds the wiki origin, the index page path and the two version
//! patterns used while crawling. Everything the scraper needs is carried by a
//! [`ScrapeConfig`] value passed to [`crate::Scraper::new`].

use regex::Regex;

/// Origin of the wiki hosting the Bedrock Edition version history
pub const WIKI_ORIGIN: &str = "https://minecraft.gamepedia.com";

/// Path of the index page listing the version history tables
pub const INDEX_PATH: &str = "/Bedrock_Edition_version_history";

/// Substring of a table's `data-description` marking it as a version history table
pub const TABLE_MARKER: &str = "version history";

/// Pattern for hrefs of per-version detail pages, ASCII digits only
pub const LINK_PATTERN: &str = r"/Bedrock_Edition_(?P<version>[0-9]+\.[0-9]+\.[0-9]+(\.[0-9]+)?)$";

/// Pattern for a full four-segment server build token, ASCII digits only
pub const TOKEN_PATTERN: &str = r"^[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+$";

/// Location of the previously published version list
pub const DEFAULT_PUBLISHED_URL: &str =
    "https://raw.githubusercontent.com/loksonarius/bedrock-server-versions/main/versions.json";

/// What to do when a detail page cannot be fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailFetchPolicy {
    /// Fail the whole scrape on the first detail page fetch error
    #[default]
    Abort,
    /// Log the failure and continue with the next detail page
    Skip,
}

/// Settings for one version scrape
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Origin prepended to the index path and to every harvested href
    pub origin: String,
    /// Path of the index page below `origin`
    pub index_path: String,
    /// Marker searched for in table `data-description` attributes
    pub table_marker: String,
    /// Pattern an href must match to be followed
    pub link_pattern: Regex,
    /// Pattern a trimmed text node must match to count as a version
    pub token_pattern: Regex,
    /// Handling of detail page fetch failures
    pub detail_fetch_policy: DetailFetchPolicy,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            origin: WIKI_ORIGIN.to_string(),
            index_path: INDEX_PATH.to_string(),
            table_marker: TABLE_MARKER.to_string(),
            link_pattern: Regex::new(LINK_PATTERN).expect("valid link pattern"),
            token_pattern: Regex::new(TOKEN_PATTERN).expect("valid token pattern"),
            detail_fetch_policy: DetailFetchPolicy::default(),
        }
    }
}

impl ScrapeConfig {
    /// Replace the wiki origin, dropping any trailing slash
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        let origin = origin.into();
        self.origin = origin.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_index_path(mut self, index_path: impl Into<String>) -> Self {
        self.index_path = index_path.into();
        self
    }

    #[must_use]
    pub fn with_detail_fetch_policy(mut self, policy: DetailFetchPolicy) -> Self {
        self.detail_fetch_policy = policy;
        self
    }

    /// Build the URL of the index page
    ///
    /// # Examples
    /// ```
    /// use bedrock_versions::ScrapeConfig;
    ///
    /// let config = ScrapeConfig::default();
    /// assert_eq!(
    ///     config.index_url(),
    ///     "https://minecraft.gamepedia.com/Bedrock_Edition_version_history"
    /// );
    /// ```
    #[must_use]
    pub fn index_url(&self) -> String {
        format!("{}{}", self.origin, self.index_path)
    }

    /// Build the absolute URL of a detail page from its href
    ///
    /// The href is appended to the origin as-is.
    #[must_use]
    pub fn detail_url(&self, href: &str) -> String {
        format!("{}{}", self.origin, href)
    }

    /// Check whether a string is exactly a build token
    ///
    /// No trimming is applied, so surrounding whitespace rejects the input.
    ///
    /// # Examples
    /// ```
    /// use bedrock_versions::ScrapeConfig;
    ///
    /// let config = ScrapeConfig::default();
    /// assert!(config.is_version_token("1.2.3.4"));
    /// assert!(!config.is_version_token("1.2.3"));
    /// assert!(!config.is_version_token("1.2.3.4 "));
    /// ```
    #[must_use]
    pub fn is_version_token(&self, text: &str) -> bool {
        self.token_pattern.is_match(text)
    }

    /// Extract the `version` capture from a detail page href
    ///
    /// Returns `None` when the href does not match the link pattern or the
    /// pattern has no `version` group.
    ///
    /// # Examples
    /// ```
    /// use bedrock_versions::ScrapeConfig;
    ///
    /// let config = ScrapeConfig::default();
    /// assert_eq!(config.link_version("/Bedrock_Edition_1.16.210"), Some("1.16.210"));
    /// assert_eq!(config.link_version("/Java_Edition_1.16.210"), None);
    /// ```
    #[must_use]
    pub fn link_version<'h>(&self, href: &'h str) -> Option<&'h str> {
        self.link_pattern
            .captures(href)
            .and_then(|caps| caps.name("version"))
            .map(|m| m.as_str())
    }
}
