// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Published version list format
//!
//! A scrape result is published as a JSON object holding the generation time
//! and the sorted versions. This module writes that object and reads back a
//! previously published copy.

use std::io::{Read, Write};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::error::PublishedError;
use crate::fetch::Fetch;

/// Version list with the time it was generated
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionReport {
    /// Generation time in UTC
    pub last_updated: DateTime<Utc>,
    /// Versions sorted ascending
    pub versions: Vec<String>,
}

impl VersionReport {
    /// Create a report stamped with the current time
    #[must_use]
    pub fn new(versions: Vec<String>) -> Self {
        Self {
            last_updated: Utc::now(),
            versions,
        }
    }

    /// Write the report as JSON indented with tabs
    ///
    /// # Errors
    /// Returns error if serialization or the underlying write fails
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        let mut serializer =
            serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"\t"));
        self.serialize(&mut serializer)
    }
}

/// A previously published version list
///
/// The timestamp is kept as text since only the versions are used.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublishedList {
    #[serde(default)]
    pub last_updated: Option<String>,
    pub versions: Vec<String>,
}

/// Fetch and decode a published version list
///
/// # Errors
/// Returns error if the list cannot be fetched, read or decoded
pub fn fetch_published<F: Fetch>(
    fetcher: &F,
    url: &str,
) -> Result<PublishedList, PublishedError> {
    let mut body = fetcher.fetch(url)?;
    let mut bytes = Vec::new();
    body.read_to_end(&mut bytes)?;

    let list: PublishedList = serde_json::from_slice(&bytes)?;
    debug!(
        "Published list has {} versions (last updated: {})",
        list.versions.len(),
        list.last_updated.as_deref().unwrap_or("unknown")
    );

    Ok(list)
}
