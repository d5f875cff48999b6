// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! bedrock-versions - Main Application
//!
//! Scrapes the released Minecraft Bedrock server versions and prints them as a
//! timestamped JSON list, or prints the versions of an already published list.

use std::error::Error;
use std::io::{self, Write};
use std::process::exit;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bedrock_versions::{
    DetailFetchPolicy, HttpFetcher, ScrapeConfig, Scraper, VersionReport, fetch_published,
};

mod cli;

use cli::Cli;

/// Install the stderr log subscriber
///
/// `--verbose` forces debug output; otherwise `RUST_LOG` applies, defaulting to warnings.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("bedrock_versions=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("bedrock_versions=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Main application entry point
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let fetcher = HttpFetcher::new().insecure(cli.insecure);

    let result = match cli.list_published {
        Some(url) => cmd_list_published(&fetcher, &url),
        None => cmd_scrape(fetcher, cli.origin, cli.skip_failed_pages),
    };

    // Handle errors by printing to stderr and exiting with non-zero status
    if let Err(e) = result {
        eprintln!("bedrock-versions: {e}");
        exit(1);
    }
}

/// Scrape the wiki and print the timestamped version list
fn cmd_scrape(
    fetcher: HttpFetcher,
    origin: Option<String>,
    skip_failed_pages: bool,
) -> Result<(), Box<dyn Error>> {
    let mut config = ScrapeConfig::default();
    if let Some(origin) = origin {
        config = config.with_origin(origin);
    }
    if skip_failed_pages {
        config = config.with_detail_fetch_policy(DetailFetchPolicy::Skip);
    }

    let versions = Scraper::new(config, fetcher).get_versions()?;
    let report = VersionReport::new(versions);

    // Nothing is printed until the whole list is serialized.
    let mut out = Vec::new();
    report.write_json(&mut out)?;
    out.push(b'\n');
    io::stdout().lock().write_all(&out)?;
    Ok(())
}

/// Print each version of a published list on its own line
fn cmd_list_published(fetcher: &HttpFetcher, url: &str) -> Result<(), Box<dyn Error>> {
    let list = fetch_published(fetcher, url)?;

    let mut stdout = io::stdout().lock();
    for version in list.versions {
        writeln!(stdout, "{version}")?;
    }
    Ok(())
}
