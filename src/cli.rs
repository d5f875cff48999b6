// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
// CLI argument definitions for bedrock-versions
//
// Separated from main.rs so that build.rs can include this file
// to generate the man page via clap_mangen.

use clap::Parser;

/// CLI argument parser - bools required for clap flag parsing
#[derive(Parser, Debug)]
#[command(
    name = "bedrock-versions",
    version,
    about = "List released Minecraft Bedrock server versions"
)]
pub struct Cli {
    /// Print the versions of a published list instead of scraping
    #[arg(
        short = 'l',
        long = "list-published",
        value_name = "URL",
        num_args = 0..=1,
        default_missing_value = "https://raw.githubusercontent.com/loksonarius/bedrock-server-versions/main/versions.json"
    )]
    pub list_published: Option<String>,

    /// Wiki origin to scrape
    #[arg(long = "origin", value_name = "URL", conflicts_with = "list_published")]
    pub origin: Option<String>,

    /// Skip detail pages that fail to download instead of aborting
    #[arg(long = "skip-failed-pages", conflicts_with = "list_published")]
    pub skip_failed_pages: bool,

    /// Allow insecure TLS connections (skip certificate verification)
    #[arg(short = 'k', long = "insecure")]
    pub insecure: bool,

    /// Make the operation more talkative
    #[arg(short, long)]
    pub verbose: bool,
}
