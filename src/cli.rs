// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes. The crawl tunables live in `CrawlArgs` and are
// flattened into both subcommands so `page` and `batch` accept the same flags.
// =============================================================================

use std::time::Duration;

use clap::builder::TypedValueParser;
use clap::{Args, Parser, Subcommand};
use dead_link_sentinel::config::{
    CrawlConfig, DEFAULT_CONCURRENCY, DEFAULT_MAX_LINKS, DEFAULT_USER_AGENT,
};

#[derive(Parser, Debug)]
#[command(
    name = "dead-link-sentinel",
    version,
    about = "Checks every outbound link on a web page and reports the broken ones",
    long_about = "dead-link-sentinel fetches a page, extracts its links and probes each one \
                  (HEAD first, GET when HEAD is refused). Exit code 0 means no broken links, \
                  1 means broken links were found, 2 means the check itself failed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logs (per-link results) on stderr
    ///
    /// RUST_LOG overrides this when set.
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check all links on a single page
    ///
    /// Example: dead-link-sentinel page https://example.com
    Page {
        /// Page URL to scan (e.g., https://example.com)
        page_url: String,

        /// Output the report as JSON instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        crawl: CrawlArgs,
    },

    /// Check several pages one after another
    ///
    /// Example: dead-link-sentinel batch https://a.com https://b.com --json
    Batch {
        /// Page URLs to scan
        #[arg(required = true, num_args = 1..)]
        page_urls: Vec<String>,

        /// Output the reports as JSON instead of a summary
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        crawl: CrawlArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct CrawlArgs {
    /// Maximum number of links checked at the same time
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY,
          value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    pub concurrency: usize,

    /// Maximum number of unique links probed per page
    #[arg(long, default_value_t = DEFAULT_MAX_LINKS,
          value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    pub max_links: usize,

    /// User-Agent sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Timeout in seconds for fetching the scanned page
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_timeout: u64,
}

impl CrawlArgs {
    // Probe and retry timeouts are part of the checking policy and stay at
    // their defaults.
    pub fn to_config(&self) -> CrawlConfig {
        CrawlConfig {
            user_agent: self.user_agent.clone(),
            concurrency: self.concurrency,
            max_links: self.max_links,
            page_timeout: Duration::from_secs(self.page_timeout),
            ..CrawlConfig::default()
        }
    }
}
