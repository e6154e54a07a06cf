// src/crawl/mod.rs
// =============================================================================
// This module runs one crawl: fetch a page, then check every link on it.
//
// Features:
// - Only the supplied page is scanned (no recursion into linked pages)
// - At most `max_links` unique links are probed per page
// - At most `concurrency` probes are in flight at once
// - A dead page short-circuits into a single "START" record
//
// Submodules:
// - page: fetches the page and extracts candidate links
// - coordinator: runs the link checks concurrently
// =============================================================================

mod coordinator;
mod page;

pub use page::ExtractedPage;

use reqwest::Client;
use tracing::{info, warn};
use url::Url;

use crate::checker::ProbeTimeouts;
use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::report::CrawlResult;

/// A configured crawler.
///
/// Holds the pooled HTTP client and the limits for every crawl it runs.
/// `crawl` takes `&self` and keeps no state between calls, so one crawler can
/// scan several pages at the same time.
#[derive(Debug, Clone)]
pub struct Crawler {
    client: Client,
    config: CrawlConfig,
}

impl Crawler {
    pub fn new(config: CrawlConfig) -> Result<Self, CrawlError> {
        config.validate()?;

        // The User-Agent is set once here so the page fetch, every HEAD probe
        // and every GET retry identify themselves the same way.
        // Redirects use reqwest's default policy.
        let client = Client::builder().user_agent(&config.user_agent).build()?;

        Ok(Self { client, config })
    }

    fn probe_timeouts(&self) -> ProbeTimeouts {
        ProbeTimeouts {
            probe: self.config.probe_timeout,
            retry: self.config.retry_timeout,
        }
    }

    /// Crawls one page and reports its broken links.
    ///
    /// Always returns a well-formed result. If the page itself cannot be
    /// fetched the result holds a single record with `foundOn = "START"`.
    pub async fn crawl(&self, page_url: &Url) -> CrawlResult {
        info!(page = %page_url, "crawl started");

        let page = match self.extract_links(page_url).await {
            Ok(page) => page,
            Err(failure) => {
                warn!(page = %page_url, "{}", failure);
                return CrawlResult::page_unreachable(page_url.as_str(), failure.status());
            }
        };

        let broken_links = self
            .check_all(page.candidate_links, page_url.as_str())
            .await;

        info!(
            page = %page_url,
            scanned = page.unique_count,
            broken = broken_links.len(),
            "crawl finished"
        );

        CrawlResult {
            broken_links,
            scanned_count: page.unique_count,
        }
    }
}
