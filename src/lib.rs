// src/lib.rs
// =============================================================================
// Dead Link Sentinel: checks every outbound link on a single web page.
//
// Pipeline:
// 1. Fetch the page and extract its <a href> links (crawl::page)
// 2. Probe each link with HEAD, falling back to GET on 403/405 (checker::http)
// 3. Run the probes with a bounded concurrency limit (crawl::coordinator)
// 4. Return a CrawlResult listing the broken links (report)
//
// Callers that store reports or send emails use `Crawler::crawl` (or the
// `crawl` shortcut below) and never see a network error: failures become
// BrokenLinkRecords instead.
// =============================================================================

pub mod checker;
pub mod config;
pub mod crawl;
pub mod error;
pub mod report;

pub use config::CrawlConfig;
pub use crawl::{Crawler, ExtractedPage};
pub use error::{CrawlError, FetchFailure};
pub use report::{BrokenLinkRecord, CrawlResult, SiteStatus, START_SENTINEL, TRANSPORT_FAILURE};

use url::Url;

/// Crawls `page_url` with the default configuration.
///
/// Only building the HTTP client can fail; every network problem during the
/// crawl itself is reported inside the returned `CrawlResult`.
pub async fn crawl(page_url: &Url) -> Result<CrawlResult, CrawlError> {
    let crawler = Crawler::new(CrawlConfig::default())?;
    Ok(crawler.crawl(page_url).await)
}
