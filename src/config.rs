// src/config.rs
// =============================================================================
// Tunables for one crawler.
//
// Every limit the crawl relies on lives here instead of in globals, so two
// crawlers with different settings can run side by side (and tests can shrink
// the timeouts).
// =============================================================================

use std::time::Duration;

use crate::error::CrawlError;

/// Client identifier sent with every request
pub const DEFAULT_USER_AGENT: &str = "DeadLinkSentinel/1.0";

/// Maximum number of link checks in flight at once
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Only the first 50 unique links on a page are probed
pub const DEFAULT_MAX_LINKS: usize = 50;

pub const DEFAULT_PAGE_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_RETRY_TIMEOUT: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Sent as the User-Agent header on the page fetch and every probe
    pub user_agent: String,
    /// Upper bound on simultaneous link checks
    pub concurrency: usize,
    /// How many unique links are actually probed
    pub max_links: usize,
    /// Timeout for fetching the page being scanned
    pub page_timeout: Duration,
    /// Timeout for the HEAD probe
    pub probe_timeout: Duration,
    /// Timeout for the GET retry after a 403/405 probe
    pub retry_timeout: Duration,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            max_links: DEFAULT_MAX_LINKS,
            page_timeout: DEFAULT_PAGE_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            retry_timeout: DEFAULT_RETRY_TIMEOUT,
        }
    }
}

impl CrawlConfig {
    /// Rejects settings the crawler cannot run with.
    ///
    /// A concurrency of zero would never start a single check.
    /// Zero timeouts are rejected for the same reason.
    pub fn validate(&self) -> Result<(), CrawlError> {
        if self.concurrency == 0 {
            return Err(CrawlError::InvalidConfig(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if self.max_links == 0 {
            return Err(CrawlError::InvalidConfig(
                "max_links must be at least 1".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(CrawlError::InvalidConfig(
                "user_agent must not be empty".to_string(),
            ));
        }

        // A zero timeout fails every request before it is sent
        for (name, timeout) in [
            ("page_timeout", self.page_timeout),
            ("probe_timeout", self.probe_timeout),
            ("retry_timeout", self.retry_timeout),
        ] {
            if timeout.is_zero() {
                return Err(CrawlError::InvalidConfig(format!(
                    "{} must be greater than zero",
                    name
                )));
            }
        }
        Ok(())
    }
}
