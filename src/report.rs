// src/report.rs
// =============================================================================
// The crawl report handed back to callers.
//
// Field names serialize in camelCase (foundOn, scannedCount, ...) because
// that is the shape stored in the reports table and rendered in emails.
// =============================================================================

use serde::{Deserialize, Serialize};

/// `foundOn` value used when the scanned page itself is unreachable
pub const START_SENTINEL: &str = "START";

/// Status recorded when no HTTP response was received at all
pub const TRANSPORT_FAILURE: u16 = 0;

/// One link that failed its reachability check
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokenLinkRecord {
    /// Page the link was found on, or "START" for the scanned page itself
    pub found_on: String,
    /// The failing URL
    pub target: String,
    /// HTTP status >= 400, or 0 for a transport failure
    pub status: u16,
}

impl BrokenLinkRecord {
    pub fn new(found_on: impl Into<String>, target: impl Into<String>, status: u16) -> Self {
        Self {
            found_on: found_on.into(),
            target: target.into(),
            status,
        }
    }

    /// Record for a page that could not be fetched at all
    pub fn start(page_url: impl Into<String>, status: u16) -> Self {
        Self::new(START_SENTINEL, page_url, status)
    }

    pub fn is_transport_failure(&self) -> bool {
        self.status == TRANSPORT_FAILURE
    }
}

/// Result of crawling one page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    /// Unordered: checks finish in whatever order the network allows
    pub broken_links: Vec<BrokenLinkRecord>,
    /// Unique links found on the page, counted before the probing cap
    pub scanned_count: usize,
}

impl CrawlResult {
    /// Short-circuit result when the scanned page itself failed.
    ///
    /// An HTTP failure counts the page as one scanned link; a transport
    /// failure counts nothing.
    pub fn page_unreachable(page_url: impl Into<String>, status: u16) -> Self {
        let scanned_count = if status == TRANSPORT_FAILURE { 0 } else { 1 };
        Self {
            broken_links: vec![BrokenLinkRecord::start(page_url, status)],
            scanned_count,
        }
    }

    pub fn has_broken_links(&self) -> bool {
        !self.broken_links.is_empty()
    }

    pub fn site_status(&self) -> SiteStatus {
        if self.has_broken_links() {
            SiteStatus::Error
        } else {
            SiteStatus::Idle
        }
    }
}

/// Status a site is left in after a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    Idle,
    Error,
}
