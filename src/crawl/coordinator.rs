// src/crawl/coordinator.rs
// =============================================================================
// Runs the link checks for one page concurrently.
//
// Each link becomes one future; `buffer_unordered(concurrency)` keeps at most
// `concurrency` of them running and starts the next one as soon as a slot
// frees up. The limit belongs to this call only, so two crawls never share a
// budget.
//
// Results arrive in completion order, not link order. `collect` waits until
// every check has finished, so callers only ever see the complete list.
// =============================================================================

use futures::stream::{self, StreamExt};

use super::Crawler;
use crate::checker::check_link;
use crate::report::BrokenLinkRecord;

impl Crawler {
    /// Checks every link found on `found_on` and returns the broken ones.
    ///
    /// A failing link never stops its siblings: `check_link` cannot fail, it
    /// only produces a record.
    pub async fn check_all(&self, links: Vec<String>, found_on: &str) -> Vec<BrokenLinkRecord> {
        let timeouts = self.probe_timeouts();
        let client = &self.client;

        let checks = links.into_iter().map(move |target| async move {
            check_link(client, timeouts, &target, found_on).await
        });

        stream::iter(checks)
            .buffer_unordered(self.config.concurrency)
            .filter_map(|record| async move { record })
            .collect()
            .await
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why `move |target| async move { ... }`?
//    - The outer closure copies `client` (a reference), `timeouts` and
//      `found_on` into itself
//    - The inner async block takes ownership of `target`, so each future owns
//      the URL it checks
//    - Nothing is cloned per link except the URL string we already own
//
// 2. Why no tokio::spawn?
//    - buffer_unordered polls all in-flight futures on the current task
//    - The futures can borrow `self` because they never outlive this call
//    - Spawned tasks would need 'static data (Arc, clones) for no gain here
//
// 3. Why filter_map?
//    - check_link returns Option<BrokenLinkRecord>; healthy links are None
//    - filter_map drops the Nones so we collect only broken links
// -----------------------------------------------------------------------------
