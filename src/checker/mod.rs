// src/checker/mod.rs
// =============================================================================
// This module contains the per-link logic.
//
// Submodules:
// - resolve: Turns href values into absolute URLs
// - html: Extracts links from an HTML page
// - http: Decides whether one link is broken (HEAD, then GET on 403/405)
//
// Nothing here knows about concurrency; crawl::coordinator runs these
// checks in parallel.
// =============================================================================

mod html;
mod http;
mod resolve;

pub use html::extract_html_links;
pub use http::{
    check_link, classify_probe, classify_retry, describe_transport_error, LinkVerdict,
    ProbeTimeouts, ProbeVerdict,
};
pub use resolve::{is_checkable, resolve_reference};
