// src/crawl/page.rs
// =============================================================================
// Fetches the page being scanned and turns it into the list of links to check.
//
// How it works:
// 1. GET the page (with the crawler's User-Agent)
// 2. Treat HTTP >= 400 or any transport error as a FetchFailure
// 3. Extract http/https links from the HTML (checker::extract_html_links)
// 4. Drop duplicates, keeping the first occurrence
// 5. Keep only the first `max_links` of them for probing
//
// `unique_count` is counted before step 5, so a page with 80 unique links
// reports 80 scanned links even though only 50 are probed.
// =============================================================================

use std::collections::HashSet;

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::Crawler;
use crate::checker::extract_html_links;
use crate::error::FetchFailure;

/// A fetched page and the links that will be probed
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    pub html: String,
    /// Unique links in extraction order, capped at `max_links`
    pub candidate_links: Vec<String>,
    /// Number of unique links before the cap
    pub unique_count: usize,
}

impl Crawler {
    /// Fetches `page_url` and extracts the links to check.
    ///
    /// There is no retry: a failed page fetch ends the crawl.
    pub async fn extract_links(&self, page_url: &Url) -> Result<ExtractedPage, FetchFailure> {
        let html = fetch_page(&self.client, page_url, self.config.page_timeout).await?;

        // Parsing happens in a plain function so the (non-Send) DOM never
        // lives across an await point
        let links = extract_html_links(&html, page_url);
        let unique_links = dedupe_links(links);
        let unique_count = unique_links.len();
        let candidate_links = cap_links(unique_links, self.config.max_links);

        debug!(
            page = %page_url,
            unique = unique_count,
            probing = candidate_links.len(),
            "links extracted"
        );

        Ok(ExtractedPage {
            html,
            candidate_links,
            unique_count,
        })
    }
}

// Fetches a web page and returns its HTML content
async fn fetch_page(
    client: &Client,
    page_url: &Url,
    timeout: std::time::Duration,
) -> Result<String, FetchFailure> {
    let response = client
        .get(page_url.as_str())
        .timeout(timeout)
        .send()
        .await
        .map_err(FetchFailure::Transport)?;

    let status = response.status().as_u16();
    if status >= 400 {
        return Err(FetchFailure::Status(status));
    }

    // A body that breaks off halfway is a transport failure too
    response.text().await.map_err(FetchFailure::Transport)
}

// Removes duplicate links by exact string value, keeping first occurrences
fn dedupe_links(links: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(link.clone()))
        .collect()
}

fn cap_links(mut links: Vec<String>, max_links: usize) -> Vec<String> {
    links.truncate(max_links);
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CrawlConfig;

    #[test]
    fn test_dedupe_keeps_first_occurrence_order() {
        let links = vec![
            "https://a.com/".to_string(),
            "https://b.com/".to_string(),
            "https://a.com/".to_string(),
            "https://c.com/".to_string(),
            "https://b.com/".to_string(),
        ];
        assert_eq!(
            dedupe_links(links),
            vec!["https://a.com/", "https://b.com/", "https://c.com/"]
        );
    }

    #[test]
    fn test_dedupe_is_exact_string_match() {
        let links = vec![
            "https://a.com/page".to_string(),
            "https://a.com/page#top".to_string(),
        ];
        assert_eq!(dedupe_links(links).len(), 2);
    }

    #[test]
    fn test_cap_links() {
        let links: Vec<String> = (0..60).map(|i| format!("https://a.com/{}", i)).collect();
        let capped = cap_links(links, 50);
        assert_eq!(capped.len(), 50);
        assert_eq!(capped[49], "https://a.com/49");

        let short = cap_links(vec!["https://a.com/".to_string()], 50);
        assert_eq!(short.len(), 1);
    }

    #[tokio::test]
    async fn test_extract_links_counts_before_cap() {
        let mut server = mockito::Server::new_async().await;
        let html: String = (0..8)
            .map(|i| format!(r#"<a href="/p{0}">{0}</a><a href="/p{0}">again</a>"#, i))
            .collect();
        let _page = server
            .mock("GET", "/")
            .with_status(200)
            .with_body(html)
            .create_async()
            .await;

        let crawler = Crawler::new(CrawlConfig {
            max_links: 3,
            ..CrawlConfig::default()
        })
        .unwrap();
        let page_url = Url::parse(&format!("{}/", server.url())).unwrap();
        let page = crawler.extract_links(&page_url).await.unwrap();

        assert_eq!(page.unique_count, 8);
        assert_eq!(
            page.candidate_links,
            vec![
                format!("{}/p0", server.url()),
                format!("{}/p1", server.url()),
                format!("{}/p2", server.url()),
            ]
        );
        assert!(page.html.contains("/p7"));
    }

    #[tokio::test]
    async fn test_extract_links_http_failure() {
        let mut server = mockito::Server::new_async().await;
        let _page = server
            .mock("GET", "/")
            .with_status(503)
            .create_async()
            .await;

        let crawler = Crawler::new(CrawlConfig::default()).unwrap();
        let page_url = Url::parse(&format!("{}/", server.url())).unwrap();
        let failure = crawler.extract_links(&page_url).await.unwrap_err();

        assert!(matches!(failure, FetchFailure::Status(503)));
        assert_eq!(failure.status(), 503);
    }
}
