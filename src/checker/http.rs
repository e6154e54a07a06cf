// src/checker/http.rs
// =============================================================================
// This module checks if a single URL is alive by making HTTP requests.
//
// Key functionality:
// - Makes an HTTP HEAD request first (lightweight, no body download)
// - Falls back to GET when the server rejects HEAD with 403 or 405
//   (plenty of servers answer HEAD with those even though GET works)
// - Any failure to get a response at all (timeout, DNS, refused connection,
//   TLS) is reported as status 0
//
// The decision is a two-step state machine:
//
//   HEAD ──< 400──────────────> Healthy
//     │──403 / 405──> GET ──< 400──> Healthy
//     │                 └──>= 400──> Broken(status)
//     └──other >= 400──────────> Broken(status)
//
// classify_probe and classify_retry hold the whole status-code policy, so it
// can be tested without a network.
// =============================================================================

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::report::{BrokenLinkRecord, TRANSPORT_FAILURE};

/// Final answer for one link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkVerdict {
    Healthy,
    /// HTTP status >= 400, or 0 for a transport failure
    Broken(u16),
}

/// What the HEAD probe told us
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeVerdict {
    Settled(LinkVerdict),
    /// The server refused the HEAD probe; ask again with GET
    RetryWithGet,
}

/// Timeouts for the two attempts
#[derive(Debug, Clone, Copy)]
pub struct ProbeTimeouts {
    pub probe: Duration,
    pub retry: Duration,
}

// Step 1: interpret the HEAD status
pub fn classify_probe(status: u16) -> ProbeVerdict {
    match status {
        s if s < 400 => ProbeVerdict::Settled(LinkVerdict::Healthy),
        403 | 405 => ProbeVerdict::RetryWithGet,
        s => ProbeVerdict::Settled(LinkVerdict::Broken(s)),
    }
}

// Step 2: interpret the GET status. The retry gets the final word.
pub fn classify_retry(status: u16) -> LinkVerdict {
    if status >= 400 {
        LinkVerdict::Broken(status)
    } else {
        LinkVerdict::Healthy
    }
}

impl LinkVerdict {
    fn into_record(self, target: &str, found_on: &str) -> Option<BrokenLinkRecord> {
        match self {
            LinkVerdict::Healthy => None,
            LinkVerdict::Broken(status) => Some(BrokenLinkRecord::new(found_on, target, status)),
        }
    }
}

// Checks a single link
//
// Parameters:
//   client: shared reqwest client (carries the User-Agent header)
//   timeouts: per-attempt timeouts (5s HEAD, 6s GET by default)
//   target: the URL to check
//   found_on: the page the link was found on
//
// Returns: Some(record) if the link is broken, None if it is healthy.
// Never returns an error: a link we cannot reach is a broken link.
pub async fn check_link(
    client: &Client,
    timeouts: ProbeTimeouts,
    target: &str,
    found_on: &str,
) -> Option<BrokenLinkRecord> {
    let verdict = match send(client.head(target), timeouts.probe, target).await {
        Err(verdict) => verdict,
        Ok(status) => match classify_probe(status.as_u16()) {
            ProbeVerdict::Settled(verdict) => verdict,
            ProbeVerdict::RetryWithGet => {
                debug!(link = target, status = status.as_u16(), "HEAD rejected, retrying with GET");
                match send(client.get(target), timeouts.retry, target).await {
                    Ok(status) => classify_retry(status.as_u16()),
                    Err(verdict) => verdict,
                }
            }
        },
    };

    if let LinkVerdict::Broken(status) = verdict {
        debug!(link = target, found_on, status, "broken link");
    }

    verdict.into_record(target, found_on)
}

// Sends one attempt and returns its status, or the transport-failure verdict
async fn send(
    request: reqwest::RequestBuilder,
    timeout: Duration,
    target: &str,
) -> Result<StatusCode, LinkVerdict> {
    match request.timeout(timeout).send().await {
        Ok(response) => Ok(response.status()),
        Err(e) => {
            warn!(link = target, reason = describe_transport_error(&e), "link unreachable: {}", e);
            Err(LinkVerdict::Broken(TRANSPORT_FAILURE))
        }
    }
}

// Categorizes reqwest errors for log messages
//
// The recorded status is 0 whatever the cause; this only makes the logs
// readable.
pub fn describe_transport_error(error: &reqwest::Error) -> &'static str {
    let error_string = error.to_string().to_lowercase();

    if error.is_timeout() {
        "timeout"
    } else if error.is_redirect() {
        "too many redirects"
    } else if error.is_connect() {
        if error_string.contains("dns") {
            "dns error"
        } else {
            "connection failed"
        }
    } else if error_string.contains("certificate") || error_string.contains("tls") {
        "tls error"
    } else {
        "request failed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeouts() -> ProbeTimeouts {
        ProbeTimeouts {
            probe: Duration::from_secs(5),
            retry: Duration::from_secs(6),
        }
    }

    #[test]
    fn test_classify_probe() {
        assert_eq!(classify_probe(200), ProbeVerdict::Settled(LinkVerdict::Healthy));
        assert_eq!(classify_probe(301), ProbeVerdict::Settled(LinkVerdict::Healthy));
        assert_eq!(classify_probe(403), ProbeVerdict::RetryWithGet);
        assert_eq!(classify_probe(405), ProbeVerdict::RetryWithGet);
        assert_eq!(
            classify_probe(404),
            ProbeVerdict::Settled(LinkVerdict::Broken(404))
        );
        assert_eq!(
            classify_probe(401),
            ProbeVerdict::Settled(LinkVerdict::Broken(401))
        );
        assert_eq!(
            classify_probe(500),
            ProbeVerdict::Settled(LinkVerdict::Broken(500))
        );
    }

    #[test]
    fn test_classify_retry() {
        assert_eq!(classify_retry(200), LinkVerdict::Healthy);
        assert_eq!(classify_retry(399), LinkVerdict::Healthy);
        assert_eq!(classify_retry(403), LinkVerdict::Broken(403));
        assert_eq!(classify_retry(404), LinkVerdict::Broken(404));
    }

    #[tokio::test]
    async fn test_healthy_link() {
        let mut server = mockito::Server::new_async().await;
        let _head = server
            .mock("HEAD", "/ok")
            .with_status(200)
            .create_async()
            .await;

        let target = format!("{}/ok", server.url());
        let record = check_link(&Client::new(), timeouts(), &target, "https://page/").await;
        assert_eq!(record, None);
    }

    #[tokio::test]
    async fn test_not_found_is_reported_without_retry() {
        let mut server = mockito::Server::new_async().await;
        let _head = server
            .mock("HEAD", "/gone")
            .with_status(404)
            .create_async()
            .await;
        let get = server
            .mock("GET", "/gone")
            .with_status(200)
            .expect(0)
            .create_async()
            .await;

        let target = format!("{}/gone", server.url());
        let record = check_link(&Client::new(), timeouts(), &target, "https://page/").await;
        assert_eq!(
            record,
            Some(BrokenLinkRecord::new("https://page/", target.clone(), 404))
        );
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_head_rejected_get_ok() {
        let mut server = mockito::Server::new_async().await;
        let _head = server
            .mock("HEAD", "/guarded")
            .with_status(403)
            .create_async()
            .await;
        let get = server
            .mock("GET", "/guarded")
            .with_status(200)
            .create_async()
            .await;

        let target = format!("{}/guarded", server.url());
        let record = check_link(&Client::new(), timeouts(), &target, "https://page/").await;
        assert_eq!(record, None);
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_head_not_allowed_get_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _head = server
            .mock("HEAD", "/missing")
            .with_status(405)
            .create_async()
            .await;
        let _get = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let target = format!("{}/missing", server.url());
        let record = check_link(&Client::new(), timeouts(), &target, "https://page/").await;
        assert_eq!(record.map(|r| r.status), Some(404));
    }

    #[tokio::test]
    async fn test_connection_refused_is_status_zero() {
        // Bind then drop to get a local port nothing listens on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let target = format!("http://127.0.0.1:{}/", port);
        let record = check_link(&Client::new(), timeouts(), &target, "https://page/").await;
        assert_eq!(
            record,
            Some(BrokenLinkRecord::new("https://page/", target.clone(), 0))
        );
    }
}
