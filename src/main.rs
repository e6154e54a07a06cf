// src/main.rs
// =============================================================================
// This is the entry point of the CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr)
// 3. Crawl the requested page(s) with the library's Crawler
// 4. Print the report as a table or JSON
// 5. Exit with proper code (0 = no broken links, 1 = broken links, 2 = error)
// =============================================================================

mod cli;
mod logging;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use url::Url;

use cli::{Cli, Commands};
use dead_link_sentinel::{BrokenLinkRecord, CrawlResult, Crawler, SiteStatus};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = no broken links
//   Ok(1) = broken links found
//   Err = the check could not run (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Page {
            page_url,
            json,
            crawl,
        } => {
            let crawler = Crawler::new(crawl.to_config())?;
            handle_page_scan(&crawler, &page_url, json).await
        }
        Commands::Batch {
            page_urls,
            json,
            crawl,
        } => {
            let crawler = Crawler::new(crawl.to_config())?;
            handle_batch_scan(&crawler, &page_urls, json).await
        }
    }
}

fn parse_page_url(page_url: &str) -> Result<Url> {
    let url = Url::parse(page_url).with_context(|| format!("Invalid URL '{}'", page_url))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!("Only http and https URLs can be scanned: {}", page_url));
    }
    Ok(url)
}

// Handles the 'page' subcommand
async fn handle_page_scan(crawler: &Crawler, page_url: &str, json: bool) -> Result<i32> {
    let url = parse_page_url(page_url)?;

    if !json {
        println!("🔍 Scanning page: {}", url);
    }

    let result = crawler.crawl(&url).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }

    Ok(exit_code(result.has_broken_links()))
}

// One entry per site in `batch` JSON output
#[derive(Debug, Serialize)]
struct SiteReport {
    url: String,
    status: SiteStatus,
    result: CrawlResult,
}

// Handles the 'batch' subcommand
//
// Pages are crawled one after another; each crawl still checks its own links
// concurrently. Invalid URLs are rejected before anything is fetched.
async fn handle_batch_scan(crawler: &Crawler, page_urls: &[String], json: bool) -> Result<i32> {
    let urls = page_urls
        .iter()
        .map(|page_url| parse_page_url(page_url))
        .collect::<Result<Vec<_>>>()?;

    let mut reports = Vec::with_capacity(urls.len());
    for url in urls {
        if !json {
            println!("🔍 Checking {}...", url);
        }
        let result = crawler.crawl(&url).await;
        reports.push(SiteReport {
            url: url.to_string(),
            status: result.site_status(),
            result,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_batch_summary(&reports);
    }

    let any_broken = reports.iter().any(|r| r.result.has_broken_links());
    Ok(exit_code(any_broken))
}

fn exit_code(has_broken_links: bool) -> i32 {
    if has_broken_links {
        1
    } else {
        0
    }
}

// Prints the broken links as a human-readable table
fn print_report(result: &CrawlResult) {
    println!();

    if result.broken_links.is_empty() {
        println!("✅ No broken links found");
    } else {
        println!("{:<60} {:<8} {:<40}", "TARGET", "STATUS", "FOUND ON");
        println!("{}", "=".repeat(108));

        for link in &result.broken_links {
            println!(
                "{:<60} {:<8} {:<40}",
                truncate(&link.target, 57),
                format_status(link),
                truncate(&link.found_on, 40)
            );
        }
    }

    println!();
    println!("📊 Summary:");
    println!("   📋 Scanned: {}", result.scanned_count);
    println!("   ❌ Broken: {}", result.broken_links.len());
}

fn print_batch_summary(reports: &[SiteReport]) {
    println!();
    println!("{:<60} {:<8} {:<8} {:<8}", "PAGE", "STATUS", "SCANNED", "BROKEN");
    println!("{}", "=".repeat(87));

    for report in reports {
        let status = match report.status {
            SiteStatus::Idle => "✅ idle",
            SiteStatus::Error => "❌ error",
        };
        println!(
            "{:<60} {:<8} {:<8} {:<8}",
            truncate(&report.url, 57),
            status,
            report.result.scanned_count,
            report.result.broken_links.len()
        );
    }
}

fn format_status(link: &BrokenLinkRecord) -> String {
    if link.is_transport_failure() {
        "⏱️  0".to_string()
    } else {
        link.status.to_string()
    }
}

// Truncates on a char boundary so multi-byte URLs don't panic
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_url() {
        assert!(parse_page_url("https://example.com").is_ok());
        assert!(parse_page_url("not a url").is_err());
        assert!(parse_page_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(exit_code(false), 0);
        assert_eq!(exit_code(true), 1);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn test_site_report_json_shape() {
        let report = SiteReport {
            url: "https://example.com/".to_string(),
            status: SiteStatus::Error,
            result: CrawlResult::page_unreachable("https://example.com/", 404),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["result"]["scannedCount"], 1);
        assert_eq!(json["result"]["brokenLinks"][0]["foundOn"], "START");
    }
}
