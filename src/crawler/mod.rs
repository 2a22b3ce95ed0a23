// src/crawler/mod.rs
// =============================================================================
// The concurrent crawling engine.
//
// Submodules:
// - extract: pure link extraction and same-host resolution
// - fetch: one bounded-timeout HTTP GET per job
// - job: a single fetch-and-extract unit, raced against the job timeout
// - worker: long-lived execution units that claim one job at a time
// - dispatcher: fixed-size worker pool + job intake queue
// - batch: the public facade that fans a batch of URLs out and back in
// =============================================================================

mod batch;
mod dispatcher;
mod extract;
mod fetch;
mod job;
mod worker;

pub use batch::Crawler;

use std::time::Duration;

/// Tuning knobs for the crawl engine, passed into [`Crawler::new`] and from
/// there to the dispatcher and fetcher.
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Number of parallel workers; bounds concurrent fetches.
    pub workers: usize,
    /// Wall-clock deadline for a whole job (fetch + extract).
    pub job_timeout: Duration,
    /// HTTP client timeout, nested inside the job timeout.
    pub http_timeout: Duration,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            workers: 3,
            job_timeout: Duration::from_secs(60),
            http_timeout: Duration::from_secs(30),
        }
    }
}
