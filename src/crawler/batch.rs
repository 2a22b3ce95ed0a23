// src/crawler/batch.rs
// =============================================================================
// The public crawler facade: fan one batch of URLs out as jobs, fan their
// results back in.
//
// Completion is tracked by counting done signals, one per job, not by result
// arrivals: a timed-out job never publishes a result, so waiting on the
// result channel alone could hang forever.
// =============================================================================

use anyhow::{bail, ensure, Context, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::dispatcher::Dispatcher;
use super::fetch::Fetcher;
use super::job::{Job, JobResult};
use super::CrawlerConfig;

pub struct Crawler {
    dispatcher: Dispatcher,
}

impl Crawler {
    // Builds the fetcher and starts the worker pool.
    pub fn new(config: CrawlerConfig) -> Result<Self> {
        ensure!(config.workers > 0, "worker count must be at least 1");
        let fetcher = Arc::new(Fetcher::new(config.http_timeout)?);
        Ok(Self {
            dispatcher: Dispatcher::new(&config, fetcher),
        })
    }

    // Crawls one batch of URLs and returns every link found across the whole
    // batch, in completion order, duplicates across jobs preserved.
    //
    // Returns the first job error encountered, discarding any links already
    // collected. Timed-out jobs contribute nothing and are not errors.
    pub async fn crawl(&self, urls: &[String]) -> Result<Vec<String>> {
        if urls.is_empty() {
            bail!("no URLs provided");
        }

        let (results_tx, mut results_rx) = mpsc::unbounded_channel::<JobResult>();
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<()>();

        for url in urls {
            self.dispatcher
                .submit(Job {
                    url: url.clone(),
                    results_tx: results_tx.clone(),
                    timeout_tx: None,
                    done_tx: done_tx.clone(),
                })
                .with_context(|| format!("submitting job for {url}"))?;
        }
        // Only the jobs hold senders from here on
        drop(results_tx);
        drop(done_tx);

        // Wait for every job to report completion (finished or timed out)
        let mut pending = urls.len();
        while pending > 0 {
            match done_rx.recv().await {
                Some(()) => pending -= 1,
                // All senders gone; nothing further can complete
                None => break,
            }
        }

        // Every completed job has already published and timed-out jobs never
        // publish; close the channel and drain what is buffered
        results_rx.close();
        let mut collected = Vec::new();
        while let Some(result) = results_rx.recv().await {
            let links = result.context("crawl job failed")?;
            collected.extend(links);
        }
        Ok(collected)
    }

    // Stops every worker. Jobs already handed to a worker still finish.
    pub fn shutdown(self) {
        self.dispatcher.shutdown();
    }
}
