// src/crawler/job.rs
// =============================================================================
// One unit of crawl work: fetch a single URL and extract its links, raced
// against the job-level timeout.
// =============================================================================

use anyhow::{anyhow, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use super::fetch::Fetcher;

// What a job reports back to the batch: the links found on the page, or the
// fetch error. Consumed by the crawler facade's fan-in loop.
pub(crate) type JobResult = Result<Vec<String>>;

// A job is created once per URL per batch submission and consumed exactly
// once by exactly one worker.
pub(crate) struct Job {
    pub(crate) url: String,
    // Shared across the whole batch
    pub(crate) results_tx: mpsc::UnboundedSender<JobResult>,
    // Fired on timeout with the job's URL; the facade leaves this unwired
    pub(crate) timeout_tx: Option<mpsc::UnboundedSender<String>>,
    // Fired exactly once per job, on both the completed and timed-out paths,
    // so the batch can count completions instead of result arrivals
    pub(crate) done_tx: mpsc::UnboundedSender<()>,
}

impl Job {
    // Races the fetch against `job_timeout`.
    //
    // Only the completed arm publishes: the fetch task returns its result
    // through the join handle and the JobResult is sent from here, so a job
    // that timed out can never land a late result in the batch channel, no
    // matter when its abandoned fetch finishes. The abandoned task is not
    // cancelled; its eventual return value is simply dropped.
    pub(crate) async fn run(self, worker_seq: usize, fetcher: Arc<Fetcher>, job_timeout: Duration) {
        tracing::info!("[worker {}] crawling {}", worker_seq, self.url);

        let url = self.url.clone();
        let fetch = tokio::spawn(async move { fetcher.fetch_links(&url).await });

        match tokio::time::timeout(job_timeout, fetch).await {
            Ok(joined) => {
                let result = joined
                    .unwrap_or_else(|e| Err(anyhow!("fetch task for {} failed: {e}", self.url)));
                let _ = self.results_tx.send(result);
                tracing::info!("[worker {}] completed {}", worker_seq, self.url);
            }
            Err(_) => {
                tracing::warn!(
                    "[worker {}] timed out after {:?} crawling {}",
                    worker_seq,
                    job_timeout,
                    self.url
                );
                if let Some(timeout_tx) = &self.timeout_tx {
                    let _ = timeout_tx.send(self.url.clone());
                }
            }
        }

        let _ = self.done_tx.send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn channels() -> (
        mpsc::UnboundedSender<JobResult>,
        mpsc::UnboundedReceiver<JobResult>,
        mpsc::UnboundedSender<()>,
        mpsc::UnboundedReceiver<()>,
    ) {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        (results_tx, results_rx, done_tx, done_rx)
    }

    #[tokio::test]
    async fn a_completed_job_publishes_its_result_and_signals_done() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200).body(r#"<a href="/next">next</a>"#);
            })
            .await;

        let (results_tx, mut results_rx, done_tx, mut done_rx) = channels();
        let job = Job {
            url: server.url("/"),
            results_tx,
            timeout_tx: None,
            done_tx,
        };
        let fetcher = Arc::new(Fetcher::new(Duration::from_secs(5)).unwrap());
        job.run(0, fetcher, Duration::from_secs(10)).await;

        assert!(done_rx.recv().await.is_some());
        let links = results_rx.recv().await.unwrap().unwrap();
        assert_eq!(links, vec![format!("{}/next", server.base_url())]);
    }

    #[tokio::test]
    async fn a_timed_out_job_signals_done_and_timeout_but_publishes_nothing() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/slow");
                then.status(200)
                    .body("<a href='/never'>never</a>")
                    .delay(Duration::from_secs(2));
            })
            .await;

        let (results_tx, mut results_rx, done_tx, mut done_rx) = channels();
        let (timeout_tx, mut timeout_rx) = mpsc::unbounded_channel();
        let url = server.url("/slow");
        let job = Job {
            url: url.clone(),
            results_tx,
            timeout_tx: Some(timeout_tx),
            done_tx,
        };
        let fetcher = Arc::new(Fetcher::new(Duration::from_secs(5)).unwrap());
        job.run(0, fetcher, Duration::from_millis(100)).await;

        assert!(done_rx.recv().await.is_some());
        assert_eq!(timeout_rx.recv().await, Some(url));
        results_rx.close();
        assert!(results_rx.recv().await.is_none());
    }
}
