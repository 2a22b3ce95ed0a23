// src/crawler/dispatcher.rs
// =============================================================================
// The dispatcher owns the fixed-size worker pool and the job intake queue.
//
// The availability pool is a bounded channel of per-worker job senders
// (capacity = worker count); claiming one blocks until a worker is idle,
// which is what enforces the concurrency bound. Every queued job gets its
// own claim-and-assign task so a burst of submissions queues on the
// unbounded intake channel without ever blocking the submitter.
// =============================================================================

use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::fetch::Fetcher;
use super::job::Job;
use super::worker::{JobSender, Worker, WorkerHandle};
use super::CrawlerConfig;

pub(crate) struct Dispatcher {
    job_tx: mpsc::UnboundedSender<Job>,
    workers: Vec<WorkerHandle>,
}

impl Dispatcher {
    // Starts the workers and the dispatch loop.
    pub(crate) fn new(config: &CrawlerConfig, fetcher: Arc<Fetcher>) -> Self {
        tracing::info!("starting {} workers", config.workers);

        let (pool_tx, pool_rx) = async_channel::bounded::<JobSender>(config.workers);
        let workers = (0..config.workers)
            .map(|seq| {
                Worker {
                    seq,
                    pool_tx: pool_tx.clone(),
                    fetcher: Arc::clone(&fetcher),
                    job_timeout: config.job_timeout,
                }
                .start()
            })
            .collect();

        let (job_tx, mut job_rx) = mpsc::unbounded_channel::<Job>();
        tokio::spawn(async move {
            while let Some(job) = job_rx.recv().await {
                let pool_rx = pool_rx.clone();
                tokio::spawn(async move {
                    // Blocks until a worker is idle
                    if let Ok(worker_tx) = pool_rx.recv().await {
                        let _ = worker_tx.send(job).await;
                    }
                });
            }
        });

        Self { job_tx, workers }
    }

    // Queues a job for the next available worker. Never blocks.
    pub(crate) fn submit(&self, job: Job) -> Result<()> {
        self.job_tx
            .send(job)
            .map_err(|_| anyhow!("dispatcher is no longer accepting jobs"))
    }

    // Stops every worker once it next goes idle.
    pub(crate) fn shutdown(self) {
        for worker in self.workers {
            worker.stop();
        }
    }
}
