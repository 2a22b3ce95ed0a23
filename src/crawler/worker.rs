// src/crawler/worker.rs
// =============================================================================
// A worker is a long-lived task that alternates between two states: Idle
// (its private job sender registered in the shared availability pool, waiting
// for a job or a stop signal) and Running (executing the fetch for one job).
// The stop signal is only observable while idle.
// =============================================================================

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

use super::fetch::Fetcher;
use super::job::Job;

// The hand-off currency of the availability pool: sending on a JobSender
// delivers one job to the worker that registered it.
pub(crate) type JobSender = mpsc::Sender<Job>;

pub(crate) struct Worker {
    pub(crate) seq: usize,
    pub(crate) pool_tx: async_channel::Sender<JobSender>,
    pub(crate) fetcher: Arc<Fetcher>,
    pub(crate) job_timeout: Duration,
}

pub(crate) struct WorkerHandle {
    stop_tx: oneshot::Sender<()>,
}

impl WorkerHandle {
    // Signals the worker to stop the next time it is idle.
    pub(crate) fn stop(self) {
        let _ = self.stop_tx.send(());
    }
}

impl Worker {
    pub(crate) fn start(self) -> WorkerHandle {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            // The worker's private job channel; a fresh sender clone is
            // registered in the pool before every job
            let (job_tx, mut job_rx) = mpsc::channel::<Job>(1);
            loop {
                if self.pool_tx.send(job_tx.clone()).await.is_err() {
                    // Dispatcher is gone, nothing will ever claim us again
                    break;
                }
                tokio::select! {
                    Some(job) = job_rx.recv() => {
                        job.run(self.seq, Arc::clone(&self.fetcher), self.job_timeout).await;
                    }
                    _ = &mut stop_rx => {
                        tracing::debug!("[worker {}] stopped", self.seq);
                        break;
                    }
                }
            }
        });

        WorkerHandle { stop_tx }
    }
}
