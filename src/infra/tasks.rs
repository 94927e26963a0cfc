//! Bounded worker pool for offloaded computation.
//!
//! A fixed set of worker tasks each drain their own request channel;
//! submissions are dispatched round-robin and the caller suspends on a
//! oneshot reply until the worker finishes. There is no cancellation
//! and no timeout: a hung task pins its slot until the process exits.

use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::{mpsc, oneshot};

use crate::config::{MAX_WORKER_THREADS, WORKER_QUEUE_DEPTH};
use crate::errors::{AppError, AppResult};

/// Work items the pool knows how to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerTask {
    /// Placeholder computation: sum of 0..=upper.
    Sum { upper: u64 },
}

type Job = (WorkerTask, oneshot::Sender<u64>);

/// Fixed-size pool of worker execution contexts.
pub struct TaskRunner {
    senders: Vec<mpsc::Sender<Job>>,
    next: AtomicUsize,
}

impl TaskRunner {
    /// Spawn `workers` worker tasks (clamped to the pool bounds).
    pub fn new(workers: usize) -> Self {
        let workers = workers.clamp(1, MAX_WORKER_THREADS);

        let senders = (0..workers)
            .map(|slot| {
                let (tx, mut rx) = mpsc::channel::<Job>(WORKER_QUEUE_DEPTH);
                tokio::spawn(async move {
                    while let Some((task, reply)) = rx.recv().await {
                        let result = execute(&task);
                        if reply.send(result).is_err() {
                            tracing::warn!(slot, ?task, "worker result dropped by caller");
                        }
                    }
                });
                tx
            })
            .collect();

        tracing::info!(workers, "Worker pool started");

        Self {
            senders,
            next: AtomicUsize::new(0),
        }
    }

    /// Submit a task and await its result.
    pub async fn run(&self, task: WorkerTask) -> AppResult<u64> {
        let slot = self.next.fetch_add(1, Ordering::Relaxed) % self.senders.len();
        let (reply_tx, reply_rx) = oneshot::channel();

        self.senders[slot]
            .send((task, reply_tx))
            .await
            .map_err(|_| AppError::internal("worker pool is shut down"))?;

        reply_rx
            .await
            .map_err(|_| AppError::internal("worker dropped the task"))
    }

    /// Number of worker slots in the pool.
    pub fn workers(&self) -> usize {
        self.senders.len()
    }
}

fn execute(task: &WorkerTask) -> u64 {
    match task {
        WorkerTask::Sum { upper } => (0..=*upper).sum(),
    }
}
