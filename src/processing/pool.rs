use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel as channel;

/// Shared flag used to abandon a run.
///
/// Cloning yields a handle to the same flag, so one clone can be cancelled
/// from another thread while the pool is running.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Result of one task submitted to a [`WorkerPool`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome<R> {
    Completed(R),

    /// The task panicked; holds the panic message
    Panicked(String),

    /// The pool was cancelled before the task started
    Skipped,
}

/// Fixed-size pool of scoped worker threads.
///
/// Tasks are queued with their submission index, and results are placed back
/// into submission order regardless of which worker finishes first.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    threads: usize,
    cancellation: CancellationToken,
}

impl WorkerPool {
    /// Create a pool of `threads` workers (at least one).
    #[must_use]
    pub fn new(threads: usize, cancellation: CancellationToken) -> Self {
        Self {
            threads: threads.max(1),
            cancellation,
        }
    }

    #[must_use]
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Run `work` over every task and return outcomes in submission order.
    ///
    /// Blocks until every task has completed, panicked, or been skipped. A
    /// panic inside `work` is caught and only affects that task's outcome.
    pub fn run<T, R, F>(&self, tasks: Vec<T>, work: F) -> Vec<TaskOutcome<R>>
    where
        T: Send,
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        let total = tasks.len();
        if total == 0 {
            return Vec::new();
        }

        let (task_tx, task_rx) = channel::bounded::<(usize, T)>(total);
        for (index, task) in tasks.into_iter().enumerate() {
            // The queue holds every task and the receiver is still alive
            if task_tx.send((index, task)).is_err() {
                break;
            }
        }
        drop(task_tx);

        let mut slots: Vec<Option<TaskOutcome<R>>> = (0..total).map(|_| None).collect();
        let (result_tx, result_rx) = channel::unbounded::<(usize, TaskOutcome<R>)>();
        let workers = self.threads.min(total);
        let work = &work;

        thread::scope(|scope| {
            for _ in 0..workers {
                let rx = task_rx.clone();
                let tx = result_tx.clone();
                let cancellation = &self.cancellation;
                scope.spawn(move || {
                    for (index, task) in rx.iter() {
                        let outcome = if cancellation.is_cancelled() {
                            TaskOutcome::Skipped
                        } else {
                            match panic::catch_unwind(AssertUnwindSafe(|| work(&task))) {
                                Ok(result) => TaskOutcome::Completed(result),
                                Err(payload) => TaskOutcome::Panicked(panic_message(&*payload)),
                            }
                        };
                        if tx.send((index, outcome)).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(result_tx);

            for (index, outcome) in result_rx.iter() {
                if let Some(slot) = slots.get_mut(index) {
                    *slot = Some(outcome);
                }
            }
        });

        slots
            .into_iter()
            .map(|slot| slot.unwrap_or(TaskOutcome::Skipped))
            .collect()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
