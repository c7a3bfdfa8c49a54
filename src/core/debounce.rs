//! Cancellable keyed timers
//!
//! `schedule(key, after, action)` runs `action` once `after` has elapsed,
//! unless another call for the same key arrives first: that call cancels the
//! pending one and starts a fresh delay. Only the trailing call of a burst fires.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

use crate::core::lock;

/// Handle to one scheduled action
#[derive(Debug)]
pub struct TimerHandle {
    task: AbortHandle,
}

impl TimerHandle {
    /// Cancel the action if it has not fired yet
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// True once the action has run or been cancelled
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Keyed timers, each running as a task on `runtime`
#[derive(Clone)]
pub struct Scheduler {
    runtime: Handle,
    pending: Arc<Mutex<HashMap<String, AbortHandle>>>,
}

impl Scheduler {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn schedule<F>(&self, key: &str, after: Duration, action: F) -> TimerHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let mut pending = lock(&self.pending);
        if let Some(previous) = pending.remove(key) {
            previous.abort();
        }

        let task = self.runtime.spawn(async move {
            tokio::time::sleep(after).await;
            action();
        });

        pending.insert(key.to_string(), task.abort_handle());
        TimerHandle {
            task: task.abort_handle(),
        }
    }

    /// Cancel the pending action for `key`. Returns whether one was still waiting.
    pub fn cancel(&self, key: &str) -> bool {
        match lock(&self.pending).remove(key) {
            Some(task) => {
                let was_waiting = !task.is_finished();
                task.abort();
                was_waiting
            }
            None => false,
        }
    }
}
