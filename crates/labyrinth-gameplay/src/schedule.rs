//! Cancellable interval tasks bound to the lifetime of their owner.
//!
//! The scheduler hands out a [`TaskHandle`] per task. Dropping the handle
//! cancels the task, so a task owned by an enemy stops firing as soon as the
//! enemy is removed, without any explicit teardown call.

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::collections::BTreeMap;
use tracing::trace;

/// Identifier of a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Ownership token of a scheduled task. Cancels the task on drop.
#[derive(Debug)]
pub struct TaskHandle {
    id: TaskId,
    cancel: Sender<TaskId>,
}

impl TaskHandle {
    /// Task this handle controls.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Cancels the task now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        // The scheduler may already be gone; nothing left to cancel then.
        let _ = self.cancel.send(self.id);
    }
}

#[derive(Debug, Clone, Copy)]
struct IntervalTask {
    period: f32,
    next_due: f32,
}

/// Fires tasks periodically against a monotonically increasing clock.
#[derive(Debug)]
pub struct IntervalScheduler {
    tasks: BTreeMap<TaskId, IntervalTask>,
    next_id: u64,
    cancel_tx: Sender<TaskId>,
    cancel_rx: Receiver<TaskId>,
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        let (cancel_tx, cancel_rx) = unbounded();
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
            cancel_tx,
            cancel_rx,
        }
    }

    /// Schedules a task firing every `period` seconds, first at `now + period`.
    pub fn schedule(&mut self, period: f32, now: f32) -> TaskHandle {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.insert(
            id,
            IntervalTask {
                period,
                next_due: now + period,
            },
        );
        TaskHandle {
            id,
            cancel: self.cancel_tx.clone(),
        }
    }

    /// Returns the tasks due at `now` and re-arms them.
    ///
    /// Cancellations are applied first, so a task whose handle was dropped
    /// never fires again. A task that fell several periods behind fires once
    /// and is re-armed relative to `now`.
    pub fn poll(&mut self, now: f32) -> Vec<TaskId> {
        self.apply_cancellations();

        let mut due = Vec::new();
        for (id, task) in &mut self.tasks {
            if now >= task.next_due {
                task.next_due = now + task.period;
                due.push(*id);
            }
        }
        due
    }

    /// Returns whether the task is still live.
    pub fn is_scheduled(&mut self, id: TaskId) -> bool {
        self.apply_cancellations();
        self.tasks.contains_key(&id)
    }

    /// Number of live tasks.
    pub fn len(&mut self) -> usize {
        self.apply_cancellations();
        self.tasks.len()
    }

    /// Returns whether no task is live.
    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    fn apply_cancellations(&mut self) {
        while let Ok(id) = self.cancel_rx.try_recv() {
            if self.tasks.remove(&id).is_some() {
                trace!(task = id.raw(), "interval task cancelled");
            }
        }
    }
}
