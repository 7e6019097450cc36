//! One-shot timers on a virtual clock
//!
//! Timers are never cancelled. Each task names the element it affects and
//! the handler checks that element is still live when the task fires.

use super::registry::ElementId;
use std::time::Duration;

/// Work scheduled for later
#[derive(Debug, Clone, PartialEq)]
pub enum TimerTask {
    /// Remove the notification if it is still `id`
    ExpireNotification(ElementId),
    /// Remove the label's tooltip if it is still `id`
    RemoveTooltip { label_for: String, id: ElementId },
    /// Restore the saved form state
    RestoreSavedForm,
}

#[derive(Debug)]
struct ScheduledTimer {
    due: Duration,
    order: u64,
    task: TimerTask,
}

/// Pending timers ordered by due time, then by scheduling order
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_order: u64,
    pending: Vec<ScheduledTimer>,
}

impl TimerQueue {
    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Schedule `task` to fire `delay` after the current time
    pub fn schedule(&mut self, delay: Duration, task: TimerTask) {
        let due = self.now + delay;
        tracing::debug!("Scheduling {task:?} at {}ms", due.as_millis());
        self.pending.push(ScheduledTimer {
            due,
            order: self.next_order,
            task,
        });
        self.next_order += 1;
    }

    /// Move the clock forward to `now` and return every task that came due.
    ///
    /// The clock never moves backwards.
    pub fn advance_to(&mut self, now: Duration) -> Vec<TimerTask> {
        self.now = self.now.max(now);
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|timer| timer.due <= now);
        self.pending = pending;

        due.sort_by_key(|timer| (timer.due, timer.order));
        due.into_iter().map(|timer| timer.task).collect()
    }
}
