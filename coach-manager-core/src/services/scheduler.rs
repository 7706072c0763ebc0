//! Deferred re-entry queue
//!
//! Page time is a `Duration` measured from DOM-ready. Hosts call
//! `pop_due(now)` whenever their clock advances; nothing here blocks or
//! spawns. Equal deadlines fire in scheduling order.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle to a scheduled task, usable for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// A task whose deadline has passed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Due<T> {
    pub handle: TimerHandle,
    /// When the task was due (not when it was popped)
    pub deadline: Duration,
    pub task: T,
}

/// Deadline-ordered task queue
#[derive(Debug)]
pub struct TimerQueue<T> {
    next_seq: u64,
    entries: BTreeMap<(Duration, u64), T>,
    deadlines: HashMap<u64, Duration>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            entries: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to fire at `now + delay`
    pub fn schedule(&mut self, now: Duration, delay: Duration, task: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        let deadline = now.saturating_add(delay);
        self.entries.insert((deadline, seq), task);
        self.deadlines.insert(seq, deadline);
        TimerHandle(seq)
    }

    /// Cancels a pending task, returning it if it had not fired yet
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        let deadline = self.deadlines.remove(&handle.0)?;
        self.entries.remove(&(deadline, handle.0))
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Removes and returns every task with `deadline <= now`, in firing order
    pub fn pop_due(&mut self, now: Duration) -> Vec<Due<T>> {
        let mut due = Vec::new();
        while let Some(entry) = self.entries.first_entry() {
            let (deadline, seq) = *entry.key();
            if deadline > now {
                break;
            }
            let task = entry.remove();
            self.deadlines.remove(&seq);
            due.push(Due {
                handle: TimerHandle(seq),
                deadline,
                task,
            });
        }
        due
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all pending tasks (page teardown)
    pub fn clear(&mut self) {
        self.entries.clear();
        self.deadlines.clear();
    }
}
