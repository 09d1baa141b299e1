/// Deferred-action queue driven by a virtual millisecond clock.
///
/// Nothing here sleeps. A real-time driver advances the clock with elapsed
/// wall time; tests advance it by hand.
use std::collections::BTreeMap;

/// Handle to a scheduled task, usable for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    due: u64,
    seq: u64,
}

#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: u64,
    next_seq: u64,
    // Keyed by (due, seq) so equal deadlines run in scheduling order.
    queue: BTreeMap<(u64, u64), T>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            queue: BTreeMap::new(),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn schedule(&mut self, delay_ms: u64, task: T) -> TaskId {
        let id = TaskId {
            due: self.now.saturating_add(delay_ms),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.queue.insert((id.due, id.seq), task);
        id
    }

    /// Remove a pending task. Returns false if it already ran or was removed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.queue.remove(&(id.due, id.seq)).is_some()
    }

    /// Keep only the pending tasks matching `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.queue.retain(|_, task| keep(task));
    }

    /// Deadline of the earliest pending task.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Pop the earliest task due at or before `until`, moving the clock to
    /// its deadline.
    pub fn pop_due(&mut self, until: u64) -> Option<T> {
        let key = *self.queue.keys().next()?;
        if key.0 > until {
            return None;
        }
        let task = self.queue.remove(&key)?;
        self.now = self.now.max(key.0);
        Some(task)
    }

    /// Move the clock forward without running anything.
    pub fn set_now(&mut self, now: u64) {
        self.now = self.now.max(now);
    }
}
