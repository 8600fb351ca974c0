//! Timer-based coalescing queue.
//!
//! Each key has at most one pending deadline. A new request for a key pushes
//! its deadline out to `now + quiet`, so a burst of requests runs once, a
//! quiet window after the last one. Time is passed in by the caller, which
//! keeps the queue independent of any particular event loop.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<K> {
    quiet: Duration,
    pending: Vec<(K, Instant)>,
}

impl<K: Copy + Eq> Debouncer<K> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: Vec::new(),
        }
    }

    /// Schedule `key`, superseding any pending request for it.
    pub fn request(&mut self, key: K, now: Instant) {
        let deadline = now + self.quiet;
        match self.pending.iter_mut().find(|(k, _)| *k == key) {
            Some((_, pending)) => *pending = deadline,
            None => self.pending.push((key, deadline)),
        }
    }

    /// Remove and return every key whose deadline has passed, in request order.
    pub fn take_due(&mut self, now: Instant) -> Vec<K> {
        let mut due = Vec::new();
        self.pending.retain(|&(key, deadline)| {
            if deadline <= now {
                due.push(key);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn is_pending(&self, key: K) -> bool {
        self.pending.iter().any(|(k, _)| *k == key)
    }

    /// Earliest pending deadline, for scheduling the next wake-up.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|&(_, deadline)| deadline).min()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }
}
