//! Debounced invoker
//!
//! Holds at most one pending invocation. Every `trigger` replaces the pending
//! arguments and pushes the deadline out by the full window; `poll` hands the
//! arguments back once the deadline has passed. Time is supplied by the
//! caller, so tests drive it with plain `Instant` arithmetic.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<A> {
    args: A,
    deadline: Instant,
}

/// Last-write-wins debouncer
#[derive(Debug, Clone)]
pub struct Debouncer<A> {
    window: Duration,
    pending: Option<Pending<A>>,
}

impl<A> Debouncer<A> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Quiescence window
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule `args`, superseding anything pending
    pub fn trigger(&mut self, args: A, now: Instant) {
        self.pending = Some(Pending {
            args,
            deadline: now + self.window,
        });
    }

    /// Take the pending arguments if their deadline has been reached
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.args),
            _ => None,
        }
    }

    /// Take the pending arguments regardless of the deadline
    pub fn flush(&mut self) -> Option<A> {
        self.pending.take().map(|p| p.args)
    }

    /// Drop the pending invocation
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending invocation becomes due
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}
