//! Count-down latch used as the per-tick completion barrier.
//!
//! The pool has no join, so every band job carries a `LatchGuard`. The guard
//! counts down on drop, which also happens while a panicking job unwinds,
//! so the tick driver can never wait on a job that is already gone.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

pub struct Latch {
    remaining: Mutex<usize>,
    released: Condvar,
}

impl Latch {
    pub fn new(count: usize) -> Self {
        Self {
            remaining: Mutex::new(count),
            released: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, usize> {
        self.remaining.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Decrement; wakes all waiters when the count reaches zero.
    /// Extra calls past zero are ignored.
    pub fn count_down(&self) {
        let mut remaining = self.lock();
        if *remaining == 0 {
            return;
        }
        *remaining -= 1;
        if *remaining == 0 {
            self.released.notify_all();
        }
    }

    pub fn remaining(&self) -> usize {
        *self.lock()
    }

    /// Block until the count reaches zero.
    pub fn wait(&self) {
        let mut remaining = self.lock();
        while *remaining > 0 {
            remaining = self
                .released
                .wait(remaining)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}

/// Counts its latch down exactly once, when dropped.
pub struct LatchGuard {
    latch: Arc<Latch>,
}

impl LatchGuard {
    pub fn new(latch: Arc<Latch>) -> Self {
        Self { latch }
    }
}

impl Drop for LatchGuard {
    fn drop(&mut self) {
        self.latch.count_down();
    }
}
