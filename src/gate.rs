use std::fmt;

use parking_lot::{Condvar, Mutex};
use tracing::trace;

/// Mutex, condition variable and outstanding-work counter shared by one
/// coordinator and the workers of the current episode.
///
/// Every access to the counter goes through [`CounterGate::access_guarded`],
/// so the counter is never read or written without the lock held.
pub struct CounterGate {
    counter: Mutex<usize>,
    cv: Condvar,
}

impl CounterGate {
    /// Creates a drained gate (counter at zero).
    pub fn new() -> Self {
        Self::with_count(0)
    }

    /// Creates a gate already armed with `count` outstanding units of work.
    pub fn with_count(count: usize) -> Self {
        Self {
            counter: Mutex::new(count),
            cv: Condvar::new(),
        }
    }

    /// Locks the gate and runs `operation` against the condition variable and
    /// the counter. The lock is held until `operation` returns or unwinds.
    ///
    /// `operation` must not call back into this gate.
    #[inline]
    pub fn access_guarded<R, F>(&self, operation: F) -> R
    where
        F: FnOnce(&Condvar, &mut usize) -> R,
    {
        let mut counter = self.counter.lock();
        operation(&self.cv, &mut counter)
    }

    /// Resets the counter to `count` for a new episode.
    ///
    /// Must only be called once the previous episode's wait has returned;
    /// no thread may be waiting on or decrementing the gate concurrently.
    pub fn arm(&self, count: usize) {
        self.access_guarded(|_, counter| {
            debug_assert_eq!(
                *counter, 0,
                "CounterGate::arm() called before the previous episode drained"
            );
            *counter = count;
        });
        trace!(count, "gate armed");
    }

    /// Snapshot of the counter, taken under the lock.
    pub fn count(&self) -> usize {
        self.access_guarded(|_, counter| *counter)
    }

    pub fn is_drained(&self) -> bool {
        self.count() == 0
    }

    // the wait loop needs the guard itself, not just `&mut usize`
    pub(crate) fn lock_for_wait(&self) -> (parking_lot::MutexGuard<'_, usize>, &Condvar) {
        (self.counter.lock(), &self.cv)
    }
}

impl Default for CounterGate {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CounterGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("CounterGate");
        match self.counter.try_lock() {
            Some(counter) => d.field("count", &*counter),
            None => d.field("count", &format_args!("<locked>")),
        };
        d.finish()
    }
}
