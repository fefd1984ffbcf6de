use parking_lot::Condvar;
use tracing::{debug, trace};

use crate::error::GateError;
use crate::gate::CounterGate;

/// Which waiters a decrement wakes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotifyPolicy {
    /// Wake a single waiter. Enough when exactly one coordinator waits.
    One,
    /// Wake every waiter.
    #[default]
    All,
}

impl NotifyPolicy {
    #[inline]
    fn notify(self, cv: &Condvar) {
        match self {
            NotifyPolicy::One => {
                cv.notify_one();
            }
            NotifyPolicy::All => {
                cv.notify_all();
            }
        }
    }
}

impl CounterGate {
    /// Decrements the counter under the lock and then runs `after_decrement`
    /// with the lock still held.
    ///
    /// # Panics
    /// Panics if the counter is already zero. The gate is left unchanged.
    pub fn decrement_then<F>(&self, after_decrement: F)
    where
        F: FnOnce(&Condvar),
    {
        self.access_guarded(|cv, counter| {
            assert!(
                take_units(counter, 1),
                "CounterGate decremented below zero: more completions than armed units"
            );

            // notify under the lock so a waiter between its predicate check
            // and its wait cannot miss the wakeup
            after_decrement(cv);
        });
    }

    /// Decrements the counter and wakes one waiter.
    ///
    /// # Panics
    /// Panics if the counter is already zero.
    pub fn decrement_and_notify_one(&self) {
        self.decrement_then(|cv| {
            cv.notify_one();
        });
    }

    /// Decrements the counter and wakes all waiters.
    ///
    /// # Panics
    /// Panics if the counter is already zero.
    pub fn decrement_and_notify_all(&self) {
        self.decrement_then(|cv| {
            cv.notify_all();
        });
    }

    /// # Panics
    /// Panics if the counter is already zero.
    pub fn decrement_and_notify(&self, policy: NotifyPolicy) {
        self.decrement_then(|cv| policy.notify(cv));
    }

    /// Checked decrement. Returns the remaining count, or
    /// [`GateError::Underflow`] without touching the gate if it was drained.
    pub fn try_decrement_and_notify(&self, policy: NotifyPolicy) -> Result<usize, GateError> {
        self.access_guarded(|cv, counter| {
            if !take_units(counter, 1) {
                return Err(GateError::Underflow);
            }
            policy.notify(cv);
            Ok(*counter)
        })
    }

    // releases `units` slots under one lock with a single notify
    pub(crate) fn release_units(&self, units: usize, policy: NotifyPolicy) {
        self.access_guarded(|cv, counter| {
            assert!(
                take_units(counter, units),
                "CounterGate decremented below zero: more completions than armed units"
            );
            policy.notify(cv);
        });
    }
}

// counter is left untouched when fewer than `units` remain
#[inline]
fn take_units(counter: &mut usize, units: usize) -> bool {
    if *counter < units {
        return false;
    }
    *counter -= units;
    log_decrement(*counter);
    true
}

#[inline]
fn log_decrement(remaining: usize) {
    if remaining == 0 {
        debug!("gate drained");
    } else {
        trace!(remaining, "gate decremented");
    }
}
