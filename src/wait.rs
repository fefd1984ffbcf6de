use tracing::trace;

use crate::gate::CounterGate;

impl CounterGate {
    /// Runs `dispatch` without holding the lock, then blocks until
    /// `predicate` holds for the counter.
    ///
    /// The predicate is evaluated under the lock against the counter's
    /// current value, so decrements issued by work that finishes before the
    /// wait begins are not lost. Every wakeup, spurious or not, re-checks the
    /// predicate. There is no timeout: if the predicate never becomes true
    /// the caller blocks forever.
    ///
    /// `predicate` runs with the lock held and must not call back into this
    /// gate.
    pub fn execute_and_wait_until<P, D>(&self, mut predicate: P, dispatch: D)
    where
        P: FnMut(&usize) -> bool,
        D: FnOnce(),
    {
        dispatch();

        let (mut counter, cv) = self.lock_for_wait();
        let mut woken = false;
        while !predicate(&*counter) {
            if woken {
                trace!(count = *counter, "gate woke with predicate unmet, waiting again");
            }
            cv.wait(&mut counter);
            woken = true;
        }
        trace!(count = *counter, "gate wait released");
    }

    /// Runs `dispatch`, then blocks until the counter reaches zero.
    pub fn execute_and_wait_until_counter_zero<D>(&self, dispatch: D)
    where
        D: FnOnce(),
    {
        self.execute_and_wait_until(|counter| *counter == 0, dispatch);
    }
}
