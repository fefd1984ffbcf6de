// Phase-Gate: counter-gated condition variable
// Lets a coordinator dispatch N units of work and block until all of them
// have reported completion:
// - One mutex guards the counter, every notify happens under it
// - Predicate waits re-check on every wakeup, spurious or not
// - Decrementing a drained gate is a contract violation and panics
//
// Liveness
// There is no timeout. A unit of work that never decrements leaves the
// coordinator blocked forever; use `CompletionToken` or `run_phase` so
// unwinding workers still release their slot.
mod completion;
mod config;
mod decrement;
mod error;
mod gate;
mod phase;
mod wait;

pub use completion::CompletionToken;
pub use config::PhaseConfig;
pub use decrement::NotifyPolicy;
pub use error::GateError;
pub use gate::CounterGate;
pub use phase::run_phase;

// convenience function to create a drained gate
pub fn new() -> CounterGate {
    CounterGate::new()
}

// create a gate armed with `count` outstanding units
pub fn with_count(count: usize) -> CounterGate {
    CounterGate::with_count(count)
}
