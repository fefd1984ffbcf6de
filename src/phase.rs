use std::thread::{self, ScopedJoinHandle};

use tracing::{debug, warn};

use crate::config::PhaseConfig;
use crate::error::GateError;
use crate::gate::CounterGate;

/// Runs every task on its own named worker thread and blocks until all of
/// them have released their slot on `gate`.
///
/// The gate is armed with `tasks.len()` and must be drained when this is
/// called. Each worker holds a [`CompletionToken`](crate::CompletionToken),
/// so a panicking task still releases its slot. If a worker cannot be
/// spawned, its slot and the slots of the tasks after it are released
/// directly so the wait still returns, and the spawn failure is reported.
/// Otherwise the first panicked worker, if any, is reported. A thread name
/// prefix containing a NUL byte is rejected before the gate is armed.
pub fn run_phase<F>(
    gate: &CounterGate,
    tasks: Vec<F>,
    config: &PhaseConfig,
) -> Result<(), GateError>
where
    F: FnOnce() + Send,
{
    let total = tasks.len();
    if total == 0 {
        return Ok(());
    }

    // thread names with NUL bytes make spawning panic, check before arming
    if config.thread_name_prefix.contains('\0') {
        return Err(GateError::InvalidThreadName {
            prefix: config.thread_name_prefix.clone(),
        });
    }

    gate.arm(total);
    debug!(workers = total, "phase started");

    thread::scope(|scope| {
        let mut handles: Vec<(usize, ScopedJoinHandle<'_, ()>)> = Vec::with_capacity(total);
        let mut spawn_error = None;

        gate.execute_and_wait_until_counter_zero(|| {
            let mut pending = tasks.into_iter().enumerate();
            while let Some((index, task)) = pending.next() {
                let mut builder = thread::Builder::new().name(config.thread_name(index));
                if let Some(bytes) = config.stack_size {
                    builder = builder.stack_size(bytes);
                }

                let policy = config.notify;
                let spawned = builder.spawn_scoped(scope, move || {
                    let _token = gate.completion(policy);
                    task();
                });

                match spawned {
                    Ok(handle) => handles.push((index, handle)),
                    Err(source) => {
                        warn!(index, error = %source, "failed to spawn phase worker");
                        gate.release_units(pending.len() + 1, policy);
                        spawn_error = Some(GateError::Spawn { index, source });
                        break;
                    }
                }
            }
        });

        let mut outcome = match spawn_error {
            Some(err) => Err(err),
            None => Ok(()),
        };
        for (index, handle) in handles {
            if handle.join().is_err() {
                warn!(index, "phase worker panicked");
                if outcome.is_ok() {
                    outcome = Err(GateError::WorkerPanicked { index });
                }
            }
        }

        debug!(workers = total, ok = outcome.is_ok(), "phase finished");
        outcome
    })
}
