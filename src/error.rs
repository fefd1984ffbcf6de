use thiserror::Error;

/// Failures reported by the checked and phase-level entry points.
///
/// The core decrement operations never return these; they panic instead.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("gate counter is already zero")]
    Underflow,

    #[error("failed to spawn phase worker {index}")]
    Spawn {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("thread name prefix {prefix:?} contains a NUL byte")]
    InvalidThreadName { prefix: String },

    #[error("phase worker {index} panicked")]
    WorkerPanicked { index: usize },
}
