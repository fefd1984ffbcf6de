use crate::decrement::NotifyPolicy;

/// Settings for [`run_phase`](crate::run_phase).
#[derive(Clone, Debug)]
pub struct PhaseConfig {
    pub notify: NotifyPolicy,
    /// workers are named `{thread_name_prefix}-{index}`
    pub thread_name_prefix: String,
    pub stack_size: Option<usize>,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            notify: NotifyPolicy::All,
            thread_name_prefix: String::from("phase-worker"),
            stack_size: None,
        }
    }
}

impl PhaseConfig {
    pub fn notify(mut self, notify: NotifyPolicy) -> Self {
        self.notify = notify;
        self
    }

    pub fn thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    pub fn stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    pub(crate) fn thread_name(&self, index: usize) -> String {
        format!("{}-{}", self.thread_name_prefix, index)
    }
}
