use crate::decrement::NotifyPolicy;
use crate::gate::CounterGate;

/// Releases one unit of a [`CounterGate`] when dropped.
///
/// Hand one token to each unit of work. The decrement runs on drop, so a
/// worker that unwinds still releases its slot and the coordinator is not
/// left blocked.
#[must_use = "dropping the token immediately completes its unit of work"]
pub struct CompletionToken<'a> {
    gate: &'a CounterGate,
    policy: NotifyPolicy,
}

impl CounterGate {
    /// Creates a token for one armed unit of work. Creating a token does not
    /// touch the counter; dropping it decrements once.
    pub fn completion(&self, policy: NotifyPolicy) -> CompletionToken<'_> {
        CompletionToken { gate: self, policy }
    }
}

impl CompletionToken<'_> {
    pub fn complete(self) {
        drop(self);
    }
}

impl Drop for CompletionToken<'_> {
    fn drop(&mut self) {
        self.gate.decrement_and_notify(self.policy);
    }
}
