//! Deferred tasks advanced by frame updates

/// A one-shot task that becomes due after a delay.
///
/// Time only moves when [`DeferredTask::advance`] is called, so dropping the
/// task is all it takes to cancel it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeferredTask {
    /// Delay in seconds
    delay: f32,
    /// Seconds elapsed since scheduling
    elapsed: f32,
    fired: bool,
}

impl DeferredTask {
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            elapsed: 0.0,
            fired: false,
        }
    }

    /// Advance by `delta` seconds. Returns true exactly once, when the task
    /// becomes due.
    pub fn advance(&mut self, delta: f32) -> bool {
        if self.fired {
            return false;
        }
        self.elapsed += delta.max(0.0);
        if self.elapsed >= self.delay {
            self.fired = true;
            return true;
        }
        false
    }
}
