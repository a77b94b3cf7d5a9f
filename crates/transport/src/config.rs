use serde::{Deserialize, Serialize};

/// Configuration for a [`HostContext`](crate::HostContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostContextConfig {
    /// Calls that may wait for the host context before new ones are dropped.
    pub queue_capacity: usize,
}

impl HostContextConfig {
    /// Sets the queue capacity. Zero is bumped to one.
    #[must_use]
    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity.max(1);
        self
    }
}

impl Default for HostContextConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 1024,
        }
    }
}
