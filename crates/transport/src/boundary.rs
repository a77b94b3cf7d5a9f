//! Runtime-side handle for calling host functions.

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::debug;

use crate::registry::HostFunctionRegistry;

/// A queued call waiting for the host context.
#[derive(Debug)]
pub(crate) struct Invocation {
    pub(crate) name: String,
    pub(crate) value: Option<String>,
}

/// What happened to a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// The call is queued for the host context.
    Enqueued,
    /// The call was thrown away.
    Dropped(DropReason),
}

/// Why a call was thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Nothing is registered under the name yet.
    NotRegistered,
    /// The host context's queue is full.
    QueueFull,
    /// The host context has shut down.
    HostStopped,
}

/// Handle the runtime uses to call into the host.
///
/// Calls never block and never report back to the caller. Clone freely; every
/// clone feeds the same host context.
#[derive(Clone, Debug)]
pub struct Boundary {
    registry: HostFunctionRegistry,
    sender: mpsc::Sender<Invocation>,
}

impl Boundary {
    pub(crate) const fn new(registry: HostFunctionRegistry, sender: mpsc::Sender<Invocation>) -> Self {
        Self { registry, sender }
    }

    /// Calls the host function registered under `name` with `value`.
    ///
    /// Fire-and-forget: if the call can't be delivered it is silently lost.
    pub fn invoke(&self, name: &str, value: Option<String>) {
        let _ = self.try_invoke(name, value);
    }

    /// Like [`invoke`](Self::invoke) but reports whether the call was queued.
    pub fn try_invoke(&self, name: &str, value: Option<String>) -> Outcome {
        if !self.registry.is_registered(name) {
            debug!(function = name, "no host function registered; dropping call");
            return Outcome::Dropped(DropReason::NotRegistered);
        }

        let invocation = Invocation {
            name: name.to_string(),
            value,
        };

        match self.sender.try_send(invocation) {
            Ok(()) => Outcome::Enqueued,
            Err(TrySendError::Full(_)) => {
                debug!(function = name, "host context queue full; dropping call");
                Outcome::Dropped(DropReason::QueueFull)
            }
            Err(TrySendError::Closed(_)) => {
                debug!(function = name, "host context stopped; dropping call");
                Outcome::Dropped(DropReason::HostStopped)
            }
        }
    }

    /// Whether a host function is currently registered under `name`.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.registry.is_registered(name)
    }
}
