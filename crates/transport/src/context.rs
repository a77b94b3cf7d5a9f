//! The host's single execution context.

use std::panic::{AssertUnwindSafe, catch_unwind};

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info};

use crate::boundary::{Boundary, Invocation};
use crate::config::HostContextConfig;
use crate::error::{Error, Result};
use crate::registry::HostFunctionRegistry;

/// Runs host functions one at a time on a dedicated task.
///
/// Calls made through any [`Boundary`] from this context are processed in the
/// order they reached the queue. A panicking host function is logged and does
/// not stop the context.
#[derive(Debug)]
pub struct HostContext {
    registry: HostFunctionRegistry,
    sender: mpsc::Sender<Invocation>,
    receiver: Mutex<Option<mpsc::Receiver<Invocation>>>,
    shutdown_token: CancellationToken,
    task_tracker: TaskTracker,
}

impl HostContext {
    /// Creates a host context with an empty registry.
    #[must_use]
    pub fn new(config: HostContextConfig) -> Self {
        Self::with_registry(config, HostFunctionRegistry::new())
    }

    /// Creates a host context around an existing registry.
    #[must_use]
    pub fn with_registry(config: HostContextConfig, registry: HostFunctionRegistry) -> Self {
        let (sender, receiver) = mpsc::channel(config.queue_capacity.max(1));

        Self {
            registry,
            sender,
            receiver: Mutex::new(Some(receiver)),
            shutdown_token: CancellationToken::new(),
            task_tracker: TaskTracker::new(),
        }
    }

    /// Registry of functions this context runs.
    #[must_use]
    pub const fn registry(&self) -> &HostFunctionRegistry {
        &self.registry
    }

    /// A handle for calling into this context.
    #[must_use]
    pub fn boundary(&self) -> Boundary {
        Boundary::new(self.registry.clone(), self.sender.clone())
    }

    /// Start processing calls.
    ///
    /// Calls queued before this point are processed once the context runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the context was already started or shut down, or if
    /// there is no tokio runtime to spawn on.
    pub fn start(&self) -> Result<JoinHandle<()>> {
        if self.task_tracker.is_closed() {
            return Err(Error::AlreadyStarted);
        }

        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        let mut receiver = self.receiver.lock().take().ok_or(Error::AlreadyStarted)?;

        let registry = self.registry.clone();
        let shutdown_token = self.shutdown_token.clone();

        let handle = self.task_tracker.spawn_on(
            async move {
                debug!("host context started");

                loop {
                    tokio::select! {
                        biased;
                        () = shutdown_token.cancelled() => break,
                        invocation = receiver.recv() => match invocation {
                            Some(invocation) => run(&registry, invocation),
                            None => break,
                        },
                    }
                }

                // Calls queued before shutdown still run.
                receiver.close();
                while let Ok(invocation) = receiver.try_recv() {
                    run(&registry, invocation);
                }

                debug!("host context stopped");
            },
            &runtime,
        );

        self.task_tracker.close();

        Ok(handle)
    }

    /// Shut down the context after running calls that are already queued.
    ///
    /// Later calls are dropped. A context can't be restarted.
    pub async fn shutdown(&self) {
        info!("host context shutting down...");

        self.shutdown_token.cancel();
        drop(self.receiver.lock().take());
        self.task_tracker.close();
        self.task_tracker.wait().await;

        info!("host context shutdown complete.");
    }
}

fn run(registry: &HostFunctionRegistry, invocation: Invocation) {
    let Invocation { name, value } = invocation;

    let Some(function) = registry.get(&name) else {
        debug!(function = %name, "host function unregistered before the call ran; dropping");
        return;
    };

    if catch_unwind(AssertUnwindSafe(|| function(value.as_deref()))).is_err() {
        error!(function = %name, "host function panicked");
    }
}
