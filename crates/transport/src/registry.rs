//! Named host functions.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

/// A function the host exposes to the runtime.
///
/// It receives the raw value passed by the caller, which may be absent.
pub type HostFunction = Arc<dyn Fn(Option<&str>) + Send + Sync>;

/// Table of host functions keyed by their globally unique name.
///
/// Cloning is cheap and clones share the same table.
#[derive(Clone, Default)]
pub struct HostFunctionRegistry {
    functions: Arc<DashMap<String, HostFunction>>,
}

impl HostFunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `function` under `name`, replacing any previous function.
    ///
    /// Returns `true` if a function was replaced.
    pub fn register<F>(&self, name: impl Into<String>, function: F) -> bool
    where
        F: Fn(Option<&str>) + Send + Sync + 'static,
    {
        self.functions
            .insert(name.into(), Arc::new(function) as HostFunction)
            .is_some()
    }

    /// Removes the function registered under `name`.
    ///
    /// Returns `true` if there was one.
    pub fn unregister(&self, name: &str) -> bool {
        self.functions.remove(name).is_some()
    }

    /// Whether a function is registered under `name`.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Returns the function registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<HostFunction> {
        // Clone out so the shard lock is released before the function runs.
        self.functions.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether no functions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for HostFunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self
            .functions
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();

        f.debug_struct("HostFunctionRegistry")
            .field("functions", &names)
            .finish()
    }
}
