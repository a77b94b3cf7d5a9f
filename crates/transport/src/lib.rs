//! One-way calls from a managed runtime into a host execution context.
//!
//! The host registers closures under stable string names in a
//! [`HostFunctionRegistry`]. The runtime holds a [`Boundary`] and invokes those
//! names with a raw value. Calls are fire-and-forget: the caller never waits,
//! never learns the result, and a call to a name that isn't registered yet is
//! dropped rather than queued.
//!
//! All host functions run on a single [`HostContext`] task, one at a time, in
//! the order calls reached its queue.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod boundary;
mod config;
mod context;
mod error;
mod registry;

pub use boundary::{Boundary, DropReason, Outcome};
pub use config::HostContextConfig;
pub use context::HostContext;
pub use error::{Error, Result};
pub use registry::{HostFunction, HostFunctionRegistry};
