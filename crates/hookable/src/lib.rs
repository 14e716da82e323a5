//! # hookable
//!
//! Embeddable hook registry. Provides:
//!
//! - Priority-ordered callback registration under caller-defined hook names
//! - Synchronous dispatch with a shared mutable argument list
//! - A [`Hookable`] mixin trait so any host type can expose hook methods
//! - Closure-friendly callback registration and a `hook_args!` macro
//!
//! Lower priority runs earlier; within one priority, callbacks run in
//! registration order. The run result is the value returned by the
//! last-executed callback, which is unusual but deliberate: argument
//! mutation, not the return value, is the intended communication channel.

pub mod hooks;
pub mod macros;
pub mod prelude;
pub mod traits;

pub use hooks::dispatch::RunOutcome;
pub use hooks::registry::{DEFAULT_PRIORITY, HookCallback, HookRegistry, PriorityTable};
pub use traits::Hookable;

pub use hookable_core::{ErrorKind, HookArgs, HookError, HookResult};
