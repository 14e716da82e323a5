//! Prelude for convenient imports.

pub use hookable_core::{ErrorKind, HookArgs, HookError, HookResult};

pub use crate::hooks::dispatch::RunOutcome;
pub use crate::hooks::registry::{DEFAULT_PRIORITY, HookCallback, HookRegistry, PriorityTable};
pub use crate::traits::Hookable;

pub use crate::hook_args;
