//! Synchronous hook dispatch.
//!
//! Callbacks run in-line on the caller's stack, in ascending priority
//! order and registration order within one priority. The argument list
//! is threaded through the whole chain by mutable reference, so each
//! callback sees what the previous ones wrote and the caller sees the
//! final state.
//!
//! The run result is the return value of the *last-executed* callback,
//! not an aggregate. That mirrors the contract this registry exposes:
//! callbacks communicate by mutating arguments, and return values are
//! best-effort extras that later callbacks simply overwrite.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use hookable_core::{HookArgs, HookResult};

use super::registry::HookRegistry;

/// Outcome of running a hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// No callbacks were registered under the name; nothing ran.
    Skipped,
    /// Every callback ran; carries the last-executed callback's return
    /// value, or `None` when that callback returned nothing.
    Completed(Option<Value>),
}

impl RunOutcome {
    /// Returns whether any callbacks actually ran.
    pub fn ran(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Returns the last callback's return value, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Completed(value) => value.as_ref(),
            Self::Skipped => None,
        }
    }

    /// Consumes the outcome, returning the last callback's value.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Completed(value) => value,
            Self::Skipped => None,
        }
    }
}

impl HookRegistry {
    /// Runs every callback registered under a hook name.
    ///
    /// An unknown name is not an error: the run is reported as
    /// [`RunOutcome::Skipped`] and no callback executes. A callback
    /// failure aborts the rest of the chain and propagates unchanged;
    /// mutations made before the failure remain visible in `args`.
    pub fn run(&self, name: &str, args: &mut HookArgs) -> HookResult<RunOutcome> {
        let Some(callbacks) = self.execution_snapshot(name) else {
            debug!(hook = %name, "No callbacks registered, skipping run");
            return Ok(RunOutcome::Skipped);
        };

        debug!(
            hook = %name,
            callback_count = callbacks.len(),
            arg_count = args.len(),
            "Running hook"
        );

        let mut result = None;
        for callback in &callbacks {
            result = callback.call(args)?;
        }

        Ok(RunOutcome::Completed(result))
    }
}
