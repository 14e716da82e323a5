//! Convenience result type alias for the hookable crates.

use crate::error::HookError;

/// A specialized `Result` type for hook operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, HookError>` explicitly.
pub type HookResult<T> = Result<T, HookError>;
