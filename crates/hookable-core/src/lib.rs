//! # hookable-core
//!
//! Leaf crate for the hookable workspace. Contains the positional
//! argument model passed through hook chains, the unified error type,
//! and the result alias.
//!
//! This crate has **no** internal dependencies on other hookable crates.

pub mod args;
pub mod error;
pub mod result;

pub use args::HookArgs;
pub use error::{ErrorKind, HookError};
pub use result::HookResult;
