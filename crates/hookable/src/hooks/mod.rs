//! Hook system — registry storage and synchronous dispatch.

pub mod dispatch;
pub mod registry;

pub use dispatch::RunOutcome;
pub use registry::{DEFAULT_PRIORITY, HookCallback, HookRegistry, PriorityTable};
