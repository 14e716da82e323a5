//! The `Hookable` mixin trait — hook methods for any host type.

use serde_json::Value;

use hookable_core::{HookArgs, HookResult};

use crate::hooks::dispatch::RunOutcome;
use crate::hooks::registry::{DEFAULT_PRIORITY, HookCallback, HookRegistry, PriorityTable};

/// Gives a host type hook registration and invocation methods.
///
/// A host embeds a [`HookRegistry`] and implements the single accessor;
/// everything else comes from default methods. The registry uses
/// interior locking, so every method takes `&self` and the host needs
/// no mutability of its own:
///
/// ```
/// use hookable::prelude::*;
///
/// #[derive(Default)]
/// struct Document {
///     hooks: HookRegistry,
/// }
///
/// impl Hookable for Document {
///     fn hook_registry(&self) -> &HookRegistry {
///         &self.hooks
///     }
/// }
///
/// let doc = Document::default();
/// doc.register_hook("before_save", |args: &mut HookArgs| {
///     args.set(0, "sanitized");
///     Ok(None)
/// });
///
/// let mut args = hook_args!["raw input"];
/// doc.run_hook("before_save", &mut args).unwrap();
/// assert_eq!(args.get_str(0), Some("sanitized"));
/// ```
pub trait Hookable {
    /// Returns the embedded hook registry.
    fn hook_registry(&self) -> &HookRegistry;

    /// Registers a callback at the default priority.
    fn register_hook<C>(&self, name: &str, callback: C)
    where
        C: HookCallback + 'static,
    {
        self.hook_registry().register(name, DEFAULT_PRIORITY, callback);
    }

    /// Registers a callback at an explicit priority; lower runs earlier.
    fn register_hook_with_priority<C>(&self, name: &str, priority: i32, callback: C)
    where
        C: HookCallback + 'static,
    {
        self.hook_registry().register(name, priority, callback);
    }

    /// Registers one callback under several hook names.
    fn register_hook_many<C>(&self, names: &[&str], priority: i32, callback: C)
    where
        C: HookCallback + 'static,
    {
        self.hook_registry().register_many(names.iter().copied(), priority, callback);
    }

    /// Returns whether any callbacks are registered under a hook name.
    fn has_hook(&self, name: &str) -> bool {
        self.hook_registry().has_hook(name)
    }

    /// Returns a snapshot of the priority table for a hook name.
    fn hooks(&self, name: &str) -> Option<PriorityTable> {
        self.hook_registry().hooks(name)
    }

    /// Runs every callback registered under a hook name; see
    /// [`HookRegistry::run`].
    fn run_hook(&self, name: &str, args: &mut HookArgs) -> HookResult<RunOutcome> {
        self.hook_registry().run(name, args)
    }

    /// Runs a hook and keeps only the last callback's return value,
    /// for call sites that do not care whether anything was registered.
    fn run_hook_value(&self, name: &str, args: &mut HookArgs) -> HookResult<Option<Value>> {
        Ok(self.run_hook(name, args)?.into_value())
    }

    /// Clears one hook by name, or the whole registry; see
    /// [`HookRegistry::clear`]. Chainable.
    fn clear_hooks(&self, name: Option<&str>) -> &Self
    where
        Self: Sized,
    {
        self.hook_registry().clear(name);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct Uploader {
        hooks: HookRegistry,
    }

    impl Hookable for Uploader {
        fn hook_registry(&self) -> &HookRegistry {
            &self.hooks
        }
    }

    impl Uploader {
        // A host wiring hooks up at construction time, the way an
        // extending type would.
        fn with_defaults() -> Self {
            let uploader = Self::default();
            uploader.register_hook("after_upload", |_: &mut HookArgs| {
                Ok(Some(json!("THIS WORKED")))
            });
            uploader
        }
    }

    #[test]
    fn test_host_runs_hook_registered_at_construction() {
        let uploader = Uploader::with_defaults();
        let mut args = HookArgs::new();

        let outcome = uploader.run_hook("after_upload", &mut args).expect("run");
        assert_eq!(outcome.into_value(), Some(json!("THIS WORKED")));
    }

    #[test]
    fn test_run_hook_value_on_unregistered_name() {
        let uploader = Uploader::default();
        let mut args = HookArgs::new();

        let value = uploader.run_hook_value("missing", &mut args).expect("run");
        assert_eq!(value, None);
    }

    #[test]
    fn test_mixin_methods_delegate_to_registry() {
        let uploader = Uploader::default();
        assert!(!uploader.has_hook("before_upload"));

        uploader.register_hook_many(&["before_upload", "after_upload"], 10, |_: &mut HookArgs| {
            Ok(None)
        });
        assert!(uploader.has_hook("before_upload"));
        assert!(uploader.has_hook("after_upload"));

        let table = uploader.hooks("before_upload").expect("registered");
        assert_eq!(table.len(), 1);

        uploader.clear_hooks(Some("before_upload"));
        assert!(!uploader.has_hook("before_upload"));
        assert!(uploader.has_hook("after_upload"));
    }
}
