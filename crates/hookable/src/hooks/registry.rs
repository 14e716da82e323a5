//! Hook registry — callbacks register under string hook names with
//! priority ordering.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use serde_json::Value;
use tracing::{debug, info};

use hookable_core::{HookArgs, HookResult};

/// Priority used when the registrant does not care about ordering.
pub const DEFAULT_PRIORITY: i32 = 0;

/// Trait for hook callback implementations.
///
/// One canonical signature for every callback: a mutable borrow of the
/// shared argument list in, an optional value out. Shape mismatches are
/// therefore impossible at invocation time. A failure aborts the rest
/// of the chain.
pub trait HookCallback: Send + Sync {
    /// Runs the callback against the shared argument list.
    fn call(&self, args: &mut HookArgs) -> HookResult<Option<Value>>;
}

impl<F> HookCallback for F
where
    F: Fn(&mut HookArgs) -> HookResult<Option<Value>> + Send + Sync,
{
    fn call(&self, args: &mut HookArgs) -> HookResult<Option<Value>> {
        self(args)
    }
}

/// Callbacks for one hook name, keyed by priority.
///
/// The `BTreeMap` iterates priorities in ascending numeric order; the
/// inner `Vec` preserves registration order within one priority.
pub type PriorityTable = BTreeMap<i32, Vec<Arc<dyn HookCallback>>>;

/// Registry of hook callbacks organized by hook name.
///
/// Instance-scoped: each host embeds its own registry, created empty.
/// Entries are only ever added by [`register`](Self::register) and
/// removed whole-name or whole-registry by [`clear`](Self::clear), so a
/// stored name always maps to a non-empty table and existence checks
/// need no structural validation.
pub struct HookRegistry {
    /// Hook name → priority → callbacks in registration order.
    hooks: RwLock<HashMap<String, PriorityTable>>,
}

impl HookRegistry {
    /// Creates a new empty hook registry.
    pub fn new() -> Self {
        Self {
            hooks: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a callback under a hook name.
    ///
    /// Lower priority runs earlier. Registering the same callback twice
    /// under one name and priority stores it twice; both copies run.
    /// Registration is fire-and-forget: nothing about the stored entry
    /// is handed back.
    pub fn register<C>(&self, name: impl Into<String>, priority: i32, callback: C)
    where
        C: HookCallback + 'static,
    {
        self.register_arc(name.into(), priority, Arc::new(callback));
    }

    /// Registers one callback under several hook names in one call.
    pub fn register_many<I, C>(&self, names: I, priority: i32, callback: C)
    where
        I: IntoIterator,
        I::Item: Into<String>,
        C: HookCallback + 'static,
    {
        let callback: Arc<dyn HookCallback> = Arc::new(callback);
        for name in names {
            self.register_arc(name.into(), priority, Arc::clone(&callback));
        }
    }

    /// Registers an already-shared callback under a hook name.
    pub fn register_arc(&self, name: String, priority: i32, callback: Arc<dyn HookCallback>) {
        let mut hooks = self.hooks.write().unwrap();
        let bucket = hooks.entry(name.clone()).or_default().entry(priority).or_default();
        bucket.push(callback);

        debug!(
            hook = %name,
            priority = priority,
            bucket_len = bucket.len(),
            "Hook callback registered"
        );
    }

    /// Returns whether any callbacks are registered under a hook name.
    ///
    /// Never fails: a plain existence check suffices because the
    /// registry never stores an empty table.
    pub fn has_hook(&self, name: &str) -> bool {
        let hooks = self.hooks.read().unwrap();
        hooks.contains_key(name)
    }

    /// Returns a snapshot of the full priority table for a hook name,
    /// or `None` when nothing is registered under it.
    pub fn hooks(&self, name: &str) -> Option<PriorityTable> {
        let hooks = self.hooks.read().unwrap();
        hooks.get(name).cloned()
    }

    /// Returns the number of callbacks registered under a hook name,
    /// across all priorities.
    pub fn callback_count(&self, name: &str) -> usize {
        let hooks = self.hooks.read().unwrap();
        hooks
            .get(name)
            .map(|table| table.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Returns all registered hook names.
    pub fn hook_names(&self) -> Vec<String> {
        let hooks = self.hooks.read().unwrap();
        hooks.keys().cloned().collect()
    }

    /// Returns whether the registry holds no hooks at all.
    pub fn is_empty(&self) -> bool {
        let hooks = self.hooks.read().unwrap();
        hooks.is_empty()
    }

    /// Clears hooks.
    ///
    /// Given an existing hook name, removes only that name's entry.
    /// Given `None` or a name with no registrations, clears the entire
    /// registry. Returns `&self` so calls can be chained.
    pub fn clear(&self, name: Option<&str>) -> &Self {
        let mut hooks = self.hooks.write().unwrap();
        match name {
            Some(name) if hooks.contains_key(name) => {
                hooks.remove(name);
                info!(hook = %name, "Hook cleared");
            }
            _ => {
                let count = hooks.len();
                hooks.clear();
                info!(hook_count = count, "All hooks cleared");
            }
        }
        self
    }

    /// Flattens the callbacks for one name into execution order,
    /// ascending by priority then registration order.
    ///
    /// Taken under the read lock and released before any callback runs,
    /// so callbacks may re-enter the registry without deadlocking.
    pub(crate) fn execution_snapshot(&self, name: &str) -> Option<Vec<Arc<dyn HookCallback>>> {
        let hooks = self.hooks.read().unwrap();
        hooks.get(name).map(|table| {
            table
                .values()
                .flat_map(|bucket| bucket.iter().map(Arc::clone))
                .collect()
        })
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hooks = self.hooks.read().unwrap();
        let mut map = f.debug_map();
        for (name, table) in hooks.iter() {
            let counts: Vec<(i32, usize)> =
                table.iter().map(|(priority, bucket)| (*priority, bucket.len())).collect();
            map.entry(name, &counts);
        }
        map.finish()
    }
}
