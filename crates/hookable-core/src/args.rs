//! Positional argument list passed through a hook chain.
//!
//! Callbacks receive the list by mutable reference: every callback sees
//! the mutations made by the callbacks that ran before it, and the
//! caller sees the final state after the run returns. Overwriting an
//! argument in place is the primary way callbacks communicate; return
//! values are secondary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered list of hook arguments, each an arbitrary JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookArgs {
    /// The argument values, in the order the caller supplied them.
    values: Vec<Value>,
}

impl HookArgs {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Creates an argument list from existing values.
    pub fn from_values(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Appends a value (builder style).
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Appends an integer value (builder style).
    pub fn with_int(self, value: i64) -> Self {
        self.with_value(value)
    }

    /// Appends a string value (builder style).
    pub fn with_str(self, value: &str) -> Self {
        self.with_value(value)
    }

    /// Appends a boolean value (builder style).
    pub fn with_bool(self, value: bool) -> Self {
        self.with_value(value)
    }

    /// Appends a value in place.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Gets an argument by position.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Gets a mutable reference to an argument by position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.values.get_mut(index)
    }

    /// Gets a string argument by position.
    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(|v| v.as_str())
    }

    /// Gets an i64 argument by position.
    pub fn get_i64(&self, index: usize) -> Option<i64> {
        self.values.get(index).and_then(|v| v.as_i64())
    }

    /// Gets an f64 argument by position.
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        self.values.get(index).and_then(|v| v.as_f64())
    }

    /// Gets a boolean argument by position.
    pub fn get_bool(&self, index: usize) -> Option<bool> {
        self.values.get(index).and_then(|v| v.as_bool())
    }

    /// Overwrites the argument at `index`.
    ///
    /// Returns `false` if the position does not exist; the list never
    /// grows through `set`, only through `push`.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> bool {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Iterates over the argument values.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Returns the values as a slice.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consumes the list, returning the underlying values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl From<Vec<Value>> for HookArgs {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<Value> for HookArgs {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a HookArgs {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_and_typed_accessors() {
        let args = HookArgs::new()
            .with_int(42)
            .with_str("report.pdf")
            .with_bool(true);
        assert_eq!(args.len(), 3);
        assert_eq!(args.get_i64(0), Some(42));
        assert_eq!(args.get_str(1), Some("report.pdf"));
        assert_eq!(args.get_bool(2), Some(true));
    }

    #[test]
    fn test_accessor_type_mismatch_returns_none() {
        let args = HookArgs::new().with_str("not a number");
        assert_eq!(args.get_i64(0), None);
        assert_eq!(args.get_str(0), Some("not a number"));
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut args = HookArgs::new().with_int(10);
        assert!(args.set(0, 235629857_i64));
        assert_eq!(args.get_i64(0), Some(235629857));
    }

    #[test]
    fn test_set_out_of_bounds_is_rejected() {
        let mut args = HookArgs::new();
        assert!(!args.set(3, json!("nope")));
        assert!(args.is_empty());
    }

    #[test]
    fn test_serde_roundtrip_is_transparent() {
        let args = HookArgs::new().with_int(1).with_str("two");
        let json = serde_json::to_string(&args).expect("serialize");
        assert_eq!(json, r#"[1,"two"]"#);
        let parsed: HookArgs = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(args, parsed);
    }
}
