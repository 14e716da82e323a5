//! Convenience macros for building hook argument lists.

/// Macro for quickly building a [`HookArgs`](hookable_core::HookArgs)
/// list. Accepts anything convertible into a `serde_json::Value`.
///
/// # Example
/// ```rust
/// use hookable::hook_args;
/// use serde_json::json;
///
/// let args = hook_args![15, "report.pdf", json!({ "dry_run": true })];
/// assert_eq!(args.len(), 3);
/// assert_eq!(args.get_i64(0), Some(15));
/// ```
#[macro_export]
macro_rules! hook_args {
    () => {
        $crate::HookArgs::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut args = $crate::HookArgs::new();
        $(
            args.push($value);
        )+
        args
    }};
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    #[test]
    fn test_empty_macro() {
        let args = hook_args![];
        assert!(args.is_empty());
    }

    #[test]
    fn test_mixed_values_and_trailing_comma() {
        let args = hook_args![1, "two", true, json!([3, 4]),];
        assert_eq!(args.get_i64(0), Some(1));
        assert_eq!(args.get_str(1), Some("two"));
        assert_eq!(args.get_bool(2), Some(true));
        assert_eq!(args.get(3), Some(&json!([3, 4])));
    }
}
