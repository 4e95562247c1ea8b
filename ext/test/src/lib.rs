//! muster-test: assertions and conformance fixtures
//!
//! Gives API test suites the `assert superset(actual, pattern)` idiom as
//! macros, and runs the YAML conformance fixtures that pin down the
//! matcher's behaviour.
//!
//! # Example
//!
//! ```
//! use muster_test::prelude::*;
//! use serde_json::json;
//!
//! let body = json!({
//!     "uuid": "f4f69922-5409-410d-b9b0-198c9389650f",
//!     "state": "present",
//!     "fencing": {},
//! });
//!
//! assert_superset!(&body, json!({"state": "present", "fencing": {}}));
//! assert_not_superset!(&body, json!({"state": "absent"}));
//! ```


pub use fixture::{CaseResult, Fixture, FixtureCase, FixtureError};
pub use muster::{matches, matches_with, MatchOptions, Value};

/// Assert that `actual` contains everything `pattern` requires.
///
/// Both arguments accept anything that converts into [`Value`]. An optional
/// third argument onwards is a custom panic message, as with `assert!`.
/// On failure both values are printed with `Debug`.
#[macro_export]
macro_rules! assert_superset {
    ($actual:expr, $pattern:expr $(,)?) => {{
        let actual: $crate::Value = ::core::convert::Into::into($actual);
        let pattern: $crate::Value = ::core::convert::Into::into($pattern);
        assert!(
            $crate::matches(&actual, &pattern),
            "actual value is not a superset of the pattern\n   actual: {:?}\n  pattern: {:?}",
            actual,
            pattern,
        );
    }};
    ($actual:expr, $pattern:expr, $($arg:tt)+) => {{
        let actual: $crate::Value = ::core::convert::Into::into($actual);
        let pattern: $crate::Value = ::core::convert::Into::into($pattern);
        assert!($crate::matches(&actual, &pattern), $($arg)+);
    }};
}

/// Assert that `actual` does NOT satisfy `pattern`.
#[macro_export]
macro_rules! assert_not_superset {
    ($actual:expr, $pattern:expr $(,)?) => {{
        let actual: $crate::Value = ::core::convert::Into::into($actual);
        let pattern: $crate::Value = ::core::convert::Into::into($pattern);
        assert!(
            !$crate::matches(&actual, &pattern),
            "actual value unexpectedly satisfies the pattern\n   actual: {:?}\n  pattern: {:?}",
            actual,
            pattern,
        );
    }};
    ($actual:expr, $pattern:expr, $($arg:tt)+) => {{
        let actual: $crate::Value = ::core::convert::Into::into($actual);
        let pattern: $crate::Value = ::core::convert::Into::into($pattern);
        assert!(!$crate::matches(&actual, &pattern), $($arg)+);
    }};
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{assert_not_superset, assert_superset};
    pub use muster::prelude::*;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    #[test]
    fn test_assert_superset_on_nics() {
        let nics = json!([
            {"host": "f4f69922-5409-410d-b9b0-198c9389650f", "hwaddr": "1a:2b:3c:4d:5e:6f"},
            {"host": "f4f69922-5409-410d-b9b0-198c9389650f", "hwaddr": "aa:bb:cc:dd:ee:ff"},
        ]);
        assert_superset!(&nics, json!([{"hwaddr": "aa:bb:cc:dd:ee:ff"}]));
        assert_not_superset!(&nics, json!([{"hwaddr": "66:55:44:33:22:11"}]));
    }

    #[test]
    fn test_assert_superset_accepts_plain_values() {
        assert_superset!(vec![1, 2, 3], vec![3]);
        assert_not_superset!("1", 1);
    }

    #[test]
    #[should_panic(expected = "not a superset")]
    fn test_assert_superset_panics_with_values() {
        assert_superset!(json!({}), json!({"x": 1}));
    }

    #[test]
    #[should_panic(expected = "host lookup")]
    fn test_assert_superset_custom_message() {
        assert_superset!(json!({}), json!({"x": 1}), "host lookup {}", "failed");
    }

    #[test]
    #[should_panic(expected = "unexpectedly satisfies")]
    fn test_assert_not_superset_panics() {
        assert_not_superset!(json!({"x": 1, "y": 2}), json!({"x": 1}));
    }
}
