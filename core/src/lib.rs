//! muster - superset matching for nested test payloads
//!
//! Checks that an *actual* value produced by a system under test contains at
//! least what an expected *pattern* (the "muster") asks for. The actual value
//! may carry more mapping keys and more collection elements than the pattern,
//! never fewer of the required ones.
//!
//! # Architecture
//!
//! - [`Value`] — closed tree of mappings, collections (list / set) and scalars
//! - [`Matcher`] — one recursive decision procedure, dispatching on the pattern's shape
//! - [`MatchOptions`] — collection policy (`exact_multiset`, off by default)
//!
//! # Key Design Insights
//!
//! 1. **Mismatch is data**: matching returns `bool` and never fails. Errors
//!    only exist where external data is turned into a [`Value`].
//!
//! 2. **Greedy collections by default**: each pattern element is satisfied by
//!    the first actual element that matches it, and an actual element may be
//!    reused. Distinct assignment is opt-in via [`MatchOptions`].
//!
//! 3. **No coercion**: `"1"` never matches `1`, `true` never matches `1`.
//!    Integers and floats compare numerically.
//!
//! # Example
//!
//! ```
//! use muster::Value;
//!
//! let host: Value = [
//!     ("uuid", Value::from("f4f69922-5409-410d-b9b0-198c9389650f")),
//!     ("state", Value::from("present")),
//!     ("fencing", Value::map()),
//!     ("info", Value::from("rack 4")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let pattern: Value = [("state", Value::from("present")), ("fencing", Value::map())]
//!     .into_iter()
//!     .collect();
//!
//! assert!(muster::matches(&host, &pattern));
//! ```
//!
//! # Features
//!
//! - `serde` — `Deserialize` for [`Value`] and [`MatchOptions`], and `ValueError`
//! - `json` — conversions from `serde_json::Value` and [`matches_json`]

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "serde")]
mod error;
mod matcher;
mod options;
mod value;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "json")]
mod json;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "serde")]
pub use error::ValueError;
pub use matcher::Matcher;
pub use options::MatchOptions;
pub use value::{Kind, Number, Value};

#[cfg(feature = "json")]
pub use json::matches_json;

/// Returns `true` if `actual` contains everything `pattern` requires,
/// using the default (lenient) options.
///
/// ```
/// use muster::{matches, Value};
///
/// let empty = Value::map();
/// let needs_x: Value = [("x", 1)].into_iter().collect();
/// assert!(!matches(&empty, &needs_x));
/// assert!(!matches(&Value::from("1"), &Value::from(1)));
/// ```
#[must_use]
pub fn matches(actual: &Value, pattern: &Value) -> bool {
    Matcher::lenient().matches(actual, pattern)
}

/// Like [`matches`], with explicit [`MatchOptions`].
#[must_use]
pub fn matches_with(actual: &Value, pattern: &Value, options: &MatchOptions) -> bool {
    Matcher::new(*options).matches(actual, pattern)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use muster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{matches, matches_with, Kind, MatchOptions, Matcher, Number, Value};
}
