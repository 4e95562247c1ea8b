//! Matcher — recursive superset matching of an actual value against a pattern
//!
//! The decision is driven by the pattern's shape:
//!
//! | Pattern | Actual must be | Requirement |
//! |---------|----------------|-------------|
//! | `Map` | `Map` | every pattern key present, values match recursively |
//! | `List` / `Set` | `List` / `Set` | every pattern element matched by some actual element |
//! | scalar | anything | `actual == pattern` |
//!
//! Keys and elements that only the actual value has are ignored.

use std::collections::BTreeMap;

use tracing::trace;

use crate::{MatchOptions, Value};

/// Superset matcher.
///
/// Stateless apart from its [`MatchOptions`]; share one freely across threads.
///
/// # INV: pure
///
/// `matches` never mutates its inputs and depends on nothing but
/// `(options, actual, pattern)`. Calling it twice gives the same answer.
///
/// # Collection policy
///
/// By default each pattern element is checked on its own: the actual
/// elements are scanned in order and the first one that matches satisfies
/// it. Nothing is reserved, so one actual element can satisfy several
/// pattern elements, and `[{"a": 1}]` matches `[{"a": 1}, {"a": 1}]`.
/// Assertions in the wild lean on this, so it stays the default.
///
/// [`Matcher::exact_multiset`] requires pattern elements to land on
/// distinct actual elements instead.
///
/// # Example
///
/// ```
/// use muster::{Matcher, Value};
///
/// let actual = Value::from(vec![Value::from("a")]);
/// let pattern = Value::from(vec!["a", "a"]);
///
/// assert!(Matcher::lenient().matches(&actual, &pattern));
/// assert!(!Matcher::exact_multiset().matches(&actual, &pattern));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    options: MatchOptions,
}

impl Matcher {
    /// Create a matcher with the given options.
    #[must_use]
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    /// The default matcher: greedy, non-reserving collection matching.
    #[must_use]
    pub fn lenient() -> Self {
        Self::default()
    }

    /// A matcher that needs a distinct actual element per pattern element.
    #[must_use]
    pub fn exact_multiset() -> Self {
        Self::new(MatchOptions::new().with_exact_multiset(true))
    }

    /// Returns the options this matcher was built with.
    #[must_use]
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Returns `true` if `actual` contains everything `pattern` requires.
    ///
    /// Never fails: any shape mismatch is simply `false`.
    #[must_use]
    pub fn matches(&self, actual: &Value, pattern: &Value) -> bool {
        match pattern {
            Value::Map(required) => self.matches_map(actual, required),
            Value::List(required) | Value::Set(required) => {
                self.matches_collection(actual, required)
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                let equal = actual == pattern;
                if !equal {
                    trace!(?actual, ?pattern, "scalar mismatch");
                }
                equal
            }
        }
    }

    fn matches_map(&self, actual: &Value, required: &BTreeMap<String, Value>) -> bool {
        let Some(fields) = actual.as_map() else {
            trace!(actual = actual.type_name(), "expected a map");
            return false;
        };

        for (key, expected) in required {
            let Some(value) = fields.get(key) else {
                trace!(%key, "key missing");
                return false;
            };
            if !self.matches(value, expected) {
                trace!(%key, "value under key does not match");
                return false;
            }
        }

        true
    }

    fn matches_collection(&self, actual: &Value, required: &[Value]) -> bool {
        let Some(items) = actual.as_items() else {
            trace!(actual = actual.type_name(), "expected a list or set");
            return false;
        };

        if self.options.exact_multiset {
            self.assign_distinct(items, required)
        } else {
            self.assign_greedy(items, required)
        }
    }

    /// Each pattern element takes the first actual element that matches it.
    /// No reservation, no backtracking.
    fn assign_greedy(&self, items: &[Value], required: &[Value]) -> bool {
        for (index, expected) in required.iter().enumerate() {
            if !items.iter().any(|item| self.matches(item, expected)) {
                trace!(index, candidates = items.len(), "pattern element unmatched");
                return false;
            }
        }
        true
    }

    /// Maximum bipartite matching between pattern and actual elements
    /// (augmenting paths). Succeeds iff every pattern element gets its own
    /// actual element.
    fn assign_distinct(&self, items: &[Value], required: &[Value]) -> bool {
        if required.len() > items.len() {
            trace!(
                required = required.len(),
                available = items.len(),
                "more pattern elements than actual elements"
            );
            return false;
        }

        let candidates: Vec<Vec<usize>> = required
            .iter()
            .map(|expected| {
                items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| self.matches(item, expected))
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect();

        if let Some(index) = candidates.iter().position(Vec::is_empty) {
            trace!(index, candidates = items.len(), "pattern element unmatched");
            return false;
        }

        let mut owner: Vec<Option<usize>> = vec![None; items.len()];
        for index in 0..required.len() {
            let mut visited = vec![false; items.len()];
            if !augment(index, &candidates, &mut owner, &mut visited) {
                trace!(index, "no distinct actual element left for pattern element");
                return false;
            }
        }
        true
    }
}

/// Try to give pattern element `i` an actual element, re-seating earlier
/// owners along an alternating path if needed.
fn augment(
    i: usize,
    candidates: &[Vec<usize>],
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for &j in &candidates[i] {
        if visited[j] {
            continue;
        }
        visited[j] = true;
        let free = match owner[j] {
            None => true,
            Some(k) => augment(k, candidates, owner, visited),
        };
        if free {
            owner[j] = Some(i);
            return true;
        }
    }
    false
}
