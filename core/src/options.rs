//! `MatchOptions` — knobs that change how collection patterns are satisfied.

/// Configuration for a [`Matcher`](crate::Matcher).
///
/// The default is the lenient policy every existing assertion was written
/// against. Stricter behaviour has to be asked for explicitly.
///
/// With feature `serde` this deserializes from a map such as
/// `{ exact_multiset: true }`; missing fields take their defaults and unknown
/// fields are rejected.
///
/// # Example
///
/// ```
/// use muster::MatchOptions;
///
/// let opts = MatchOptions::new().with_exact_multiset(true);
/// assert!(opts.exact_multiset);
/// assert!(!MatchOptions::default().exact_multiset);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MatchOptions {
    /// Require each collection pattern element to be satisfied by a
    /// distinct actual element.
    ///
    /// `false` (default): each pattern element takes the first actual element
    /// that matches it, and one actual element may satisfy several pattern
    /// elements.
    ///
    /// `true`: an assignment of pattern elements to pairwise distinct actual
    /// elements must exist. Lists and sets are treated alike either way.
    pub exact_multiset: bool,
}

impl MatchOptions {
    /// The default, lenient options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set [`exact_multiset`](Self::exact_multiset).
    #[must_use]
    pub fn with_exact_multiset(mut self, exact_multiset: bool) -> Self {
        self.exact_multiset = exact_multiset;
        self
    }
}
