use thiserror::Error;

/// Errors from building a [`Value`](crate::Value) out of external data.
///
/// Matching itself never fails; these only surface while deserializing, so
/// the type exists only with the `serde` feature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A mapping key was not a string.
    #[error("mapping keys must be strings, found {found}")]
    NonStringKey {
        /// Type name of the offending key.
        found: &'static str,
    },

    /// The same key appeared twice in one mapping.
    #[error("duplicate mapping key \"{key}\"")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },
}
