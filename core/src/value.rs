//! `Value` — the closed data model both actual values and patterns live in
//!
//! Every input to the matcher is a tree built from three categories:
//! mappings, collections, and scalars. The matcher dispatches on
//! [`Value::kind`] of the pattern, so the enum is deliberately closed.
//!
//! Trees usually arrive from a deserializer (see the `serde` and `json`
//! features) or are assembled in test code through the `From` conversions.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A number as the matcher sees it.
///
/// Integers keep full precision for both signed and unsigned 64-bit inputs.
/// Equality is numeric across the two variants: `Int(1) == Float(1.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// An integral number.
    Int(i128),
    /// A floating point number. Compared with IEEE equality, so `NaN != NaN`.
    Float(f64),
}

impl Number {
    /// Returns the value as `f64`, rounding large integers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Returns the value as an integer if it is integral and in range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn as_i128(self) -> Option<i128> {
        match self {
            Self::Int(i) => Some(i),
            Self::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f.abs() < i128::MAX as f64 {
                    Some(f as i128)
                } else {
                    None
                }
            }
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(i), Self::Float(f)) | (Self::Float(f), Self::Int(i)) => {
                Self::Float(f).as_i128() == Some(i)
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// The shape category of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `Map`
    Mapping,
    /// `List` or `Set`
    Collection,
    /// `Null`, `Bool`, `Number` or `String`
    Scalar,
}

/// A tree-shaped dynamic value.
///
/// # Variants
///
/// - `Null`, `Bool`, `Number`, `String` — scalars
/// - `List` — ordered collection
/// - `Set` — unordered collection without duplicates (see [`Value::set`])
/// - `Map` — string-keyed mapping with unique keys
///
/// `PartialEq` is structural. Numbers compare numerically, booleans never
/// equal numbers, and collections compare element by element in stored order.
///
/// # Example
///
/// ```
/// use muster::{Kind, Value};
///
/// let host: Value = [("state", Value::from("present"))].into_iter().collect();
/// assert_eq!(host.kind(), Kind::Mapping);
/// assert_eq!(host.get("state").and_then(Value::as_str), Some("present"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value (`null` / `None`).
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(Number),
    /// A string, compared by codepoints.
    String(String),
    /// An ordered collection.
    List(Vec<Value>),
    /// An unordered collection. Items keep their insertion order for scanning.
    Set(Vec<Value>),
    /// A mapping from unique string keys to values.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Build a `Set`, dropping items equal to one already collected.
    ///
    /// ```
    /// use muster::Value;
    ///
    /// let set = Value::set([1, 2, 1]);
    /// assert_eq!(set.as_items().map(<[Value]>::len), Some(2));
    /// ```
    pub fn set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut out: Vec<Value> = Vec::new();
        for item in items {
            let item = item.into();
            if !out.contains(&item) {
                out.push(item);
            }
        }
        Self::Set(out)
    }

    /// An empty mapping.
    #[must_use]
    pub fn map() -> Self {
        Self::Map(BTreeMap::new())
    }

    /// Returns the shape category the matcher dispatches on.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Map(_) => Kind::Mapping,
            Self::List(_) | Self::Set(_) => Kind::Collection,
            Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_) => Kind::Scalar,
        }
    }

    /// Returns a short name for the variant, used in log events.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
        }
    }

    /// Returns `true` if this is `Null`.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get the value as a boolean.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Try to get the value as an integer. Integral floats convert.
    #[inline]
    #[must_use]
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Self::Number(n) => n.as_i128(),
            _ => None,
        }
    }

    /// Try to get the value as a float.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// Try to get the value as a mapping.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Try to get the items of a `List` or `Set`.
    #[inline]
    #[must_use]
    pub fn as_items(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) | Self::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a key if this is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|m| m.get(key))
    }

    /// Returns `true` if `self` contains everything `pattern` requires.
    ///
    /// Shorthand for [`crate::matches`]`(self, pattern)`.
    ///
    /// ```
    /// use muster::Value;
    ///
    /// let actual: Value = [("x", 1), ("y", 2)].into_iter().collect();
    /// let pattern: Value = [("x", 1)].into_iter().collect();
    /// assert!(actual.is_superset_of(&pattern));
    /// assert!(!pattern.is_superset_of(&actual));
    /// ```
    #[must_use]
    pub fn is_superset_of(&self, pattern: &Value) -> bool {
        crate::matches(self, pattern)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Conversions
// ═══════════════════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Self::Number(Number::Int(i128::from(i)))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Self::Number(Number::Int(i as i128))
    }
}

impl From<isize> for Value {
    fn from(i: isize) -> Self {
        Self::Number(Number::Int(i as i128))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Number(Number::Float(f))
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Number(Number::Float(f64::from(f)))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T> From<BTreeMap<String, T>> for Value
where
    T: Into<Value>,
{
    fn from(map: BTreeMap<String, T>) -> Self {
        Self::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T, S> From<HashMap<String, T, S>> for Value
where
    T: Into<Value>,
{
    fn from(map: HashMap<String, T, S>) -> Self {
        Self::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

impl<K, T> FromIterator<(K, T)> for Value
where
    K: Into<String>,
    T: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
