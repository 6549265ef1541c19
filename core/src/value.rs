//! `Value` — Type-erased candidate that flows into every [`Matcher`](crate::Matcher)
//!
//! Matchers never see a concrete Rust type. A test converts whatever it wants
//! to check into a `Value`, and every matcher inspects the variant it needs.
//! A candidate of the wrong shape is an ordinary non-match, never an error.
//!
//! # Extensibility via `Custom` and `Sequence`
//!
//! - Domain types implement [`CustomValue`] and are wrapped with [`Value::custom`].
//! - Traversal-only sources (no known size) implement [`Sequence`] and are
//!   wrapped with [`Value::sequence`].

use crate::Description;
use std::any::Any;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Extension trait for domain types carried as [`Value::Custom`].
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use vouch::{CustomValue, Value};
///
/// #[derive(Debug)]
/// struct Cheese {
///     name: &'static str,
/// }
///
/// impl CustomValue for Cheese {
///     fn custom_type_name(&self) -> &'static str {
///         "cheese"
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// let value = Value::custom(Cheese { name: "stilton" });
/// assert_eq!(value.type_name(), "cheese");
/// ```
pub trait CustomValue: Send + Sync + Debug {
    /// Human-readable type identifier used in mismatch text.
    ///
    /// Convention: `snake_case`, e.g. `"cheese"`, `"jwt_claims"`.
    fn custom_type_name(&self) -> &'static str;

    /// Returns `self` as `&dyn Any` so matchers can downcast.
    fn as_any(&self) -> &dyn Any;

    /// Render this value into a description.
    ///
    /// Defaults to the `Debug` form wrapped in angle brackets.
    fn describe_to(&self, description: &mut Description) {
        description.append_text(&format!("<{self:?}>"));
    }
}

/// A forward-only source of values without a known size.
///
/// Each call to [`traverse`](Self::traverse) starts one new pass. Matchers
/// never assume a traversal can be rewound; a matcher that needs the
/// elements twice asks for a second traversal.
pub trait Sequence: Send + Sync + Debug {
    /// Start a new traversal over the elements.
    fn traverse(&self) -> Box<dyn Iterator<Item = Value> + '_>;
}

/// A [`Sequence`] over owned values that hides their count.
///
/// Useful for checking that a matcher works on traversal-only input.
#[derive(Debug, Clone, Default)]
pub struct ForwardOnly(Vec<Value>);

impl ForwardOnly {
    /// Wrap the given elements.
    pub fn new(items: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self(items.into_iter().map(Into::into).collect())
    }
}

impl Sequence for ForwardOnly {
    fn traverse(&self) -> Box<dyn Iterator<Item = Value> + '_> {
        Box::new(self.0.iter().cloned())
    }
}

/// The shape of a [`Value`], used by type-membership matchers and config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Char,
    String,
    Array,
    List,
    Map,
    Sequence,
    Custom,
}

impl ValueKind {
    /// The lowercase name used in descriptions.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Char => "char",
            Self::String => "string",
            Self::Array => "array",
            Self::List => "list",
            Self::Map => "map",
            Self::Sequence => "sequence",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate value.
///
/// # Variants
///
/// - `Null` — absent value; never satisfies a container matcher
/// - `Bool`, `Int`, `Float`, `Char`, `String` — scalars
/// - `Array` — fixed array, sized
/// - `List` — sized collection
/// - `Map` — key/value entries in insertion order, sized
/// - `Sequence` — traversal-only source, size unknown
/// - `Custom` — user-defined types implementing [`CustomValue`]
///
/// # Example
///
/// ```
/// use vouch::Value;
///
/// let list = Value::list(["a", "b"]);
/// assert_eq!(list.len(), Some(2));
/// assert_eq!(list.to_string(), "[a, b]");
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    String(String),
    Array(Vec<Value>),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Sequence(Arc<dyn Sequence>),
    Custom(Arc<dyn CustomValue>),
}

// Trait objects compare by allocation: same Arc = equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) | (Self::List(a), Self::List(b)) => a == b,
            // Entry order is presentation only.
            (Self::Map(a), Self::Map(b)) => {
                a.len() == b.len() && a.iter().all(|entry| b.contains(entry))
            }
            (Self::Sequence(a), Self::Sequence(b)) => Arc::ptr_eq(a, b),
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    /// Build an array value.
    pub fn array(items: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Build a list value.
    pub fn list(items: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a map value; entries keep the given order.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Wrap a traversal-only source.
    pub fn sequence(sequence: impl Sequence + 'static) -> Self {
        Self::Sequence(Arc::new(sequence))
    }

    /// Shortcut for `Value::sequence(ForwardOnly::new(items))`.
    pub fn forward_only(items: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self::sequence(ForwardOnly::new(items))
    }

    /// Wrap a user-defined value.
    pub fn custom(value: impl CustomValue + 'static) -> Self {
        Self::Custom(Arc::new(value))
    }

    /// Returns `true` if this is the `Null` variant.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The shape of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Char(_) => ValueKind::Char,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Custom(_) => ValueKind::Custom,
        }
    }

    /// Returns a string naming the type of this value.
    ///
    /// For `Custom` variants, this delegates to [`CustomValue::custom_type_name`].
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Custom(c) => c.custom_type_name(),
            other => other.kind().as_str(),
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

    /// Try to get the value as an integer.
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get the value as a custom value reference.
    #[inline]
    #[must_use]
    pub fn as_custom(&self) -> Option<&dyn CustomValue> {
        match self {
            Self::Custom(c) => Some(c.as_ref()),
            _ => None,
        }
    }

    /// Map entries, if this is a map.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> Option<&[(Value, Value)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Size of a sized aggregate (array, list or map), in O(1).
    ///
    /// Sequences have no known size and return `None`.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Array(items) | Self::List(items) => Some(items.len()),
            Self::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Returns `Some(true)` for an empty sized aggregate.
    #[must_use]
    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|len| len == 0)
    }

    /// Elements of an array, list or sequence.
    ///
    /// Each call on a sequence starts exactly one new traversal.
    #[must_use]
    pub fn items(&self) -> Option<Items<'_>> {
        match self {
            Self::Array(items) | Self::List(items) => Some(Items::Slice(items.iter())),
            Self::Sequence(sequence) => Some(Items::Traversal(sequence.traverse())),
            _ => None,
        }
    }
}

/// Iterator over the elements of a [`Value`], see [`Value::items`].
///
/// Slice-backed values lend their elements; sequences hand out owned ones.
pub enum Items<'a> {
    Slice(std::slice::Iter<'a, Value>),
    Traversal(Box<dyn Iterator<Item = Value> + 'a>),
}

impl<'a> Iterator for Items<'a> {
    type Item = Cow<'a, Value>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Slice(iter) => iter.next().map(Cow::Borrowed),
            Self::Traversal(iter) => iter.next().map(Cow::Owned),
        }
    }
}

impl Debug for Items<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slice(iter) => f.debug_tuple("Slice").field(&iter.len()).finish(),
            Self::Traversal(_) => f.write_str("Traversal"),
        }
    }
}

/// The plain form: strings unquoted, lists as `[a, b]`, maps as `{k=v}`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::String(s) => f.write_str(s),
            Self::Array(items) | Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_str("}")
            }
            Self::Sequence(sequence) => write!(f, "{sequence:?}"),
            Self::Custom(custom) => write!(f, "{custom:?}"),
        }
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

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

// Counts beyond i64::MAX saturate; no real collection gets there.
impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<K, V> From<BTreeMap<K, V>> for Value
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::map(map)
    }
}
