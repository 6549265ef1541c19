//! Config types for data-driven matcher construction.
//!
//! [`MatcherConfig`] mirrors the factory functions but is
//! serde-deserializable, so a matcher tree can be written as JSON or YAML and
//! turned into a runtime matcher with [`MatcherConfig::build`].
//!
//! ```json
//! { "type": "has_items", "matchers": [
//!     { "type": "equal_to", "value": 3 },
//!     { "type": "instance_of", "kind": "string" }
//! ] }
//! ```
//!
//! Literal values are JSON values: arrays become [`Value::List`], objects
//! become [`Value::Map`] in key order, integers become [`Value::Int`] and
//! other numbers [`Value::Float`].

use crate::{
    all_of, anything, array_containing_matchers, contains_matchers, equal_to, has_entry_that,
    has_item, has_items, has_key_that, has_size_that, has_value_that, instance_of, is,
    iterable_with_size_that, DescribedAs, Matcher, MatcherError, MatcherExt, Value, ValueKind,
    MAX_DEPTH,
};
use serde::Deserialize;

/// Configuration for one matcher node.
///
/// Uses `#[serde(tag = "type")]` for discriminated union deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatcherConfig {
    /// [`equal_to`](crate::equal_to) a literal.
    EqualTo { value: serde_json::Value },

    /// [`anything`](crate::anything).
    Anything,

    /// [`instance_of`](crate::instance_of) a value kind.
    InstanceOf { kind: ValueKind },

    /// [`is`](crate::is) decorator.
    Is { matcher: Box<MatcherConfig> },

    /// Conjunction; every child must match.
    AllOf { matchers: Vec<MatcherConfig> },

    /// Templated description over a wrapped matcher.
    DescribedAs {
        template: String,
        matcher: Box<MatcherConfig>,
        #[serde(default)]
        values: Vec<serde_json::Value>,
    },

    /// Size of a sized collection.
    HasSize { matcher: Box<MatcherConfig> },

    /// Element count of an iterable.
    IterableWithSize { matcher: Box<MatcherConfig> },

    /// Ordered, exact-length containment over any iterable.
    Contains { matchers: Vec<MatcherConfig> },

    /// Ordered, exact-length containment over arrays only.
    ArrayContaining { matchers: Vec<MatcherConfig> },

    /// Some element matches.
    HasItem { matcher: Box<MatcherConfig> },

    /// Every child is matched by some element.
    HasItems { matchers: Vec<MatcherConfig> },

    /// Some map entry matches on both sides.
    HasEntry {
        key: Box<MatcherConfig>,
        value: Box<MatcherConfig>,
    },

    /// Some map key matches.
    HasKey { matcher: Box<MatcherConfig> },

    /// Some map value matches.
    HasValue { matcher: Box<MatcherConfig> },
}

impl MatcherConfig {
    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidConfig`] if the text is not a valid config.
    pub fn from_json(json: &str) -> Result<Self, MatcherError> {
        serde_json::from_str(json).map_err(|e| MatcherError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// The `type` tag of this node.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EqualTo { .. } => "equal_to",
            Self::Anything => "anything",
            Self::InstanceOf { .. } => "instance_of",
            Self::Is { .. } => "is",
            Self::AllOf { .. } => "all_of",
            Self::DescribedAs { .. } => "described_as",
            Self::HasSize { .. } => "has_size",
            Self::IterableWithSize { .. } => "iterable_with_size",
            Self::Contains { .. } => "contains",
            Self::ArrayContaining { .. } => "array_containing",
            Self::HasItem { .. } => "has_item",
            Self::HasItems { .. } => "has_items",
            Self::HasEntry { .. } => "has_entry",
            Self::HasKey { .. } => "has_key",
            Self::HasValue { .. } => "has_value",
        }
    }

    /// Nesting depth of this config tree. A leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let children = match self {
            Self::EqualTo { .. } | Self::Anything | Self::InstanceOf { .. } => return 1,
            Self::Is { matcher }
            | Self::DescribedAs { matcher, .. }
            | Self::HasSize { matcher }
            | Self::IterableWithSize { matcher }
            | Self::HasItem { matcher }
            | Self::HasKey { matcher }
            | Self::HasValue { matcher } => matcher.depth(),
            Self::AllOf { matchers }
            | Self::Contains { matchers }
            | Self::ArrayContaining { matchers }
            | Self::HasItems { matchers } => {
                matchers.iter().map(Self::depth).max().unwrap_or(0)
            }
            Self::HasEntry { key, value } => key.depth().max(value.depth()),
        };
        1 + children
    }

    /// Build the runtime matcher tree.
    ///
    /// # Errors
    ///
    /// - [`MatcherError::DepthExceeded`] if nesting exceeds [`MAX_DEPTH`]
    /// - [`MatcherError::PlaceholderOutOfRange`] if a `described_as`
    ///   template refers to a missing value
    pub fn build(&self) -> Result<Box<dyn Matcher>, MatcherError> {
        let depth = self.depth();
        if depth > MAX_DEPTH {
            let err = MatcherError::DepthExceeded {
                depth,
                max: MAX_DEPTH,
            };
            tracing::warn!(kind = self.kind(), %err, "rejected matcher config");
            return Err(err);
        }
        tracing::debug!(kind = self.kind(), depth, "building matcher from config");
        self.build_node().inspect_err(|err| {
            tracing::warn!(kind = self.kind(), %err, "rejected matcher config");
        })
    }

    fn build_node(&self) -> Result<Box<dyn Matcher>, MatcherError> {
        let matcher = match self {
            Self::EqualTo { value } => equal_to(value.clone()).boxed(),
            Self::Anything => anything().boxed(),
            Self::InstanceOf { kind } => instance_of(*kind).boxed(),
            Self::Is { matcher } => is(matcher.build_node()?).boxed(),
            Self::AllOf { matchers } => all_of(build_all(matchers)?).boxed(),
            Self::DescribedAs {
                template,
                matcher,
                values,
            } => {
                let described = DescribedAs::new(
                    template.clone(),
                    matcher.build_node()?,
                    values.iter().cloned().map(Value::from).collect(),
                );
                described.validate()?;
                described.boxed()
            }
            Self::HasSize { matcher } => has_size_that(matcher.build_node()?).boxed(),
            Self::IterableWithSize { matcher } => {
                iterable_with_size_that(matcher.build_node()?).boxed()
            }
            Self::Contains { matchers } => contains_matchers(build_all(matchers)?).boxed(),
            Self::ArrayContaining { matchers } => {
                array_containing_matchers(build_all(matchers)?).boxed()
            }
            Self::HasItem { matcher } => has_item(matcher.build_node()?).boxed(),
            Self::HasItems { matchers } => has_items(build_all(matchers)?).boxed(),
            Self::HasEntry { key, value } => {
                has_entry_that(key.build_node()?, value.build_node()?).boxed()
            }
            Self::HasKey { matcher } => has_key_that(matcher.build_node()?).boxed(),
            Self::HasValue { matcher } => has_value_that(matcher.build_node()?).boxed(),
        };
        Ok(matcher)
    }
}

fn build_all(configs: &[MatcherConfig]) -> Result<Vec<Box<dyn Matcher>>, MatcherError> {
    configs.iter().map(MatcherConfig::build_node).collect()
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => n.as_f64().map_or(Self::Null, Self::Float),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::list(items),
            serde_json::Value::Object(map) => Self::map(map),
        }
    }
}
