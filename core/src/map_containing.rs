//! Map entry containment
//!
//! One matcher per side of an entry. "Has key" and "has value" leave the
//! other side unconstrained with [`anything`].

use crate::matcher::describe_wrong_shape;
use crate::{anything, equal_to, Description, Matcher, MatcherExt, SelfDescribing, Value};

/// Matches a map holding at least one entry whose key and value both match.
///
/// # Example
///
/// ```
/// use vouch::{has_entry, Description, Matcher, Value};
///
/// let matcher = has_entry("a", 1);
/// assert!(matcher.matches(&Value::map([("a", 1), ("b", 2)])));
/// assert_eq!(Description::of(&matcher), r#"map containing ["a"-><1>]"#);
///
/// let mut mismatch = Description::new();
/// matcher.describe_mismatch(&Value::map([("a", 2)]), &mut mismatch);
/// assert_eq!(mismatch.to_string(), "map was [<a=2>]");
/// ```
#[derive(Debug)]
pub struct IsMapContaining {
    key_matcher: Box<dyn Matcher>,
    value_matcher: Box<dyn Matcher>,
}

impl IsMapContaining {
    /// Create a matcher from one matcher per side of an entry.
    #[must_use]
    pub fn new(key_matcher: Box<dyn Matcher>, value_matcher: Box<dyn Matcher>) -> Self {
        Self {
            key_matcher,
            value_matcher,
        }
    }
}

impl SelfDescribing for IsMapContaining {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("map containing [")
            .append_description_of(&self.key_matcher)
            .append_text("->")
            .append_description_of(&self.value_matcher)
            .append_text("]");
    }
}

impl Matcher for IsMapContaining {
    fn matches(&self, actual: &Value) -> bool {
        actual.entries().is_some_and(|entries| {
            entries
                .iter()
                .any(|(key, value)| self.key_matcher.matches(key) && self.value_matcher.matches(value))
        })
    }

    fn describe_mismatch(&self, actual: &Value, mismatch: &mut Description) {
        match actual.entries() {
            Some(entries) => {
                mismatch
                    .append_text("map was ")
                    .append_entry_list("[", ", ", "]", entries);
            }
            None => describe_wrong_shape("map", actual, mismatch),
        }
    }
}

/// Matches a map with an entry `key -> value`.
pub fn has_entry(key: impl Into<Value>, value: impl Into<Value>) -> IsMapContaining {
    has_entry_that(equal_to(key), equal_to(value))
}

/// Matches a map with an entry whose key and value satisfy the matchers.
pub fn has_entry_that(
    key_matcher: impl Matcher + 'static,
    value_matcher: impl Matcher + 'static,
) -> IsMapContaining {
    IsMapContaining::new(key_matcher.boxed(), value_matcher.boxed())
}

/// Matches a map containing `key`.
pub fn has_key(key: impl Into<Value>) -> IsMapContaining {
    has_key_that(equal_to(key))
}

/// Matches a map with a key satisfying `key_matcher`.
pub fn has_key_that(key_matcher: impl Matcher + 'static) -> IsMapContaining {
    has_entry_that(key_matcher, anything())
}

/// Matches a map containing `value` under any key.
pub fn has_value(value: impl Into<Value>) -> IsMapContaining {
    has_value_that(equal_to(value))
}

/// Matches a map with a value satisfying `value_matcher`.
pub fn has_value_that(value_matcher: impl Matcher + 'static) -> IsMapContaining {
    has_entry_that(anything(), value_matcher)
}
