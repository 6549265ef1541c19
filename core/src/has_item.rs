//! Unordered membership — "some element satisfies this"
//!
//! [`has_item`] needs one satisfying element. [`has_items`] is an
//! [`AllOf`] with one `has_item` per child, so each child is checked on its
//! own and one element may satisfy several children.

use crate::matcher::describe_wrong_shape;
use crate::{all_of, equal_to, AllOf, Description, Matcher, MatcherExt, SelfDescribing, Value};

/// Matches an iterable containing at least one element satisfying a matcher.
///
/// # Example
///
/// ```
/// use vouch::{equal_to, has_item, Description, Matcher, Value};
///
/// let matcher = has_item(equal_to("b"));
/// assert!(matcher.matches(&Value::list(["a", "b"])));
///
/// let mut mismatch = Description::new();
/// matcher.describe_mismatch(&Value::list(["c", "d"]), &mut mismatch);
/// assert_eq!(mismatch.to_string(), r#"mismatches were: [was "c", was "d"]"#);
/// ```
#[derive(Debug)]
pub struct IsIterableContaining {
    element_matcher: Box<dyn Matcher>,
}

impl IsIterableContaining {
    /// Create a matcher requiring one element to satisfy `element_matcher`.
    #[must_use]
    pub fn new(element_matcher: Box<dyn Matcher>) -> Self {
        Self { element_matcher }
    }
}

impl SelfDescribing for IsIterableContaining {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("a collection containing ")
            .append_description_of(&self.element_matcher);
    }
}

impl Matcher for IsIterableContaining {
    fn matches(&self, actual: &Value) -> bool {
        actual
            .items()
            .is_some_and(|mut items| items.any(|item| self.element_matcher.matches(&item)))
    }

    fn describe_mismatch(&self, actual: &Value, mismatch: &mut Description) {
        self.matches_diagnosing(actual, mismatch);
    }

    fn matches_diagnosing(&self, actual: &Value, mismatch: &mut Description) -> bool {
        let Some(items) = actual.items() else {
            describe_wrong_shape("iterable", actual, mismatch);
            return false;
        };

        let mut is_empty = true;
        for item in items {
            if self.element_matcher.matches(&item) {
                return true;
            }
            is_empty = false;
        }

        if is_empty {
            mismatch.append_text("was empty");
            return false;
        }

        // Every element failed; a second pass renders each one's mismatch.
        let Some(items) = actual.items() else {
            return false;
        };
        mismatch.append_joined("mismatches were: [", ", ", "]", items, |d, item| {
            self.element_matcher.describe_mismatch(&item, d);
        });
        false
    }
}

/// Matches an iterable with at least one element satisfying `element_matcher`.
pub fn has_item(element_matcher: impl Matcher + 'static) -> IsIterableContaining {
    IsIterableContaining::new(element_matcher.boxed())
}

/// Matches an iterable with at least one element equal to `value`.
pub fn has_item_value(value: impl Into<Value>) -> IsIterableContaining {
    has_item(equal_to(value))
}

/// Matches an iterable in which every matcher is satisfied by some element.
///
/// A failure reports only the first matcher without a satisfying element.
#[must_use]
pub fn has_items(element_matchers: Vec<Box<dyn Matcher>>) -> AllOf {
    all_of(
        element_matchers
            .into_iter()
            .map(|m| IsIterableContaining::new(m).boxed())
            .collect(),
    )
}

/// Matches an iterable containing each of `values`, in any order.
pub fn has_items_values<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> AllOf {
    has_items(
        values
            .into_iter()
            .map(|value| equal_to(value).boxed())
            .collect(),
    )
}
