//! Ordered containment — exact length, positional correspondence
//!
//! Item `i` of the candidate must satisfy matcher `i`, and the candidate
//! must hold exactly as many items as there are matchers. The array form
//! only narrows the accepted shape; both forms share one algorithm and one
//! set of failure messages.

use crate::matcher::describe_wrong_shape;
use crate::{equal_to, Description, Matcher, MatcherExt, SelfDescribing, Value};

/// Matches an iterable (array, list or sequence) item by item.
///
/// # Example
///
/// ```
/// use vouch::{contains, Description, Matcher, Value};
///
/// let matcher = contains(["a", "b"]);
/// assert!(matcher.matches(&Value::list(["a", "b"])));
/// assert!(!matcher.matches(&Value::list(["b", "a"])));
///
/// let mut mismatch = Description::new();
/// matcher.describe_mismatch(&Value::list(["a", "b", "c"]), &mut mismatch);
/// assert_eq!(mismatch.to_string(), "item count was <3> but expected <2>");
/// ```
#[derive(Debug)]
pub struct IsIterableContainingInOrder {
    matchers: Vec<Box<dyn Matcher>>,
}

impl IsIterableContainingInOrder {
    /// Create a matcher from one matcher per expected position.
    #[must_use]
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    /// The one scan behind matching and diagnosing.
    ///
    /// Walks a single traversal; positions past the matcher list are only
    /// counted. Without a `mismatch` sink no child is asked to explain itself.
    fn check(&self, actual: &Value, mismatch: Option<&mut Description>) -> bool {
        let Some(items) = actual.items() else {
            if let Some(mismatch) = mismatch {
                describe_wrong_shape("iterable", actual, mismatch);
            }
            return false;
        };

        let mut count = 0usize;
        for item in items {
            if let Some(matcher) = self.matchers.get(count) {
                if !matcher.matches(&item) {
                    let Some(mismatch) = mismatch else {
                        return false;
                    };
                    mismatch
                        .append_text("item ")
                        .append_text(&count.to_string())
                        .append_text(": expected ")
                        .append_description_of(matcher)
                        .append_text(" but ");
                    matcher.describe_mismatch(&item, mismatch);
                    return false;
                }
            }
            count += 1;
        }

        if count != self.matchers.len() {
            let Some(mismatch) = mismatch else {
                return false;
            };
            mismatch
                .append_text("item count was ")
                .append_value(&Value::from(count))
                .append_text(" but expected ")
                .append_value(&Value::from(self.matchers.len()));
            return false;
        }
        true
    }
}

impl SelfDescribing for IsIterableContainingInOrder {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("iterable containing ")
            .append_list("[", ", ", "]", &self.matchers);
    }
}

impl Matcher for IsIterableContainingInOrder {
    fn matches(&self, actual: &Value) -> bool {
        self.check(actual, None)
    }

    fn describe_mismatch(&self, actual: &Value, mismatch: &mut Description) {
        self.check(actual, Some(mismatch));
    }

    fn matches_diagnosing(&self, actual: &Value, mismatch: &mut Description) -> bool {
        self.check(actual, Some(mismatch))
    }
}

/// Matches an `Array` item by item. Other shapes never match.
#[derive(Debug)]
pub struct IsArrayContainingInOrder {
    iterable: IsIterableContainingInOrder,
}

impl IsArrayContainingInOrder {
    /// Create a matcher from one matcher per expected array slot.
    #[must_use]
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self {
            iterable: IsIterableContainingInOrder::new(matchers),
        }
    }
}

impl SelfDescribing for IsArrayContainingInOrder {
    fn describe_to(&self, description: &mut Description) {
        description.append_list("[", ", ", "]", &self.iterable.matchers);
    }
}

impl Matcher for IsArrayContainingInOrder {
    fn matches(&self, actual: &Value) -> bool {
        matches!(actual, Value::Array(_)) && self.iterable.matches(actual)
    }

    fn describe_mismatch(&self, actual: &Value, mismatch: &mut Description) {
        self.matches_diagnosing(actual, mismatch);
    }

    fn matches_diagnosing(&self, actual: &Value, mismatch: &mut Description) -> bool {
        if !matches!(actual, Value::Array(_)) {
            describe_wrong_shape("array", actual, mismatch);
            return false;
        }
        self.iterable.check(actual, Some(mismatch))
    }
}

fn equality_matchers<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Vec<Box<dyn Matcher>> {
    values
        .into_iter()
        .map(|value| equal_to(value).boxed())
        .collect()
}

/// Matches an iterable whose items equal `values`, in order.
pub fn contains<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> IsIterableContainingInOrder {
    contains_matchers(equality_matchers(values))
}

/// Matches an iterable whose items satisfy `matchers`, position by position.
#[must_use]
pub fn contains_matchers(matchers: Vec<Box<dyn Matcher>>) -> IsIterableContainingInOrder {
    IsIterableContainingInOrder::new(matchers)
}

/// Matches an array whose items equal `values`, in order.
pub fn array_containing<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> IsArrayContainingInOrder {
    array_containing_matchers(equality_matchers(values))
}

/// Matches an array whose items satisfy `matchers`, position by position.
#[must_use]
pub fn array_containing_matchers(matchers: Vec<Box<dyn Matcher>>) -> IsArrayContainingInOrder {
    IsArrayContainingInOrder::new(matchers)
}
