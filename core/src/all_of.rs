//! `AllOf` — Logical conjunction of matchers
//!
//! Children are evaluated in order and evaluation stops at the first child
//! that rejects the candidate. The mismatch text names that one child only.

use crate::{Description, Matcher, SelfDescribing, Value};

/// Matches when every child matcher matches.
///
/// # INV: Short-circuit
///
/// Children after the first rejecting one are never evaluated, neither by
/// [`matches`](Matcher::matches) nor by the diagnosing path.
///
/// An empty `AllOf` is vacuously true and describes as `()`.
///
/// # Example
///
/// ```
/// use vouch::{all_of, equal_to, instance_of, matchers, Description, Matcher, Value, ValueKind};
///
/// let matcher = all_of(matchers![instance_of(ValueKind::Int), equal_to(3)]);
/// assert!(matcher.matches(&Value::from(3)));
///
/// let mut mismatch = Description::new();
/// matcher.describe_mismatch(&Value::from(4), &mut mismatch);
/// assert_eq!(mismatch.to_string(), "<3> was <4>");
/// assert_eq!(Description::of(&matcher), "(an instance of int and <3>)");
/// ```
#[derive(Debug)]
pub struct AllOf {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AllOf {
    /// Create a conjunction of the given matchers, evaluated in order.
    #[must_use]
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    /// The child matchers, in evaluation order.
    #[must_use]
    pub fn matchers(&self) -> &[Box<dyn Matcher>] {
        &self.matchers
    }

    /// Returns the number of child matchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Returns `true` if there are no child matchers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl SelfDescribing for AllOf {
    fn describe_to(&self, description: &mut Description) {
        description.append_list("(", " and ", ")", &self.matchers);
    }
}

impl Matcher for AllOf {
    fn matches(&self, actual: &Value) -> bool {
        self.matchers.iter().all(|m| m.matches(actual))
    }

    fn describe_mismatch(&self, actual: &Value, mismatch: &mut Description) {
        self.matches_diagnosing(actual, mismatch);
    }

    fn matches_diagnosing(&self, actual: &Value, mismatch: &mut Description) -> bool {
        for matcher in &self.matchers {
            if !matcher.matches(actual) {
                mismatch.append_description_of(matcher).append_text(" ");
                matcher.describe_mismatch(actual, mismatch);
                return false;
            }
        }
        true
    }
}

/// Matches when all of the given matchers match.
///
/// Use the [`matchers!`](crate::matchers) macro to box heterogeneous children.
#[must_use]
pub fn all_of(matchers: Vec<Box<dyn Matcher>>) -> AllOf {
    AllOf::new(matchers)
}
