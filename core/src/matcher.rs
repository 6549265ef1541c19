//! `Matcher` — The contract every matcher implements
//!
//! A matcher tests a candidate [`Value`], describes the behaviour it expects,
//! and explains why a given candidate failed. Matchers are immutable and
//! hold no per-call state, so one instance can be evaluated any number of
//! times from any number of threads.
//!
//! # Primitive matchers
//!
//! The composite and container matchers are built from three primitives:
//!
//! - [`IsEqual`] — structural equality with a literal
//! - [`IsAnything`] — always matches
//! - [`IsInstanceOf`] — candidate has a given [`ValueKind`]

use crate::{Description, SelfDescribing, Value, ValueKind};
use std::fmt::Debug;

/// Matches candidate [`Value`]s and explains mismatches.
///
/// # Contract
///
/// [`describe_mismatch`](Self::describe_mismatch) is only meaningful when
/// [`matches`](Self::matches) returned `false` for the same candidate.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`.
///
/// # Example
///
/// ```
/// use vouch::{equal_to, Description, Matcher, Value};
///
/// let matcher = equal_to("hello");
/// assert!(matcher.matches(&Value::from("hello")));
///
/// let mut mismatch = Description::new();
/// matcher.describe_mismatch(&Value::from("world"), &mut mismatch);
/// assert_eq!(mismatch.to_string(), r#"was "world""#);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Matcher`",
    label = "this type cannot match against a Value",
    note = "implement `matches(&self, &Value) -> bool` plus `SelfDescribing::describe_to`, or use a built-in matcher (equal_to, all_of, has_item, ...)"
)]
pub trait Matcher: SelfDescribing + Send + Sync + Debug {
    /// Check whether the candidate satisfies this matcher.
    fn matches(&self, actual: &Value) -> bool;

    /// Explain why `actual` failed. Defaults to `was <actual>`.
    fn describe_mismatch(&self, actual: &Value, mismatch: &mut Description) {
        mismatch.append_text("was ").append_value(actual);
    }

    /// Match and, on failure, describe the mismatch in one call.
    fn matches_diagnosing(&self, actual: &Value, mismatch: &mut Description) -> bool {
        if self.matches(actual) {
            return true;
        }
        self.describe_mismatch(actual, mismatch);
        false
    }
}

#[diagnostic::do_not_recommend]
impl Matcher for Box<dyn Matcher> {
    fn matches(&self, actual: &Value) -> bool {
        (**self).matches(actual)
    }

    fn describe_mismatch(&self, actual: &Value, mismatch: &mut Description) {
        (**self).describe_mismatch(actual, mismatch);
    }

    fn matches_diagnosing(&self, actual: &Value, mismatch: &mut Description) -> bool {
        (**self).matches_diagnosing(actual, mismatch)
    }
}

/// Convenience methods for concrete matchers.
pub trait MatcherExt: Matcher + Sized + 'static {
    /// Erase the concrete type.
    fn boxed(self) -> Box<dyn Matcher> {
        Box::new(self)
    }
}

impl<M: Matcher + 'static> MatcherExt for M {}

/// Mismatch text for a candidate whose shape a matcher cannot inspect.
///
/// `was null` for `Null`, otherwise `was a <type> (<value>)` (or `was an ...`).
pub(crate) fn describe_wrong_shape(expected: &'static str, actual: &Value, mismatch: &mut Description) {
    tracing::trace!(
        expected,
        actual = actual.type_name(),
        "candidate has unexpected shape"
    );
    if actual.is_null() {
        mismatch.append_text("was null");
    } else {
        mismatch
            .append_text("was ")
            .append_text(indefinite_article(actual.type_name()))
            .append_text(" ")
            .append_text(actual.type_name())
            .append_text(" (")
            .append_value(actual)
            .append_text(")");
    }
}

/// `an` before a type name starting with a vowel, `a` otherwise.
pub(crate) fn indefinite_article(type_name: &str) -> &'static str {
    match type_name.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U') => "an",
        _ => "a",
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Primitive Matchers
// ═══════════════════════════════════════════════════════════════════════════════

/// Structural equality with a literal value.
///
/// # Example
///
/// ```
/// use vouch::{equal_to, Description, Matcher, Value};
///
/// let matcher = equal_to(4);
/// assert!(matcher.matches(&Value::from(4)));
/// assert!(!matcher.matches(&Value::from("4")));
/// assert_eq!(Description::of(&matcher), "<4>");
/// ```
#[derive(Debug, Clone)]
pub struct IsEqual {
    expected: Value,
}

impl IsEqual {
    /// Create a new equality matcher.
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Returns the expected value.
    #[must_use]
    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl SelfDescribing for IsEqual {
    fn describe_to(&self, description: &mut Description) {
        description.append_value(&self.expected);
    }
}

impl Matcher for IsEqual {
    fn matches(&self, actual: &Value) -> bool {
        *actual == self.expected
    }
}

/// Matches every value.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsAnything;

impl SelfDescribing for IsAnything {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("ANYTHING");
    }
}

impl Matcher for IsAnything {
    fn matches(&self, _actual: &Value) -> bool {
        true
    }
}

/// Matches values of a given [`ValueKind`].
#[derive(Debug, Clone, Copy)]
pub struct IsInstanceOf {
    kind: ValueKind,
}

impl IsInstanceOf {
    /// Create a new type-membership matcher.
    #[must_use]
    pub fn new(kind: ValueKind) -> Self {
        Self { kind }
    }
}

impl SelfDescribing for IsInstanceOf {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("an instance of ")
            .append_text(self.kind.as_str());
    }
}

impl Matcher for IsInstanceOf {
    fn matches(&self, actual: &Value) -> bool {
        actual.kind() == self.kind
    }

    fn describe_mismatch(&self, actual: &Value, mismatch: &mut Description) {
        if actual.is_null() {
            mismatch.append_text("null");
            return;
        }
        mismatch
            .append_value(actual)
            .append_text(" is ")
            .append_text(indefinite_article(actual.type_name()))
            .append_text(" ")
            .append_text(actual.type_name());
    }
}

/// Matches values equal to `expected`.
pub fn equal_to(expected: impl Into<Value>) -> IsEqual {
    IsEqual::new(expected)
}

/// Matches every value; describes as `ANYTHING`.
#[must_use]
pub fn anything() -> IsAnything {
    IsAnything
}

/// Matches values of the given kind.
#[must_use]
pub fn instance_of(kind: ValueKind) -> IsInstanceOf {
    IsInstanceOf::new(kind)
}
