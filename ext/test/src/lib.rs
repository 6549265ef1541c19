//! vouch-test: Assertion helpers and conformance fixtures for vouch matchers
//!
//! Helpers for testing matchers themselves: check the verdict, the
//! self-description and the mismatch text in one call, and check that a
//! matcher copes with `Null` and with values of a type it has never seen.
//!
//! # Example
//!
//! ```
//! use vouch_test::prelude::*;
//!
//! let matcher = has_item(equal_to("a"));
//!
//! assert_matches(&matcher, Value::list(["a", "b"]));
//! assert_description("a collection containing \"a\"", &matcher);
//! assert_mismatch_description("was empty", &matcher, Value::list(Vec::<Value>::new()));
//! assert_null_safe(&matcher);
//! assert_unknown_type_safe(&matcher);
//! ```

use std::any::Any;
use vouch::{CustomValue, Description, Matcher, SelfDescribing, Value};


/// A custom value no matcher knows about.
///
/// Used by [`assert_unknown_type_safe`] to feed a matcher a candidate of a
/// foreign type.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownType;

impl CustomValue for UnknownType {
    fn custom_type_name(&self) -> &'static str {
        "unknown type"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Render a matcher's self-description.
pub fn description_of(matcher: &(impl SelfDescribing + ?Sized)) -> String {
    Description::of(matcher)
}

/// Render the mismatch text of `matcher` for `actual`.
pub fn mismatch_of(matcher: &(impl Matcher + ?Sized), actual: &Value) -> String {
    let mut mismatch = Description::new();
    matcher.describe_mismatch(actual, &mut mismatch);
    mismatch.into_string()
}

/// Assert that `actual` satisfies `matcher`, with a readable failure message.
///
/// # Panics
///
/// When the matcher rejects `actual`. The message reads
/// `Expected: <description>` / `but: <mismatch>`.
#[track_caller]
pub fn assert_that(actual: impl Into<Value>, matcher: &(impl Matcher + ?Sized)) {
    let actual = actual.into();
    let mut mismatch = Description::new();
    if !matcher.matches_diagnosing(&actual, &mut mismatch) {
        panic!(
            "\nExpected: {}\n     but: {}",
            description_of(matcher),
            mismatch
        );
    }
}

/// Assert that `matcher` accepts `actual`.
#[track_caller]
pub fn assert_matches(matcher: &(impl Matcher + ?Sized), actual: impl Into<Value>) {
    let actual = actual.into();
    assert!(
        matcher.matches(&actual),
        "expected {} to match {actual:?}, mismatch: {}",
        description_of(matcher),
        mismatch_of(matcher, &actual)
    );
}

/// Assert that `matcher` rejects `actual`.
#[track_caller]
pub fn assert_does_not_match(matcher: &(impl Matcher + ?Sized), actual: impl Into<Value>) {
    let actual = actual.into();
    assert!(
        !matcher.matches(&actual),
        "expected {} not to match {actual:?}",
        description_of(matcher)
    );
}

/// Assert the exact self-description of `matcher`.
#[track_caller]
pub fn assert_description(expected: &str, matcher: &(impl Matcher + ?Sized)) {
    assert_eq!(description_of(matcher), expected, "unexpected description");
}

/// Assert that `matcher` rejects `actual` with exactly `expected` as mismatch text.
///
/// Also checks that the one-call diagnosing path agrees with the two-call one.
#[track_caller]
pub fn assert_mismatch_description(
    expected: &str,
    matcher: &(impl Matcher + ?Sized),
    actual: impl Into<Value>,
) {
    let actual = actual.into();
    assert!(
        !matcher.matches(&actual),
        "precondition failed: {} matches {actual:?}",
        description_of(matcher)
    );
    assert_eq!(mismatch_of(matcher, &actual), expected, "unexpected mismatch description");

    let mut diagnosed = Description::new();
    assert!(!matcher.matches_diagnosing(&actual, &mut diagnosed));
    assert_eq!(diagnosed.as_str(), expected, "diagnosing path disagrees");
}

/// Assert that `matcher` handles `Null` without panicking.
#[track_caller]
pub fn assert_null_safe(matcher: &(impl Matcher + ?Sized)) {
    let _ = matcher.matches(&Value::Null);
    let _ = mismatch_of(matcher, &Value::Null);
}

/// Assert that `matcher` handles a value of a foreign type without panicking.
#[track_caller]
pub fn assert_unknown_type_safe(matcher: &(impl Matcher + ?Sized)) {
    let unknown = Value::custom(UnknownType);
    let _ = matcher.matches(&unknown);
    let _ = mismatch_of(matcher, &unknown);
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        assert_description, assert_does_not_match, assert_matches, assert_mismatch_description,
        assert_null_safe, assert_that, assert_unknown_type_safe, description_of, mismatch_of,
        UnknownType,
    };
    pub use vouch::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use vouch::{equal_to, has_size};

    #[test]
    fn test_assert_that_passes() {
        assert_that(Value::list([1, 2]), &has_size(2));
    }

    #[test]
    #[should_panic(expected = "Expected: a collection with size <3>\n     but: collection size was <2>")]
    fn test_assert_that_reports_description_and_mismatch() {
        assert_that(Value::list([1, 2]), &has_size(3));
    }

    #[test]
    fn test_mismatch_of() {
        assert_eq!(mismatch_of(&equal_to(1), &Value::from(2)), "was <2>");
    }

    #[test]
    #[should_panic(expected = "precondition failed")]
    fn test_mismatch_description_requires_a_non_match() {
        assert_mismatch_description("was <1>", &equal_to(1), 1);
    }

    #[test]
    fn test_unknown_type_renders_with_debug() {
        assert_eq!(mismatch_of(&equal_to(1), &Value::custom(UnknownType)), "was <UnknownType>");
    }
}
