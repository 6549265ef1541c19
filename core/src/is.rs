//! `Is` — Decorator that reads better in assertions
//!
//! `is(equal_to(x))` behaves exactly like `equal_to(x)` but describes itself
//! as `is <x>`.

use crate::{equal_to, instance_of, Description, Matcher, MatcherExt, SelfDescribing, Value, ValueKind};

/// Wraps a matcher, prefixing its description with `is `.
///
/// Matching and mismatch text are delegated unchanged.
#[derive(Debug)]
pub struct Is {
    matcher: Box<dyn Matcher>,
}

impl Is {
    /// Wrap an existing matcher.
    pub fn new(matcher: impl Matcher + 'static) -> Self {
        Self {
            matcher: matcher.boxed(),
        }
    }
}

impl SelfDescribing for Is {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("is ")
            .append_description_of(&self.matcher);
    }
}

impl Matcher for Is {
    fn matches(&self, actual: &Value) -> bool {
        self.matcher.matches(actual)
    }

    fn describe_mismatch(&self, actual: &Value, mismatch: &mut Description) {
        self.matcher.describe_mismatch(actual, mismatch);
    }
}

/// Decorates another matcher: `is(equal_to(smelly))`.
pub fn is(matcher: impl Matcher + 'static) -> Is {
    Is::new(matcher)
}

/// Shortcut for `is(equal_to(value))`.
pub fn is_value(value: impl Into<Value>) -> Is {
    is(equal_to(value))
}

/// Shortcut for `is(instance_of(kind))`.
#[must_use]
pub fn is_a(kind: ValueKind) -> Is {
    is(instance_of(kind))
}
