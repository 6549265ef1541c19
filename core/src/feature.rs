//! Feature extraction — match a property derived from the candidate
//!
//! A [`Feature`] pulls one derived value (a size, a count) out of the
//! candidate. [`FeatureMatcher`] then hands that value to a nested matcher
//! and phrases both descriptions around the feature's name.

use crate::matcher::describe_wrong_shape;
use crate::{equal_to, Description, Matcher, MatcherExt, SelfDescribing, Value};
use std::fmt::Debug;

/// Extracts a derived value from a candidate.
///
/// Returning `None` means the candidate has the wrong shape for this
/// feature; the matcher then fails with a wrong-shape mismatch.
pub trait Feature: Send + Sync + Debug {
    /// Extract the feature, or `None` when `actual` cannot provide it.
    fn extract(&self, actual: &Value) -> Option<Value>;

    /// Name of the shape this feature expects, for diagnostics.
    fn expected_shape(&self) -> &'static str;
}

/// Number of elements of a sized aggregate, read in O(1).
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionSize;

impl Feature for CollectionSize {
    fn extract(&self, actual: &Value) -> Option<Value> {
        actual.len().map(Value::from)
    }

    fn expected_shape(&self) -> &'static str {
        "sized collection"
    }
}

/// Number of elements produced by one full traversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterableSize;

impl Feature for IterableSize {
    fn extract(&self, actual: &Value) -> Option<Value> {
        actual.items().map(|items| Value::from(items.count()))
    }

    fn expected_shape(&self) -> &'static str {
        "iterable"
    }
}

/// Applies a nested matcher to a feature of the candidate.
///
/// Describes as `<feature description> <nested description>`; a mismatch
/// reads `<feature name> <nested mismatch>`.
#[derive(Debug)]
pub struct FeatureMatcher<F> {
    feature: F,
    sub_matcher: Box<dyn Matcher>,
    feature_description: String,
    feature_name: String,
}

impl<F: Feature> FeatureMatcher<F> {
    /// Wrap `sub_matcher` so it sees `feature` of each candidate.
    ///
    /// `feature_description` prefixes the self-description and
    /// `feature_name` prefixes the mismatch text.
    pub fn new(
        feature: F,
        sub_matcher: Box<dyn Matcher>,
        feature_description: impl Into<String>,
        feature_name: impl Into<String>,
    ) -> Self {
        Self {
            feature,
            sub_matcher,
            feature_description: feature_description.into(),
            feature_name: feature_name.into(),
        }
    }

    fn describe_extracted_mismatch(&self, feature: &Value, mismatch: &mut Description) {
        mismatch.append_text(&self.feature_name).append_text(" ");
        self.sub_matcher.describe_mismatch(feature, mismatch);
    }
}

impl<F: Feature> SelfDescribing for FeatureMatcher<F> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text(&self.feature_description)
            .append_text(" ")
            .append_description_of(&self.sub_matcher);
    }
}

impl<F: Feature> Matcher for FeatureMatcher<F> {
    fn matches(&self, actual: &Value) -> bool {
        self.feature
            .extract(actual)
            .is_some_and(|feature| self.sub_matcher.matches(&feature))
    }

    fn describe_mismatch(&self, actual: &Value, mismatch: &mut Description) {
        match self.feature.extract(actual) {
            Some(feature) => self.describe_extracted_mismatch(&feature, mismatch),
            None => describe_wrong_shape(self.feature.expected_shape(), actual, mismatch),
        }
    }

    // Extracts once, so a single traversal serves both the verdict and the text.
    fn matches_diagnosing(&self, actual: &Value, mismatch: &mut Description) -> bool {
        let Some(feature) = self.feature.extract(actual) else {
            describe_wrong_shape(self.feature.expected_shape(), actual, mismatch);
            return false;
        };
        if self.sub_matcher.matches(&feature) {
            return true;
        }
        self.describe_extracted_mismatch(&feature, mismatch);
        false
    }
}

/// Matches a sized collection with exactly `size` elements.
#[must_use]
pub fn has_size(size: usize) -> FeatureMatcher<CollectionSize> {
    has_size_that(equal_to(size))
}

/// Matches a sized collection whose size satisfies `size_matcher`.
pub fn has_size_that(size_matcher: impl Matcher + 'static) -> FeatureMatcher<CollectionSize> {
    FeatureMatcher::new(
        CollectionSize,
        size_matcher.boxed(),
        "a collection with size",
        "collection size",
    )
}

/// Matches an iterable yielding exactly `size` elements.
#[must_use]
pub fn iterable_with_size(size: usize) -> FeatureMatcher<IterableSize> {
    iterable_with_size_that(equal_to(size))
}

/// Matches an iterable whose element count satisfies `size_matcher`.
pub fn iterable_with_size_that(size_matcher: impl Matcher + 'static) -> FeatureMatcher<IterableSize> {
    FeatureMatcher::new(
        IterableSize,
        size_matcher.boxed(),
        "an iterable with size",
        "iterable size",
    )
}
