//! `DescribedAs` — Replace a matcher's description with a template
//!
//! The template may contain positional placeholders `%0`, `%1`, ... which
//! are filled with the rendered substitution values. Only the positive
//! description changes; matching and mismatch text stay with the wrapped
//! matcher.

use crate::{Description, Matcher, MatcherError, MatcherExt, SelfDescribing, Value};
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([0-9]+)").expect("placeholder pattern is valid"));

/// Wraps a matcher and describes it with a template.
///
/// # Usage error
///
/// A placeholder whose index has no substitution value is a bug in how the
/// matcher was built. Describing such a matcher panics; call
/// [`validate`](Self::validate) to catch it earlier.
///
/// # Example
///
/// ```
/// use vouch::{described_as, equal_to, Description, Matcher, Value};
///
/// let matcher = described_as("a price of %0 %1", equal_to(250), ["GBP", "(net)"]);
/// assert_eq!(Description::of(&matcher), r#"a price of "GBP" "(net)""#);
/// assert!(matcher.matches(&Value::from(250)));
/// ```
#[derive(Debug)]
pub struct DescribedAs {
    template: String,
    matcher: Box<dyn Matcher>,
    values: Vec<Value>,
}

impl DescribedAs {
    /// Create a new templated description.
    ///
    /// The values are copied into the matcher.
    pub fn new(template: impl Into<String>, matcher: Box<dyn Matcher>, values: Vec<Value>) -> Self {
        Self {
            template: template.into(),
            matcher,
            values,
        }
    }

    /// Returns the description template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Check that every placeholder refers to a supplied value.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::PlaceholderOutOfRange`] for the first
    /// placeholder without a value.
    pub fn validate(&self) -> Result<(), MatcherError> {
        for caps in PLACEHOLDER.captures_iter(&self.template) {
            if let Some(index) = caps.get(1) {
                self.value_at(index.as_str())?;
            }
        }
        Ok(())
    }

    fn value_at(&self, index: &str) -> Result<&Value, MatcherError> {
        let available = self.values.len();
        // Indices too large for usize can never be in range.
        let index = index.parse::<usize>().unwrap_or(usize::MAX);
        self.values
            .get(index)
            .ok_or(MatcherError::PlaceholderOutOfRange { index, available })
    }
}

impl SelfDescribing for DescribedAs {
    fn describe_to(&self, description: &mut Description) {
        let mut text_start = 0;
        for caps in PLACEHOLDER.captures_iter(&self.template) {
            let (Some(whole), Some(index)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            description.append_text(&self.template[text_start..whole.start()]);
            match self.value_at(index.as_str()) {
                Ok(value) => description.append_value(value),
                Err(err) => {
                    tracing::error!(template = %self.template, %err, "cannot render description");
                    panic!("{err}");
                }
            };
            text_start = whole.end();
        }
        if text_start < self.template.len() {
            description.append_text(&self.template[text_start..]);
        }
    }
}

impl Matcher for DescribedAs {
    fn matches(&self, actual: &Value) -> bool {
        self.matcher.matches(actual)
    }

    fn describe_mismatch(&self, actual: &Value, mismatch: &mut Description) {
        self.matcher.describe_mismatch(actual, mismatch);
    }
}

/// Wraps `matcher`, overriding its description with `template`.
///
/// `%N` in the template is replaced by the rendered `values[N]`.
pub fn described_as<V: Into<Value>>(
    template: impl Into<String>,
    matcher: impl Matcher + 'static,
    values: impl IntoIterator<Item = V>,
) -> DescribedAs {
    DescribedAs::new(
        template,
        matcher.boxed(),
        values.into_iter().map(Into::into).collect(),
    )
}
