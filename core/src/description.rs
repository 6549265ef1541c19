//! `Description` — Append-only sink for matcher diagnostics
//!
//! Matchers describe themselves, and explain why a candidate failed, by
//! appending to a `Description`. The same sink is passed by `&mut` through
//! every nested matcher, so a whole tree renders into one buffer.
//!
//! [`Description::none()`] is the null sink: every operation is a no-op and
//! nothing is allocated. Use it to run matcher logic when the text is not
//! wanted.

use crate::{CustomValue, Value};
use std::fmt::{self, Write as _};

/// Anything that can render itself into a [`Description`].
///
/// Every [`Matcher`](crate::Matcher) is self-describing; nesting works by
/// calling [`Description::append_description_of`] on a child.
pub trait SelfDescribing {
    /// Append a description of `self`.
    fn describe_to(&self, description: &mut Description);
}

impl<T: SelfDescribing + ?Sized> SelfDescribing for &T {
    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description);
    }
}

impl<T: SelfDescribing + ?Sized> SelfDescribing for Box<T> {
    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description);
    }
}

/// Text sink for matcher descriptions and mismatch explanations.
///
/// All operations return the sink for chaining.
///
/// # Example
///
/// ```
/// use vouch::{Description, Value};
///
/// let mut description = Description::new();
/// description
///     .append_text("expected ")
///     .append_value(&Value::from(3))
///     .append_value_list(" in ", ", ", "", &[Value::from("a"), Value::Null]);
/// assert_eq!(description.to_string(), r#"expected <3> in "a", null"#);
///
/// let mut none = Description::none();
/// none.append_text("discarded");
/// assert_eq!(none.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    /// `None` for the null sink.
    buf: Option<String>,
}

impl Description {
    /// The null sink. Stateless; renders as the empty string.
    pub const NONE: Description = Description { buf: None };

    /// Create an empty text sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: Some(String::new()),
        }
    }

    /// Create a null sink that discards everything.
    #[must_use]
    pub const fn none() -> Self {
        Self::NONE
    }

    /// Render a self-describing object to a string.
    #[must_use]
    pub fn of(value: &(impl SelfDescribing + ?Sized)) -> String {
        let mut description = Self::new();
        description.append_description_of(value);
        description.into_string()
    }

    /// Returns `true` for the null sink.
    #[inline]
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.buf.is_none()
    }

    /// The text collected so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.buf.as_deref().unwrap_or("")
    }

    /// Consume the sink, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf.unwrap_or_default()
    }

    /// Append literal text verbatim.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        if let Some(buf) = &mut self.buf {
            buf.push_str(text);
        }
        self
    }

    /// Append the description of a self-describing object.
    pub fn append_description_of(&mut self, value: &(impl SelfDescribing + ?Sized)) -> &mut Self {
        if !self.is_none() {
            value.describe_to(self);
        }
        self
    }

    /// Append a value using the canonical rendering.
    ///
    /// | value | rendering |
    /// |-------|-----------|
    /// | `Null` | `null` |
    /// | `String`, `Char` | double quoted, escaped |
    /// | `Array` | `[` elements `, ` `]` |
    /// | `Custom` | its own [`CustomValue::describe_to`](crate::CustomValue::describe_to) |
    /// | anything else | `<` plain form `>` |
    pub fn append_value(&mut self, value: &Value) -> &mut Self {
        if self.is_none() {
            return self;
        }
        match value {
            Value::Null => self.append_text("null"),
            Value::String(s) => self.append_quoted(s),
            Value::Char(c) => self.append_quoted(c.encode_utf8(&mut [0; 4])),
            Value::Array(items) => self.append_value_list("[", ", ", "]", items),
            Value::Custom(custom) => {
                CustomValue::describe_to(custom.as_ref(), self);
                self
            }
            other => self.append_bracketed(other),
        }
    }

    /// Append `start`, each value separated by `separator`, then `end`.
    pub fn append_value_list<'a>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        values: impl IntoIterator<Item = &'a Value>,
    ) -> &mut Self {
        self.append_joined(start, separator, end, values, |d, value| {
            d.append_value(value);
        })
    }

    /// Append `start`, each item's description separated by `separator`, then `end`.
    pub fn append_list<'a, S>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        items: impl IntoIterator<Item = &'a S>,
    ) -> &mut Self
    where
        S: SelfDescribing + ?Sized + 'a,
    {
        self.append_joined(start, separator, end, items, |d, item| {
            d.append_description_of(item);
        })
    }

    /// Append key/value entries, each rendered as `<key=value>`.
    pub fn append_entry_list<'a>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        entries: impl IntoIterator<Item = &'a (Value, Value)>,
    ) -> &mut Self {
        self.append_joined(start, separator, end, entries, |d, (key, value)| {
            if let Some(buf) = &mut d.buf {
                // Writing into a String cannot fail.
                let _ = write!(buf, "<{key}={value}>");
            }
        })
    }

    /// The one list rule shared by every list rendering.
    pub(crate) fn append_joined<I, F>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        items: I,
        mut append: F,
    ) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item),
    {
        if self.is_none() {
            return self;
        }
        self.append_text(start);
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.append_text(separator);
            }
            append(self, item);
        }
        self.append_text(end)
    }

    fn append_bracketed(&mut self, value: &Value) -> &mut Self {
        if let Some(buf) = &mut self.buf {
            let _ = write!(buf, "<{value}>");
        }
        self
    }

    fn append_quoted(&mut self, text: &str) -> &mut Self {
        if let Some(buf) = &mut self.buf {
            buf.push('"');
            for c in text.chars() {
                match c {
                    '"' => buf.push_str("\\\""),
                    '\\' => buf.push_str("\\\\"),
                    '\n' => buf.push_str("\\n"),
                    '\r' => buf.push_str("\\r"),
                    '\t' => buf.push_str("\\t"),
                    c => buf.push(c),
                }
            }
            buf.push('"');
        }
        self
    }
}

impl Default for Description {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
