//! vouch - Composable matchers with readable failure messages
//!
//! Matcher objects express expectations ("the collection has size 3", "the
//! map has an entry a->1") and, when a candidate fails, explain why in
//! plain text. Matchers nest arbitrarily.
//!
//! # Architecture
//!
//! - [`Value`] — Type-erased candidate (primitives, collections, maps, sequences, custom)
//! - [`Matcher`] — Non-generic contract: `matches`, `describe_to`, `describe_mismatch`
//! - [`Description`] — Append-only text sink shared by a whole matcher tree
//! - [`AllOf`] — Conjunction that short-circuits and names one failing child
//! - [`Is`], [`DescribedAs`] — Decorators changing only the description
//! - [`FeatureMatcher`] — Applies a matcher to a derived property (size, count)
//! - Containment — [`IsIterableContainingInOrder`], [`IsIterableContaining`],
//!   [`IsMapContaining`]
//!
//! # Key Design Insights
//!
//! 1. **Type erasure at the candidate**: every matcher takes `&Value`, so
//!    `Box<dyn Matcher>` composes freely and a candidate of the wrong shape
//!    is an ordinary non-match, never a panic.
//!
//! 2. **One sink per evaluation**: the same `&mut Description` flows through
//!    every nested call. [`Description::none()`] discards everything.
//!
//! 3. **Sequences are single-pass**: each [`Value::items`] call starts one
//!    traversal; matchers never rely on a size they cannot read in O(1).
//!
//! # Example
//!
//! ```
//! use vouch::prelude::*;
//!
//! let matcher = all_of(matchers![has_size(3), has_items_values([3, 4])]);
//! let candidate = Value::list([1, 2, 3]);
//!
//! assert!(!matcher.matches(&candidate));
//! assert_eq!(
//!     Description::of(&matcher),
//!     "(a collection with size <3> and (a collection containing <3> and a collection containing <4>))"
//! );
//!
//! let mut mismatch = Description::new();
//! matcher.describe_mismatch(&candidate, &mut mismatch);
//! assert!(mismatch.to_string().ends_with("mismatches were: [was <1>, was <2>, was <3>]"));
//! ```
//!
//! # Extensions
//!
//! - `MatcherConfig` — build matcher trees from JSON/YAML (feature = `"config"`)
//! - [`vouch-test`](https://docs.rs/vouch-test) — assertion helpers and conformance fixtures (internal)

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod all_of;
mod described_as;
mod description;
mod feature;
mod has_item;
mod in_order;
mod is;
mod map_containing;
mod matcher;
mod value;

#[cfg(feature = "config")]
mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core types
pub use description::{Description, SelfDescribing};
pub use matcher::{Matcher, MatcherExt};
pub use value::{CustomValue, ForwardOnly, Items, Sequence, Value, ValueKind};

// Concrete matchers
pub use all_of::AllOf;
pub use described_as::DescribedAs;
pub use feature::{CollectionSize, Feature, FeatureMatcher, IterableSize};
pub use has_item::IsIterableContaining;
pub use in_order::{IsArrayContainingInOrder, IsIterableContainingInOrder};
pub use is::Is;
pub use map_containing::IsMapContaining;
pub use matcher::{IsAnything, IsEqual, IsInstanceOf};

// Factories
pub use all_of::all_of;
pub use described_as::described_as;
pub use feature::{has_size, has_size_that, iterable_with_size, iterable_with_size_that};
pub use has_item::{has_item, has_item_value, has_items, has_items_values};
pub use in_order::{array_containing, array_containing_matchers, contains, contains_matchers};
pub use is::{is, is_a, is_value};
pub use map_containing::{
    has_entry, has_entry_that, has_key, has_key_that, has_value, has_value_that,
};
pub use matcher::{anything, equal_to, instance_of};

// Config (feature-gated)
#[cfg(feature = "config")]
pub use config::MatcherConfig;

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use vouch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Factories
        all_of,
        anything,
        array_containing,
        array_containing_matchers,
        contains,
        contains_matchers,
        described_as,
        equal_to,
        has_entry,
        has_entry_that,
        has_item,
        has_item_value,
        has_items,
        has_items_values,
        has_key,
        has_key_that,
        has_size,
        has_size_that,
        has_value,
        has_value_that,
        instance_of,
        is,
        is_a,
        is_value,
        iterable_with_size,
        iterable_with_size_that,
        matchers,
        // Core types
        Description,
        // Errors
        MatcherError,
        // Traits
        CustomValue,
        Matcher,
        MatcherExt,
        SelfDescribing,
        Sequence,
        Value,
        ValueKind,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Macros
// ═══════════════════════════════════════════════════════════════════════════════

/// Box a list of heterogeneous matchers into a `Vec<Box<dyn Matcher>>`.
///
/// ```
/// use vouch::{anything, equal_to, matchers, Matcher};
///
/// let children: Vec<Box<dyn Matcher>> = matchers![equal_to(1), anything()];
/// assert_eq!(children.len(), 2);
/// ```
#[macro_export]
macro_rules! matchers {
    ($($matcher:expr),* $(,)?) => {
        ::std::vec![$(::std::boxed::Box::new($matcher) as ::std::boxed::Box<dyn $crate::Matcher>),*]
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum allowed depth for matcher trees built from config.
///
/// Checked by `MatcherConfig::build` before any node is constructed.
pub const MAX_DEPTH: usize = 32;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from matcher construction and validation.
///
/// Matching itself never fails; these are raised while building or checking
/// a matcher. Fix the input and rebuild.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatcherError {
    /// A `described_as` template refers to a value that was not supplied.
    #[error("description template uses %{index}, but only {available} value(s) were supplied")]
    PlaceholderOutOfRange {
        /// The placeholder index.
        index: usize,
        /// Number of substitution values.
        available: usize,
    },
    /// Matcher nesting exceeds [`MAX_DEPTH`].
    #[error("matcher nesting depth is {depth}, but maximum allowed is {max}")]
    DepthExceeded {
        /// Actual depth of the matcher tree.
        depth: usize,
        /// Maximum allowed depth.
        max: usize,
    },
    /// Configuration deserialization or construction failed.
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// The underlying error message.
        reason: String,
    },
}
