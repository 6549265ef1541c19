//! Behavioural tests for the public matcher surface, written with the
//! vouch-test assertion helpers.

use vouch_test::prelude::*;

/// Matches one exact string and reports mismatches in its own words.
#[derive(Debug)]
struct Mismatchable(&'static str);

impl SelfDescribing for Mismatchable {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("mismatchable: ").append_text(self.0);
    }
}

impl Matcher for Mismatchable {
    fn matches(&self, actual: &Value) -> bool {
        actual.as_str() == Some(self.0)
    }

    fn describe_mismatch(&self, actual: &Value, mismatch: &mut Description) {
        mismatch
            .append_text("mismatched: ")
            .append_text(actual.as_str().unwrap_or("?"));
    }
}

fn empty_list() -> Value {
    Value::list(Vec::<Value>::new())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Null and unknown-type safety
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn every_matcher_copes_with_nulls_and_unknown_types() {
    let all: Vec<Box<dyn Matcher>> = matchers![
        equal_to("irrelevant"),
        anything(),
        instance_of(ValueKind::String),
        all_of(matchers![equal_to(1), anything()]),
        is(equal_to(1)),
        described_as("irrelevant", equal_to(1), Vec::<Value>::new()),
        has_size(1),
        iterable_with_size(1),
        contains([1]),
        array_containing([1]),
        has_item(equal_to("irrelevant")),
        has_items_values([1, 2]),
        has_entry("k", "v"),
        has_key("k"),
        has_value("v"),
    ];
    for matcher in &all {
        assert_null_safe(matcher);
        assert_unknown_type_safe(matcher);
    }
}

#[test]
fn containers_do_not_match_null() {
    assert_does_not_match(&has_item(anything()), Value::Null);
    assert_does_not_match(&has_size_that(anything()), Value::Null);
    assert_does_not_match(&contains_matchers(vec![]), Value::Null);
    assert_does_not_match(&has_key_that(anything()), Value::Null);
}

#[test]
fn wrong_shape_mismatch_names_the_type() {
    assert_mismatch_description(
        "was an unknown type (<UnknownType>)",
        &has_item(anything()),
        Value::custom(UnknownType),
    );
    assert_mismatch_description("was an int (<7>)", &has_key("k"), 7);
}

// ═══════════════════════════════════════════════════════════════════════════════
// AllOf
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn all_of_evaluates_to_the_conjunction() {
    let matcher = all_of(matchers![
        Mismatchable("good"),
        Mismatchable("good"),
        Mismatchable("good")
    ]);
    assert_matches(&matcher, "good");
    assert_mismatch_description("mismatchable: good mismatched: bad", &matcher, "bad");
}

#[test]
fn all_of_reports_only_the_first_failure() {
    let matcher = all_of(matchers![
        Mismatchable("good"),
        Mismatchable("good"),
        Mismatchable("bad"),
        Mismatchable("good"),
        Mismatchable("bad")
    ]);
    assert_mismatch_description("mismatchable: bad mismatched: good", &matcher, "good");
}

#[test]
fn all_of_has_a_readable_description() {
    assert_description(
        "(\"good\" and \"bad\" and \"ugly\")",
        &all_of(matchers![equal_to("good"), equal_to("bad"), equal_to("ugly")]),
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Decorators
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn is_delegates_to_the_wrapped_matcher() {
    assert_matches(&is(equal_to(true)), true);
    assert_does_not_match(&is(equal_to(true)), false);
    assert_description("is \"A\"", &is(equal_to("A")));
    assert_mismatch_description("was \"B\"", &is(equal_to("A")), "B");
}

#[test]
fn is_shortcuts() {
    assert_that(3, &is_value(3));
    assert_that("text", &is_a(ValueKind::String));
    assert_description("is an instance of string", &is_a(ValueKind::String));
}

#[test]
fn described_as_keeps_the_wrapped_verdict() {
    let matcher = described_as("mismatchable %0", Mismatchable("x"), ["x"]);
    assert_description("mismatchable \"x\"", &matcher);
    assert_matches(&matcher, "x");
    assert_mismatch_description("mismatched: y", &matcher, "y");
}

// ═══════════════════════════════════════════════════════════════════════════════
// Feature extraction
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn has_size_on_any_sized_collection() {
    assert_that(Value::list([1, 2]), &has_size(2));
    assert_that(Value::array(["a", "b"]), &has_size(2));
    assert_that(Value::map([("a", 1), ("b", 2)]), &has_size(2));
    assert_mismatch_description("collection size was <3>", &has_size(2), Value::list([1, 2, 3]));
}

#[test]
fn has_size_that_composes() {
    let matcher = has_size_that(is(equal_to(0)));
    assert_matches(&matcher, empty_list());
    assert_description("a collection with size is <0>", &matcher);
}

#[test]
fn iterable_with_size_agrees_with_has_size() {
    for n in 0..5_usize {
        let list = Value::list((0..n).map(Value::from));
        let sequence = Value::forward_only((0..n).map(Value::from));
        assert_matches(&has_size(n), list.clone());
        assert_matches(&iterable_with_size(n), list);
        assert_matches(&iterable_with_size(n), sequence);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Ordered containment
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn array_containing_requires_exact_order_and_length() {
    let matcher = array_containing(["a", "b", "c"]);
    assert_matches(&matcher, Value::array(["a", "b", "c"]));
    assert_does_not_match(&matcher, Value::array(["a", "b"]));
    assert_does_not_match(&matcher, Value::array(["a", "b", "c", "d"]));
    assert_does_not_match(&matcher, Value::array(["c", "b", "a"]));
    assert_description("[\"a\", \"b\", \"c\"]", &matcher);
}

#[test]
fn array_containing_with_custom_matchers() {
    let matcher = array_containing_matchers(matchers![Mismatchable("a"), Mismatchable("b")]);
    assert_mismatch_description(
        "item 1: expected mismatchable: b but mismatched: z",
        &matcher,
        Value::array(["a", "z"]),
    );
}

#[test]
fn contains_reports_length_mismatch() {
    assert_mismatch_description(
        "item count was <1> but expected <2>",
        &contains([1, 2]),
        Value::forward_only([1]),
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Unordered membership
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn has_item_matches_a_collection_containing_the_item() {
    assert_matches(&has_item(equal_to("a")), Value::list(["a", "b", "c"]));
}

#[test]
fn has_item_does_not_match_without_the_item() {
    let matcher = has_item(Mismatchable("a"));
    assert_mismatch_description(
        "mismatches were: [mismatched: b, mismatched: c]",
        &matcher,
        Value::list(["b", "c"]),
    );
    assert_mismatch_description("was empty", &matcher, empty_list());
}

#[test]
fn has_item_has_a_readable_description() {
    assert_description("a collection containing mismatchable: a", &has_item(Mismatchable("a")));
}

#[test]
fn has_items_matches_in_any_order_with_extras() {
    let matcher = has_items(matchers![equal_to("a"), equal_to("b"), equal_to("c")]);
    assert_matches(&matcher, Value::list(["a", "b", "c"]));
    assert_matches(&matcher, Value::list(["c", "b", "a"]));
    assert_matches(&matcher, Value::list(["e", "c", "b", "a", "d"]));
    assert_does_not_match(&matcher, Value::list(["e", "c", "b", "d"]));
}

#[test]
fn has_items_reports_the_first_missing_item() {
    assert_mismatch_description(
        "a collection containing <4> mismatches were: [was <1>, was <2>, was <3>]",
        &has_items_values([3, 4]),
        Value::list([1, 2, 3]),
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Map containment
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn map_matchers() {
    let map = Value::map([("a", 1), ("b", 2)]);
    assert_matches(&has_entry("a", 1), map.clone());
    assert_matches(&has_key("b"), map.clone());
    assert_matches(&has_value(2), map.clone());
    assert_matches(&has_entry_that(instance_of(ValueKind::String), is(equal_to(2))), map.clone());
    assert_mismatch_description("map was [<a=1>, <b=2>]", &has_entry("a", 2), map);
}

#[test]
fn map_matcher_descriptions() {
    assert_description("map containing [\"a\"-><1>]", &has_entry("a", 1));
    assert_description("map containing [\"a\"->ANYTHING]", &has_key("a"));
    assert_description("map containing [ANYTHING-><1>]", &has_value(1));
    assert_description(
        "map containing [\"a\"->ANYTHING]",
        &has_key_that(equal_to("a")),
    );
    assert_description(
        "map containing [ANYTHING->an instance of int]",
        &has_value_that(instance_of(ValueKind::Int)),
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Concurrency
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn matchers_evaluate_concurrently() {
    let matcher = all_of(matchers![has_size(3), has_items_values([1, 3])]);
    let candidate = Value::list([1, 2, 3]);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert!(matcher.matches(&candidate));
                }
            });
        }
    });
}
