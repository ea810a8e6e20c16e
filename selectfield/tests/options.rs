//! Tests for option normalization and the raw entry forms.

use selectfield::select::item::{
    OptionLeaf, RawOption, SelectOption, leaf_labels, leaves, normalize,
};
use selectfield::select::value::OptionValue;

#[test]
fn test_bare_string_becomes_leaf() {
    let normalized = normalize(["apple"]);
    assert_eq!(
        normalized,
        vec![SelectOption::Leaf(OptionLeaf::new("apple", "apple"))]
    );
}

#[test]
fn test_value_label_pair_becomes_leaf() {
    let normalized = normalize([("us", "United States")]);
    assert_eq!(
        normalized,
        vec![SelectOption::Leaf(OptionLeaf::new("United States", "us"))]
    );
}

#[test]
fn test_entry_with_options_becomes_group() {
    let raw = RawOption::Entry {
        label: "Fruits".to_string(),
        // A value on a group entry is ignored; groups are not selectable.
        value: Some(OptionValue::from("fruits")),
        options: Some(vec![RawOption::from("apple")]),
    };

    let normalized = normalize([raw]);
    assert_eq!(
        normalized,
        vec![SelectOption::group(
            "Fruits",
            vec![SelectOption::leaf("apple", "apple")]
        )]
    );
}

#[test]
fn test_malformed_entry_dropped() {
    let raw = RawOption::Entry {
        label: "orphan".to_string(),
        value: None,
        options: None,
    };

    assert!(normalize([raw]).is_empty());
}

#[test]
fn test_normalize_idempotent() {
    let raw = vec![
        RawOption::from("apple"),
        RawOption::Entry {
            label: "Fruits".to_string(),
            value: None,
            options: Some(vec![RawOption::from(("b", "Banana"))]),
        },
    ];

    let once = normalize(raw);
    let twice = normalize(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_leaves_level_order() {
    let options = vec![
        SelectOption::leaf("A", "a"),
        SelectOption::group(
            "G",
            vec![
                SelectOption::leaf("B", "b"),
                SelectOption::group("H", vec![SelectOption::leaf("D", "d")]),
            ],
        ),
        SelectOption::leaf("C", "c"),
    ];

    // Every member of one level comes before any group's children.
    assert_eq!(leaf_labels(&options), vec!["A", "C", "B", "D"]);
    assert_eq!(leaves(&options).len(), 4);
}

#[test]
fn test_deserialize_bare_and_entry_forms() {
    let raw: Vec<RawOption> = serde_json::from_str(
        r#"["apple", {"label": "Banana", "value": "b"}, {"label": "G", "options": ["c"]}]"#,
    )
    .unwrap();

    let normalized = normalize(raw);
    assert_eq!(
        normalized,
        vec![
            SelectOption::leaf("apple", "apple"),
            SelectOption::leaf("Banana", "b"),
            SelectOption::group("G", vec![SelectOption::leaf("c", "c")]),
        ]
    );
}

#[test]
fn test_deserialize_non_string_values() {
    let raw: Vec<RawOption> = serde_json::from_str(
        r#"[{"label": "Seven", "value": 7}, {"label": "Yes", "value": true}]"#,
    )
    .unwrap();

    let normalized = normalize(raw);
    assert_eq!(
        normalized,
        vec![
            SelectOption::leaf("Seven", 7i64),
            SelectOption::leaf("Yes", true),
        ]
    );
}

#[test]
fn test_serialize_round_trip() {
    let options = vec![
        SelectOption::leaf("Banana", "b"),
        SelectOption::group("G", vec![SelectOption::leaf("c", "c")]),
    ];

    let json = serde_json::to_string(&options).unwrap();
    let back: Vec<SelectOption> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}
