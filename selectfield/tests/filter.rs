//! Tests for the dropdown-side option filter.

use selectfield::select::filter::filter_options;
use selectfield::select::item::{SelectOption, leaf_labels, normalize};

#[test]
fn test_empty_input_returns_all_leaves() {
    let options = vec![
        SelectOption::leaf("apple", "a"),
        SelectOption::group("Tropical", vec![SelectOption::leaf("banana", "b")]),
    ];

    let matches = filter_options("", &options);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].index, 0);
    assert_eq!(matches[1].index, 1);
}

#[test]
fn test_fuzzy_matching() {
    let options = normalize(["apple", "banana", "apricot"]);

    let matches = filter_options("ap", &options);
    assert_eq!(matches.len(), 2);

    let labels = leaf_labels(&options);
    let hit_labels: Vec<&str> = matches
        .iter()
        .map(|m| labels[m.index].as_str())
        .collect();
    assert!(hit_labels.contains(&"apple"));
    assert!(hit_labels.contains(&"apricot"));
}

#[test]
fn test_no_matches() {
    let options = normalize(["apple", "banana"]);
    assert!(filter_options("xyz", &options).is_empty());
}

#[test]
fn test_case_insensitive() {
    let options = normalize(["Apple", "BANANA"]);
    let matches = filter_options("apple", &options);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].index, 0);
}

#[test]
fn test_group_headings_not_matched() {
    let options = vec![SelectOption::group(
        "Fruits",
        vec![SelectOption::leaf("carrot", "c")],
    )];

    assert!(filter_options("fruit", &options).is_empty());
}
