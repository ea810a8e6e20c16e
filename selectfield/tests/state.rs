//! Tests for field state, selection precedence, and the derived flags.

use std::sync::{Arc, Mutex};

use selectfield::select::item::OptionLeaf;
use selectfield::select::props::{FocusEvent, SelectProps};
use selectfield::select::resolve::Selection;
use selectfield::select::value::{ExternalValue, OptionValue, ValueProp};
use selectfield::select::{ControlMode, SelectField};

fn fruit_props() -> SelectProps {
    SelectProps::new([("a", "Apple"), ("b", "Banana"), ("c", "Cherry")], |_, _| {})
}

fn selected_value(selection: &Selection) -> &OptionValue {
    match selection {
        Selection::One(leaf) => &leaf.value,
        Selection::Many(leaves) => &leaves[0].value,
    }
}

#[test]
fn test_construct_prefers_explicit_value_over_default() {
    let props = fruit_props().value("a").default_value("b");
    let field = SelectField::new(&props);

    let selected = field.selected().unwrap();
    assert_eq!(selected_value(&selected), &OptionValue::from("a"));
}

#[test]
fn test_construct_null_value_falls_through_to_default() {
    let mut props = fruit_props().default_value("b");
    props.value = ValueProp::Null;

    let field = SelectField::new(&props);
    let selected = field.selected().unwrap();
    assert_eq!(selected_value(&selected), &OptionValue::from("b"));
}

#[test]
fn test_construct_without_values_has_no_selection() {
    let field = SelectField::new(&fruit_props());
    assert!(field.selected().is_none());
}

#[test]
fn test_construct_multi_uses_default_values() {
    let props = fruit_props().multi().default_values(["a", "c"]);
    let field = SelectField::new(&props);

    match field.selected().unwrap() {
        Selection::Many(leaves) => assert_eq!(leaves.len(), 2),
        Selection::One(_) => panic!("multi mode seeded a single selection"),
    }
}

#[test]
fn test_control_mode() {
    assert_eq!(
        SelectField::control_mode(&fruit_props()),
        ControlMode::SelfTracked
    );

    assert_eq!(
        SelectField::control_mode(&fruit_props().value("a")),
        ControlMode::ExternallyControlled
    );

    let mut props = fruit_props();
    props.value = ValueProp::Null;
    assert_eq!(
        SelectField::control_mode(&props),
        ControlMode::ExternallyControlled
    );

    // Multi mode looks at `values`, not `value`.
    let props = fruit_props().multi().value("a");
    assert_eq!(SelectField::control_mode(&props), ControlMode::SelfTracked);
}

#[test]
fn test_effective_null_clears_despite_cache() {
    // Seeded from the default, so the cache holds Banana.
    let props = fruit_props().default_value("b");
    let field = SelectField::new(&props);
    assert!(field.selected().is_some());

    let mut render_props = fruit_props();
    render_props.value = ValueProp::Null;
    assert!(field.effective_selection(&render_props).is_none());
}

#[test]
fn test_effective_empty_multi_values_clear() {
    let props = fruit_props().multi().default_values(["a"]);
    let field = SelectField::new(&props);

    let render_props = fruit_props().multi().values(Vec::<&str>::new());
    assert!(field.effective_selection(&render_props).is_none());
}

#[test]
fn test_effective_live_value_wins_over_cache() {
    let props = fruit_props().default_value("b");
    let field = SelectField::new(&props);

    let render_props = fruit_props().value("a");
    let selection = field.effective_selection(&render_props).unwrap();
    assert_eq!(selected_value(&selection), &OptionValue::from("a"));
}

#[test]
fn test_effective_falls_back_to_cache_when_value_not_in_options() {
    // The live value is not in the option list yet (async load still
    // pending); the cached selection stands.
    let props = fruit_props().default_value("b");
    let field = SelectField::new(&props);

    let render_props = fruit_props().value("z");
    let selection = field.effective_selection(&render_props).unwrap();
    assert_eq!(selected_value(&selection), &OptionValue::from("b"));
}

#[test]
fn test_change_updates_cache_for_self_tracked_field() {
    let props = fruit_props();
    let field = SelectField::new(&props);

    let pick = Selection::One(OptionLeaf::new("Apple", "a"));
    field.handle_change(Some(pick), &props);

    let selection = field.effective_selection(&props).unwrap();
    assert_eq!(selected_value(&selection), &OptionValue::from("a"));
}

#[test]
fn test_clearable_single_selection() {
    let props = fruit_props().value("a");
    let field = SelectField::new(&props);
    assert!(field.is_clearable(&props));
}

#[test]
fn test_clearable_no_selection() {
    let props = fruit_props();
    let field = SelectField::new(&props);
    assert!(!field.is_clearable(&props));
}

#[test]
fn test_clearable_multi_needs_two_selected() {
    let one = fruit_props().multi().values(["a"]);
    let field = SelectField::new(&one);
    assert!(!field.is_clearable(&one));

    let two = fruit_props().multi().values(["a", "b"]);
    assert!(field.is_clearable(&two));
}

#[test]
fn test_clearable_false_when_disabled() {
    let props = fruit_props().value("a").disabled(true);
    let field = SelectField::new(&props);
    assert!(!field.is_clearable(&props));

    // The nested behavior flag disables just the same.
    let mut props = fruit_props().value("a");
    props.behavior.is_disabled = true;
    assert!(!field.is_clearable(&props));
}

#[test]
fn test_disabled_from_either_flag() {
    assert!(!SelectField::is_disabled(&fruit_props()));
    assert!(SelectField::is_disabled(&fruit_props().disabled(true)));

    let mut props = fruit_props();
    props.behavior.is_disabled = true;
    assert!(SelectField::is_disabled(&props));
}

#[test]
fn test_shrink_false_at_rest() {
    let props = fruit_props();
    let field = SelectField::new(&props);
    assert!(!field.is_shrunk(&props));
}

#[test]
fn test_shrink_on_focus() {
    let props = fruit_props();
    let field = SelectField::new(&props);

    field.handle_focus(&FocusEvent::default(), &props);
    assert!(field.is_shrunk(&props));

    field.handle_blur(&FocusEvent::default(), &props);
    assert!(!field.is_shrunk(&props));
}

#[test]
fn test_shrink_on_filter_text() {
    let props = fruit_props();
    let field = SelectField::new(&props);

    field.set_filter("ap");
    assert!(field.is_shrunk(&props));
}

#[test]
fn test_shrink_on_selection() {
    let props = fruit_props().value("a");
    let field = SelectField::new(&props);
    assert!(field.is_shrunk(&props));
}

#[test]
fn test_change_with_null_reports_null_and_no_option() {
    let reported: Arc<Mutex<Vec<(ExternalValue, bool)>>> = Arc::default();
    let sink = Arc::clone(&reported);

    let props = SelectProps::new([("a", "Apple")], move |value, option| {
        sink.lock().unwrap().push((value, option.is_some()));
    });
    let field = SelectField::new(&props);

    field.handle_change(None, &props);

    let calls = reported.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], (ExternalValue::Null, false));
}

#[test]
fn test_change_round_trip_multi() {
    let reported: Arc<Mutex<Vec<(ExternalValue, bool)>>> = Arc::default();
    let sink = Arc::clone(&reported);

    let props = SelectProps::new([("a", "Apple")], move |value, option| {
        sink.lock().unwrap().push((value, option.is_some()));
    })
    .multi();
    let field = SelectField::new(&props);

    let pick = Selection::Many(vec![OptionLeaf::new("Apple", "a")]);
    field.handle_change(Some(pick), &props);

    let calls = reported.lock().unwrap();
    assert_eq!(
        calls[0],
        (ExternalValue::Many(vec![OptionValue::from("a")]), true)
    );
}

#[test]
fn test_change_clears_filter_text() {
    let props = fruit_props();
    let field = SelectField::new(&props);

    field.set_filter("ban");
    field.handle_change(None, &props);
    assert_eq!(field.filter(), "");
}

#[test]
fn test_focus_events_forwarded_to_owner() {
    let seen: Arc<Mutex<Vec<&'static str>>> = Arc::default();

    let focus_sink = Arc::clone(&seen);
    let blur_sink = Arc::clone(&seen);
    let props = fruit_props()
        .on_focus(move |_| focus_sink.lock().unwrap().push("focus"))
        .on_blur(move |_| blur_sink.lock().unwrap().push("blur"));

    let field = SelectField::new(&props);

    field.handle_focus(&FocusEvent::default(), &props);
    assert!(field.has_input_focus());

    field.handle_blur(&FocusEvent::default(), &props);
    assert!(!field.has_input_focus());

    assert_eq!(*seen.lock().unwrap(), vec!["focus", "blur"]);
}
