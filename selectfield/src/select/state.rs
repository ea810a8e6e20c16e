//! Select field state: transient UI state and the selection precedence.

use std::sync::{Arc, RwLock};

use super::item::normalize;
use super::props::SelectProps;
use super::resolve::{self, Selection};
use super::value::{ExternalValue, ValueProp};

/// Who currently governs the field's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// A live `value`/`values` prop is present; the prop wins every render.
    ExternallyControlled,
    /// No live value prop; the field tracks its own last selection.
    SelfTracked,
}

/// Transient state for a select field.
#[derive(Debug, Default)]
struct FieldInner {
    /// Whether the underlying input has focus.
    has_input_focus: bool,
    /// Current dropdown filter text.
    filter: String,
    /// Last resolved or user-assigned selection; the fallback whenever no
    /// live value prop resolves.
    selected: Option<Selection>,
}

/// State controller for a select form field.
///
/// Reconciles the owner's external value shape with the option objects the
/// dropdown widget needs, and derives the label/clear/disable state from
/// the resolved selection plus transient focus and filter state. Cloning
/// yields a handle onto the same state, so event closures can share it.
///
/// # Example
///
/// ```
/// use selectfield::select::{SelectField, SelectProps};
///
/// let props = SelectProps::new(["Low", "Medium", "High"], |_value, _option| {})
///     .default_value("Medium");
/// let field = SelectField::new(&props);
/// let selection = field.effective_selection(&props).unwrap();
/// assert_eq!(selection.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SelectField {
    inner: Arc<RwLock<FieldInner>>,
}

impl SelectField {
    /// Create a field seeded from the initial props.
    ///
    /// The seed value prefers the mode-appropriate explicit `value`/`values`
    /// over `default_value`/`default_values`; an explicit null in the live
    /// slot falls through to the default here, unlike at render time.
    pub fn new(props: &SelectProps) -> Self {
        let options = normalize(props.options.clone());
        let initial = Self::initial_value(props);
        let selected = resolve::resolve(&options, initial.as_ref());

        log::debug!(
            "SelectField::new multi={} seeded={}",
            props.is_multi(),
            selected.is_some()
        );

        Self {
            inner: Arc::new(RwLock::new(FieldInner {
                selected,
                ..FieldInner::default()
            })),
        }
    }

    /// Initial value by construction-time precedence.
    fn initial_value(props: &SelectProps) -> Option<ExternalValue> {
        if props.is_multi() {
            props
                .values
                .as_set()
                .or_else(|| props.default_values.as_set())
                .map(|values| ExternalValue::Many(values.clone()))
        } else {
            props
                .value
                .as_set()
                .or_else(|| props.default_value.as_set())
                .map(|value| ExternalValue::One(value.clone()))
        }
    }

    /// Live external value for the current mode, ignoring defaults.
    fn live_value(props: &SelectProps) -> Option<ExternalValue> {
        if props.is_multi() {
            props
                .values
                .as_set()
                .map(|values| ExternalValue::Many(values.clone()))
        } else {
            props
                .value
                .as_set()
                .map(|value| ExternalValue::One(value.clone()))
        }
    }

    /// Whether the props or the tracked state govern the selection.
    pub fn control_mode(props: &SelectProps) -> ControlMode {
        let live_unset = if props.is_multi() {
            props.values.is_unset()
        } else {
            props.value.is_unset()
        };

        if live_unset {
            ControlMode::SelfTracked
        } else {
            ControlMode::ExternallyControlled
        }
    }

    /// Compute the selection to display for this render.
    ///
    /// Precedence: an explicit null (or an empty multi value) clears; a
    /// live value that resolves against the options wins; otherwise the
    /// cached selection stands, which covers self-tracked fields and values
    /// not yet present in an asynchronously loading option list.
    pub fn effective_selection(&self, props: &SelectProps) -> Option<Selection> {
        if props.is_multi() {
            match &props.values {
                ValueProp::Null => return None,
                ValueProp::Set(values) if values.is_empty() => return None,
                _ => {}
            }
        } else if matches!(props.value, ValueProp::Null) {
            return None;
        }

        let options = normalize(props.options.clone());
        if let Some(live) = Self::live_value(props)
            && let Some(selection) = resolve::resolve(&options, Some(&live))
        {
            return Some(selection);
        }

        self.inner
            .read()
            .map(|guard| guard.selected.clone())
            .unwrap_or(None)
    }

    /// Whether the clear affordance should be offered.
    ///
    /// A multi-select only clears from two selected options upward; the
    /// last remaining tag is removed per-tag instead. A disabled field is
    /// never clearable.
    pub fn is_clearable(&self, props: &SelectProps) -> bool {
        if Self::is_disabled(props) {
            return false;
        }

        match self.effective_selection(props) {
            Some(Selection::Many(leaves)) => leaves.len() >= 2,
            Some(Selection::One(_)) => true,
            None => false,
        }
    }

    /// Whether the floating label should shrink out of the input area.
    pub fn is_shrunk(&self, props: &SelectProps) -> bool {
        let (has_focus, has_filter) = self
            .inner
            .read()
            .map(|guard| (guard.has_input_focus, !guard.filter.is_empty()))
            .unwrap_or((false, false));

        if has_focus || has_filter {
            return true;
        }

        self.effective_selection(props)
            .is_some_and(|selection| !selection.is_empty())
    }

    /// Whether the field is disabled, from the field prop or the nested
    /// dropdown behavior flag.
    pub fn is_disabled(props: &SelectProps) -> bool {
        props.disabled || props.behavior.is_disabled
    }

    /// Whether the underlying input has focus.
    pub fn has_input_focus(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.has_input_focus)
            .unwrap_or(false)
    }

    /// Current dropdown filter text.
    pub fn filter(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.filter.clone())
            .unwrap_or_default()
    }

    /// Record the dropdown's current filter text.
    pub fn set_filter(&self, filter: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.filter = filter.into();
        }
    }

    /// The cached selection, regardless of live props.
    pub fn selected(&self) -> Option<Selection> {
        self.inner
            .read()
            .map(|guard| guard.selected.clone())
            .unwrap_or(None)
    }

    /// Store a user-driven selection and reset the filter.
    pub(super) fn store_change(&self, selection: Option<Selection>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.filter.clear();
            guard.selected = selection;
        }
    }

    /// Record input focus state.
    pub(super) fn set_input_focus(&self, has_focus: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.has_input_focus = has_focus;
        }
    }
}
