//! Owner-facing configuration and the collaborator callback contracts.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::item::RawOption;
use super::resolve::Selection;
use super::value::{ExternalValue, OptionValue, ValueProp};

/// Type alias for boxed futures used by the async options loader.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Asynchronous "load options by input text" operation supplied by the
/// owner and handed through to the dropdown widget.
///
/// Debouncing, request cancellation, and race resolution between
/// overlapping loads belong to the dropdown widget, not to this crate.
pub type OptionsLoader = Arc<dyn Fn(String) -> BoxFuture<'static, Vec<String>> + Send + Sync>;

/// Change callback: receives the owner-facing value shape and the raw
/// resolved selection. The selection argument is absent exactly when the
/// selection was cleared.
pub type ChangeHandler = Arc<dyn Fn(ExternalValue, Option<&Selection>) + Send + Sync>;

/// Focus/blur callback; the collaborator widget's event is forwarded
/// untouched.
pub type FocusHandler = Arc<dyn Fn(&FocusEvent) + Send + Sync>;

/// Focus event as delivered by the dropdown widget.
#[derive(Debug, Clone, Default)]
pub struct FocusEvent {
    /// Input element id the event originated from, when the widget knows it.
    pub input_id: Option<String>,
}

/// Behavior flags and message overrides forwarded to the dropdown widget.
///
/// This is the nested configuration bag of the owner contract; the field
/// substitutes derived `is_clearable`/`is_disabled` values before handing
/// it to the dropdown.
#[derive(Debug, Clone, Default)]
pub struct DropdownBehavior {
    /// Multi-select mode.
    pub is_multi: bool,
    /// Owner opt-in for the clear affordance.
    pub is_clearable: bool,
    /// Disable flag local to the dropdown configuration.
    pub is_disabled: bool,
    /// Allow the user to submit values not present in the option list.
    pub is_creatable: bool,
    /// Override for the "option list exhausted" message.
    pub msg_no_options_available: Option<String>,
    /// Override for the "nothing matches the filter" message.
    pub msg_no_options_match_filter: Option<String>,
    /// Override for the "typed value is not a valid new option" message.
    pub msg_no_valid_value: Option<String>,
}

/// Owner-facing configuration for a select field, supplied on every render.
///
/// # Example
///
/// ```
/// use selectfield::select::props::SelectProps;
///
/// let props = SelectProps::new(["Afghanistan", "Albania", "Algeria"], |value, _option| {
///     println!("changed to {:?}", value);
/// })
/// .label("Country")
/// .placeholder("Pick a country");
/// assert!(props.value.is_unset());
/// ```
#[derive(Clone)]
pub struct SelectProps {
    /// Declared option universe, raw form.
    pub options: Vec<RawOption>,
    /// Change callback, required.
    pub on_change: ChangeHandler,
    /// Focus callback.
    pub on_focus: Option<FocusHandler>,
    /// Blur callback.
    pub on_blur: Option<FocusHandler>,
    /// Controlled value (single-select mode).
    pub value: ValueProp<OptionValue>,
    /// Controlled values (multi-select mode).
    pub values: ValueProp<Vec<OptionValue>>,
    /// Initial value used when `value` is not supplied.
    pub default_value: ValueProp<OptionValue>,
    /// Initial values used when `values` is not supplied.
    pub default_values: ValueProp<Vec<OptionValue>>,
    /// Dropdown behavior flags and message overrides.
    pub behavior: DropdownBehavior,
    /// Async option loader; its presence makes the option list remote.
    pub load_options: Option<OptionsLoader>,
    /// Options shown before the first async load completes.
    pub default_options: Option<Vec<RawOption>>,
    /// Whether the dropdown widget should cache loaded options.
    pub cache_options: Option<bool>,
    /// Input element id.
    pub id: Option<String>,
    /// Floating label text.
    pub label: Option<String>,
    /// Placeholder text, shown only when no label is configured.
    pub placeholder: Option<String>,
    /// Helper text shown under the field.
    pub helper_text: Option<String>,
    /// Disable the whole field.
    pub disabled: bool,
    /// Render the field in its error state.
    pub error: bool,
    /// Mark the field as required.
    pub required: bool,
    /// Stretch the field to the container width.
    pub full_width: bool,
    /// Extra style class for the container.
    pub class_name: Option<String>,
}

impl SelectProps {
    /// Create props from the required configuration: the option universe
    /// and the change callback.
    pub fn new(
        options: impl IntoIterator<Item = impl Into<RawOption>>,
        on_change: impl Fn(ExternalValue, Option<&Selection>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            on_change: Arc::new(on_change),
            on_focus: None,
            on_blur: None,
            value: ValueProp::Unset,
            values: ValueProp::Unset,
            default_value: ValueProp::Unset,
            default_values: ValueProp::Unset,
            behavior: DropdownBehavior::default(),
            load_options: None,
            default_options: None,
            cache_options: None,
            id: None,
            label: None,
            placeholder: None,
            helper_text: None,
            disabled: false,
            error: false,
            required: false,
            full_width: false,
            class_name: None,
        }
    }

    /// Switch to multi-select mode.
    pub fn multi(mut self) -> Self {
        self.behavior.is_multi = true;
        self
    }

    /// Opt in to the clear affordance.
    pub fn clearable(mut self) -> Self {
        self.behavior.is_clearable = true;
        self
    }

    /// Allow the user to create options not present in the list.
    pub fn creatable(mut self) -> Self {
        self.behavior.is_creatable = true;
        self
    }

    /// Set the controlled single-select value.
    pub fn value(mut self, value: impl Into<OptionValue>) -> Self {
        self.value = ValueProp::Set(value.into());
        self
    }

    /// Set the controlled multi-select values.
    pub fn values(mut self, values: impl IntoIterator<Item = impl Into<OptionValue>>) -> Self {
        self.values = ValueProp::Set(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the initial single-select value.
    pub fn default_value(mut self, value: impl Into<OptionValue>) -> Self {
        self.default_value = ValueProp::Set(value.into());
        self
    }

    /// Set the initial multi-select values.
    pub fn default_values(
        mut self,
        values: impl IntoIterator<Item = impl Into<OptionValue>>,
    ) -> Self {
        self.default_values = ValueProp::Set(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the focus callback.
    pub fn on_focus(mut self, on_focus: impl Fn(&FocusEvent) + Send + Sync + 'static) -> Self {
        self.on_focus = Some(Arc::new(on_focus));
        self
    }

    /// Set the blur callback.
    pub fn on_blur(mut self, on_blur: impl Fn(&FocusEvent) + Send + Sync + 'static) -> Self {
        self.on_blur = Some(Arc::new(on_blur));
        self
    }

    /// Set the async option loader.
    pub fn load_options(
        mut self,
        loader: impl Fn(String) -> BoxFuture<'static, Vec<String>> + Send + Sync + 'static,
    ) -> Self {
        self.load_options = Some(Arc::new(loader));
        self
    }

    /// Set the options shown before the first async load completes.
    pub fn default_options(
        mut self,
        options: impl IntoIterator<Item = impl Into<RawOption>>,
    ) -> Self {
        self.default_options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Ask the dropdown widget to cache loaded options.
    pub fn cache_options(mut self, cache: bool) -> Self {
        self.cache_options = Some(cache);
        self
    }

    /// Set the input element id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the floating label text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the helper text.
    pub fn helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    /// Set the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the error flag.
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Stretch the field to the container width.
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Whether multi-select mode is active.
    pub fn is_multi(&self) -> bool {
        self.behavior.is_multi
    }
}
