//! Render boundary: assembles the prop bundles for the collaborating
//! widgets (field container, label, dropdown, helper text).
//!
//! Nothing here draws anything; each bundle is handed to an external
//! widget that owns the actual markup and interaction.

use super::item::{SelectOption, normalize};
use super::props::{DropdownBehavior, OptionsLoader, SelectProps};
use super::resolve::Selection;
use super::state::SelectField;

/// Which dropdown widget flavor the field needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownKind {
    /// Fixed option list, no new-option entry.
    #[default]
    ReadOnly,
    /// The user may create options not present in the list.
    Creatable,
    /// Creatable, with the option list loaded asynchronously.
    AsyncCreatable,
}

/// Props for the outer field container widget.
#[derive(Debug, Clone, Default)]
pub struct ContainerProps {
    /// Render in the error state.
    pub error: bool,
    /// Stretch to the container width.
    pub full_width: bool,
    /// Mark as required.
    pub required: bool,
    /// Extra style class.
    pub class_name: Option<String>,
    /// Id of the helper text element describing this field.
    pub described_by: Option<String>,
}

/// Props for the floating label widget.
#[derive(Debug, Clone, Default)]
pub struct LabelProps {
    /// Id of the input the label points at.
    pub input_id: Option<String>,
    /// Label text.
    pub label: Option<String>,
    /// Whether the label floats out of the input area.
    pub shrink: bool,
    /// Whether the input currently has focus.
    pub has_input_focus: bool,
}

/// Props for the helper text widget.
#[derive(Debug, Clone, Default)]
pub struct HelperTextProps {
    /// Element id, present only when the container references it.
    pub id: Option<String>,
    /// Helper text.
    pub helper_text: Option<String>,
}

/// Async option loading bundle for the dropdown widget.
#[derive(Clone)]
pub struct AsyncOptions {
    /// Loader invoked with the current input text.
    pub load_options: OptionsLoader,
    /// Options shown before the first load completes.
    pub default_options: Vec<SelectOption>,
    /// Whether the widget should cache loaded options.
    pub cache_options: bool,
}

/// Props for the dropdown widget.
#[derive(Clone)]
pub struct DropdownProps {
    /// Input element id.
    pub input_id: Option<String>,
    /// The selection to display.
    pub value: Option<Selection>,
    /// Placeholder text; an empty string suppresses the widget's own
    /// default when the field carries a label instead.
    pub placeholder: Option<String>,
    /// Normalized option list.
    pub options: Vec<SelectOption>,
    /// Widget flavor.
    pub kind: DropdownKind,
    /// Behavior flags with the derived clearable/disabled state already
    /// substituted in.
    pub behavior: DropdownBehavior,
    /// Async loading bundle, present when the owner supplied a loader.
    pub async_options: Option<AsyncOptions>,
}

/// Complete per-render view of the field, one bundle per collaborator.
#[derive(Clone)]
pub struct FieldView {
    /// Field container props.
    pub container: ContainerProps,
    /// Floating label props.
    pub label: LabelProps,
    /// Dropdown widget props.
    pub dropdown: DropdownProps,
    /// Helper text props.
    pub helper_text: HelperTextProps,
}

impl SelectField {
    /// Assemble the collaborator prop bundles for the current render.
    pub fn view(&self, props: &SelectProps) -> FieldView {
        let options = normalize(props.options.clone());
        let selection = self.effective_selection(props);
        let is_disabled = Self::is_disabled(props);
        let is_clearable = props.behavior.is_clearable && self.is_clearable(props);
        let shrink = self.is_shrunk(props);
        let helper_id = helper_text_id(props);

        let behavior = DropdownBehavior {
            is_clearable,
            is_disabled,
            ..props.behavior.clone()
        };

        // A labeled field suppresses the dropdown widget's own placeholder.
        let placeholder = if props.label.is_some() {
            Some(String::new())
        } else {
            props.placeholder.clone()
        };

        let kind = match (props.behavior.is_creatable, props.load_options.is_some()) {
            (true, true) => DropdownKind::AsyncCreatable,
            (true, false) => DropdownKind::Creatable,
            (false, _) => DropdownKind::ReadOnly,
        };

        let async_options = props.load_options.clone().map(|load_options| AsyncOptions {
            load_options,
            default_options: props
                .default_options
                .clone()
                .map(normalize)
                .unwrap_or_else(|| options.clone()),
            cache_options: props.cache_options.unwrap_or(false),
        });

        FieldView {
            container: ContainerProps {
                error: props.error,
                full_width: props.full_width,
                required: props.required,
                class_name: props.class_name.clone(),
                described_by: helper_id.clone(),
            },
            label: LabelProps {
                input_id: props.id.clone(),
                label: props.label.clone(),
                shrink,
                has_input_focus: self.has_input_focus(),
            },
            dropdown: DropdownProps {
                input_id: props.id.clone(),
                value: selection,
                placeholder,
                options,
                kind,
                behavior,
                async_options,
            },
            helper_text: HelperTextProps {
                id: helper_id,
                helper_text: props.helper_text.clone(),
            },
        }
    }
}

/// Helper text element id, derived only when both the input id and the
/// helper text are present.
fn helper_text_id(props: &SelectProps) -> Option<String> {
    match (&props.id, &props.helper_text) {
        (Some(id), Some(_)) => Some(format!("{}-helper-text", id)),
        _ => None,
    }
}
