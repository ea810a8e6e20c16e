//! Form-control adapter for select fields.
//!
//! Owners hand a select field plain identifiers (strings, numbers) while
//! dropdown widgets want full option objects with labels, possibly nested
//! in groups. This crate holds the glue: resolving external values to the
//! matching options (recursing through grouped option lists), deriving the
//! label/clear/disable state a form field needs, and mapping user
//! selections back to the owner's value shape. Rendering and the dropdown
//! widget itself stay external; they are consumed purely through prop and
//! event contracts.

pub mod select;

pub mod prelude {
    pub use crate::select::creatable::{
        NewOptionError, is_valid_new_option, no_options_message, validate_new_option,
    };
    pub use crate::select::filter::{FilterMatch, filter_options};
    pub use crate::select::item::{
        OptionLeaf, RawOption, SelectOption, leaf_labels, leaves, normalize,
    };
    pub use crate::select::props::{
        BoxFuture, ChangeHandler, DropdownBehavior, FocusEvent, FocusHandler, OptionsLoader,
        SelectProps,
    };
    pub use crate::select::render::{
        AsyncOptions, ContainerProps, DropdownKind, DropdownProps, FieldView, HelperTextProps,
        LabelProps,
    };
    pub use crate::select::resolve::{
        Selection, find_option, resolve, resolve_multi, resolve_single, to_external_value,
    };
    pub use crate::select::value::{ExternalValue, OptionValue, ValueProp};
    pub use crate::select::{ControlMode, SelectField};
}
