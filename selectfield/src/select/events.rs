//! Event handling for the select field: change, focus, and blur.

use super::props::{FocusEvent, SelectProps};
use super::resolve::{self, Selection};
use super::state::SelectField;

impl SelectField {
    /// Handle a selection change reported by the dropdown widget.
    ///
    /// Clears the filter text, stores the new selection, and reports the
    /// owner-facing value shape together with the raw selection. The raw
    /// selection argument is omitted entirely when the selection was
    /// cleared; the owner never sees a null placeholder for it.
    pub fn handle_change(&self, new_selection: Option<Selection>, props: &SelectProps) {
        self.store_change(new_selection.clone());

        let value = resolve::to_external_value(new_selection.as_ref());
        log::debug!("SelectField::handle_change value={:?}", value);

        (props.on_change)(value, new_selection.as_ref());
    }

    /// Handle focus gained on the underlying input.
    ///
    /// The event is forwarded untouched to the owner's focus callback when
    /// one is supplied.
    pub fn handle_focus(&self, event: &FocusEvent, props: &SelectProps) {
        self.set_input_focus(true);

        if let Some(on_focus) = &props.on_focus {
            on_focus(event);
        }
    }

    /// Handle focus leaving the underlying input.
    pub fn handle_blur(&self, event: &FocusEvent, props: &SelectProps) {
        self.set_input_focus(false);

        if let Some(on_blur) = &props.on_blur {
            on_blur(event);
        }
    }
}
