//! Creatable-mode validation and the dropdown status messages.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::item::{SelectOption, leaves};
use super::props::DropdownBehavior;
use super::resolve::Selection;
use super::value::OptionValue;

/// Default message when the option list is exhausted.
pub const MSG_NO_OPTIONS_AVAILABLE: &str = "No more options are available";
/// Default message when nothing matches the filter input.
pub const MSG_NO_OPTIONS_MATCH_FILTER: &str = "No options match the filter";
/// Default message when the typed value is not a valid new option.
pub const MSG_NO_VALID_VALUE: &str = "The new value is not valid (contains space)";

/// Why a typed candidate was rejected as a new option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewOptionError {
    /// Nothing was typed.
    #[error("the new value is empty")]
    Empty,
    /// The candidate already matches an existing option value.
    #[error("'{input}' already matches an existing option")]
    AlreadyAnOption {
        /// The rejected input.
        input: String,
    },
    /// The candidate contains whitespace.
    #[error("'{input}' contains whitespace")]
    ContainsWhitespace {
        /// The rejected input.
        input: String,
    },
}

fn whitespace() -> &'static Regex {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s").expect("Invalid regex pattern"));
    &RE
}

/// Case-insensitive comparison of typed input against an option value,
/// case folding both sides (the base-sensitivity locale comparison of the
/// owner contract).
fn equals_ignoring_case(input: &str, value: &OptionValue) -> bool {
    let value = value.to_string();
    input
        .chars()
        .flat_map(char::to_lowercase)
        .eq(value.chars().flat_map(char::to_lowercase))
}

/// Whether the input matches any leaf option value, ignoring case.
fn matches_existing(input: &str, options: &[SelectOption]) -> bool {
    leaves(options)
        .iter()
        .any(|leaf| equals_ignoring_case(input, &leaf.value))
}

/// Whether the input matches any currently selected value, ignoring case.
/// Only a multi selection is considered.
fn matches_selected(input: &str, current: Option<&Selection>) -> bool {
    match current {
        Some(Selection::Many(chosen)) => chosen
            .iter()
            .any(|leaf| equals_ignoring_case(input, &leaf.value)),
        _ => false,
    }
}

/// Validate a typed candidate as a new option.
///
/// A candidate is valid when it is non-empty, does not already match an
/// existing option value (case-insensitive), and contains no whitespace.
pub fn validate_new_option(
    input: &str,
    options: &[SelectOption],
) -> Result<(), NewOptionError> {
    if input.is_empty() {
        return Err(NewOptionError::Empty);
    }

    if matches_existing(input, options) {
        return Err(NewOptionError::AlreadyAnOption {
            input: input.to_string(),
        });
    }

    if whitespace().is_match(input) {
        return Err(NewOptionError::ContainsWhitespace {
            input: input.to_string(),
        });
    }

    Ok(())
}

/// Boolean form of [`validate_new_option`], the shape dropdown widgets ask
/// for.
pub fn is_valid_new_option(input: &str, options: &[SelectOption]) -> bool {
    validate_new_option(input, options).is_ok()
}

/// Status message the dropdown shows when it has no menu entries for the
/// current filter input.
///
/// An empty input means the option list is exhausted. A non-creatable
/// field, or an input that already matches an option or a currently
/// selected value, gets the filter message. Anything else was rejected as
/// a new option.
pub fn no_options_message(
    input: &str,
    behavior: &DropdownBehavior,
    options: &[SelectOption],
    current: Option<&Selection>,
) -> String {
    if input.is_empty() {
        return behavior
            .msg_no_options_available
            .clone()
            .unwrap_or_else(|| MSG_NO_OPTIONS_AVAILABLE.to_string());
    }

    if !behavior.is_creatable
        || matches_existing(input, options)
        || matches_selected(input, current)
    {
        return behavior
            .msg_no_options_match_filter
            .clone()
            .unwrap_or_else(|| MSG_NO_OPTIONS_MATCH_FILTER.to_string());
    }

    behavior
        .msg_no_valid_value
        .clone()
        .unwrap_or_else(|| MSG_NO_VALID_VALUE.to_string())
}
