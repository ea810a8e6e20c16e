//! Value resolution: mapping external identifiers to option leaves and back.

use super::item::{OptionLeaf, SelectOption};
use super::value::{ExternalValue, OptionValue};

/// A resolved selection.
///
/// Single-select mode never produces `Many`; multi-select mode never
/// produces `One`. "No selection" is expressed as `None` around this type.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// The single selected option.
    One(OptionLeaf),
    /// The selected options, in selection order.
    Many(Vec<OptionLeaf>),
}

impl Selection {
    /// Number of selected options.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(leaves) => leaves.len(),
        }
    }

    /// Whether nothing is selected. Only a multi selection can be empty;
    /// dropdown widgets may report one after the last tag is removed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Find the leaf whose value deep-equals `value`.
///
/// The search is an explicit worklist over nesting levels: every member of
/// the current level is scanned in order first; if none matches, the
/// children of all groups at that level (in member order) form the next
/// level. Terminates once a level contains no groups. Cyclic option graphs
/// are a caller error; option trees are finite.
pub fn find_option<'a>(
    options: &'a [SelectOption],
    value: &OptionValue,
) -> Option<&'a OptionLeaf> {
    let mut level: Vec<&'a [SelectOption]> = vec![options];

    while !level.is_empty() {
        for member in level.iter().copied().flatten() {
            if let SelectOption::Leaf(leaf) = member
                && leaf.value == *value
            {
                return Some(leaf);
            }
        }

        level = level
            .iter()
            .copied()
            .flatten()
            .filter_map(|member| match member {
                SelectOption::Group { options, .. } if !options.is_empty() => {
                    Some(options.as_slice())
                }
                _ => None,
            })
            .collect();
    }

    None
}

/// Resolve a single identifier to its option.
pub fn resolve_single(options: &[SelectOption], value: &OptionValue) -> Option<OptionLeaf> {
    let found = find_option(options, value).cloned();
    if found.is_none() {
        log::debug!("no option matched value {}", value);
    }
    found
}

/// Resolve a list of identifiers to their options.
///
/// Unmatched identifiers are dropped silently, so a partially matched list
/// keeps its matches. When nothing matched at all the result collapses to
/// `None` rather than an empty list; owners may pass values that are not in
/// an asynchronously loading option list yet.
pub fn resolve_multi(
    options: &[SelectOption],
    values: &[OptionValue],
) -> Option<Vec<OptionLeaf>> {
    let found: Vec<OptionLeaf> = values
        .iter()
        .filter_map(|value| find_option(options, value).cloned())
        .collect();

    if found.len() < values.len() {
        log::debug!(
            "{} of {} values had no matching option",
            values.len() - found.len(),
            values.len()
        );
    }

    if found.is_empty() { None } else { Some(found) }
}

/// Resolve an external value against the option universe.
///
/// An absent or explicitly null value resolves to no selection.
pub fn resolve(options: &[SelectOption], value: Option<&ExternalValue>) -> Option<Selection> {
    match value? {
        ExternalValue::Null => None,
        ExternalValue::One(value) => resolve_single(options, value).map(Selection::One),
        ExternalValue::Many(values) => resolve_multi(options, values).map(Selection::Many),
    }
}

/// Map a resolved selection back to the owner-facing value shape.
pub fn to_external_value(selection: Option<&Selection>) -> ExternalValue {
    match selection {
        None => ExternalValue::Null,
        Some(Selection::One(leaf)) => ExternalValue::One(leaf.value.clone()),
        Some(Selection::Many(leaves)) => {
            ExternalValue::Many(leaves.iter().map(|leaf| leaf.value.clone()).collect())
        }
    }
}
