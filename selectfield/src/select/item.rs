//! Option model: raw owner-supplied entries and the normalized option tree.

use serde::{Deserialize, Serialize};

use super::value::OptionValue;

/// Owner-supplied option entry, before normalization.
///
/// Accepts the bare-string shorthand, where the label and the value are the
/// same text, or a full entry carrying an optional value and optional nested
/// sub-options.
///
/// # Example
///
/// ```
/// use selectfield::select::item::RawOption;
///
/// let bare = RawOption::from("apple");
/// let pair = RawOption::from(("us", "United States"));
/// assert_ne!(bare, pair);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawOption {
    /// Bare string shorthand.
    Text(String),
    /// Full option entry.
    Entry {
        /// Display text.
        label: String,
        /// Identifier value, absent for groups.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<OptionValue>,
        /// Nested sub-options; presence makes this entry a group.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<Vec<RawOption>>,
    },
}

impl From<&str> for RawOption {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawOption {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

// (value, label) pairs
impl<V, L> From<(V, L)> for RawOption
where
    V: Into<OptionValue>,
    L: Into<String>,
{
    fn from((value, label): (V, L)) -> Self {
        Self::Entry {
            label: label.into(),
            value: Some(value.into()),
            options: None,
        }
    }
}

impl From<OptionLeaf> for RawOption {
    fn from(leaf: OptionLeaf) -> Self {
        Self::Entry {
            label: leaf.label,
            value: Some(leaf.value),
            options: None,
        }
    }
}

impl From<SelectOption> for RawOption {
    fn from(option: SelectOption) -> Self {
        match option {
            SelectOption::Leaf(leaf) => leaf.into(),
            SelectOption::Group { label, options } => Self::Entry {
                label,
                value: None,
                options: Some(options.into_iter().map(RawOption::from).collect()),
            },
        }
    }
}

/// A selectable option with a display label and an identifier value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionLeaf {
    /// Display text.
    pub label: String,
    /// Identifier matched against external values.
    pub value: OptionValue,
}

impl OptionLeaf {
    /// Create a leaf option.
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Normalized option tree entry.
///
/// Groups carry no selectable value of their own; their children may nest
/// further groups without bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectOption {
    /// A selectable option.
    Leaf(OptionLeaf),
    /// A labeled container of nested options.
    Group {
        /// Display text for the group heading.
        label: String,
        /// Child options.
        options: Vec<SelectOption>,
    },
}

impl SelectOption {
    /// Create a leaf option.
    pub fn leaf(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self::Leaf(OptionLeaf::new(label, value))
    }

    /// Create a group of options.
    pub fn group(label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self::Group {
            label: label.into(),
            options,
        }
    }

    /// Display text of this entry.
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.label,
            Self::Group { label, .. } => label,
        }
    }

    /// This entry as a leaf, if it is one.
    pub fn as_leaf(&self) -> Option<&OptionLeaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Group { .. } => None,
        }
    }
}

/// Normalize raw entries into the tagged option tree.
///
/// Bare strings become leaves whose label and value are the same text.
/// Entries with nested sub-options become groups; a value supplied alongside
/// sub-options is ignored, since groups are not selectable. Entries carrying
/// neither a value nor sub-options are malformed and dropped.
///
/// Normalizing an already-normalized list yields an equal list.
pub fn normalize(raw: impl IntoIterator<Item = impl Into<RawOption>>) -> Vec<SelectOption> {
    raw.into_iter()
        .map(Into::into)
        .filter_map(normalize_entry)
        .collect()
}

fn normalize_entry(raw: RawOption) -> Option<SelectOption> {
    match raw {
        RawOption::Text(text) => Some(SelectOption::Leaf(OptionLeaf {
            label: text.clone(),
            value: OptionValue::Text(text),
        })),
        RawOption::Entry {
            label,
            options: Some(children),
            ..
        } => Some(SelectOption::Group {
            label,
            options: normalize(children),
        }),
        RawOption::Entry {
            label,
            value: Some(value),
            options: None,
        } => Some(SelectOption::Leaf(OptionLeaf { label, value })),
        RawOption::Entry {
            label,
            value: None,
            options: None,
        } => {
            log::debug!("dropping option entry '{}': no value or sub-options", label);
            None
        }
    }
}

/// Flattened leaf options in level order: every member of one nesting level
/// is visited before any group's children.
pub fn leaves(options: &[SelectOption]) -> Vec<&OptionLeaf> {
    let mut found = Vec::new();
    let mut level: Vec<&[SelectOption]> = vec![options];

    while !level.is_empty() {
        for member in level.iter().copied().flatten() {
            if let SelectOption::Leaf(leaf) = member {
                found.push(leaf);
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

    found
}

/// Flattened leaf labels in level order, the feed for dropdown-side
/// filtering.
pub fn leaf_labels(options: &[SelectOption]) -> Vec<String> {
    leaves(options)
        .into_iter()
        .map(|leaf| leaf.label.clone())
        .collect()
}
