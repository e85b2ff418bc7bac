//! Render model
//!
//! Presentation policy only: nothing here feeds back into the tag list, the
//! value map, or visibility.

use serde::Serialize;
use tagset_taxonomy::FlatOption;

/// Shown when a search matches nothing
pub const NO_MATCHES_NOTICE: &str = "No tags match your search. We use structured tags, instead of \
free form text notes, to avoid accidentally hosting Personally Identifiable Information (PII) on \
the platform. If you don't find the tags you need, request new tags from the maintainers.";

/// Indent, in em, of an option row
///
/// Selected rows render flush; others indent with their depth.
#[inline]
#[must_use]
pub fn indent_em(level: usize, selected: bool) -> f64 {
    if selected {
        0.5
    } else {
        // vocabularies are shallow; depth always fits f64 exactly
        #[allow(clippy::cast_precision_loss)]
        let level = level as f64;
        level * 1.5 + 0.5
    }
}

/// Styling of the select control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlStyle {
    /// Error border
    Error,

    /// Greyed, non-interactive
    ReadOnly,

    /// Default
    Normal,
}

impl ControlStyle {
    /// Style for the given flags; the error flag wins
    #[inline]
    #[must_use]
    pub fn from_flags(error: bool, read_only: bool) -> Self {
        if error {
            Self::Error
        } else if read_only {
            Self::ReadOnly
        } else {
            Self::Normal
        }
    }
}

/// Numeric input attached to a chip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberField<'a> {
    /// Units shown after the input
    pub units: &'a str,

    /// Input value; `None` renders an empty input
    pub value: Option<f64>,

    /// Whether an uncommitted edit is showing
    pub editing: bool,

    /// Whether the input accepts edits
    pub editable: bool,
}

/// A selected tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChipView<'a> {
    /// Tag id
    pub id: &'a str,

    /// Label
    pub label: &'a str,

    /// Numeric input, when the tag carries one and numbers are shown
    pub number: Option<NumberField<'a>>,
}

/// An offerable option in the menu
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionRow<'a> {
    /// Option id
    pub id: &'a str,

    /// Label
    pub label: &'a str,

    /// Depth in the vocabulary
    pub level: usize,

    /// Indent in em
    pub indent_em: f64,

    /// Rendered emphasized
    pub bold: bool,

    /// Shown but cannot be chosen
    pub disabled: bool,

    /// Already in the tag list
    pub selected: bool,
}

impl<'a> OptionRow<'a> {
    pub(crate) fn new(option: &'a FlatOption, selected: bool) -> Self {
        Self {
            id: &option.id,
            label: &option.label,
            level: option.level,
            indent_em: indent_em(option.level, selected),
            bold: option.is_header,
            disabled: option.is_non_selectable,
            selected,
        }
    }

    /// Whether the row matches a lower-cased search needle
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle) || self.id.to_lowercase().contains(needle)
    }
}

/// Everything needed to draw the editor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorView<'a> {
    /// Selected tags in host order, unknown ids omitted
    pub chips: Vec<ChipView<'a>>,

    /// Offerable options in vocabulary order
    pub options: Vec<OptionRow<'a>>,

    /// Control styling
    pub control: ControlStyle,

    /// Whether interactions are accepted
    pub interactive: bool,
}

/// Result of filtering the menu
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome<'a> {
    /// At least one row matched
    Matches {
        /// Matching rows in vocabulary order
        rows: Vec<OptionRow<'a>>,
    },

    /// Nothing matched
    NoMatches {
        /// Empty-state notice for the user
        notice: &'static str,
    },
}

impl<'a> SearchOutcome<'a> {
    /// Matching rows; empty when nothing matched
    #[must_use]
    pub fn rows(&self) -> &[OptionRow<'a>] {
        match self {
            Self::Matches { rows } => rows,
            Self::NoMatches { .. } => &[],
        }
    }
}
