//! Interactions in, events out
//!
//! [`Interaction`] is everything a user can do to an editor. [`TagEvent`]
//! is everything an editor tells its host. Events always carry a complete
//! replacement, never a delta.

use serde::{Deserialize, Serialize};

use crate::snapshot::{TagSnapshot, TagValues};

/// Key pressed inside a numeric input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKey {
    /// Forces an immediate blur, committing the edit
    Enter,

    /// Any other key; absorbed by the input
    Other,
}

/// A user interaction with the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Interaction {
    /// Choose an offered option
    Select {
        /// Option id
        id: String,
    },

    /// Remove a chip
    Deselect {
        /// Tag id
        id: String,
    },

    /// Backspace on an empty search box: drop the last resolved chip
    RemoveLast,

    /// Clear every resolved chip
    Clear,

    /// Numeric input text changed
    EditValue {
        /// Tag id
        id: String,
        /// Full input text
        raw: String,
    },

    /// Numeric input lost focus
    CommitValue {
        /// Tag id
        id: String,
    },

    /// Key pressed in a numeric input
    KeyPress {
        /// Tag id
        id: String,
        /// Key
        key: NumberKey,
    },

    /// Control gained focus
    Focus,

    /// Control lost focus
    Blur,
}

impl Interaction {
    /// Select an option
    #[inline]
    #[must_use]
    pub fn select(id: impl Into<String>) -> Self {
        Self::Select { id: id.into() }
    }

    /// Deselect a tag
    #[inline]
    #[must_use]
    pub fn deselect(id: impl Into<String>) -> Self {
        Self::Deselect { id: id.into() }
    }

    /// Type into a numeric input
    #[inline]
    #[must_use]
    pub fn edit_value(id: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::EditValue {
            id: id.into(),
            raw: raw.into(),
        }
    }

    /// Blur a numeric input
    #[inline]
    #[must_use]
    pub fn commit_value(id: impl Into<String>) -> Self {
        Self::CommitValue { id: id.into() }
    }

    /// Press Enter in a numeric input
    #[inline]
    #[must_use]
    pub fn enter(id: impl Into<String>) -> Self {
        Self::KeyPress {
            id: id.into(),
            key: NumberKey::Enter,
        }
    }

    /// Whether the interaction can change host state
    #[inline]
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::Focus | Self::Blur)
    }
}

/// An event for the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum TagEvent {
    /// Full replacement tag list
    TagsChanged(Vec<String>),

    /// Full replacement value map
    TagValueChanged(TagValues),
}

impl TagEvent {
    /// Apply the event to a snapshot, as a host persisting it would
    pub fn apply_to(&self, snapshot: &mut TagSnapshot) {
        match self {
            Self::TagsChanged(tags) => snapshot.tags.clone_from(tags),
            Self::TagValueChanged(values) => snapshot.tag_values.clone_from(values),
        }
    }
}
