//! Option nodes
//!
//! Provides [`TagOption`], the node type of every vocabulary forest, and
//! [`NumericSpec`], the magnitude declaration some tags carry.

use serde::{Deserialize, Serialize};

/// A node in a vocabulary forest
///
/// Ids are unique across a whole forest. Children are owned by their
/// parent and kept in declaration order, which every transformation
/// preserves.
///
/// # Example
/// ```
/// use tagset_taxonomy::{NumericSpec, TagOption};
///
/// let group = TagOption::group("demographics", "Demographics", vec![
///     TagOption::leaf("age", "Age")
///         .with_numeric(NumericSpec::new("years").with_bounds(10.0, 90.0).integer()),
/// ]);
///
/// assert!(!group.is_selectable());
/// assert!(group.children[0].is_selectable());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagOption {
    /// Stable identifier stored in selections
    pub id: String,

    /// Human-readable label
    pub label: String,

    /// Attached magnitude, if the tag carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSpec>,

    /// Ordered children
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TagOption>,

    /// Organizational node, rendered emphasized
    #[serde(default)]
    pub is_header: bool,

    /// Never itself added to a selection; children stay selectable
    #[serde(default)]
    pub is_non_selectable: bool,
}

impl TagOption {
    /// Create a plain selectable leaf
    #[inline]
    #[must_use]
    pub fn leaf(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            numeric: None,
            children: Vec::new(),
            is_header: false,
            is_non_selectable: false,
        }
    }

    /// Create a pure grouping header: non-selectable, with children
    #[must_use]
    pub fn group(
        id: impl Into<String>,
        label: impl Into<String>,
        children: Vec<TagOption>,
    ) -> Self {
        Self::leaf(id, label).with_children(children).non_selectable()
    }

    /// Create a selectable header with children
    #[must_use]
    pub fn header(
        id: impl Into<String>,
        label: impl Into<String>,
        children: Vec<TagOption>,
    ) -> Self {
        Self::leaf(id, label).with_children(children)
    }

    /// With numeric magnitude
    #[inline]
    #[must_use]
    pub fn with_numeric(mut self, spec: NumericSpec) -> Self {
        self.numeric = Some(spec);
        self
    }

    /// With children; marks the node as a header
    #[inline]
    #[must_use]
    pub fn with_children(mut self, children: Vec<TagOption>) -> Self {
        self.children = children;
        self.is_header = true;
        self
    }

    /// Mark as non-selectable
    #[inline]
    #[must_use]
    pub fn non_selectable(mut self) -> Self {
        self.is_non_selectable = true;
        self
    }

    /// Whether the node can be added to a selection
    #[inline]
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.is_non_selectable
    }

    /// Whether the node has children
    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Numeric magnitude attached to a tag
///
/// Bounds are inclusive and expressed in already-rounded units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSpec {
    /// Display units, e.g. `years`, `m/s`
    pub units: String,

    /// Inclusive lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Inclusive upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Round committed values to whole numbers
    #[serde(default)]
    pub integer: bool,
}

impl NumericSpec {
    /// Unbounded, fractional magnitude
    #[inline]
    #[must_use]
    pub fn new(units: impl Into<String>) -> Self {
        Self {
            units: units.into(),
            min: None,
            max: None,
            integer: false,
        }
    }

    /// With lower bound
    #[inline]
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// With upper bound
    #[inline]
    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// With both bounds
    #[inline]
    #[must_use]
    pub fn with_bounds(self, min: f64, max: f64) -> Self {
        self.with_min(min).with_max(max)
    }

    /// Restrict to whole numbers
    #[inline]
    #[must_use]
    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Whether either bound is declared
    #[inline]
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}
