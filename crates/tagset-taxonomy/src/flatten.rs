//! Forest flattening
//!
//! Provides [`flatten`], which turns a nested option forest into a single
//! pre-order sequence annotated with depth, and [`FlatOptions`], the
//! sequence plus an id lookup.

use std::collections::HashMap;

use crate::option::{NumericSpec, TagOption};

/// An option node placed in a flattened sequence
///
/// Children are referenced by their position in the owning
/// [`FlatOptions`], so a flattened entry never borrows from the forest it
/// came from.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatOption {
    /// Stable identifier
    pub id: String,

    /// Human-readable label
    pub label: String,

    /// Attached magnitude
    pub numeric: Option<NumericSpec>,

    /// Organizational node
    pub is_header: bool,

    /// Never itself selectable
    pub is_non_selectable: bool,

    /// Depth from the forest root; root siblings are level 0
    pub level: usize,

    children: Vec<usize>,
}

impl FlatOption {
    fn from_node(node: &TagOption, level: usize) -> Self {
        Self {
            id: node.id.clone(),
            label: node.label.clone(),
            numeric: node.numeric.clone(),
            is_header: node.is_header,
            is_non_selectable: node.is_non_selectable,
            level,
            children: Vec::new(),
        }
    }

    /// Depth-0 selectable leaf whose label is its id
    #[must_use]
    pub fn bare(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            numeric: None,
            is_header: false,
            is_non_selectable: false,
            level: 0,
            children: Vec::new(),
        }
    }

    /// Positions of direct children, in declaration order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// Whether the entry can be added to a selection
    #[inline]
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.is_non_selectable
    }

    /// Units of the attached magnitude
    #[inline]
    #[must_use]
    pub fn units(&self) -> Option<&str> {
        self.numeric.as_ref().map(|spec| spec.units.as_str())
    }
}

/// A flattened vocabulary
///
/// Entries are in pre-order. Lookup by id returns the first entry carrying
/// that id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatOptions {
    entries: Vec<FlatOption>,
    index: HashMap<String, usize>,
}

impl FlatOptions {
    fn from_entries(entries: Vec<FlatOption>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            index.entry(entry.id.clone()).or_insert(position);
        }
        Self { entries, index }
    }

    /// Flat vocabulary of depth-0 leaves, one per id, in the given order
    #[must_use]
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_entries(ids.into_iter().map(FlatOption::bare).collect())
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a position
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&FlatOption> {
        self.entries.get(position)
    }

    /// Position of the entry with this id
    #[inline]
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Entry with this id
    #[inline]
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&FlatOption> {
        self.position(id).map(|position| &self.entries[position])
    }

    /// Whether an entry carries this id
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Entries in pre-order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[FlatOption] {
        &self.entries
    }

    /// Iterate entries in pre-order
    pub fn iter(&self) -> impl Iterator<Item = &FlatOption> {
        self.entries.iter()
    }

    /// Direct children of the entry at `position`
    pub fn children_of(&self, position: usize) -> impl Iterator<Item = (usize, &FlatOption)> {
        self.entries
            .get(position)
            .map(FlatOption::children)
            .unwrap_or_default()
            .iter()
            .map(move |&child| (child, &self.entries[child]))
    }

    /// Ids carried by more than one entry, in order of their second use
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<&str> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(position, entry)| self.index.get(&entry.id) != Some(position))
            .map(|(_, entry)| entry.id.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a FlatOptions {
    type Item = &'a FlatOption;
    type IntoIter = std::slice::Iter<'a, FlatOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Flatten a forest in pre-order
///
/// Every node is kept, headers and non-selectable nodes included. A node
/// precedes its children, children keep their declared order, and each
/// child sits one level below its parent.
///
/// # Example
/// ```
/// use tagset_taxonomy::{flatten, TagOption};
///
/// let forest = vec![
///     TagOption::group("terrain", "Terrain", vec![TagOption::leaf("treadmill", "Treadmill")]),
///     TagOption::leaf("athlete", "Athlete"),
/// ];
/// let flat = flatten(&forest);
///
/// let ids: Vec<_> = flat.iter().map(|o| (o.id.as_str(), o.level)).collect();
/// assert_eq!(ids, [("terrain", 0), ("treadmill", 1), ("athlete", 0)]);
/// ```
#[must_use]
pub fn flatten(forest: &[TagOption]) -> FlatOptions {
    let mut entries = Vec::new();
    flatten_into(forest, 0, &mut entries);
    FlatOptions::from_entries(entries)
}

fn flatten_into(nodes: &[TagOption], level: usize, entries: &mut Vec<FlatOption>) -> Vec<usize> {
    let mut positions = Vec::with_capacity(nodes.len());
    for node in nodes {
        let position = entries.len();
        entries.push(FlatOption::from_node(node, level));
        let children = flatten_into(&node.children, level + 1, entries);
        entries[position].children = children;
        positions.push(position);
    }
    positions
}
