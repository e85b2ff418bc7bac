//! Visibility of options against the current selection
//!
//! An option is offerable when it is selectable and not yet chosen, or when
//! any child is offerable. Headers therefore drop out of view only once
//! every selectable descendant has been chosen. A non-selectable option with
//! no children is never offerable.
//!
//! Nothing here holds state; visibility is recomputed from each snapshot.

use std::collections::HashSet;

use tagset_taxonomy::{FlatOption, FlatOptions};

/// Set view over a host tag list
#[derive(Debug, Clone, Default)]
pub struct SelectionSet<'a> {
    ids: HashSet<&'a str>,
}

impl<'a> SelectionSet<'a> {
    /// Build from a tag list
    #[must_use]
    pub fn from_tags(tags: &'a [String]) -> Self {
        tags.iter().map(String::as_str).collect()
    }

    /// Whether the id is selected
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of distinct selected ids
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for SelectionSet<'a> {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Whether the option at `position` is offerable
///
/// Out-of-range positions are not offerable.
#[must_use]
pub fn is_visible(options: &FlatOptions, position: usize, selected: &SelectionSet<'_>) -> bool {
    let Some(option) = options.get(position) else {
        return false;
    };
    if offers_itself(option, selected) {
        return true;
    }
    options
        .children_of(position)
        .any(|(child, _)| is_visible(options, child, selected))
}

/// Visibility of every option, indexed by position
///
/// Children always follow their parent in pre-order, so a single backward
/// pass settles every parent after all of its children.
#[must_use]
pub fn visibility_mask(options: &FlatOptions, selected: &SelectionSet<'_>) -> Vec<bool> {
    let entries = options.as_slice();
    let mut mask = vec![false; entries.len()];
    for (position, option) in entries.iter().enumerate().rev() {
        mask[position] = offers_itself(option, selected)
            || option.children().iter().any(|&child| mask[child]);
    }
    mask
}

/// Offerable options in pre-order, paired with their positions
#[must_use]
pub fn offerable<'o>(
    options: &'o FlatOptions,
    selected: &SelectionSet<'_>,
) -> Vec<(usize, &'o FlatOption)> {
    let mask = visibility_mask(options, selected);
    options
        .iter()
        .enumerate()
        .filter(|(position, _)| mask[*position])
        .collect()
}

fn offers_itself(option: &FlatOption, selected: &SelectionSet<'_>) -> bool {
    option.is_selectable() && !selected.contains(&option.id)
}
